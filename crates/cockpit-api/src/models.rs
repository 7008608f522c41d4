//! Data models for API responses

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cockpit_core::{AuthSession, LiquidityTrigger, SignalGroup};

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health of a single upstream data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceHealth {
    Connected,
    Degraded,
    Disconnected,
}

/// An upstream data source feeding the trigger book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: SourceHealth,
    pub last_sync_at: DateTime<Utc>,
    pub records_today: i64,
    pub uptime_percent: f64,
}

/// Aggregated stats over all data sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    pub total_sources: usize,
    pub connected: usize,
    pub degraded: usize,
    pub disconnected: usize,
    pub total_records_today: i64,
}

/// `GET /api/data-sources/status` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceStatusData {
    pub sources: Vec<DataSource>,
    pub stats: SourceStats,
}

/// Ingestion counters for one source (or the aggregate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionMetrics {
    pub records_processed: i64,
    pub records_failed: i64,
    pub avg_latency_ms: f64,
    pub duplicates_detected: i64,
    pub conflicts_detected: i64,
}

/// Per-source metrics payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetrics {
    pub source_id: String,
    pub source_name: String,
    #[serde(flatten)]
    pub metrics: IngestionMetrics,
}

/// `GET /api/data-sources/metrics` payload without a `sourceId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsOverview {
    pub aggregated: IngestionMetrics,
    pub by_source: BTreeMap<String, SourceMetrics>,
}

/// Lifecycle of a data conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStatus {
    Pending,
    Resolved,
    Escalated,
}

/// One value reported by one source for a conflicted field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictValue {
    pub source: String,
    pub value: String,
}

/// Two or more sources disagreeing about a client field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataConflict {
    pub id: String,
    pub client_code: String,
    pub field: String,
    pub values: Vec<ConflictValue>,
    pub detected_at: DateTime<Utc>,
    pub status: ConflictStatus,
}

/// Summary counts for the conflicts view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictSummary {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
    pub escalated: usize,
}

/// `GET /api/data-sources/conflicts` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictListData {
    pub conflicts: Vec<DataConflict>,
    pub summary: ConflictSummary,
}

/// `POST /api/data-sources/conflicts` body. Required fields are modelled
/// as options so their absence reports `INVALID_INPUT` rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveConflictRequest {
    pub conflict_id: Option<String>,
    pub selected_value: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub override_sources: Option<Vec<String>>,
}

/// Resolution detail echoed back on a successful conflict resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolution {
    pub selected_value: String,
    pub reasoning: String,
    pub override_sources: Vec<String>,
    pub resolved_at: DateTime<Utc>,
}

/// `POST /api/data-sources/conflicts` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolveData {
    pub conflict_id: String,
    pub status: ConflictStatus,
    pub resolution: ConflictResolution,
}

/// `POST /api/intelligence` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntelligenceData {
    pub signal_id: String,
    pub lead_score_updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_lead_score: Option<u8>,
}

/// `POST /api/auth/login` body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` payload: the session plus the role's landing
/// route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub session: AuthSession,
    pub redirect_to: String,
}

/// `POST /api/auth/logout` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutData {
    pub logged_out: bool,
}

/// `GET /api/triggers` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerListData {
    pub triggers: Vec<LiquidityTrigger>,
    pub count: usize,
    pub total_in_play: i64,
    pub total_in_play_display: String,
}

/// `GET /api/signals/groups` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalGroupsData {
    pub groups: Vec<SignalGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(ApiSuccess::new(LogoutData { logged_out: true })).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["loggedOut"], true);
    }

    #[test]
    fn source_metrics_flatten_into_one_object() {
        let metrics = SourceMetrics {
            source_id: "exchange-data".into(),
            source_name: "Exchange Data".into(),
            metrics: IngestionMetrics {
                records_processed: 100,
                records_failed: 2,
                avg_latency_ms: 120.5,
                duplicates_detected: 4,
                conflicts_detected: 1,
            },
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["sourceId"], "exchange-data");
        assert_eq!(json["recordsProcessed"], 100);
    }

    #[test]
    fn resolve_request_tolerates_missing_fields() {
        let req: ResolveConflictRequest = serde_json::from_str("{}").unwrap();
        assert!(req.conflict_id.is_none());
        assert!(req.selected_value.is_none());
    }
}
