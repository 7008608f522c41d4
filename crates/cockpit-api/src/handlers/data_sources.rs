//! Data source monitoring endpoints
//!
//! Status, ingestion metrics and conflict resolution over the fixture
//! data. Each handler simulates the upstream call's latency before
//! answering.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::fixtures;
use crate::handlers::simulate_upstream_delay;
use crate::models::{
    ApiSuccess, ConflictListData, ConflictResolution, ConflictResolveData, ConflictStatus,
    MetricsOverview, ResolveConflictRequest, SourceStatusData,
};
use crate::AppState;

const STATUS_DELAY_MS: u64 = 300;
const METRICS_DELAY_MS: u64 = 200;
const CONFLICT_LIST_DELAY_MS: u64 = 250;
const CONFLICT_RESOLVE_DELAY_MS: u64 = 500;

/// `GET /api/data-sources/status`
pub async fn status(State(state): State<AppState>) -> Json<ApiSuccess<SourceStatusData>> {
    simulate_upstream_delay(&state, STATUS_DELAY_MS).await;

    Json(ApiSuccess::new(SourceStatusData {
        sources: fixtures::data_sources().to_vec(),
        stats: fixtures::source_stats(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    #[serde(rename = "sourceId")]
    source_id: Option<String>,
}

/// `GET /api/data-sources/metrics`
///
/// With `sourceId`, the metrics for that source (404 for unknown ids);
/// without, the aggregate plus the per-source breakdown.
pub async fn metrics(
    State(state): State<AppState>,
    Query(params): Query<MetricsQuery>,
) -> Result<Response, ApiError> {
    simulate_upstream_delay(&state, METRICS_DELAY_MS).await;

    if let Some(source_id) = params.source_id {
        let metrics = fixtures::metrics_by_source()
            .get(&source_id)
            .cloned()
            .ok_or_else(|| ApiError::source_not_found(&source_id))?;
        return Ok(Json(ApiSuccess::new(metrics)).into_response());
    }

    Ok(Json(ApiSuccess::new(MetricsOverview {
        aggregated: fixtures::aggregated_metrics(),
        by_source: fixtures::metrics_by_source().clone(),
    }))
    .into_response())
}

#[derive(Debug, Deserialize)]
pub struct ConflictsQuery {
    status: Option<String>,
}

/// `GET /api/data-sources/conflicts`
///
/// `status` filters the list; absent or `all` returns everything. The
/// summary always counts the full list, not the filtered view.
pub async fn conflicts(
    State(state): State<AppState>,
    Query(params): Query<ConflictsQuery>,
) -> Json<ApiSuccess<ConflictListData>> {
    simulate_upstream_delay(&state, CONFLICT_LIST_DELAY_MS).await;

    let all = fixtures::conflicts();
    let conflicts = match params.status.as_deref() {
        None | Some("all") => all.to_vec(),
        Some(wanted) => all
            .iter()
            .filter(|c| conflict_status_name(c.status) == wanted)
            .cloned()
            .collect(),
    };

    Json(ApiSuccess::new(ConflictListData {
        conflicts,
        summary: fixtures::conflict_summary(),
    }))
}

fn conflict_status_name(status: ConflictStatus) -> &'static str {
    match status {
        ConflictStatus::Pending => "pending",
        ConflictStatus::Resolved => "resolved",
        ConflictStatus::Escalated => "escalated",
    }
}

/// `POST /api/data-sources/conflicts`
pub async fn resolve_conflict(
    State(state): State<AppState>,
    body: Result<Json<ResolveConflictRequest>, JsonRejection>,
) -> Result<Json<ApiSuccess<ConflictResolveData>>, ApiError> {
    let Json(body) =
        body.map_err(|_| ApiError::invalid_input("conflictId and selectedValue are required"))?;

    let (conflict_id, selected_value) = match (body.conflict_id, body.selected_value) {
        (Some(id), Some(value)) if !id.is_empty() && !value.is_empty() => (id, value),
        _ => {
            return Err(ApiError::invalid_input(
                "conflictId and selectedValue are required",
            ))
        }
    };

    simulate_upstream_delay(&state, CONFLICT_RESOLVE_DELAY_MS).await;

    if !fixtures::conflicts().iter().any(|c| c.id == conflict_id) {
        return Err(ApiError::conflict_not_found(&conflict_id));
    }

    info!(conflict_id = %conflict_id, "conflict resolved");

    Ok(Json(ApiSuccess::new(ConflictResolveData {
        conflict_id,
        status: ConflictStatus::Resolved,
        resolution: ConflictResolution {
            selected_value,
            reasoning: body
                .reasoning
                .unwrap_or_else(|| "Manual resolution by admin".to_string()),
            override_sources: body.override_sources.unwrap_or_default(),
            resolved_at: Utc::now(),
        },
    })))
}
