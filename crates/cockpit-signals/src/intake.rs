//! Manual intelligence intake
//!
//! RMs file intelligence entries through a form; this module validates
//! the submission and builds the resulting signal record. Rules mirror
//! the dashboard form: every failure reports the first violated rule's
//! message, so the caller can surface it verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cockpit_core::{SignalSeverity, TriggerEventType};

/// Expected timeline bucket selected on the intake form. Distinct from
/// [`cockpit_core::TimelineFilter`]: this is the RM's forward-looking
/// estimate, not a computed day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedTimeline {
    #[serde(rename = "30_days")]
    Within30Days,
    #[serde(rename = "30_60_days")]
    Days30To60,
    #[serde(rename = "60_90_days")]
    Days60To90,
    #[serde(rename = "3_6_months")]
    Months3To6,
    #[serde(rename = "6_plus_months")]
    Months6Plus,
}

/// Where the intelligence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InformationSource {
    ClientConversation,
    NetworkContact,
    IndustryEvent,
    NewsMention,
    PublicFiling,
    Other,
}

/// Manual intelligence form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceForm {
    pub client_id: String,
    pub event_type: TriggerEventType,
    pub event_details: String,
    pub expected_timeline: ExpectedTimeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_amount: Option<i64>,
    pub information_source: InformationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub severity: SignalSeverity,
}

impl IntelligenceForm {
    /// Check the field-level rules, returning the first failing rule's
    /// message. Enumerations are enforced at deserialization time.
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.is_empty() {
            return Err("Please select a client".into());
        }

        let detail_len = self.event_details.chars().count();
        if detail_len < 20 {
            return Err("Please provide at least 20 characters of detail".into());
        }
        if detail_len > 1000 {
            return Err("Details must be less than 1000 characters".into());
        }

        if let Some(amount) = self.estimated_amount {
            if amount <= 0 {
                return Err("Amount must be positive".into());
            }
        }

        if let Some(notes) = &self.additional_notes {
            if notes.chars().count() > 500 {
                return Err("Notes must be less than 500 characters".into());
            }
        }

        Ok(())
    }
}

/// Metadata attached to a manually filed signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualSignalMetadata {
    pub is_manual: bool,
    pub added_by_rm: String,
    pub information_source: InformationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_amount: Option<i64>,
}

/// Signal record produced from a validated intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualSignal {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: TriggerEventType,
    pub severity: SignalSeverity,
    pub title: String,
    pub description: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub is_actioned: bool,
    pub is_read: bool,
    pub expected_timeline: ExpectedTimeline,
    pub metadata: ManualSignalMetadata,
    /// Estimated liquidity in crores, when an amount was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_liquidity: Option<f64>,
    pub confidence: u8,
}

/// Generate a signal id. Manual signals are prefixed `s`.
pub fn generate_signal_id() -> String {
    format!("s{}", Uuid::new_v4().simple())
}

/// Signal title from the event type and client: `"{client} - {label} (RM Intel)"`.
pub fn signal_title(event_type: TriggerEventType, client_name: &str) -> String {
    format!("{} - {} (RM Intel)", client_name, event_type.label())
}

/// Build the signal record for a validated form.
///
/// `client_name` comes from the client lookup; `added_by_rm` is the
/// filing RM's identifier.
pub fn build_signal(
    form: &IntelligenceForm,
    client_name: &str,
    added_by_rm: &str,
) -> ManualSignal {
    ManualSignal {
        id: generate_signal_id(),
        event_type: form.event_type,
        severity: form.severity,
        title: signal_title(form.event_type, client_name),
        description: form.event_details.clone(),
        source: "Manual Intelligence".into(),
        created_at: Utc::now(),
        is_actioned: false,
        is_read: false,
        expected_timeline: form.expected_timeline,
        metadata: ManualSignalMetadata {
            is_manual: true,
            added_by_rm: added_by_rm.to_string(),
            information_source: form.information_source,
            additional_notes: form.additional_notes.clone(),
            estimated_amount: form.estimated_amount,
        },
        estimated_liquidity: form
            .estimated_amount
            .map(|amount| amount as f64 / 10_000_000.0),
        confidence: 85,
    }
}
