//! Display signal types and severity tiers
//!
//! Severity is an editorial classification supplied with the signal; the
//! timeline bucket is computed from dates. The two are independent axes
//! and are never derived from one another.

use serde::{Deserialize, Serialize};

/// Editorial severity of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// Display tier for the liquidity panel. Fixed order: red, yellow, green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalTier {
    Red,
    Yellow,
    Green,
}

impl SignalTier {
    /// Fixed display order for the panel.
    pub const DISPLAY_ORDER: [SignalTier; 3] =
        [SignalTier::Red, SignalTier::Yellow, SignalTier::Green];

    /// Panel section title for the tier.
    pub fn title(&self) -> &'static str {
        match self {
            SignalTier::Red => "RED — High Urgency / High Impact (Immediate RM Action)",
            SignalTier::Yellow => "YELLOW — Medium Urgency / Watch Closely",
            SignalTier::Green => "GREEN — Early Signal / Opportunity Radar",
        }
    }
}

/// A single display signal on the liquidity panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySignal {
    pub company_name: String,
    pub company_code: String,
    pub mapped_client: String,
    pub client_code: String,
    pub event_description: String,
    #[serde(default)]
    pub is_important: bool,
    pub tier: SignalTier,
}

/// Tiered grouping of display signals. Presentation only, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalGroup {
    pub tier: SignalTier,
    pub title: String,
    pub signals: Vec<DisplaySignal>,
}
