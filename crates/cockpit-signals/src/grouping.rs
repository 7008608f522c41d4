//! Severity tier grouping for the liquidity panel
//!
//! The tier on each signal is editorial input supplied by the caller;
//! grouping only preserves the fixed red/yellow/green display order and
//! the caller's in-tier ordering.

use cockpit_core::{DisplaySignal, SignalGroup, SignalTier};

/// Group display signals into the fixed red/yellow/green panel sections.
///
/// All three groups are always present, in display order, even when
/// empty. Signals keep the order they were supplied in.
pub fn group_by_severity_tier(signals: &[DisplaySignal]) -> Vec<SignalGroup> {
    SignalTier::DISPLAY_ORDER
        .iter()
        .map(|&tier| SignalGroup {
            tier,
            title: tier.title().to_string(),
            signals: signals
                .iter()
                .filter(|signal| signal.tier == tier)
                .cloned()
                .collect(),
        })
        .collect()
}
