//! Cockpit Signal and Trigger Aggregation
//!
//! Pure functions over the liquidity trigger book:
//! - timeline bucket filtering and the total amount "in play"
//! - severity tier grouping for the panel
//! - CSV export of a filtered trigger set
//! - manual intelligence intake (validation + signal construction)
//!
//! The aggregator owns no state; everything here is a function of its
//! input collection and the selected filter.

pub mod export;
pub mod grouping;
pub mod intake;
pub mod timeline;

pub use export::{format_amount_crores, write_csv};
pub use grouping::group_by_severity_tier;
pub use intake::{
    build_signal, ExpectedTimeline, InformationSource, IntelligenceForm, ManualSignal,
};
pub use timeline::{filter_by_timeline, total_amount};
