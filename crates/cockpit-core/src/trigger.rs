//! Liquidity trigger types and the timeline bucket enumeration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Liquidity event type. Snake_case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEventType {
    Ipo,
    Funding,
    Acquisition,
    Merger,
    Board,
    DirectorChange,
    CorporateAction,
    MarginPledge,
    EarlyExit,
    Buyback,
    OpenOffer,
    BlockDeal,
    Demerger,
    EsopVesting,
    Dividend,
}

impl TriggerEventType {
    /// Wire-level name, matching the serde representation.
    pub fn wire_name(&self) -> &'static str {
        match self {
            TriggerEventType::Ipo => "ipo",
            TriggerEventType::Funding => "funding",
            TriggerEventType::Acquisition => "acquisition",
            TriggerEventType::Merger => "merger",
            TriggerEventType::Board => "board",
            TriggerEventType::DirectorChange => "director_change",
            TriggerEventType::CorporateAction => "corporate_action",
            TriggerEventType::MarginPledge => "margin_pledge",
            TriggerEventType::EarlyExit => "early_exit",
            TriggerEventType::Buyback => "buyback",
            TriggerEventType::OpenOffer => "open_offer",
            TriggerEventType::BlockDeal => "block_deal",
            TriggerEventType::Demerger => "demerger",
            TriggerEventType::EsopVesting => "esop_vesting",
            TriggerEventType::Dividend => "dividend",
        }
    }

    /// Human label used in generated signal titles, e.g. `ipo` -> "IPO Filing".
    pub fn label(&self) -> &'static str {
        match self {
            TriggerEventType::Ipo => "IPO Filing",
            TriggerEventType::Funding => "Funding Round",
            TriggerEventType::Acquisition => "Acquisition",
            TriggerEventType::Merger => "Merger",
            TriggerEventType::Board => "Board Change",
            TriggerEventType::DirectorChange => "Director Change",
            TriggerEventType::CorporateAction => "Corporate Action",
            TriggerEventType::MarginPledge => "Margin/Pledge",
            TriggerEventType::EarlyExit => "Early Exit",
            TriggerEventType::Buyback => "Buyback",
            TriggerEventType::OpenOffer => "Open Offer",
            TriggerEventType::BlockDeal => "Block Deal",
            TriggerEventType::Demerger => "Demerger",
            TriggerEventType::EsopVesting => "ESOP Vesting",
            TriggerEventType::Dividend => "Dividend",
        }
    }

    /// Export rendering: snake_case converted to upper-cased,
    /// space-separated words (`margin_pledge` -> "MARGIN PLEDGE").
    pub fn export_label(&self) -> String {
        self.wire_name().replace('_', " ").to_uppercase()
    }
}

/// Workflow status of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerStatus {
    New,
    Contacted,
    InDiscussion,
    Actioned,
    Dormant,
}

impl TriggerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerStatus::New => "new",
            TriggerStatus::Contacted => "contacted",
            TriggerStatus::InDiscussion => "in_discussion",
            TriggerStatus::Actioned => "actioned",
            TriggerStatus::Dormant => "dormant",
        }
    }
}

/// A dated, amount-bearing liquidity event produced by the upstream data
/// layer. Immutable once produced; the aggregator only reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityTrigger {
    pub client_name: String,
    pub client_code: String,
    pub event_type: TriggerEventType,
    /// Amount in whole currency units. Always positive.
    pub amount: i64,
    pub event_date: NaiveDate,
    /// Days until the event. Negative when the event is overdue.
    pub days_until_event: i32,
    /// Probability of the event materializing, 0-100.
    pub probability: u8,
    pub data_source: String,
    pub assigned_rm_name: String,
    pub status: TriggerStatus,
}

/// Timeline bucket over `days_until_event`.
///
/// Buckets are fixed and non-overlapping, inclusive on both ends. Days
/// outside 0-365 fall into no bounded bucket and only appear under `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineFilter {
    #[serde(rename = "0-30")]
    Days0To30,
    #[serde(rename = "31-90")]
    Days31To90,
    #[serde(rename = "91-180")]
    Days91To180,
    #[serde(rename = "181-365")]
    Days181To365,
    #[serde(rename = "all")]
    All,
}

impl TimelineFilter {
    pub const ALL_FILTERS: [TimelineFilter; 5] = [
        TimelineFilter::Days0To30,
        TimelineFilter::Days31To90,
        TimelineFilter::Days91To180,
        TimelineFilter::Days181To365,
        TimelineFilter::All,
    ];

    /// Inclusive day-range bounds, or `None` for `All`.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        match self {
            TimelineFilter::Days0To30 => Some((0, 30)),
            TimelineFilter::Days31To90 => Some((31, 90)),
            TimelineFilter::Days91To180 => Some((91, 180)),
            TimelineFilter::Days181To365 => Some((181, 365)),
            TimelineFilter::All => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineFilter::Days0To30 => "0-30",
            TimelineFilter::Days31To90 => "31-90",
            TimelineFilter::Days91To180 => "91-180",
            TimelineFilter::Days181To365 => "181-365",
            TimelineFilter::All => "all",
        }
    }
}

impl std::fmt::Display for TimelineFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimelineFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0-30" => Ok(TimelineFilter::Days0To30),
            "31-90" => Ok(TimelineFilter::Days31To90),
            "91-180" => Ok(TimelineFilter::Days91To180),
            "181-365" => Ok(TimelineFilter::Days181To365),
            "all" => Ok(TimelineFilter::All),
            other => Err(Error::Validation(format!(
                "Unknown timeline filter '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_wire_name_matches_serde() {
        for event in [
            TriggerEventType::Ipo,
            TriggerEventType::DirectorChange,
            TriggerEventType::MarginPledge,
            TriggerEventType::EsopVesting,
        ] {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.wire_name()));
        }
    }

    #[test]
    fn export_label_upper_cases_snake_segments() {
        assert_eq!(TriggerEventType::MarginPledge.export_label(), "MARGIN PLEDGE");
        assert_eq!(TriggerEventType::Ipo.export_label(), "IPO");
    }

    #[test]
    fn buckets_are_non_overlapping_and_cover_a_year() {
        let bounded: Vec<(i32, i32)> = TimelineFilter::ALL_FILTERS
            .iter()
            .filter_map(|f| f.bounds())
            .collect();
        assert_eq!(bounded, vec![(0, 30), (31, 90), (91, 180), (181, 365)]);
        for pair in bounded.windows(2) {
            assert_eq!(pair[0].1 + 1, pair[1].0);
        }
    }

    #[test]
    fn filter_parses_and_displays() {
        for filter in TimelineFilter::ALL_FILTERS {
            let parsed: TimelineFilter = filter.as_str().parse().unwrap();
            assert_eq!(parsed, filter);
        }
        assert!("0-60".parse::<TimelineFilter>().is_err());
    }
}
