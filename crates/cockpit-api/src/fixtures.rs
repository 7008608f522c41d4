//! Mock fixture data
//!
//! In-memory stand-ins for the real ingestion pipeline and client
//! datastore. Everything here sits behind the store traits or module
//! functions, so swapping in a live backend touches nothing in the
//! handlers or the aggregator.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use cockpit_core::{
    DisplaySignal, LiquidityTrigger, SignalTier, TriggerEventType, TriggerStatus, TriggerStore,
};

use crate::models::{
    ConflictStatus, ConflictSummary, ConflictValue, DataConflict, DataSource, IngestionMetrics,
    SourceHealth, SourceMetrics, SourceStats,
};

static DATA_SOURCES: Lazy<Vec<DataSource>> = Lazy::new(|| {
    vec![
        DataSource {
            id: "exchange-data".into(),
            name: "Exchange Data".into(),
            category: "market".into(),
            status: SourceHealth::Connected,
            last_sync_at: Utc.with_ymd_and_hms(2025, 7, 28, 6, 45, 0).unwrap(),
            records_today: 18_423,
            uptime_percent: 99.8,
        },
        DataSource {
            id: "privatecircle".into(),
            name: "PrivateCircle".into(),
            category: "private_markets".into(),
            status: SourceHealth::Connected,
            last_sync_at: Utc.with_ymd_and_hms(2025, 7, 28, 6, 30, 0).unwrap(),
            records_today: 3_211,
            uptime_percent: 99.1,
        },
        DataSource {
            id: "vccircle".into(),
            name: "VCCircle".into(),
            category: "news".into(),
            status: SourceHealth::Degraded,
            last_sync_at: Utc.with_ymd_and_hms(2025, 7, 28, 4, 10, 0).unwrap(),
            records_today: 1_204,
            uptime_percent: 96.4,
        },
        DataSource {
            id: "zauba-corp".into(),
            name: "Zauba Corp".into(),
            category: "registry".into(),
            status: SourceHealth::Connected,
            last_sync_at: Utc.with_ymd_and_hms(2025, 7, 28, 6, 0, 0).unwrap(),
            records_today: 8_671,
            uptime_percent: 99.5,
        },
        DataSource {
            id: "tenders-portal".into(),
            name: "Tenders Portal".into(),
            category: "government".into(),
            status: SourceHealth::Disconnected,
            last_sync_at: Utc.with_ymd_and_hms(2025, 7, 26, 22, 15, 0).unwrap(),
            records_today: 0,
            uptime_percent: 87.2,
        },
    ]
});

static METRICS_BY_SOURCE: Lazy<BTreeMap<String, SourceMetrics>> = Lazy::new(|| {
    let rows = [
        ("exchange-data", "Exchange Data", 18_423, 31, 84.0, 212, 4),
        ("privatecircle", "PrivateCircle", 3_211, 12, 342.0, 38, 3),
        ("vccircle", "VCCircle", 1_204, 96, 710.0, 91, 2),
        ("zauba-corp", "Zauba Corp", 8_671, 8, 156.0, 67, 1),
        ("tenders-portal", "Tenders Portal", 0, 0, 0.0, 0, 0),
    ];
    rows.into_iter()
        .map(|(id, name, processed, failed, latency, dupes, conflicts)| {
            (
                id.to_string(),
                SourceMetrics {
                    source_id: id.into(),
                    source_name: name.into(),
                    metrics: IngestionMetrics {
                        records_processed: processed,
                        records_failed: failed,
                        avg_latency_ms: latency,
                        duplicates_detected: dupes,
                        conflicts_detected: conflicts,
                    },
                },
            )
        })
        .collect()
});

static DATA_CONFLICTS: Lazy<Vec<DataConflict>> = Lazy::new(|| {
    vec![
        DataConflict {
            id: "c-001".into(),
            client_code: "#HC001".into(),
            field: "netWorth".into(),
            values: vec![
                ConflictValue {
                    source: "Exchange Data".into(),
                    value: "₹450 Cr".into(),
                },
                ConflictValue {
                    source: "PrivateCircle".into(),
                    value: "₹512 Cr".into(),
                },
            ],
            detected_at: Utc.with_ymd_and_hms(2025, 7, 27, 9, 20, 0).unwrap(),
            status: ConflictStatus::Pending,
        },
        DataConflict {
            id: "c-002".into(),
            client_code: "#HC084".into(),
            field: "promoterHolding".into(),
            values: vec![
                ConflictValue {
                    source: "Exchange Data".into(),
                    value: "42.3%".into(),
                },
                ConflictValue {
                    source: "Zauba Corp".into(),
                    value: "44.1%".into(),
                },
            ],
            detected_at: Utc.with_ymd_and_hms(2025, 7, 27, 14, 5, 0).unwrap(),
            status: ConflictStatus::Pending,
        },
        DataConflict {
            id: "c-003".into(),
            client_code: "#HC128".into(),
            field: "boardSeat".into(),
            values: vec![
                ConflictValue {
                    source: "VCCircle".into(),
                    value: "Independent Director".into(),
                },
                ConflictValue {
                    source: "Zauba Corp".into(),
                    value: "Whole-time Director".into(),
                },
            ],
            detected_at: Utc.with_ymd_and_hms(2025, 7, 24, 11, 40, 0).unwrap(),
            status: ConflictStatus::Resolved,
        },
        DataConflict {
            id: "c-004".into(),
            client_code: "#HC142".into(),
            field: "residencyStatus".into(),
            values: vec![
                ConflictValue {
                    source: "PrivateCircle".into(),
                    value: "Resident".into(),
                },
                ConflictValue {
                    source: "Manual Intelligence".into(),
                    value: "NRI".into(),
                },
            ],
            detected_at: Utc.with_ymd_and_hms(2025, 7, 22, 16, 55, 0).unwrap(),
            status: ConflictStatus::Escalated,
        },
        DataConflict {
            id: "c-005".into(),
            client_code: "#HC109".into(),
            field: "mobileNumber".into(),
            values: vec![
                ConflictValue {
                    source: "Exchange Data".into(),
                    value: "+91 98200 11223".into(),
                },
                ConflictValue {
                    source: "Zauba Corp".into(),
                    value: "+91 98200 99887".into(),
                },
            ],
            detected_at: Utc.with_ymd_and_hms(2025, 7, 20, 8, 30, 0).unwrap(),
            status: ConflictStatus::Resolved,
        },
    ]
});

static DISPLAY_SIGNALS: Lazy<Vec<DisplaySignal>> = Lazy::new(|| {
    vec![
        DisplaySignal {
            company_name: "Nectar Lifesciences Ltd".into(),
            company_code: "#NSE:NECLIFE".into(),
            mapped_client: "Ramesh Gupta".into(),
            client_code: "#HC001".into(),
            event_description: "Buyback — Record Date Liquidity".into(),
            is_important: true,
            tier: SignalTier::Red,
        },
        DisplaySignal {
            company_name: "VLS Finance Ltd".into(),
            company_code: "#NSE:VLSFINANCE".into(),
            mapped_client: "Sanjay Malhotra".into(),
            client_code: "#HC128".into(),
            event_description: "Buyback — Tender Window Live".into(),
            is_important: true,
            tier: SignalTier::Red,
        },
        DisplaySignal {
            company_name: "Covidh Technologies Ltd".into(),
            company_code: "#NSE:COVIDH".into(),
            mapped_client: "Ramesh Gupta".into(),
            client_code: "#HC001".into(),
            event_description: "Open Offer — Tender Window Live".into(),
            is_important: false,
            tier: SignalTier::Red,
        },
        DisplaySignal {
            company_name: "Aurobindo Pharma Ltd".into(),
            company_code: "#NSE:AUROPHARMA".into(),
            mapped_client: "Megha Iyer".into(),
            client_code: "#HC084".into(),
            event_description: "Block Deal — Promoter Stake Sale".into(),
            is_important: false,
            tier: SignalTier::Yellow,
        },
        DisplaySignal {
            company_name: "Glenmark Life Sciences".into(),
            company_code: "#NSE:GLENMARKL".into(),
            mapped_client: "Rohit Khanna".into(),
            client_code: "#HC142".into(),
            event_description: "Demergers — Board Resolution Expected".into(),
            is_important: false,
            tier: SignalTier::Yellow,
        },
        DisplaySignal {
            company_name: "CMS Info Systems".into(),
            company_code: "#NSE:CMSINFO".into(),
            mapped_client: "Neelam Chopra".into(),
            client_code: "#HC109".into(),
            event_description: "ESOP Vesting — 6 Month Window".into(),
            is_important: false,
            tier: SignalTier::Green,
        },
        DisplaySignal {
            company_name: "L&T Technology Services".into(),
            company_code: "#NSE:LTTS".into(),
            mapped_client: "Harish Batra".into(),
            client_code: "#HC062".into(),
            event_description: "Dividend Signal — Capital Allocation Review".into(),
            is_important: false,
            tier: SignalTier::Green,
        },
    ]
});

static TRIGGER_BOOK: Lazy<Vec<LiquidityTrigger>> = Lazy::new(|| {
    let rows: [(&str, &str, TriggerEventType, i64, (i32, u32, u32), i32, u8, &str, &str, TriggerStatus); 8] = [
        (
            "Ramesh Gupta", "#HC001", TriggerEventType::Buyback, 185_000_000,
            (2025, 8, 18), 12, 90, "Exchange Data", "Rajesh Kumar", TriggerStatus::Contacted,
        ),
        (
            "Sanjay Malhotra", "#HC128", TriggerEventType::Buyback, 92_500_000,
            (2025, 8, 31), 25, 85, "Exchange Data", "Priya Nair", TriggerStatus::New,
        ),
        (
            "Megha Iyer", "#HC084", TriggerEventType::BlockDeal, 240_000_000,
            (2025, 9, 20), 45, 70, "PrivateCircle", "Rajesh Kumar", TriggerStatus::InDiscussion,
        ),
        (
            "Rohit Khanna", "#HC142", TriggerEventType::Demerger, 310_000_000,
            (2025, 10, 28), 83, 60, "VCCircle", "Priya Nair", TriggerStatus::New,
        ),
        (
            "Neelam Chopra", "#HC109", TriggerEventType::EsopVesting, 54_000_000,
            (2025, 12, 12), 128, 75, "Zauba Corp", "Rajesh Kumar", TriggerStatus::New,
        ),
        (
            "Harish Batra", "#HC062", TriggerEventType::Dividend, 36_000_000,
            (2026, 2, 10), 188, 55, "Exchange Data", "Priya Nair", TriggerStatus::Dormant,
        ),
        (
            "Anita Patel", "#HC201", TriggerEventType::Ipo, 500_000_000,
            (2026, 6, 30), 328, 65, "PrivateCircle", "Rajesh Kumar", TriggerStatus::New,
        ),
        // Overdue: tender window already closed, kept for the "all" view.
        (
            "Vikram Singh", "#HC033", TriggerEventType::OpenOffer, 78_000_000,
            (2025, 7, 29), -8, 95, "Exchange Data", "Rajesh Kumar", TriggerStatus::Actioned,
        ),
    ];
    rows.into_iter()
        .map(
            |(name, code, event_type, amount, (y, m, d), days, probability, source, rm, status)| {
                LiquidityTrigger {
                    client_name: name.into(),
                    client_code: code.into(),
                    event_type,
                    amount,
                    event_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                    days_until_event: days,
                    probability,
                    data_source: source.into(),
                    assigned_rm_name: rm.into(),
                    status,
                }
            },
        )
        .collect()
});

pub fn data_sources() -> &'static [DataSource] {
    &DATA_SOURCES
}

/// Aggregate health stats over the source list.
pub fn source_stats() -> SourceStats {
    let sources = data_sources();
    let count = |health: SourceHealth| sources.iter().filter(|s| s.status == health).count();
    SourceStats {
        total_sources: sources.len(),
        connected: count(SourceHealth::Connected),
        degraded: count(SourceHealth::Degraded),
        disconnected: count(SourceHealth::Disconnected),
        total_records_today: sources.iter().map(|s| s.records_today).sum(),
    }
}

pub fn metrics_by_source() -> &'static BTreeMap<String, SourceMetrics> {
    &METRICS_BY_SOURCE
}

/// Aggregate ingestion metrics over every source. Latency is averaged
/// over sources that processed anything.
pub fn aggregated_metrics() -> IngestionMetrics {
    let rows: Vec<&IngestionMetrics> =
        METRICS_BY_SOURCE.values().map(|s| &s.metrics).collect();
    let active = rows.iter().filter(|m| m.records_processed > 0).count();
    let avg_latency_ms = if active == 0 {
        0.0
    } else {
        rows.iter()
            .filter(|m| m.records_processed > 0)
            .map(|m| m.avg_latency_ms)
            .sum::<f64>()
            / active as f64
    };
    IngestionMetrics {
        records_processed: rows.iter().map(|m| m.records_processed).sum(),
        records_failed: rows.iter().map(|m| m.records_failed).sum(),
        avg_latency_ms,
        duplicates_detected: rows.iter().map(|m| m.duplicates_detected).sum(),
        conflicts_detected: rows.iter().map(|m| m.conflicts_detected).sum(),
    }
}

pub fn conflicts() -> &'static [DataConflict] {
    &DATA_CONFLICTS
}

/// Summary counts over the full conflict list (not the filtered view).
pub fn conflict_summary() -> ConflictSummary {
    let all = conflicts();
    let count = |status: ConflictStatus| all.iter().filter(|c| c.status == status).count();
    ConflictSummary {
        total: all.len(),
        pending: count(ConflictStatus::Pending),
        resolved: count(ConflictStatus::Resolved),
        escalated: count(ConflictStatus::Escalated),
    }
}

pub fn display_signals() -> &'static [DisplaySignal] {
    &DISPLAY_SIGNALS
}

pub fn trigger_book() -> &'static [LiquidityTrigger] {
    &TRIGGER_BOOK
}

/// Trigger store over an in-memory book.
pub struct InMemoryTriggerStore {
    triggers: Vec<LiquidityTrigger>,
}

impl InMemoryTriggerStore {
    /// Store over the fixture trigger book.
    pub fn seeded() -> Self {
        Self {
            triggers: TRIGGER_BOOK.clone(),
        }
    }

    pub fn with_triggers(triggers: Vec<LiquidityTrigger>) -> Self {
        Self { triggers }
    }
}

#[async_trait]
impl TriggerStore for InMemoryTriggerStore {
    async fn all(&self) -> Vec<LiquidityTrigger> {
        self.triggers.clone()
    }
}
