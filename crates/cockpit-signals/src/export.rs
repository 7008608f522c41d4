//! CSV export of a filtered trigger set

use cockpit_core::{Error, LiquidityTrigger, Result};

/// Display column names, in export order.
const CSV_HEADER: [&str; 10] = [
    "Client",
    "Client Code",
    "Event",
    "Amount",
    "Date",
    "Days Until",
    "Probability",
    "Source",
    "RM",
    "Status",
];

/// Render an amount in crores with the currency prefix: `50000000` ->
/// `₹5.00 Cr`.
pub fn format_amount_crores(amount: i64) -> String {
    format!("₹{:.2} Cr", amount as f64 / 10_000_000.0)
}

/// Serialize triggers to CSV: the fixed header row plus one row per
/// trigger. An empty input is an error state (no export can be derived);
/// callers guard against empty exports.
pub fn write_csv<'a, I>(triggers: I) -> Result<String>
where
    I: IntoIterator<Item = &'a LiquidityTrigger>,
{
    let triggers: Vec<&LiquidityTrigger> = triggers.into_iter().collect();
    if triggers.is_empty() {
        return Err(Error::Validation("No triggers to export".into()));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::Internal(format!("CSV write failed: {}", e)))?;

    for trigger in triggers {
        let event = trigger.event_type.export_label();
        let amount = format_amount_crores(trigger.amount);
        let date = trigger.event_date.format("%d/%m/%Y").to_string();
        let days = trigger.days_until_event.to_string();
        let probability = format!("{}%", trigger.probability);
        writer
            .write_record([
                trigger.client_name.as_str(),
                trigger.client_code.as_str(),
                event.as_str(),
                amount.as_str(),
                date.as_str(),
                days.as_str(),
                probability.as_str(),
                trigger.data_source.as_str(),
                trigger.assigned_rm_name.as_str(),
                trigger.status.as_str(),
            ])
            .map_err(|e| Error::Internal(format!("CSV write failed: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Internal(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Internal(format!("CSV not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cockpit_core::{TriggerEventType, TriggerStatus};

    fn trigger(name: &str, event_type: TriggerEventType, amount: i64) -> LiquidityTrigger {
        LiquidityTrigger {
            client_name: name.into(),
            client_code: "#HC001".into(),
            event_type,
            amount,
            event_date: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
            days_until_event: 37,
            probability: 72,
            data_source: "Exchange Data".into(),
            assigned_rm_name: "Rajesh Kumar".into(),
            status: TriggerStatus::Contacted,
        }
    }

    #[test]
    fn two_triggers_make_exactly_three_lines() {
        let book = vec![
            trigger("Ramesh Gupta", TriggerEventType::Buyback, 50_000_000),
            trigger("Megha Iyer", TriggerEventType::BlockDeal, 120_000_000),
        ];
        let csv = write_csv(&book).unwrap();
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Client,Client Code,Event,Amount,Date,Days Until,Probability,Source,RM,Status"
        );
    }

    #[test]
    fn amount_renders_in_crores() {
        assert_eq!(format_amount_crores(50_000_000), "₹5.00 Cr");
        assert_eq!(format_amount_crores(1_234_567), "₹0.12 Cr");
        let book = vec![trigger("Ramesh Gupta", TriggerEventType::Buyback, 50_000_000)];
        let csv = write_csv(&book).unwrap();
        assert!(csv.contains("₹5.00 Cr"));
    }

    #[test]
    fn row_projects_every_display_column() {
        let book = vec![trigger("Ramesh Gupta", TriggerEventType::OpenOffer, 50_000_000)];
        let csv = write_csv(&book).unwrap();
        let row = csv.trim_end().lines().nth(1).unwrap();
        assert_eq!(
            row,
            "Ramesh Gupta,#HC001,OPEN OFFER,₹5.00 Cr,12/09/2025,37,72%,Exchange Data,Rajesh Kumar,contacted"
        );
    }

    #[test]
    fn empty_export_is_an_error() {
        let err = write_csv(std::iter::empty::<&LiquidityTrigger>()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
