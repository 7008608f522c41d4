//! Timeline bucket filtering and amount totals

use cockpit_core::{LiquidityTrigger, TimelineFilter};

/// Filter triggers into a timeline bucket.
///
/// `All` returns every trigger; bounded buckets keep triggers with
/// `lo <= days_until_event <= hi`, inclusive on both ends. The filter is
/// stable: original order is preserved, nothing is re-sorted. Triggers
/// outside 0-365 days (including overdue, negative-day events) match no
/// bounded bucket.
pub fn filter_by_timeline<'a>(
    triggers: &'a [LiquidityTrigger],
    filter: TimelineFilter,
) -> Vec<&'a LiquidityTrigger> {
    match filter.bounds() {
        None => triggers.iter().collect(),
        Some((lo, hi)) => triggers
            .iter()
            .filter(|t| t.days_until_event >= lo && t.days_until_event <= hi)
            .collect(),
    }
}

/// Total amount over an (already filtered) collection of triggers.
///
/// Returns 0 for an empty collection. All amounts are assumed to be in
/// the same currency unit; no conversion happens here.
pub fn total_amount<'a, I>(triggers: I) -> i64
where
    I: IntoIterator<Item = &'a LiquidityTrigger>,
{
    triggers.into_iter().map(|t| t.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cockpit_core::{TriggerEventType, TriggerStatus};

    fn trigger(name: &str, days: i32, amount: i64) -> LiquidityTrigger {
        LiquidityTrigger {
            client_name: name.into(),
            client_code: format!("#HC{}", days.unsigned_abs()),
            event_type: TriggerEventType::Buyback,
            amount,
            event_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            days_until_event: days,
            probability: 80,
            data_source: "Exchange Data".into(),
            assigned_rm_name: "Rajesh Kumar".into(),
            status: TriggerStatus::New,
        }
    }

    #[test]
    fn all_returns_everything_in_original_order() {
        let book = vec![
            trigger("a", 400, 10),
            trigger("b", -5, 20),
            trigger("c", 15, 30),
        ];
        let filtered = filter_by_timeline(&book, TimelineFilter::All);
        let names: Vec<&str> = filtered.iter().map(|t| t.client_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn bucket_membership_is_inclusive_on_both_ends() {
        let book = vec![
            trigger("below", 30, 1),
            trigger("lo", 31, 1),
            trigger("mid", 60, 1),
            trigger("hi", 90, 1),
            trigger("above", 91, 1),
        ];
        let filtered = filter_by_timeline(&book, TimelineFilter::Days31To90);
        let names: Vec<&str> = filtered.iter().map(|t| t.client_name.as_str()).collect();
        assert_eq!(names, vec!["lo", "mid", "hi"]);
    }

    #[test]
    fn overdue_triggers_fall_out_of_every_bounded_bucket() {
        let book = vec![trigger("overdue", -12, 1), trigger("far", 500, 1)];
        for filter in TimelineFilter::ALL_FILTERS {
            let filtered = filter_by_timeline(&book, filter);
            match filter {
                TimelineFilter::All => assert_eq!(filtered.len(), 2),
                _ => assert!(filtered.is_empty(), "{} should be empty", filter),
            }
        }
    }

    #[test]
    fn zero_days_lands_in_the_first_bucket() {
        let book = vec![trigger("today", 0, 1)];
        assert_eq!(
            filter_by_timeline(&book, TimelineFilter::Days0To30).len(),
            1
        );
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(total_amount(std::iter::empty::<&LiquidityTrigger>()), 0);
    }

    #[test]
    fn total_is_additive_over_disjoint_slices() {
        let a = vec![trigger("a", 10, 50_000_000), trigger("b", 20, 25_000_000)];
        let b = vec![trigger("c", 40, 10_000_000)];
        let combined: Vec<LiquidityTrigger> =
            a.iter().chain(b.iter()).cloned().collect();
        assert_eq!(
            total_amount(&combined),
            total_amount(&a) + total_amount(&b)
        );
        assert_eq!(total_amount(&combined), 85_000_000);
    }
}
