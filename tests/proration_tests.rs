use chrono::NaiveDate;
use matchbook_core::{
    domain::{Budget, Period, YearMonth},
    errors::BudgetError,
    services::BudgetService,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn mid_month_query_prorates_both_touched_months() {
    let budgets = vec![
        Budget::from_raw(202507, 3100).unwrap(),
        Budget::from_raw(202508, 310).unwrap(),
    ];
    let query = Period::new(date(2025, 7, 30), date(2025, 8, 14)).expect("valid range");

    let total = BudgetService::query_total_amount(&budgets, &query);
    let expected = 3100.0 / 31.0 * 2.0 + 310.0 / 31.0 * 14.0;
    assert!((total - expected).abs() < 1e-9, "total was {total}");
}

#[test]
fn inverted_query_ranges_never_reach_the_engine() {
    let err = Period::new(date(2025, 8, 14), date(2025, 7, 30)).expect_err("inverted");
    assert_eq!(
        err,
        BudgetError::InvalidRange {
            start: date(2025, 8, 14),
            end: date(2025, 7, 30),
        }
    );
}

#[test]
fn leap_february_prorates_over_twenty_nine_days() {
    let budget = Budget::from_raw(202402, 290).unwrap();
    assert!((budget.daily_amount() - 10.0).abs() < f64::EPSILON);

    let query = Period::new(date(2024, 2, 28), date(2024, 3, 5)).unwrap();
    // Two February days fall inside the query.
    assert!((budget.overlapping_amount(&query) - 20.0).abs() < 1e-9);
}

#[test]
fn negative_amounts_prorate_like_positive_ones() {
    let refund = Budget::from_raw(202507, -3100).unwrap();
    let query = Period::new(date(2025, 7, 30), date(2025, 8, 14)).unwrap();
    assert!((refund.overlapping_amount(&query) + 200.0).abs() < 1e-9);
}

#[test]
fn malformed_year_months_are_rejected_before_any_math() {
    for raw in [0, 9999, 202500, 202513, 20250701] {
        assert!(
            Budget::from_raw(raw, 100).is_err(),
            "{raw} should not build a budget"
        );
    }
}

#[test]
fn year_month_boundaries_match_the_calendar() {
    let december = YearMonth::new(202512).unwrap();
    assert_eq!(december.first_day(), date(2025, 12, 1));
    assert_eq!(december.last_day(), date(2025, 12, 31));
    assert_eq!(december.period().days(), 31);
}

#[test]
fn budgets_round_trip_through_json() {
    let budget = Budget::from_raw(202507, 3100).unwrap();
    let json = serde_json::to_string(&budget).unwrap();
    let back: Budget = serde_json::from_str(&json).unwrap();
    assert_eq!(back, budget);
}

#[test]
fn tampered_json_fails_validation_on_the_way_in() {
    let raw = r#"{ "id": "5f0a6f46-2f8f-4a8b-9d3c-0a5a1d2cce01", "year_month": 202513, "amount": 1 }"#;
    assert!(serde_json::from_str::<Budget>(raw).is_err());
}
