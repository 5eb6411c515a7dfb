use crate::analyze::{ReportRow, rank};
use pretty_assertions::assert_eq;

fn row(url: &str, time_sum: f64) -> ReportRow {
    ReportRow {
        url: url.to_string(),
        count: 1,
        time_sum,
        count_perc: 0.0,
        time_perc: 0.0,
        time_avg: time_sum,
        time_max: time_sum,
        time_med: time_sum,
    }
}

fn urls(rows: &[ReportRow]) -> Vec<&str> {
    rows.iter().map(|r| r.url.as_str()).collect()
}

#[test]
fn rank_orders_by_time_sum_and_keeps_ties_stable() {
    let rows = vec![row("A", 5.0), row("B", 9.0), row("C", 9.0)];

    let ranked = rank(rows, Some(2));

    assert_eq!(urls(&ranked), vec!["B", "C"]);
}

#[test]
fn rank_without_limit_keeps_all_rows() {
    let rows = vec![row("A", 1.0), row("B", 3.0), row("C", 2.0)];

    let ranked = rank(rows, None);

    assert_eq!(urls(&ranked), vec!["B", "C", "A"]);
}

#[test]
fn rank_limit_larger_than_rows_is_harmless() {
    let ranked = rank(vec![row("A", 1.0)], Some(1000));

    assert_eq!(urls(&ranked), vec!["A"]);
}

#[test]
fn rank_zero_limit_yields_empty_report() {
    assert!(rank(vec![row("A", 1.0)], Some(0)).is_empty());
}
