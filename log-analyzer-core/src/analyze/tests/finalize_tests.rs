use crate::analyze::{Aggregator, Extracted, ParsedRequest, ReportRow, finalize, median, round_to};
use pretty_assertions::assert_eq;

fn push(agg: &mut Aggregator, url: &str, latency: f64) {
    agg.push(Extracted::Matched(ParsedRequest {
        url: url.to_string(),
        latency,
    }));
}

fn rows() -> Vec<ReportRow> {
    let mut agg = Aggregator::new();
    push(&mut agg, "/a", 1.0);
    push(&mut agg, "/b", 0.5);
    push(&mut agg, "/a", 4.0);
    agg.push(Extracted::Mismatched);
    push(&mut agg, "/c", 1.0);
    push(&mut agg, "/a", 2.0);
    push(&mut agg, "/b", 1.5);
    agg.push(Extracted::Mismatched);

    finalize(&agg.finish(None).unwrap())
}

#[test]
fn finalize_computes_all_metrics() {
    assert_eq!(
        rows(),
        vec![
            ReportRow {
                url: "/a".to_string(),
                count: 3,
                time_sum: 7.0,
                count_perc: 50.0,
                time_perc: 70.0,
                time_avg: 2.3333,
                time_max: 4.0,
                time_med: 2.0,
            },
            ReportRow {
                url: "/b".to_string(),
                count: 2,
                time_sum: 2.0,
                count_perc: 33.3333,
                time_perc: 20.0,
                time_avg: 1.0,
                time_max: 1.5,
                time_med: 1.0,
            },
            ReportRow {
                url: "/c".to_string(),
                count: 1,
                time_sum: 1.0,
                count_perc: 16.6667,
                time_perc: 10.0,
                time_avg: 1.0,
                time_max: 1.0,
                time_med: 1.0,
            },
        ]
    );
}

#[test]
fn percentages_sum_to_one_hundred() {
    let rows = rows();

    let count_perc: f64 = rows.iter().map(|r| r.count_perc).sum();
    let time_perc: f64 = rows.iter().map(|r| r.time_perc).sum();

    assert!((count_perc - 100.0).abs() < 1e-3, "count_perc sum {count_perc}");
    assert!((time_perc - 100.0).abs() < 1e-3, "time_perc sum {time_perc}");
}

#[test]
fn time_avg_uses_unrounded_sum() {
    // The rounded sum 0.0003 would average to 0.00015.
    let mut agg = Aggregator::new();
    push(&mut agg, "/tiny", 0.00014);
    push(&mut agg, "/tiny", 0.00014);

    let rows = finalize(&agg.finish(None).unwrap());

    assert_eq!(rows[0].time_sum, 0.0003);
    assert_eq!(rows[0].time_avg, 0.0001);
}

#[test]
fn time_max_is_not_rounded() {
    let mut agg = Aggregator::new();
    push(&mut agg, "/x", 0.123456789);

    let rows = finalize(&agg.finish(None).unwrap());

    assert_eq!(rows[0].time_max, 0.123456789);
    assert_eq!(rows[0].time_sum, 0.1235);
}

#[test]
fn zero_total_time_gives_zero_time_perc() {
    let mut agg = Aggregator::new();
    push(&mut agg, "/zero", 0.0);

    let rows = finalize(&agg.finish(None).unwrap());

    assert_eq!(rows[0].time_perc, 0.0);
    assert_eq!(rows[0].count_perc, 100.0);
}

#[test]
fn median_of_even_count_averages_middle_values() {
    assert_eq!(median(&[0.4, 0.1, 0.3, 0.2]), 0.25);
    assert_eq!(round_to(median(&[0.1, 0.2, 0.3, 0.4]), 4), 0.25);
}

#[test]
fn median_of_odd_count_is_middle_value() {
    assert_eq!(median(&[0.3, 0.1, 0.2]), 0.2);
}

#[test]
fn median_of_nothing_is_zero() {
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn round_to_rounds_half_away_from_zero() {
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-2.5, 0), -3.0);
    assert_eq!(round_to(1.23456, 4), 1.2346);
    assert_eq!(round_to(1.23454, 4), 1.2345);
}
