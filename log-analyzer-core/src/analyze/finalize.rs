use crate::analyze::aggregate::{AggregatedLog, UrlAccumulator};
use crate::analyze::types::ReportRow;

/// Decimal digits kept in report values.
pub const ROUND_DIGITS: i32 = 4;

/// Converts the accumulated samples into report rows, in first-seen order.
///
/// `time_avg` is computed from the unrounded sum. Percentages are relative to
/// the matched lines and the latency sum of the whole log respectively.
pub fn finalize(log: &AggregatedLog) -> Vec<ReportRow> {
    let matched = log.matched();
    log.urls
        .iter()
        .map(|acc| finalize_url(acc, matched, log.total_time))
        .collect()
}

fn finalize_url(acc: &UrlAccumulator, matched: u64, total_time: f64) -> ReportRow {
    let count = acc.sample_count;
    let time_sum = acc.latency_sum;

    ReportRow {
        url: acc.url.clone(),
        count,
        time_sum: round_to(time_sum, ROUND_DIGITS),
        count_perc: round_to(percent(count as f64, matched as f64), ROUND_DIGITS),
        time_perc: round_to(percent(time_sum, total_time), ROUND_DIGITS),
        time_avg: round_to(time_sum / count as f64, ROUND_DIGITS),
        time_max: acc.latency_max,
        time_med: round_to(median(&acc.samples), ROUND_DIGITS),
    }
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { 100.0 * part / whole } else { 0.0 }
}

/// Rounds half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Median of the samples; the mean of the two middle values for an even
/// count. Returns 0 for no samples.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
