use crate::analyze::types::ReportRow;

/// Orders rows by `time_sum` descending and keeps the first `limit`.
///
/// The sort is stable: rows with equal `time_sum` keep their first-seen order.
pub fn rank(mut rows: Vec<ReportRow>, limit: Option<usize>) -> Vec<ReportRow> {
    rows.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));

    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}
