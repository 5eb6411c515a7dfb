use crate::analyze::aggregate::Aggregator;
use crate::analyze::decode::open_lines;
use crate::analyze::error::{AnalyzeError, Outcome};
use crate::analyze::extract::LineExtractor;
use crate::analyze::finalize::finalize;
use crate::analyze::locate::locate_log_file;
use crate::analyze::rank::rank;
use crate::analyze::report::{report_path, write_report};
use crate::conf::{AnalyzerConfig, resolve_path};

/// Runs the full pipeline for the most recent log file.
///
/// The config is expected to have passed [`crate::conf::validate`]; a line
/// format that does not compile is reported as an error all the same.
pub fn run(cfg: &AnalyzerConfig) -> Result<Outcome, AnalyzeError> {
    let extractor = LineExtractor::new(&cfg.logs.line_format)?;
    let logs_dir = resolve_path(&cfg.logs.dir);

    //--------------------------------------------------------------------------
    // Locate
    //--------------------------------------------------------------------------
    let Some(log) = locate_log_file(
        &logs_dir,
        &cfg.logs.file_name_prefix,
        &cfg.logs.file_name_date_format,
    )?
    else {
        tracing::info!(
            dir = %logs_dir.display(),
            prefix = %cfg.logs.file_name_prefix,
            date_format = %cfg.logs.file_name_date_format,
            "no log files found"
        );
        return Ok(Outcome::NoLogFile);
    };
    tracing::debug!(
        path = %log.path.display(),
        date = %log.date,
        compression = log.compression.as_str(),
        "selected log file"
    );

    //--------------------------------------------------------------------------
    // Skip logs that were already reported
    //--------------------------------------------------------------------------
    let dest = report_path(&cfg.report, log.date)?;
    if dest.exists() {
        tracing::info!(report = %dest.display(), "report already exists");
        return Ok(Outcome::ReportExists(dest));
    }

    //--------------------------------------------------------------------------
    // Parse and aggregate (single pass)
    //--------------------------------------------------------------------------
    let mut agg = Aggregator::new();
    for line in open_lines(&log)? {
        agg.push_line(&line?, &extractor);
    }

    if agg.total_lines() == 0 {
        tracing::info!(path = %log.path.display(), "log file is empty, nothing to report");
        return Ok(Outcome::EmptyLog(log.path));
    }

    let aggregated = agg.finish(cfg.logs.unmatched_line_limit).inspect_err(|e| {
        if let AnalyzeError::MismatchLimitExceeded { mismatched, .. } = e {
            tracing::error!(mismatched, "mismatch limit has been exceeded");
        }
    })?;
    tracing::debug!(
        lines = aggregated.total_lines,
        mismatched = aggregated.mismatched,
        urls = aggregated.urls.len(),
        "log parsed"
    );

    //--------------------------------------------------------------------------
    // Finalize, rank, write
    //--------------------------------------------------------------------------
    let rows = rank(finalize(&aggregated), cfg.report.report_size);

    let outcome = write_report(&cfg.report, &dest, &rows)?;
    match &outcome {
        Outcome::ReportWritten(path) => {
            tracing::info!(report = %path.display(), rows = rows.len(), "report saved")
        }
        Outcome::ReportExists(path) => {
            tracing::info!(report = %path.display(), "report already exists")
        }
        _ => {}
    }

    Ok(outcome)
}
