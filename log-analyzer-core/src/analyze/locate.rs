use crate::analyze::error::AnalyzeError;
use crate::analyze::types::{CompressionKind, LogFileDescriptor};
use chrono::NaiveDate;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};

/// Finds the log file with the most recent embedded date.
///
/// Candidates are regular files in `dir` named `{prefix}{date}[.{ext}]` where
/// `date` parses with `date_format`. Other files are skipped silently.
///
/// Candidates are visited in lexicographic order and a later one only wins
/// with a strictly greater date, so on equal dates the lexicographically
/// smallest file name is selected.
///
/// # Errors
///
/// Returns `AnalyzeError::LogsDir` if `dir` cannot be read.
pub fn locate_log_file(
    dir: &Path,
    prefix: &str,
    date_format: &str,
) -> Result<Option<LogFileDescriptor>, AnalyzeError> {
    let meta = std::fs::metadata(dir).map_err(|source| AnalyzeError::LogsDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(AnalyzeError::LogsDir {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut best: Option<LogFileDescriptor> = None;

    for path in discover(dir, prefix)? {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(rest) = name.strip_prefix(prefix) else {
            continue;
        };
        let Some((date, compression)) = parse_file_suffix(rest, date_format) else {
            tracing::trace!(file = name, "skipping file without a parseable date");
            continue;
        };

        if best.as_ref().is_none_or(|b| date > b.date) {
            best = Some(LogFileDescriptor {
                path,
                date,
                compression,
            });
        }
    }

    Ok(best)
}

/// Lists regular files in `dir` whose name starts with `prefix`, sorted.
fn discover(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, AnalyzeError> {
    let pattern = resolve_glob(dir, prefix);
    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|e| AnalyzeError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// `{dir}/{prefix}*`, with glob metacharacters in both parts escaped.
fn resolve_glob(dir: &Path, prefix: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    let name = format!("{}*", Pattern::escape(prefix));
    Path::new(&dir).join(name).to_string_lossy().into_owned()
}

/// Splits the part of a file name after the prefix into its date token and
/// extension.
///
/// The date token spans as many dot-separated segments as the date format
/// itself produces, everything after it is the extension:
/// `20170630.gz` with `%Y%m%d` is (`20170630`, `gz`).
pub(crate) fn parse_file_suffix(
    rest: &str,
    date_format: &str,
) -> Option<(NaiveDate, CompressionKind)> {
    let date_segments = date_format.matches('.').count() + 1;

    let mut segments = rest.splitn(date_segments + 1, '.');
    let date_token: Vec<&str> = segments.by_ref().take(date_segments).collect();
    if date_token.len() < date_segments {
        return None;
    }
    let ext = segments.next().unwrap_or("");

    let date = NaiveDate::parse_from_str(&date_token.join("."), date_format).ok()?;
    Some((date, CompressionKind::from_extension(ext)))
}
