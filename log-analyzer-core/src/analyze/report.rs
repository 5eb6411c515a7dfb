use crate::analyze::error::{AnalyzeError, Outcome};
use crate::analyze::template::render_template;
use crate::analyze::types::ReportRow;
use crate::conf::{ReportConfig, resolve_path};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Template placeholder replaced with the JSON array of report rows.
pub const TABLE_PLACEHOLDER: &str = "table_json";

/// `{dir}/{prefix}{date}{ext}` for the log dated `date`.
///
/// `ext` is `file_name_ext` when set (with or without a leading dot),
/// otherwise the extension of the template file.
pub fn report_path(cfg: &ReportConfig, date: NaiveDate) -> Result<PathBuf, AnalyzeError> {
    let mut name = cfg.file_name_prefix.clone();
    write!(name, "{}", date.format(&cfg.file_name_date_format)).map_err(|_| {
        AnalyzeError::DateFormat {
            format: cfg.file_name_date_format.clone(),
        }
    })?;
    name.push_str(&report_extension(cfg));

    Ok(resolve_path(&cfg.dir).join(name))
}

fn report_extension(cfg: &ReportConfig) -> String {
    match cfg.file_name_ext.as_deref() {
        Some(ext) if !ext.is_empty() => {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            }
        }
        _ => cfg
            .template_file_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default(),
    }
}

/// Renders `rows` into the report template and saves the result at `dest`.
///
/// The report is written to a temporary file in the report directory and
/// moved into place only if `dest` still does not exist, so an interrupted
/// run leaves no partial report and an existing one is never overwritten.
pub fn write_report(
    cfg: &ReportConfig,
    dest: &Path,
    rows: &[ReportRow],
) -> Result<Outcome, AnalyzeError> {
    if dest.exists() {
        return Ok(Outcome::ReportExists(dest.to_path_buf()));
    }

    let template_path = resolve_path(&cfg.template_file_path);
    let template = fs::read_to_string(&template_path).map_err(|source| AnalyzeError::Template {
        path: template_path.clone(),
        source,
    })?;

    let table_json = serde_json::to_string(rows)?;
    let rendered = render_template(&template, &[(TABLE_PLACEHOLDER, &table_json)]);

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| AnalyzeError::write_report(&dir, e))?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| AnalyzeError::write_report(&dir, e))?;
    tmp.write_all(rendered.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| AnalyzeError::write_report(tmp.path(), e))?;

    match tmp.persist_noclobber(dest) {
        Ok(_) => Ok(Outcome::ReportWritten(dest.to_path_buf())),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
            Ok(Outcome::ReportExists(dest.to_path_buf()))
        }
        Err(e) => Err(AnalyzeError::write_report(dest, e.error)),
    }
}
