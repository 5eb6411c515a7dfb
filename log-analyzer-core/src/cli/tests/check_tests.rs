use crate::cli::check::{CheckError, check_config, check_error_hint};
use crate::conf::ConfigError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(root: &Path) -> std::path::PathBuf {
    fs::create_dir_all(root.join("logs")).unwrap();
    fs::write(root.join("report.html"), "$table_json").unwrap();

    let path = root.join("log_analyzer.toml");
    fs::write(
        &path,
        format!(
            "[logs]\ndir = {:?}\n\n[report]\ndir = {:?}\ntemplate_file_path = {:?}\n",
            root.join("logs"),
            root.join("reports"),
            root.join("report.html"),
        ),
    )
    .unwrap();
    path
}

#[test]
fn check_reports_latest_log_and_report_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    let path = write_config(root);
    fs::write(root.join("logs/nginx-access-ui.log-20170630.gz"), "").unwrap();

    // Act
    let summary = check_config(&path).unwrap();

    // Assert
    let log = summary.log_file.unwrap();
    assert_eq!(log.path, root.join("logs/nginx-access-ui.log-20170630.gz"));
    assert_eq!(log.date, "2017-06-30");
    assert_eq!(log.compression, "gzip");
    assert_eq!(
        log.report,
        root.join("reports/nginx-access-ui.report-20170630.html")
    );
    assert!(!log.report_exists);
}

#[test]
fn check_without_logs_has_no_log_file() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path());

    let summary = check_config(&path).unwrap();

    assert!(summary.log_file.is_none());
    assert_eq!(summary.report_size, Some(1000));
}

#[test]
fn check_missing_config_has_init_hint() {
    let dir = tempdir().unwrap();

    let err = check_config(&dir.path().join("missing.toml")).unwrap_err();

    assert!(matches!(err, CheckError::Config(ConfigError::NotFound { .. })));
    assert!(check_error_hint(&err).unwrap().contains("log-analyzer init"));
}
