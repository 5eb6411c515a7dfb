use integration_tests::harness::{Compression, TestWorkspace, nginx_line};
use log_analyzer_core::{Outcome, run};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn lines() -> Vec<String> {
    vec![
        nginx_line("/api/v2/banner/1", "0.100"),
        nginx_line("/api/v2/banner/2", "0.250"),
        nginx_line("/api/v2/banner/1", "0.300"),
        "garbage".to_string(),
        nginx_line("/export/appinstall_raw/2017-06-29/", "0.001"),
    ]
}

fn table_for(compression: Compression) -> Vec<Value> {
    let mut ws = TestWorkspace::new();
    ws.config.logs.unmatched_line_limit = Some(0.5);
    ws.write_log("20170630", &lines(), compression);

    let outcome = run(&ws.config).unwrap();
    let dest = ws.report_path("20170630");
    assert_eq!(outcome, Outcome::ReportWritten(dest.clone()));

    ws.report_table(&dest)
}

#[test]
fn compressed_logs_produce_the_same_report() {
    let plain = table_for(Compression::Plain);

    assert_eq!(plain.len(), 3);
    // The garbage line is dropped the same way for every encoding.
    let count: u64 = plain.iter().map(|r| r["count"].as_u64().unwrap()).sum();
    assert_eq!(count, 4);
    assert_eq!(table_for(Compression::Gzip), plain);
    assert_eq!(table_for(Compression::Bzip2), plain);
}

#[test]
fn compressed_log_newer_than_plain_one_is_selected() {
    // Arrange
    let ws = TestWorkspace::new();
    ws.write_log("20170629", &[nginx_line("/old", "1.0")], Compression::Plain);
    ws.write_log("20170701", &[nginx_line("/new", "2.0")], Compression::Bzip2);
    ws.write_log("20170630", &[nginx_line("/mid", "3.0")], Compression::Gzip);

    // Act
    let outcome = run(&ws.config).unwrap();

    // Assert
    let dest = ws.report_path("20170701");
    assert_eq!(outcome, Outcome::ReportWritten(dest.clone()));
    let table = ws.report_table(&dest);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0]["url"], "/new");
}

#[test]
fn truncated_gzip_log_is_a_decode_error() {
    let ws = TestWorkspace::new();
    let path = ws.write_log("20170630", &lines(), Compression::Gzip);

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let err = run(&ws.config).unwrap_err();

    assert_eq!(err.exit_code(), -1);
    assert!(!ws.report_path("20170630").exists());
}
