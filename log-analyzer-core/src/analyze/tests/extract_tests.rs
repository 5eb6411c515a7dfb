use super::test_helpers::nginx_line;
use crate::analyze::{Extracted, LineExtractor, ParsedRequest};
use crate::conf::ConfigError;
use crate::conf::types::DEFAULT_LINE_FORMAT;
use pretty_assertions::assert_eq;

fn extractor() -> LineExtractor {
    LineExtractor::new(DEFAULT_LINE_FORMAT).unwrap()
}

#[test]
fn default_format_extracts_url_and_time() {
    let line = nginx_line("/api/v2/banner/25019354", "0.390");

    assert_eq!(
        extractor().extract(&line),
        Extracted::Matched(ParsedRequest {
            url: "/api/v2/banner/25019354".to_string(),
            latency: 0.390,
        })
    );
}

#[test]
fn url_is_lowercased_and_query_is_dropped() {
    let line = nginx_line("/API/v2/Banner?limit=10&Offset=0", "0.133");

    assert_eq!(
        extractor().extract(&line),
        Extracted::Matched(ParsedRequest {
            url: "/api/v2/banner".to_string(),
            latency: 0.133,
        })
    );
}

#[test]
fn lowercase_method_matches_case_insensitively() {
    let line = nginx_line("/export/appinstall_raw/2017-06-29/", "0.003").replace("GET", "get");

    assert!(matches!(extractor().extract(&line), Extracted::Matched(_)));
}

#[test]
fn structurally_broken_line_is_mismatched() {
    assert_eq!(extractor().extract("garbage"), Extracted::Mismatched);
    assert_eq!(extractor().extract(""), Extracted::Mismatched);
}

#[test]
fn unparseable_latency_is_mismatched() {
    // `[\d.]*` accepts these, the numeric parse does not.
    assert_eq!(
        extractor().extract(&nginx_line("/api/1", "0.3.9")),
        Extracted::Mismatched
    );
    assert_eq!(
        extractor().extract(&nginx_line("/api/1", "-")),
        Extracted::Mismatched
    );
}

#[test]
fn custom_format_with_negative_latency_is_mismatched() {
    let extractor =
        LineExtractor::new(r"(?P<request_url>\S+) (?P<request_time>-?[\d.]+)").unwrap();

    assert_eq!(extractor.extract("/a -0.5"), Extracted::Mismatched);
    assert_eq!(
        extractor.extract("/A 1.5"),
        Extracted::Matched(ParsedRequest {
            url: "/a".to_string(),
            latency: 1.5,
        })
    );
}

#[test]
fn format_without_time_group_is_rejected() {
    let err = LineExtractor::new(r"(?P<request_url>\S+) \S+").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingCaptureGroup {
            group: "request_time"
        }
    ));
}

#[test]
fn invalid_format_is_rejected() {
    let err = LineExtractor::new(r"(?P<request_url>\S+").unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}
