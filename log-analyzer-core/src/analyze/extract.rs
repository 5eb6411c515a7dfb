use crate::analyze::types::{Extracted, ParsedRequest};
use crate::conf::{ConfigError, REQUEST_TIME_GROUP, REQUEST_URL_GROUP, compile_line_pattern};
use regex::Regex;

/// Applies the configured line pattern to access log lines.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    pattern: Regex,
}

impl LineExtractor {
    /// Compiles `line_format` case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails if the pattern does not compile or lacks the `request_url` or
    /// `request_time` group.
    pub fn new(line_format: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: compile_line_pattern(line_format)?,
        })
    }

    /// Classifies one line.
    ///
    /// A line whose latency is not a finite, non-negative number counts as
    /// mismatched, the same as a line the pattern does not match at all.
    pub fn extract(&self, line: &str) -> Extracted {
        let Some(caps) = self.pattern.captures(line) else {
            return Extracted::Mismatched;
        };
        let (Some(url), Some(time)) = (caps.name(REQUEST_URL_GROUP), caps.name(REQUEST_TIME_GROUP))
        else {
            return Extracted::Mismatched;
        };

        match parse_latency(time.as_str()) {
            Some(latency) => Extracted::Matched(ParsedRequest {
                url: url.as_str().to_lowercase(),
                latency,
            }),
            None => Extracted::Mismatched,
        }
    }
}

fn parse_latency(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
