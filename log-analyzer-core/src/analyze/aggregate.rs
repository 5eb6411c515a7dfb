use crate::analyze::error::AnalyzeError;
use crate::analyze::extract::LineExtractor;
use crate::analyze::types::{Extracted, ParsedRequest};
use ahash::AHashMap;

/// Latency samples of one URL collected during the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlAccumulator {
    pub url: String,
    pub sample_count: u64,
    pub latency_sum: f64,
    pub latency_max: f64,
    /// In log order; kept for the median.
    pub samples: Vec<f64>,
}

impl UrlAccumulator {
    fn new(url: String) -> Self {
        Self {
            url,
            sample_count: 0,
            latency_sum: 0.0,
            latency_max: f64::NEG_INFINITY,
            samples: Vec::new(),
        }
    }

    fn record(&mut self, latency: f64) {
        self.sample_count += 1;
        self.latency_sum += latency;
        self.latency_max = self.latency_max.max(latency);
        self.samples.push(latency);
    }
}

/// Single-pass accumulator of per-URL latency statistics.
///
/// URLs are kept in first-seen order so that later stable sorting breaks
/// ties by appearance in the log.
#[derive(Debug, Default)]
pub struct Aggregator {
    total_lines: u64,
    total_time: f64,
    /// 1-based line numbers.
    mismatched_lines: Vec<u64>,

    urls: Vec<UrlAccumulator>,
    index: AHashMap<String, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str, extractor: &LineExtractor) {
        let extracted = extractor.extract(line);
        self.push(extracted);
    }

    pub fn push(&mut self, extracted: Extracted) {
        self.total_lines += 1;

        match extracted {
            Extracted::Matched(ParsedRequest { url, latency }) => {
                self.total_time += latency;

                let idx = match self.index.get(&url) {
                    Some(&idx) => idx,
                    None => {
                        let idx = self.urls.len();
                        self.index.insert(url.clone(), idx);
                        self.urls.push(UrlAccumulator::new(url));
                        idx
                    }
                };
                self.urls[idx].record(latency);
            }
            Extracted::Mismatched => self.mismatched_lines.push(self.total_lines),
        }
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn mismatched_lines(&self) -> &[u64] {
        &self.mismatched_lines
    }

    /// Ends the pass and applies the mismatch tolerance.
    ///
    /// `limit` is the highest accepted share of mismatched lines; `None`
    /// accepts any share. The ratio is only checked when at least one line
    /// was read.
    pub fn finish(self, limit: Option<f64>) -> Result<AggregatedLog, AnalyzeError> {
        let mismatched = self.mismatched_lines.len() as u64;

        if !self.mismatched_lines.is_empty() {
            tracing::debug!(
                count = mismatched,
                lines = %join_numbers(&self.mismatched_lines),
                "mismatched line numbers"
            );
        }

        if let Some(limit) = limit {
            if self.total_lines > 0 && mismatched as f64 / self.total_lines as f64 > limit {
                return Err(AnalyzeError::MismatchLimitExceeded {
                    mismatched,
                    total: self.total_lines,
                    limit,
                });
            }
        }

        Ok(AggregatedLog {
            total_lines: self.total_lines,
            mismatched,
            total_time: self.total_time,
            urls: self.urls,
        })
    }
}

/// The finished pass, ready for [`crate::analyze::finalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedLog {
    pub total_lines: u64,
    pub mismatched: u64,
    /// Sum of latencies over all matched lines.
    pub total_time: f64,
    pub urls: Vec<UrlAccumulator>,
}

impl AggregatedLog {
    pub fn matched(&self) -> u64 {
        self.total_lines - self.mismatched
    }
}

fn join_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
