use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use log_analyzer_core::AnalyzerConfig;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE: &str = "<html><script>var table = $table_json;</script></html>";

#[derive(Debug, Clone, Copy)]
pub enum Compression {
    Plain,
    Gzip,
    Bzip2,
}

/// Temporary logs/reports layout with a config pointing at it.
pub struct TestWorkspace {
    dir: TempDir,
    pub config: AnalyzerConfig,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        let mut config = AnalyzerConfig::default();
        config.logs.dir = root.join("logs");
        config.report.dir = root.join("reports");
        config.report.template_file_path = root.join("templates").join("report.html");

        fs::create_dir_all(&config.logs.dir).unwrap();
        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(&config.report.template_file_path, TEMPLATE).unwrap();

        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `lines` as the log dated `date` (`%Y%m%d`).
    pub fn write_log(&self, date: &str, lines: &[String], compression: Compression) -> PathBuf {
        let mut text = lines.join("\n");
        text.push('\n');

        let (ext, bytes) = match compression {
            Compression::Plain => ("", text.into_bytes()),
            Compression::Gzip => {
                let mut enc = GzEncoder::new(Vec::new(), flate2::Compression::default());
                enc.write_all(text.as_bytes()).unwrap();
                (".gz", enc.finish().unwrap())
            }
            Compression::Bzip2 => {
                let mut enc = BzEncoder::new(Vec::new(), bzip2::Compression::default());
                enc.write_all(text.as_bytes()).unwrap();
                (".bz2", enc.finish().unwrap())
            }
        };

        let path = self.config.logs.dir.join(format!(
            "{}{}{}",
            self.config.logs.file_name_prefix, date, ext
        ));
        fs::write(&path, bytes).unwrap();
        path
    }

    pub fn report_path(&self, date: &str) -> PathBuf {
        self.config
            .report
            .dir
            .join(format!("{}{}.html", self.config.report.file_name_prefix, date))
    }

    /// Parses the JSON table embedded in a rendered report.
    pub fn report_table(&self, path: &Path) -> Vec<Value> {
        let html = fs::read_to_string(path).unwrap();
        let json = html
            .strip_prefix("<html><script>var table = ")
            .and_then(|s| s.strip_suffix(";</script></html>"))
            .unwrap_or_else(|| panic!("unexpected report layout: {html}"));
        serde_json::from_str(json).unwrap()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// One access log line in the default nginx "ui" format.
pub fn nginx_line(url: &str, request_time: &str) -> String {
    format!(
        "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {url} HTTP/1.1\" 200 927 \"-\" \
         \"Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5\" \"-\" \
         \"1498697422-2190034393-4708-9752759\" \"dc7161be3\" {request_time}"
    )
}
