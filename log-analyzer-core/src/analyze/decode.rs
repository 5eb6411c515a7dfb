use crate::analyze::error::AnalyzeError;
use crate::analyze::types::{CompressionKind, LogFileDescriptor};
use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

/// Opens the log file and returns its decoded lines.
///
/// The decompression transform is chosen from `descriptor.compression` only;
/// the content is never sniffed. Every call opens a fresh handle, which is
/// closed when the returned iterator is dropped, whether it was exhausted or
/// not.
pub fn open_lines(descriptor: &LogFileDescriptor) -> Result<LogLines, AnalyzeError> {
    let file =
        File::open(&descriptor.path).map_err(|e| AnalyzeError::open(&descriptor.path, e))?;

    let reader: Box<dyn Read> = match descriptor.compression {
        CompressionKind::None => Box::new(file),
        CompressionKind::Gzip => Box::new(MultiGzDecoder::new(BufReader::new(file))),
        CompressionKind::Bzip2 => Box::new(MultiBzDecoder::new(BufReader::new(file))),
    };

    Ok(LogLines {
        path: descriptor.path.clone(),
        reader: BufReader::new(reader),
        line: 0,
        done: false,
    })
}

/// Lazy sequence of UTF-8 lines with the line terminator removed.
///
/// Yields `Err` at most once: a read or decoding failure ends the sequence.
pub struct LogLines {
    path: PathBuf,
    reader: BufReader<Box<dyn Read>>,
    line: u64,
    done: bool,
}

impl LogLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

impl Iterator for LogLines {
    type Item = Result<String, AnalyzeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_line() {
            Ok(Some(line)) => {
                self.line += 1;
                Some(Ok(line))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(AnalyzeError::Decode {
                    path: self.path.clone(),
                    line: self.line + 1,
                    source,
                }))
            }
        }
    }
}
