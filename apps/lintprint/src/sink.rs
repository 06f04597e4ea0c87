//! Destinations that receive rendered report text.
//!
//! A printer issues exactly one `write_text` per report. Opening and closing
//! the underlying stream is the caller's business.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A place to write text.
///
/// `write_text` writes the whole text and then flushes, so buffered writers
/// report I/O errors from the same call.
pub trait Sink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

impl<W: Write + ?Sized> Sink for W {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())?;
        self.flush()
    }
}

/// File sink that creates (or truncates) its file on the first write.
///
/// A report that fails to render never touches an existing file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let file = match self.file.take() {
            Some(f) => f,
            None => {
                debug!(path = %self.path.display(), "creating report file");
                BufWriter::new(File::create(&self.path)?)
            }
        };
        self.file.insert(file).write_text(text)
    }
}

/// Sink returned by `Destination::open`.
#[derive(Debug)]
pub enum DestinationSink {
    Stdout(io::Stdout),
    File(FileSink),
}

impl Sink for DestinationSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        match self {
            DestinationSink::Stdout(out) => out.write_text(text),
            DestinationSink::File(file) => file.write_text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the rendered report goes: standard output or a file.
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` and the empty string select stdout; anything else is a path.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "-" => Destination::Stdout,
            p => Destination::File(PathBuf::from(p)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Destination::Stdout => None,
            Destination::File(p) => Some(p),
        }
    }

    /// Sink for this destination. Files are created on the first write.
    pub fn open(&self) -> DestinationSink {
        match self {
            Destination::Stdout => DestinationSink::Stdout(io::stdout()),
            Destination::File(p) => DestinationSink::File(FileSink::new(p)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_destination_parse() {
        assert_eq!(Destination::parse("-"), Destination::Stdout);
        assert_eq!(Destination::parse(""), Destination::Stdout);
        assert_eq!(
            Destination::parse("out/report.xml"),
            Destination::File(PathBuf::from("out/report.xml"))
        );
    }

    #[test]
    fn test_vec_is_a_sink() {
        let mut buf: Vec<u8> = Vec::new();
        buf.write_text("abc").unwrap();
        assert_eq!(buf, b"abc");
    }

    #[test]
    fn test_open_file_destination_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.txt");
        let mut sink = Destination::File(path.clone()).open();
        sink.write_text("hello\n").unwrap();
        // flushed before the sink is dropped
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        drop(sink);
    }

    #[test]
    fn test_file_untouched_until_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkstyle.xml");
        fs::write(&path, "<previous/>\n").unwrap();

        let sink = Destination::File(path.clone()).open();
        drop(sink);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<previous/>\n");

        let missing = dir.path().join("never.xml");
        let _sink = FileSink::new(&missing);
        assert!(!missing.exists());
    }

    #[test]
    fn test_missing_dir_fails_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = Destination::File(dir.path().join("nope").join("r.xml")).open();
        let err = sink.write_text("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
