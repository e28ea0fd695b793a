//! Payload sources: where import text comes from.
//!
//! A source either yields the complete text or fails; nothing is applied
//! until the whole payload has been read and validated.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use arena_core::payload::ImportError;

/// Something that can produce raw import payload text.
pub trait PayloadSource {
    /// Human-readable name for logs.
    fn describe(&self) -> String;

    fn read_payload(&mut self) -> Result<String, ImportError>;
}

/// Payload stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PayloadSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_payload(&mut self) -> Result<String, ImportError> {
        fs::read_to_string(&self.path).map_err(|e| {
            ImportError::SourceUnavailable(format!("failed to read {}: {e}", self.path.display()))
        })
    }
}

/// Payload read to the end of any reader, e.g. stdin.
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: Read> PayloadSource for ReaderSource<R> {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read_payload(&mut self) -> Result<String, ImportError> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .map_err(|e| ImportError::SourceUnavailable(format!("failed to read {}: {e}", self.name)))?;
        Ok(text)
    }
}

/// In-memory payload text, as handed over by a clipboard or a test.
#[derive(Debug, Clone)]
pub struct TextSource(pub String);

impl PayloadSource for TextSource {
    fn describe(&self) -> String {
        "inline text".to_string()
    }

    fn read_payload(&mut self) -> Result<String, ImportError> {
        Ok(self.0.clone())
    }
}
