// crates/infra/src/persistence/file_reader.rs
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Convenience helpers for reading text with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the file at `path` as UTF-8, `None` when it does not exist.
    pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Drain `reader` into a string; invalid UTF-8 is replaced rather than rejected.
    pub fn read_lossy<R: Read>(mut reader: R) -> io::Result<String> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(match String::from_utf8(buf) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}
