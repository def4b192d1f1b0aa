// src/file.rs

use std::{fs, io, path::Path};

use crate::import::ImportError;

/// Read the selected export into a string. I/O, permission and
/// decoding problems all surface as `ImportError::Read`; callers show
/// one status line and keep their current roster.
pub fn read_document(path: &Path) -> Result<String, ImportError> {
    let bytes = fs::read(path).map_err(ImportError::Read)?;
    String::from_utf8(bytes)
        .map_err(|e| ImportError::Read(io::Error::new(io::ErrorKind::InvalidData, e)))
}
