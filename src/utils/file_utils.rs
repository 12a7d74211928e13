use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::trace;

/// Check that a path points at an existing regular file (symlinks are followed)
pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    trace!("Reading file: {}", path.display());

    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}
