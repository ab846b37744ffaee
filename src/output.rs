//! Writing the generated test to disk.
//!
//! The destination is replaced with a rename, so it only ever holds a
//! complete file: the previous run's output or this one's.
use std::fs;
use std::path::Path;

use crate::error::GenError;

/// Writes content to a file atomically using temp file + rename.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GenError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GenError::Write {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GenError::Write { path: path.display().to_string(), source: e }
    })?;

    Ok(())
}
