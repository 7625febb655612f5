//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

use crate::error::ExpenseError;

/// Outcome of reading a JSON file that may legitimately be missing
#[derive(Debug)]
pub enum JsonFile<T> {
    /// The file does not exist
    Missing,
    /// The file exists but holds nothing but whitespace
    Empty,
    /// The file parsed successfully
    Loaded(T),
}

/// Read and parse a JSON file, reporting absence explicitly
///
/// Malformed content is an `ExpenseError::Corrupt`, never a silent default.
pub fn load_json<T, P>(path: P) -> Result<JsonFile<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not found");
            return Ok(JsonFile::Missing);
        }
        Err(e) => {
            return Err(ExpenseError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if contents.trim().is_empty() {
        debug!(path = %path.display(), "file is empty");
        return Ok(JsonFile::Empty);
    }

    serde_json::from_str(&contents)
        .map(JsonFile::Loaded)
        .map_err(|e| ExpenseError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");
    trace!(temp = %temp_path.display(), "writing temp file");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
