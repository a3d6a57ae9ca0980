//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| BudgetError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON from a file, falling back to the default on any failure
///
/// A missing file is the normal first-run case. A file that exists but
/// cannot be read or parsed is moved aside with [`quarantine`] before the
/// default is returned, so the next write cannot replace it.
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match read_json(path) {
        Ok(data) => data,
        Err(e) => {
            match quarantine(path) {
                Ok(moved_to) => tracing::warn!(
                    path = %path.display(),
                    moved_to = %moved_to.display(),
                    error = %e,
                    "stored data is unreadable, moved aside and starting empty"
                ),
                Err(move_err) => tracing::error!(
                    path = %path.display(),
                    error = %e,
                    move_error = %move_err,
                    "stored data is unreadable and could not be moved aside"
                ),
            }
            T::default()
        }
    }
}

/// Rename an unreadable file to `<name>.corrupt-<timestamp>` next to it
pub fn quarantine(path: &Path) -> Result<PathBuf, BudgetError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| BudgetError::Storage(format!("Not a file: {}", path.display())))?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S-%3f");
    let target = path.with_file_name(format!("{}.corrupt-{}", file_name, stamp));

    fs::rename(path, &target).map_err(|e| {
        BudgetError::Storage(format!(
            "Failed to move {} aside: {}",
            path.display(),
            e
        ))
    })?;

    Ok(target)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| BudgetError::Json(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
