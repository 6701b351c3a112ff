//! Output writers and path helpers.
//!
//! This module handles writing data to disk:
//! - Breakdown CSV files
//! - Parent-directory creation for every artifact

pub mod csv;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use self::csv::{read_power_bars, storage_order, store_power_bars, StoredBreakdownRow};

/// Create the parent directory of `path` if it does not exist
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Validate that output path is writable, creating its parent
///
/// **Private** - shared by the writers in this module
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    ensure_parent_dir(path).map_err(|e| {
        OutputError::InvalidPath(format!("Cannot create directory for {}: {}", path.display(), e))
    })
}
