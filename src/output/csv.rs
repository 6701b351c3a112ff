//! Breakdown CSV writer and reader.
//!
//! The file has a `Module,Predicted Power` header, the aggregate row first,
//! then the component modules sorted by name. Records end in `\r\n`:
//!
//! ```text
//! Module,Predicted Power
//! total,12.50
//! core,8.00
//! uncore,4.50
//! ```

use super::validate_output_path;
use crate::aggregator::metrics::BreakdownRow;
use crate::utils::config::{BREAKDOWN_MODULE_HEADER, BREAKDOWN_POWER_HEADER};
use crate::utils::error::OutputError;
use log::{debug, info};
use csv::{Terminator, WriterBuilder};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// A breakdown row as read back from disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredBreakdownRow {
    #[serde(rename = "Module")]
    pub module: String,

    #[serde(rename = "Predicted Power")]
    pub predicted_power: f64,
}

/// Order rows for storage: aggregate rows as given, then components by name
///
/// **Public** - also used by callers that print the breakdown
pub fn storage_order(rows: &[BreakdownRow]) -> Vec<&BreakdownRow> {
    let mut components: Vec<&BreakdownRow> = rows.iter().filter(|r| !r.is_aggregate()).collect();
    components.sort_by(|a, b| a.module.cmp(&b.module));

    rows.iter().filter(|r| r.is_aggregate()).chain(components).collect()
}

/// Write the breakdown CSV
///
/// **Public** - main entry point for breakdown output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty or a directory
/// * `OutputError::WriteFailed` / `OutputError::Csv` - I/O error during write
pub fn store_power_bars(path: impl AsRef<Path>, rows: &[BreakdownRow]) -> Result<(), OutputError> {
    let path = path.as_ref();
    validate_output_path(path)?;

    info!("Power Bars in CSV: {}", path.display());

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(file);

    writer.write_record([BREAKDOWN_MODULE_HEADER, BREAKDOWN_POWER_HEADER])?;
    for row in storage_order(rows) {
        let power = format!("{:.2}", row.mean_power);
        writer.write_record([row.module.as_str(), power.as_str()])?;
    }
    writer.flush()?;

    debug!("Wrote {} breakdown rows", rows.len());
    Ok(())
}

/// Read a breakdown CSV written by `store_power_bars`
pub fn read_power_bars(path: impl AsRef<Path>) -> Result<Vec<StoredBreakdownRow>, OutputError> {
    let path = path.as_ref();
    debug!("Reading breakdown from: {}", path.display());

    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<StoredBreakdownRow>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::ModuleRole;
    use pretty_assertions::assert_eq;

    fn row(module: &str, role: ModuleRole, mean_power: f64) -> BreakdownRow {
        BreakdownRow {
            module: module.to_string(),
            role,
            mean_power,
        }
    }

    #[test]
    fn test_storage_order_aggregate_first() {
        let rows = vec![
            row("total", ModuleRole::Aggregate, 3.0),
            row("zebra", ModuleRole::Component, 1.0),
            row("apple", ModuleRole::Component, 2.0),
        ];

        let names: Vec<&str> = storage_order(&rows).iter().map(|r| r.module.as_str()).collect();
        assert_eq!(names, vec!["total", "apple", "zebra"]);
    }

    #[test]
    fn test_store_formats_two_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("power-bars-bench.csv");
        let rows = vec![
            row("total", ModuleRole::Aggregate, 3.14159),
            row("core", ModuleRole::Component, 2.0),
        ];

        store_power_bars(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Module,Predicted Power\r\ntotal,3.14\r\ncore,2.00\r\n");
    }

    #[test]
    fn test_store_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = store_power_bars(dir.path(), &[]);
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
