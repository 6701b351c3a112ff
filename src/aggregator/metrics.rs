//! Mean power per module and stacking offsets for the breakdown chart.

use crate::parser::schema::{ModuleRole, ModuleSeries};
use crate::utils::error::PlotError;

/// Mean power of one module
///
/// **Public** - one entry per module in the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub module: String,
    pub role: ModuleRole,
    pub mean_power: f64,
}

impl BreakdownRow {
    pub fn is_aggregate(&self) -> bool {
        self.role == ModuleRole::Aggregate
    }
}

/// Arithmetic mean of a series, `None` when empty
pub fn mean_power(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Bottom offset of each stacked segment (sum of all previous means)
pub fn stack_offsets(means: &[f64]) -> Vec<f64> {
    means
        .iter()
        .scan(0.0, |acc, mean| {
            let bottom = *acc;
            *acc += mean;
            Some(bottom)
        })
        .collect()
}

/// Compute the mean power of every module
///
/// **Public** - feeds both the bar plot and the breakdown CSV
///
/// # Errors
/// * `PlotError::EmptySeries` - A module has no samples (e.g. after skipping)
pub fn power_breakdown(modules: &[ModuleSeries]) -> Result<Vec<BreakdownRow>, PlotError> {
    modules
        .iter()
        .map(|m| {
            let mean_power =
                mean_power(&m.samples).ok_or_else(|| PlotError::EmptySeries(m.name.clone()))?;
            Ok(BreakdownRow {
                module: m.name.clone(),
                role: m.role,
                mean_power,
            })
        })
        .collect()
}

/// Rows drawn in the breakdown chart: every row except the aggregate
pub fn component_rows(rows: &[BreakdownRow]) -> Vec<BreakdownRow> {
    rows.iter().filter(|r| !r.is_aggregate()).cloned().collect()
}

/// Breakdown statistics for logging
#[derive(Debug, Clone, Default)]
pub struct BreakdownSummary {
    /// Number of component modules
    pub component_count: usize,

    /// Mean of the producer's aggregate column, if present
    pub aggregate_mean: Option<f64>,

    /// Sum of component means
    pub component_total: f64,
}

impl BreakdownSummary {
    pub fn from_rows(rows: &[BreakdownRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            match row.role {
                ModuleRole::Aggregate => summary.aggregate_mean = Some(row.mean_power),
                ModuleRole::Component => {
                    summary.component_count += 1;
                    summary.component_total += row.mean_power;
                }
            }
        }
        summary
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        match self.aggregate_mean {
            Some(aggregate) => format!(
                "Modules: {} | Sum of means: {:.2} mW | Reported total: {:.2} mW",
                self.component_count, self.component_total, aggregate
            ),
            None => format!(
                "Modules: {} | Sum of means: {:.2} mW",
                self.component_count, self.component_total
            ),
        }
    }
}
