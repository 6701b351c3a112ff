//! In-memory representation of a power trace.

/// Role of a module column within a trace
///
/// The upstream trace producer emits its own "total" column first whenever
/// it reports more than one module. That column is tagged `Aggregate` so the
/// summing, sorting, and bar-plotting code never has to rely on position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRole {
    /// Producer-computed total, not summed and not sorted
    Aggregate,
    /// An individual module contributing to the total
    Component,
}

impl ModuleRole {
    /// Role of column `index` in a trace with `module_count` columns
    pub fn for_column(index: usize, module_count: usize) -> Self {
        if index == 0 && module_count > 1 {
            ModuleRole::Aggregate
        } else {
            ModuleRole::Component
        }
    }
}

/// Power samples of a single module
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSeries {
    pub name: String,
    pub role: ModuleRole,
    pub samples: Vec<f64>,
}

impl ModuleSeries {
    pub fn new(name: impl Into<String>, role: ModuleRole, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            role,
            samples,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        self.role == ModuleRole::Aggregate
    }
}

/// A parsed power trace
///
/// **Public** - returned from `load_power_trace`
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Cycles represented by one sample (always > 0)
    pub window: u64,

    /// Module columns in file order
    pub modules: Vec<ModuleSeries>,
}

impl Trace {
    /// Build a trace from module names and column-major samples
    pub fn from_columns(window: u64, names: Vec<String>, columns: Vec<Vec<f64>>) -> Self {
        let count = names.len();
        let modules = names
            .into_iter()
            .zip(columns)
            .enumerate()
            .map(|(i, (name, samples))| {
                ModuleSeries::new(name, ModuleRole::for_column(i, count), samples)
            })
            .collect();

        Self { window, modules }
    }

    /// Number of samples per module
    pub fn sample_count(&self) -> usize {
        self.modules.first().map_or(0, |m| m.samples.len())
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }
}
