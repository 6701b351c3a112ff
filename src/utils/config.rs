//! Configuration and constants for the CLI.

/// Marker expected in the first cell of a windowed trace
pub const WINDOW_HEADER: &str = "window";

/// Cycles per sample assumed for traces without a window row
pub const DEFAULT_WINDOW: u64 = 1;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Breakdown CSV columns
pub const BREAKDOWN_MODULE_HEADER: &str = "Module";
pub const BREAKDOWN_POWER_HEADER: &str = "Predicted Power";

/// Category label under the stacked bar
pub const BREAKDOWN_CATEGORY: &str = "Predict";

/// Pixel size of a time-series plot (wide strip)
pub const TRACE_FIGURE_SIZE: (u32, u32) = (2400, 450);

/// Pixel size of a breakdown bar plot
pub const BAR_FIGURE_SIZE: (u32, u32) = (800, 600);

/// Base font size for axis labels
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Max points per polyline before a series is split
pub const DEFAULT_PATH_CHUNK_SIZE: usize = 10_000;

/// Padding applied to the y-axis of time-series plots
pub const Y_PADDING_LOW: f64 = 0.95;
pub const Y_PADDING_HIGH: f64 = 1.05;
