//! Process-wide plot styling.
//!
//! The style is installed once by `main` before any chart is rendered and
//! lives for the rest of the process. Renderers that run without an
//! installed style (library callers, tests) get the defaults.

use crate::utils::config::{DEFAULT_FONT_SIZE, DEFAULT_PATH_CHUNK_SIZE};
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor};
use std::sync::OnceLock;

static PLOT_STYLE: OnceLock<PlotStyle> = OnceLock::new();

/// Line color of time-series plots
pub const TRACE_LINE_COLOR: RGBColor = RGBColor(0, 128, 0);

/// Segment colors of the breakdown bar, cycled by module index
pub const POWER_BAR_PALETTE: [RGBColor; 13] = [
    RGBColor(47, 79, 79),    // darkslategray
    RGBColor(60, 179, 113),  // mediumseagreen
    RGBColor(255, 69, 0),    // orangered
    RGBColor(0, 191, 191),   // cyan
    RGBColor(191, 0, 191),   // magenta
    RGBColor(191, 191, 0),   // yellow
    RGBColor(0, 0, 0),       // black
    RGBColor(255, 218, 185), // peachpuff
    RGBColor(0, 139, 139),   // darkcyan
    RGBColor(205, 133, 63),  // peru
    RGBColor(218, 112, 214), // orchid
    RGBColor(250, 128, 114), // salmon
    RGBColor(0, 255, 0),     // lime
];

/// Palette color for the module at `index`
pub fn palette_color(index: usize) -> RGBColor {
    POWER_BAR_PALETTE[index % POWER_BAR_PALETTE.len()]
}

/// Rendering settings shared by every chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotStyle {
    /// Font size for axis labels and legends
    pub font_size: u32,

    /// Max points per polyline; longer series are drawn in chunks
    pub path_chunk_size: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            path_chunk_size: DEFAULT_PATH_CHUNK_SIZE,
        }
    }
}

impl PlotStyle {
    pub fn font(&self) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.font_size as f64, FontStyle::Normal)
    }

    pub fn scaled_font(&self, factor: f64) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            self.font_size as f64 * factor,
            FontStyle::Normal,
        )
    }
}

/// Install the process-wide style
///
/// Returns false if a style was already installed; the first one wins.
pub fn init_plot_style(style: PlotStyle) -> bool {
    PLOT_STYLE.set(style).is_ok()
}

/// The installed style, or the defaults
pub fn plot_style() -> &'static PlotStyle {
    PLOT_STYLE.get_or_init(PlotStyle::default)
}

/// Split a polyline into chunks of at most `chunk_size` points
///
/// Consecutive chunks share their boundary point so the drawn line stays
/// continuous.
pub fn polyline_chunks<T>(points: &[T], chunk_size: usize) -> Vec<&[T]> {
    let chunk_size = chunk_size.max(2);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < points.len() {
        let end = (start + chunk_size).min(points.len());
        chunks.push(&points[start..end]);
        if end == points.len() {
            break;
        }
        start = end - 1;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), palette_color(13));
        assert_eq!(palette_color(12), RGBColor(0, 255, 0));
    }

    #[test]
    fn test_polyline_chunks_overlap() {
        let points = [0, 1, 2, 3, 4];
        let chunks = polyline_chunks(&points, 3);
        assert_eq!(chunks, vec![&[0, 1, 2][..], &[2, 3, 4][..]]);
    }

    #[test]
    fn test_polyline_chunks_short_series() {
        let points = [7];
        assert_eq!(polyline_chunks(&points, 10_000), vec![&[7][..]]);

        let empty: [i32; 0] = [];
        assert!(polyline_chunks(&empty, 10).is_empty());
    }

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.path_chunk_size, DEFAULT_PATH_CHUNK_SIZE);
    }
}
