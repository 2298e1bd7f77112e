// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (points, sizes, fonts, colors, selection name).

use serde::{Deserialize, Serialize};

/// Default font size for axis labels, legend and tooltip text.
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Name of the hover selection shared by the hit-test, tooltip and guide layers.
pub const NEAREST_POINT: &str = "nearestPoint";

/// Tooltip text color. Fixed so it stays readable regardless of series color.
pub const TOOLTIP_COLOR: &str = "black";
/// Vertical guide rule color.
pub const GUIDE_COLOR: &str = "gray";
/// d3-format string for the tooltip value.
pub const TOOLTIP_FORMAT: &str = ".6f";
/// Tooltip offset from the selected point, in pixels (right, up).
pub const TOOLTIP_DX: f64 = 5.0;
pub const TOOLTIP_DY: f64 = -5.0;

/// A single data coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Pixel size of a container or chart.
/// Contract: a detached container reports zero on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
