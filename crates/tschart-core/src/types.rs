// File: crates/tschart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, line style, chart config).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: u32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;
/// Number of ticks requested from each scale.
pub const TICK_COUNT: usize = 10;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Create new margins in CSS order (top, right, bottom, left).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right). Widened so any pair of margins fits.
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 20, 30, 40)
    }
}

/// Stroke used for the data line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { stroke: "green".to_string(), stroke_width: 1.5 }
    }
}

/// Everything `render` needs besides the data itself.
///
/// Domain bounds only take effect when both ends of an axis are present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    /// Selector of the placeholder element the chart replaces.
    pub target: String,
    pub x_min: Option<DateTime<Utc>>,
    pub x_max: Option<DateTime<Utc>>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub line: LineStyle,
}

impl ChartConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into(), ..Self::default() }
    }

    pub fn with_x_domain(mut self, min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        self.x_min = Some(min);
        self.x_max = Some(max);
        self
    }

    pub fn with_y_domain(mut self, min: f64, max: f64) -> Self {
        self.y_min = Some(min);
        self.y_max = Some(max);
        self
    }

    /// Left edge of the plot area.
    pub fn plot_left(&self) -> f64 { self.margins.left as f64 }
    /// Right edge of the plot area.
    pub fn plot_right(&self) -> f64 { self.width as f64 - self.margins.right as f64 }
    /// Top edge of the plot area.
    pub fn plot_top(&self) -> f64 { self.margins.top as f64 }
    /// Bottom edge of the plot area.
    pub fn plot_bottom(&self) -> f64 { self.height as f64 - self.margins.bottom as f64 }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            target: String::new(),
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
            line: LineStyle::default(),
        }
    }
}
