use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square rect centered on `(cx, cy)` with the given half extent.
    #[must_use]
    pub fn centered_square(cx: f64, cy: f64, half_extent: f64) -> Self {
        Self {
            x: cx - half_extent,
            y: cy - half_extent,
            width: half_extent * 2.0,
            height: half_extent * 2.0,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Containment is closed on all edges so a tap exactly on a region
    /// border still selects the row.
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// One chart row: a labeled numeric value with presentation hints.
///
/// Rows are submitted as an ordered sequence; the index within that sequence
/// determines vertical position and hit-test index. Keys do not have to be
/// unique.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub key: String,
    pub value: f64,
    pub value_label: String,
    pub marker_color: Color,
    pub status: String,
}

impl DataPoint {
    /// Default inner dot color when the host supplies none.
    pub const DEFAULT_MARKER_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);

    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            value_label: value.to_string(),
            marker_color: Self::DEFAULT_MARKER_COLOR,
            status: String::new(),
        }
    }

    #[must_use]
    pub fn with_value_label(mut self, value_label: impl Into<String>) -> Self {
        self.value_label = value_label.into();
        self
    }

    #[must_use]
    pub fn with_marker_color(mut self, marker_color: Color) -> Self {
        self.marker_color = marker_color;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}
