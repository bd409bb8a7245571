//! Pure chart geometry.
//!
//! Every function here is a deterministic mapping from configuration and
//! viewport dimensions to pixel positions. Nothing in this module mutates
//! state or draws; the frame builder consumes these results.

use serde::{Deserialize, Serialize};

use crate::core::types::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Smallest plot extent the paint path will ever work with.
///
/// Oversized offsets can collapse the plot area to zero or below; the clamped
/// variants substitute this minimum so per-unit scales never divide by zero.
pub const MIN_PLOT_EXTENT_PX: f64 = 1.0;

/// How [`PlotOffsets`] values are interpreted against the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OffsetMode {
    /// Offsets are absolute pixel amounts.
    #[default]
    Absolute,
    /// Offsets are fractions of the viewport dimension they pad
    /// (start/end against width, top/bottom against height).
    ViewportFraction,
}

/// Padding between the viewport edges and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotOffsets {
    pub start: f64,
    pub end: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotOffsets {
    fn default() -> Self {
        Self {
            start: 150.0,
            end: 100.0,
            top: 150.0,
            bottom: 100.0,
        }
    }
}

/// Vertical distribution convention for chart rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RowConvention {
    /// Row `i` sits at `plot_height * (i + 1) / row_count`: the first row
    /// hangs below the top edge and the last row is flush with the bottom.
    #[default]
    TrailingEdge,
    /// Row `i` sits at `plot_height * i / row_count`: the first row is flush
    /// with the top edge and the last row stops short of the bottom.
    LeadingEdge,
}

fn resolve_offsets(viewport: Viewport, offsets: PlotOffsets, mode: OffsetMode) -> PlotOffsets {
    match mode {
        OffsetMode::Absolute => offsets,
        OffsetMode::ViewportFraction => PlotOffsets {
            start: offsets.start * f64::from(viewport.width),
            end: offsets.end * f64::from(viewport.width),
            top: offsets.top * f64::from(viewport.height),
            bottom: offsets.bottom * f64::from(viewport.height),
        },
    }
}

/// Computes the usable drawing rectangle inside the viewport.
///
/// Fails with [`ChartError::Configuration`] when the configured offsets
/// collapse either plot dimension below [`MIN_PLOT_EXTENT_PX`]. Callers on
/// the paint path should surface the error and fall back to
/// [`plot_area_clamped`].
pub fn plot_area(viewport: Viewport, offsets: PlotOffsets, mode: OffsetMode) -> ChartResult<Rect> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let resolved = resolve_offsets(viewport, offsets, mode);
    let width = f64::from(viewport.width) - resolved.start - resolved.end;
    let height = f64::from(viewport.height) - resolved.top - resolved.bottom;

    if width < MIN_PLOT_EXTENT_PX || height < MIN_PLOT_EXTENT_PX {
        return Err(ChartError::Configuration(format!(
            "plot area collapsed to {width:.1}x{height:.1} px after offsets"
        )));
    }

    Ok(Rect::new(resolved.start, resolved.top, width, height))
}

/// Infallible variant of [`plot_area`]: both dimensions are clamped to at
/// least [`MIN_PLOT_EXTENT_PX`] so degenerate configuration still yields a
/// paintable rectangle.
#[must_use]
pub fn plot_area_clamped(viewport: Viewport, offsets: PlotOffsets, mode: OffsetMode) -> Rect {
    let resolved = resolve_offsets(viewport, offsets, mode);
    let width =
        (f64::from(viewport.width) - resolved.start - resolved.end).max(MIN_PLOT_EXTENT_PX);
    let height =
        (f64::from(viewport.height) - resolved.top - resolved.bottom).max(MIN_PLOT_EXTENT_PX);
    Rect::new(resolved.start, resolved.top, width, height)
}

/// Vertical position of one row, relative to the plot top.
pub fn y_position_for_row(
    row: usize,
    row_count: usize,
    plot_height: f64,
    convention: RowConvention,
) -> ChartResult<f64> {
    if row_count == 0 {
        return Err(ChartError::Configuration(
            "row count must be > 0 to place rows".to_owned(),
        ));
    }
    if row >= row_count {
        return Err(ChartError::InvalidData(format!(
            "row index {row} out of range for {row_count} rows"
        )));
    }

    let numerator = match convention {
        RowConvention::TrailingEdge => row + 1,
        RowConvention::LeadingEdge => row,
    };
    Ok(plot_height * numerator as f64 / row_count as f64)
}

/// Horizontal pixel position of a data value at the given reveal progress.
///
/// The scale is linear in data units: one x-division spans
/// `plot_width / divisions` pixels. Values beyond the division count extend
/// past the nominal plot width on purpose; the caller picked the division
/// count and out-of-range values are not clamped.
pub fn x_position_for_value(
    value: f64,
    plot_left: f64,
    plot_width: f64,
    divisions: u32,
    progress: f64,
) -> ChartResult<f64> {
    if divisions == 0 {
        return Err(ChartError::Configuration(
            "number of x divisions must be > 0".to_owned(),
        ));
    }
    Ok(plot_left + (plot_width / f64::from(divisions)) * value * progress)
}

/// Pixel positions of the vertical guide marks, one per division boundary
/// `1..=divisions`.
pub fn gridline_x_positions(
    plot_left: f64,
    plot_width: f64,
    divisions: u32,
) -> ChartResult<Vec<f64>> {
    if divisions == 0 {
        return Err(ChartError::Configuration(
            "number of x divisions must be > 0".to_owned(),
        ));
    }

    let per_division = plot_width / f64::from(divisions);
    Ok((1..=divisions)
        .map(|division| plot_left + per_division * f64::from(division))
        .collect())
}
