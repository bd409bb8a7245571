use crate::core::{OffsetMode, PlotOffsets, RowConvention};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the current render frame.
///
/// One flat snapshot of every visual parameter, passed by value into layout
/// and frame building. Hosts replace or merge the snapshot through the
/// widget; nothing mutates a style mid-frame. Defaults match the reference
/// look of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Optional whole-viewport background fill. `None` leaves the backend's
    /// clear color in place.
    pub background_color: Option<Color>,
    pub offsets: PlotOffsets,
    pub offset_mode: OffsetMode,
    pub row_convention: RowConvention,

    pub axis_line_color: Color,
    pub axis_stroke_width: f64,
    /// How far the y-axis line extends past the plot area, both ends.
    pub y_axis_overhang_px: f64,
    /// How far the x-axis baseline extends past the plot area, both ends.
    pub x_axis_overhang_px: f64,

    pub division_tick_color: Color,
    pub division_tick_stroke_width: f64,
    pub division_tick_length_px: f64,

    pub y_label_color: Color,
    pub y_label_font_size_px: f64,
    /// Distance from the plot's left edge to the right-aligned anchor of the
    /// y-axis category labels.
    pub y_label_inset_px: f64,
    pub x_label_color: Color,
    pub x_label_font_size_px: f64,

    pub connector_color: Color,
    pub connector_stroke_width: f64,
    pub inner_dot_radius_px: f64,
    /// Horizontal room the inner dot's paint occupies; spaces the outside
    /// value label off the marker.
    pub marker_dot_occupied_px: f64,
    pub outer_ring_radius_px: f64,
    pub outer_ring_color: Color,
    pub outer_ring_stroke_width: f64,

    pub value_label_color: Color,
    pub value_label_font_size_px: f64,
    pub value_label_gap_px: f64,
    pub value_label_pad_px: f64,
    /// Values strictly above this threshold get their label centered between
    /// the axis and the marker; smaller values sit too close to the axis for
    /// that, so the label goes right of the marker instead.
    pub value_label_inside_threshold: f64,

    pub intrinsic_width_px: f64,
    pub intrinsic_height_px: f64,
    /// Measured height never drops below `row_count * min_row_height_px`,
    /// so dense datasets stay readable instead of compressing.
    pub min_row_height_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            offsets: PlotOffsets::default(),
            offset_mode: OffsetMode::Absolute,
            row_convention: RowConvention::TrailingEdge,

            axis_line_color: Color::rgb(0.0, 0.0, 1.0),
            axis_stroke_width: 15.0,
            y_axis_overhang_px: 50.0,
            x_axis_overhang_px: 50.0,

            division_tick_color: Color::rgb(1.0, 1.0, 1.0),
            division_tick_stroke_width: 5.0,
            division_tick_length_px: 30.0,

            y_label_color: Color::rgb(0.0, 0.0, 1.0),
            y_label_font_size_px: 25.0,
            y_label_inset_px: 60.0,
            x_label_color: Color::rgb(0.0, 0.0, 1.0),
            x_label_font_size_px: 25.0,

            connector_color: Color::rgb(0.0, 0.0, 0.0),
            connector_stroke_width: 3.0,
            inner_dot_radius_px: 10.0,
            marker_dot_occupied_px: 30.0,
            outer_ring_radius_px: 25.0,
            outer_ring_color: Color::rgb(1.0, 0.0, 1.0),
            outer_ring_stroke_width: 5.0,

            value_label_color: Color::rgb(0.0, 0.0, 0.0),
            value_label_font_size_px: 20.0,
            value_label_gap_px: 10.0,
            value_label_pad_px: 10.0,
            value_label_inside_threshold: 2.0,

            intrinsic_width_px: 1000.0,
            intrinsic_height_px: 500.0,
            min_row_height_px: 150.0,
        }
    }
}

/// Rejects styles the paint path cannot work with.
///
/// Numeric fields must be finite; strokes, radii, and font sizes must be
/// positive. Offsets may be arbitrarily large: an offset that collapses the
/// plot area is a layout-time diagnostic, not a style validation failure.
pub fn validate_chart_style(style: ChartStyle) -> ChartResult<()> {
    if let Some(background) = style.background_color {
        background.validate()?;
    }
    style.axis_line_color.validate()?;
    style.division_tick_color.validate()?;
    style.y_label_color.validate()?;
    style.x_label_color.validate()?;
    style.connector_color.validate()?;
    style.outer_ring_color.validate()?;
    style.value_label_color.validate()?;

    for (name, value) in [
        ("offsets.start", style.offsets.start),
        ("offsets.end", style.offsets.end),
        ("offsets.top", style.offsets.top),
        ("offsets.bottom", style.offsets.bottom),
        ("y_axis_overhang_px", style.y_axis_overhang_px),
        ("x_axis_overhang_px", style.x_axis_overhang_px),
        ("division_tick_length_px", style.division_tick_length_px),
        ("y_label_inset_px", style.y_label_inset_px),
        ("marker_dot_occupied_px", style.marker_dot_occupied_px),
        ("value_label_gap_px", style.value_label_gap_px),
        ("value_label_pad_px", style.value_label_pad_px),
        (
            "value_label_inside_threshold",
            style.value_label_inside_threshold,
        ),
    ] {
        if !value.is_finite() {
            return Err(ChartError::Configuration(format!(
                "style field `{name}` must be finite"
            )));
        }
    }

    for (name, value) in [
        ("axis_stroke_width", style.axis_stroke_width),
        (
            "division_tick_stroke_width",
            style.division_tick_stroke_width,
        ),
        ("y_label_font_size_px", style.y_label_font_size_px),
        ("x_label_font_size_px", style.x_label_font_size_px),
        ("connector_stroke_width", style.connector_stroke_width),
        ("inner_dot_radius_px", style.inner_dot_radius_px),
        ("outer_ring_radius_px", style.outer_ring_radius_px),
        ("outer_ring_stroke_width", style.outer_ring_stroke_width),
        ("value_label_font_size_px", style.value_label_font_size_px),
        ("intrinsic_width_px", style.intrinsic_width_px),
        ("intrinsic_height_px", style.intrinsic_height_px),
        ("min_row_height_px", style.min_row_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::Configuration(format!(
                "style field `{name}` must be finite and > 0"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ChartStyle, validate_chart_style};

    #[test]
    fn default_style_is_valid() {
        validate_chart_style(ChartStyle::default()).expect("default style");
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let style = ChartStyle {
            outer_ring_radius_px: 0.0,
            ..ChartStyle::default()
        };
        assert!(validate_chart_style(style).is_err());
    }

    #[test]
    fn oversized_offsets_pass_style_validation() {
        let mut style = ChartStyle::default();
        style.offsets.start = 1_000_000.0;
        validate_chart_style(style).expect("offsets are a layout concern");
    }
}
