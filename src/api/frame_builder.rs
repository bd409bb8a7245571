use tracing::warn;

use crate::core::layout::{
    gridline_x_positions, plot_area, plot_area_clamped, x_position_for_value, y_position_for_row,
};
use crate::core::Rect;
use crate::error::ChartResult;
use crate::interaction::HitRegion;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextOrientation, TextPrimitive,
};

use super::ChartWidget;

/// Distance from the viewport top to the x-axis title.
const TITLE_TOP_MARGIN_PX: f64 = 10.0;

/// Distance from the viewport left edge to the vertical y-axis title.
const Y_TITLE_LEFT_MARGIN_PX: f64 = 50.0;

/// One materialized draw pass: the backend-agnostic scene plus the hit
/// regions and any layout diagnostic produced while building it.
///
/// Hit regions ride alongside the frame instead of being written into the
/// live registry so a failed build can never half-update hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltFrame {
    pub frame: RenderFrame,
    pub hit_regions: Vec<HitRegion>,
    pub layout_diagnostic: Option<String>,
}

/// Pango-style text anchors are the top of the layout box; centering a label
/// on a row line means lifting the anchor by half the font size.
fn text_top_for_centering(center_y: f64, font_size_px: f64) -> f64 {
    center_y - font_size_px / 2.0
}

impl<R: Renderer> ChartWidget<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// Paint order: background, y-axis labels, y-axis line, division ticks,
    /// x-axis labels, x-axis baseline, axis titles, then one marker group
    /// (connector, inner dot, outer ring, value label) per row. Each marker
    /// also yields one hit region.
    ///
    /// Degenerate configuration (collapsed plot area, zero divisions) does
    /// not abort the pass: the builder logs the error, keeps it as the
    /// frame's diagnostic, and paints with clamped geometry instead, since a
    /// chart that fails to render is worse than a degenerate-but-visible one.
    pub fn build_render_frame(&self) -> ChartResult<BuiltFrame> {
        let style = self.style();
        let axis = self.axis_metadata();
        let dataset = self.dataset();
        let progress = self.reveal_progress();

        let mut layout_diagnostic: Option<String> = None;

        let plot = match plot_area(self.viewport(), style.offsets, style.offset_mode) {
            Ok(rect) => rect,
            Err(err) => {
                warn!(error = %err, "plot area collapsed; painting with clamped geometry");
                layout_diagnostic.get_or_insert_with(|| err.to_string());
                plot_area_clamped(self.viewport(), style.offsets, style.offset_mode)
            }
        };

        let divisions = if axis.number_of_x_divisions == 0 {
            warn!("x division count is zero; painting with a single division");
            layout_diagnostic
                .get_or_insert_with(|| "number of x divisions must be > 0".to_owned());
            1
        } else {
            axis.number_of_x_divisions
        };
        let per_division = plot.width / f64::from(divisions);

        let mut frame = RenderFrame::new(self.viewport());
        let mut hit_regions = Vec::with_capacity(dataset.len());

        if let Some(background) = style.background_color {
            frame = frame.with_rect(RectPrimitive::filled(
                0.0,
                0.0,
                f64::from(self.viewport().width),
                f64::from(self.viewport().height),
                background,
            ));
        }

        // Y-axis category labels, right-aligned into the gutter.
        let row_count = dataset.len();
        for (row, point) in dataset.iter().enumerate() {
            if point.key.is_empty() {
                continue;
            }
            let row_y =
                plot.y + y_position_for_row(row, row_count, plot.height, style.row_convention)?;
            frame = frame.with_text(TextPrimitive::new(
                point.key.clone(),
                plot.x - style.y_label_inset_px,
                text_top_for_centering(row_y, style.y_label_font_size_px),
                style.y_label_font_size_px,
                style.y_label_color,
                TextHAlign::Right,
            ));
        }

        // Y-axis line, extended past the plot on both ends.
        frame = frame.with_line(LinePrimitive::new(
            plot.x,
            plot.y - style.y_axis_overhang_px,
            plot.x,
            plot.bottom() + style.y_axis_overhang_px,
            style.axis_stroke_width,
            style.axis_line_color,
        ));

        // Short vertical guide marks at each division boundary.
        for tick_x in gridline_x_positions(plot.x, plot.width, divisions)? {
            frame = frame.with_line(LinePrimitive::new(
                tick_x,
                plot.y - style.division_tick_length_px,
                tick_x,
                plot.y,
                style.division_tick_stroke_width,
                style.division_tick_color,
            ));
        }

        // X-axis category labels above the baseline.
        for (index, label) in axis.x_category_labels.iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            let mut label_x = plot.x + per_division * index as f64;
            if axis.skip_first_x_label {
                label_x += per_division;
            }
            frame = frame.with_text(TextPrimitive::new(
                label.clone(),
                label_x,
                plot.y - style.y_axis_overhang_px - style.x_label_font_size_px,
                style.x_label_font_size_px,
                style.x_label_color,
                TextHAlign::Center,
            ));
        }

        // X-axis baseline. Rows hang below it, so it sits at the plot top.
        frame = frame.with_line(LinePrimitive::new(
            plot.x - style.x_axis_overhang_px,
            plot.y,
            plot.right() + style.x_axis_overhang_px,
            plot.y,
            style.axis_stroke_width,
            style.axis_line_color,
        ));

        if let Some(title) = axis.x_axis_title.as_deref()
            && !title.is_empty()
        {
            frame = frame.with_text(TextPrimitive::new(
                title,
                plot.x + plot.width / 2.0,
                TITLE_TOP_MARGIN_PX,
                style.x_label_font_size_px,
                style.x_label_color,
                TextHAlign::Center,
            ));
        }

        if let Some(title) = axis.y_axis_title.as_deref()
            && !title.is_empty()
        {
            frame = frame.with_text(
                TextPrimitive::new(
                    title,
                    Y_TITLE_LEFT_MARGIN_PX,
                    plot.y + plot.height / 2.0,
                    style.x_label_font_size_px,
                    style.x_label_color,
                    TextHAlign::Center,
                )
                .with_orientation(TextOrientation::Vertical),
            );
        }

        // Per-row markers.
        let connector_start = plot.x + style.axis_stroke_width / 2.0;
        for (row, point) in dataset.iter().enumerate() {
            let row_y =
                plot.y + y_position_for_row(row, row_count, plot.height, style.row_convention)?;
            let marker_x =
                x_position_for_value(point.value, plot.x, plot.width, divisions, progress)?;

            let connector_end = connector_start.max(marker_x - style.outer_ring_radius_px);
            if connector_end > connector_start {
                frame = frame.with_line(LinePrimitive::new(
                    connector_start,
                    row_y,
                    connector_end,
                    row_y,
                    style.connector_stroke_width,
                    style.connector_color,
                ));
            }

            frame = frame.with_circle(CirclePrimitive::filled(
                marker_x,
                row_y,
                style.inner_dot_radius_px,
                self.marker_color_for(point),
            ));
            frame = frame.with_circle(CirclePrimitive::stroked(
                marker_x,
                row_y,
                style.outer_ring_radius_px,
                style.outer_ring_color,
                style.outer_ring_stroke_width,
            ));

            hit_regions.push(HitRegion::new(
                row,
                Rect::centered_square(marker_x, row_y, style.outer_ring_radius_px),
            ));

            if point.value_label.is_empty() {
                continue;
            }
            if point.value > style.value_label_inside_threshold {
                // Enough connector length to center the label between the
                // axis and the marker.
                let half_offset_x = plot.x + (per_division * point.value * progress) / 2.0;
                frame = frame.with_text(TextPrimitive::new(
                    point.value_label.clone(),
                    half_offset_x,
                    text_top_for_centering(row_y, style.value_label_font_size_px),
                    style.value_label_font_size_px,
                    style.value_label_color,
                    TextHAlign::Center,
                ));
            } else {
                // The marker is too close to the axis for an inside label;
                // place it just right of the ring instead.
                let label_x = marker_x
                    + style.marker_dot_occupied_px
                    + style.value_label_gap_px
                    + style.value_label_pad_px;
                frame = frame.with_text(TextPrimitive::new(
                    point.value_label.clone(),
                    label_x,
                    row_y - style.value_label_font_size_px,
                    style.value_label_font_size_px,
                    style.value_label_color,
                    TextHAlign::Left,
                ));
            }
        }

        Ok(BuiltFrame {
            frame,
            hit_regions,
            layout_diagnostic,
        })
    }
}
