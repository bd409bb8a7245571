use indexmap::IndexMap;
use tracing::debug;

use crate::animation::{RevealAnimation, RevealPhase, RevealTick};
use crate::core::{AxisMetadata, DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitRegion, HitTestRegistry};
use crate::render::{Color, Renderer};

use super::measure::{MeasureConstraint, MeasuredSize, resolve_measured_size};
use super::style::validate_chart_style;
use super::{ChartStyle, ChartWidgetConfig, RepaintLevel, RevealResetPolicy};

type SelectHandler = Box<dyn FnMut(usize, &DataPoint)>;
type RedrawHandler = Box<dyn FnMut()>;

/// Main orchestration facade consumed by host applications.
///
/// `ChartWidget` owns the dataset, style snapshot, axis metadata, reveal
/// animation, and hit-test registry, and coordinates renderer calls. All
/// access is single-threaded: the host event loop serializes dataset/style
/// updates, pointer events, animation ticks, and repaints, so a draw pass
/// always observes the most recently committed state.
pub struct ChartWidget<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    style: ChartStyle,
    axis: AxisMetadata,
    dataset: Vec<DataPoint>,
    status_palette: IndexMap<String, Color>,
    reveal: RevealAnimation,
    reveal_reset_policy: RevealResetPolicy,
    hit_regions: HitTestRegistry,
    select_handler: Option<SelectHandler>,
    redraw_handler: Option<RedrawHandler>,
    pending_repaint: RepaintLevel,
    last_layout_diagnostic: Option<String>,
}

impl<R: Renderer> ChartWidget<R> {
    pub fn new(renderer: R, config: ChartWidgetConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            style: ChartStyle::default(),
            axis: config.axis,
            dataset: Vec::new(),
            status_palette: IndexMap::new(),
            reveal: RevealAnimation::new(config.reveal),
            reveal_reset_policy: config.reveal_reset_policy,
            hit_regions: HitTestRegistry::new(),
            select_handler: None,
            redraw_handler: None,
            pending_repaint: RepaintLevel::Layout,
            last_layout_diagnostic: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    #[must_use]
    pub fn axis_metadata(&self) -> &AxisMetadata {
        &self.axis
    }

    #[must_use]
    pub fn dataset(&self) -> &[DataPoint] {
        &self.dataset
    }

    #[must_use]
    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    #[must_use]
    pub fn reveal_progress(&self) -> f64 {
        self.reveal.progress()
    }

    #[must_use]
    pub fn hit_regions(&self) -> &[HitRegion] {
        self.hit_regions.regions()
    }

    /// Diagnostic from the most recent committed draw pass, if its layout
    /// had to fall back to clamped geometry.
    #[must_use]
    pub fn last_layout_diagnostic(&self) -> Option<&str> {
        self.last_layout_diagnostic.as_deref()
    }

    #[must_use]
    pub fn pending_repaint(&self) -> RepaintLevel {
        self.pending_repaint
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the dataset wholesale.
    ///
    /// Restarts the reveal animation when the widget was configured with
    /// [`RevealResetPolicy::RestartOnDataChange`].
    pub fn set_dataset(&mut self, points: Vec<DataPoint>) {
        self.dataset = points;
        if self.reveal_reset_policy == RevealResetPolicy::RestartOnDataChange {
            self.reveal.restart();
        }
        self.invalidate(RepaintLevel::Layout);
    }

    /// Replaces the full style snapshot. Repaint only; committed geometry
    /// inputs other than style are untouched.
    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        validate_chart_style(style)?;
        self.style = style;
        self.invalidate(RepaintLevel::Paint);
        Ok(())
    }

    /// Merges a partial style update: the closure edits a copy of the
    /// current snapshot, which replaces it only if still valid.
    pub fn update_style(&mut self, apply: impl FnOnce(&mut ChartStyle)) -> ChartResult<()> {
        let mut style = self.style;
        apply(&mut style);
        self.set_style(style)
    }

    pub fn set_axis_metadata(&mut self, axis: AxisMetadata) {
        self.axis = axis;
        self.invalidate(RepaintLevel::Layout);
    }

    /// Maps a `DataPoint::status` value to an inner-dot color override.
    ///
    /// Points whose status is present in the palette ignore their own
    /// `marker_color`. Insertion order is kept for host-facing introspection.
    pub fn set_status_color(&mut self, status: impl Into<String>, color: Color) {
        self.status_palette.insert(status.into(), color);
        self.invalidate(RepaintLevel::Paint);
    }

    pub fn set_status_palette(&mut self, palette: IndexMap<String, Color>) {
        self.status_palette = palette;
        self.invalidate(RepaintLevel::Paint);
    }

    #[must_use]
    pub fn status_palette(&self) -> &IndexMap<String, Color> {
        &self.status_palette
    }

    pub(super) fn marker_color_for(&self, point: &DataPoint) -> Color {
        if point.status.is_empty() {
            return point.marker_color;
        }
        self.status_palette
            .get(&point.status)
            .copied()
            .unwrap_or(point.marker_color)
    }

    /// Registers the selection handler. Last write wins; there is exactly
    /// one active handler.
    pub fn on_select(&mut self, handler: impl FnMut(usize, &DataPoint) + 'static) {
        self.select_handler = Some(Box::new(handler));
    }

    /// Registers the redraw-request handler, called whenever pending
    /// invalidation escalates (style/data changes, animation ticks).
    pub fn on_redraw_request(&mut self, handler: impl FnMut() + 'static) {
        self.redraw_handler = Some(Box::new(handler));
    }

    /// Dispatches a pointer-down event against the committed hit regions.
    ///
    /// On a hit the selection handler runs synchronously and the event is
    /// reported as consumed. A miss is silently not consumed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        let Some(index) = self.hit_regions.resolve(x, y) else {
            return false;
        };

        match (self.select_handler.as_mut(), self.dataset.get(index)) {
            (Some(handler), Some(point)) => handler(index, point),
            _ => debug!(index, "marker tap with no selection handler registered"),
        }
        true
    }

    /// Steps the reveal animation by `delta_ms` of host time.
    ///
    /// Progress movement marks paint-level invalidation and fires the
    /// redraw-request handler; the host repaints on its own schedule.
    pub fn advance_reveal(&mut self, delta_ms: u64) -> RevealTick {
        let tick = self.reveal.advance(delta_ms);
        if matches!(tick, RevealTick::RedrawNeeded | RevealTick::Completed) {
            self.invalidate(RepaintLevel::Paint);
        }
        tick
    }

    /// Cancels the reveal animation ahead of widget teardown.
    ///
    /// After this call no `advance_reveal` can mutate animation state, so a
    /// stale host timer firing against a disposed widget is harmless.
    pub fn cancel_reveal(&mut self) {
        self.reveal.cancel();
    }

    /// Resolves host layout constraints and commits the result as the new
    /// viewport.
    pub fn measure(
        &mut self,
        width_constraint: MeasureConstraint,
        height_constraint: MeasureConstraint,
    ) -> MeasuredSize {
        let size = resolve_measured_size(
            self.style,
            self.dataset.len(),
            width_constraint,
            height_constraint,
        );
        self.viewport = Viewport::new(
            size.width.round().max(1.0) as u32,
            size.height.round().max(1.0) as u32,
        );
        self.invalidate(RepaintLevel::Layout);
        size
    }

    /// Builds the current frame, commits its hit regions, and hands it to
    /// the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let built = self.build_render_frame()?;

        self.hit_regions.clear();
        for region in &built.hit_regions {
            self.hit_regions.record(region.index, region.bounds);
        }
        self.last_layout_diagnostic = built.layout_diagnostic;

        self.renderer.render(&built.frame)?;
        self.pending_repaint = RepaintLevel::None;
        Ok(())
    }

    /// Renders only when invalidation is pending. Returns whether a draw
    /// pass ran.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if self.pending_repaint.is_none() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    #[must_use]
    pub fn take_pending_repaint(&mut self) -> RepaintLevel {
        std::mem::take(&mut self.pending_repaint)
    }

    fn invalidate(&mut self, level: RepaintLevel) {
        let merged = self.pending_repaint.max(level);
        let escalated = merged != self.pending_repaint;
        self.pending_repaint = merged;

        if escalated && let Some(handler) = self.redraw_handler.as_mut() {
            handler();
        }
    }
}
