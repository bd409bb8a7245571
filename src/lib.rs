//! dotbar-rs: horizontal dot/line bar chart widget core.
//!
//! This crate provides the layout, reveal-animation, rendering, and
//! hit-testing engine of a horizontal dot/line chart (category labels on the
//! y-axis, numeric values on the x-axis) behind a strict architectural
//! split: pure geometry in `core`, a deterministic animation state machine
//! in `animation`, backend-agnostic scene building in `render`/`api`, and
//! pointer hit testing in `interaction`. Hosts embed [`ChartWidget`] and
//! drive it from their own event loop.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartWidget, ChartWidgetConfig};
pub use error::{ChartError, ChartResult};
