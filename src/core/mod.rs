pub mod axis;
pub mod layout;
pub mod types;

pub use axis::AxisMetadata;
pub use layout::{
    MIN_PLOT_EXTENT_PX, OffsetMode, PlotOffsets, RowConvention, gridline_x_positions, plot_area,
    plot_area_clamped, x_position_for_value, y_position_for_row,
};
pub use types::{DataPoint, Rect, Viewport};
