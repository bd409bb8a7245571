mod config;
mod frame_builder;
mod invalidation;
mod measure;
mod style;
mod widget;

pub use config::{
    ChartWidgetConfig, ChartWidgetConfigJsonContractV1, RevealResetPolicy,
    WIDGET_CONFIG_JSON_SCHEMA_V1,
};
pub use frame_builder::BuiltFrame;
pub use invalidation::RepaintLevel;
pub use measure::{MeasureConstraint, MeasuredSize, resolve_measured_size};
pub use style::{ChartStyle, validate_chart_style};
pub use widget::ChartWidget;
