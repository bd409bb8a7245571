use serde::{Deserialize, Serialize};

use super::ChartStyle;

/// One dimension of a host layout constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasureConstraint {
    /// No constraint: use the intrinsic default size.
    Unconstrained,
    /// Use exactly this size.
    Exact(f64),
    /// Use the smaller of the intrinsic default and this size.
    AtMost(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredSize {
    pub width: f64,
    pub height: f64,
}

fn resolve_dimension(constraint: MeasureConstraint, intrinsic: f64) -> f64 {
    match constraint {
        MeasureConstraint::Unconstrained => intrinsic,
        MeasureConstraint::Exact(size) => size,
        MeasureConstraint::AtMost(size) => intrinsic.min(size),
    }
}

/// Resolves host constraints against the intrinsic size.
///
/// Height is floored at `row_count * min_row_height_px` after constraint
/// resolution, `Exact` included: a dense dataset is allowed to outgrow the
/// host's requested height rather than compress its rows.
#[must_use]
pub fn resolve_measured_size(
    style: ChartStyle,
    row_count: usize,
    width_constraint: MeasureConstraint,
    height_constraint: MeasureConstraint,
) -> MeasuredSize {
    let width = resolve_dimension(width_constraint, style.intrinsic_width_px);
    let height = resolve_dimension(height_constraint, style.intrinsic_height_px)
        .max(row_count as f64 * style.min_row_height_px);
    MeasuredSize { width, height }
}

#[cfg(test)]
mod tests {
    use super::{MeasureConstraint, resolve_measured_size};
    use crate::api::ChartStyle;

    #[test]
    fn at_most_caps_at_the_intrinsic_size() {
        let style = ChartStyle::default();
        let size = resolve_measured_size(
            style,
            0,
            MeasureConstraint::AtMost(5000.0),
            MeasureConstraint::AtMost(200.0),
        );
        assert_eq!(size.width, style.intrinsic_width_px);
        assert_eq!(size.height, 200.0);
    }

    #[test]
    fn row_floor_overrides_exact_height() {
        let style = ChartStyle::default();
        let size = resolve_measured_size(
            style,
            6,
            MeasureConstraint::Exact(800.0),
            MeasureConstraint::Exact(400.0),
        );
        assert_eq!(size.width, 800.0);
        assert_eq!(size.height, 900.0);
    }
}
