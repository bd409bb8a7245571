use dotbar_rs::api::{ChartWidget, ChartWidgetConfig, MeasureConstraint};
use dotbar_rs::core::{DataPoint, Viewport};
use dotbar_rs::render::NullRenderer;

fn widget_with_rows(rows: usize) -> ChartWidget<NullRenderer> {
    let config = ChartWidgetConfig::new(Viewport::new(1000, 500));
    let mut widget = ChartWidget::new(NullRenderer::default(), config).expect("widget");
    widget.set_dataset(
        (0..rows)
            .map(|i| DataPoint::new(i.to_string(), i as f64))
            .collect(),
    );
    widget
}

#[test]
fn unconstrained_uses_the_intrinsic_default_size() {
    let mut widget = widget_with_rows(0);
    let size = widget.measure(
        MeasureConstraint::Unconstrained,
        MeasureConstraint::Unconstrained,
    );
    assert_eq!(size.width, 1000.0);
    assert_eq!(size.height, 500.0);
}

#[test]
fn exact_constraints_are_taken_as_given() {
    let mut widget = widget_with_rows(2);
    let size = widget.measure(
        MeasureConstraint::Exact(640.0),
        MeasureConstraint::Exact(480.0),
    );
    assert_eq!(size.width, 640.0);
    assert_eq!(size.height, 480.0);
}

#[test]
fn at_most_caps_the_intrinsic_size() {
    let mut widget = widget_with_rows(0);

    let smaller = widget.measure(
        MeasureConstraint::AtMost(600.0),
        MeasureConstraint::AtMost(300.0),
    );
    assert_eq!(smaller.width, 600.0);
    assert_eq!(smaller.height, 300.0);

    let larger = widget.measure(
        MeasureConstraint::AtMost(4000.0),
        MeasureConstraint::AtMost(4000.0),
    );
    assert_eq!(larger.width, 1000.0);
    assert_eq!(larger.height, 500.0);
}

#[test]
fn height_is_floored_at_150_px_per_row() {
    let mut widget = widget_with_rows(6);

    // 6 rows * 150 px = 900 px minimum, even against an exact constraint.
    let exact = widget.measure(
        MeasureConstraint::Exact(800.0),
        MeasureConstraint::Exact(400.0),
    );
    assert_eq!(exact.height, 900.0);

    let unconstrained = widget.measure(
        MeasureConstraint::Unconstrained,
        MeasureConstraint::Unconstrained,
    );
    assert_eq!(unconstrained.height, 900.0);

    // A roomier constraint than the floor wins.
    let roomy = widget.measure(
        MeasureConstraint::Exact(800.0),
        MeasureConstraint::Exact(1200.0),
    );
    assert_eq!(roomy.height, 1200.0);
}

#[test]
fn measure_commits_the_viewport_for_the_next_frame() {
    let mut widget = widget_with_rows(1);
    widget.measure(
        MeasureConstraint::Exact(640.0),
        MeasureConstraint::Exact(480.0),
    );
    assert_eq!(widget.viewport(), Viewport::new(640, 480));

    let built = widget.build_render_frame().expect("frame");
    assert_eq!(built.frame.viewport, Viewport::new(640, 480));
}
