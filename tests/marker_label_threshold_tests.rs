use dotbar_rs::api::{ChartWidget, ChartWidgetConfig};
use dotbar_rs::core::{AxisMetadata, DataPoint, Viewport};
use dotbar_rs::render::{NullRenderer, TextHAlign, TextPrimitive};

/// 400x300 plot at (150, 150), 8 divisions of 50 px each.
fn widget_with_values(values: &[f64]) -> ChartWidget<NullRenderer> {
    let axis = AxisMetadata::new((1..=8).map(|i| format!("a{i}")).collect(), 8);
    let config = ChartWidgetConfig::new(Viewport::new(650, 550)).with_axis_metadata(axis);
    let mut widget = ChartWidget::new(NullRenderer::default(), config).expect("widget");
    widget.set_dataset(
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| DataPoint::new(format!("row{i}"), value))
            .collect(),
    );
    widget
}

fn value_label_of(widget: &ChartWidget<NullRenderer>, label: &str) -> TextPrimitive {
    widget
        .build_render_frame()
        .expect("frame")
        .frame
        .texts
        .iter()
        .find(|text| text.text == label)
        .cloned()
        .expect("value label present")
}

#[test]
fn values_above_the_threshold_center_the_label_inside_the_connector() {
    let widget = widget_with_values(&[6.0]);
    let label = value_label_of(&widget, "6");

    // Centered at half the marker's x offset: 150 + (50*6)/2.
    assert_eq!(label.h_align, TextHAlign::Center);
    assert_eq!(label.x, 300.0);

    let marker_x = 150.0 + 50.0 * 6.0;
    assert!(label.x < marker_x);
}

#[test]
fn values_at_or_below_the_threshold_place_the_label_right_of_the_marker() {
    let widget = widget_with_values(&[2.0]);
    let label = value_label_of(&widget, "2");

    // Right of the ring: marker x (250) + dot occupied (30) + gap (10) + pad (10).
    assert_eq!(label.h_align, TextHAlign::Left);
    assert_eq!(label.x, 300.0);

    let marker_x = 150.0 + 50.0 * 2.0;
    assert!(label.x > marker_x);
}

#[test]
fn threshold_comparison_is_strict() {
    // Exactly at the threshold goes outside; just above goes inside.
    let at_threshold = widget_with_values(&[2.0]);
    assert_eq!(value_label_of(&at_threshold, "2").h_align, TextHAlign::Left);

    let above_threshold = widget_with_values(&[2.5]);
    assert_eq!(
        value_label_of(&above_threshold, "2.5").h_align,
        TextHAlign::Center
    );
}

#[test]
fn threshold_is_style_configurable() {
    let mut widget = widget_with_values(&[4.0]);
    assert_eq!(value_label_of(&widget, "4").h_align, TextHAlign::Center);

    widget
        .update_style(|style| style.value_label_inside_threshold = 5.0)
        .expect("style update");
    assert_eq!(value_label_of(&widget, "4").h_align, TextHAlign::Left);
}

#[test]
fn inside_label_tracks_reveal_progress() {
    let axis = AxisMetadata::new((1..=8).map(|i| format!("a{i}")).collect(), 8);
    let config = ChartWidgetConfig::new(Viewport::new(650, 550))
        .with_axis_metadata(axis)
        .with_reveal(dotbar_rs::animation::RevealConfig::new(100).with_duration_ms(1000));
    let mut widget = ChartWidget::new(NullRenderer::default(), config).expect("widget");
    widget.set_dataset(vec![DataPoint::new("row0", 6.0)]);

    // Half way through the run the label is centered at a quarter offset.
    widget.advance_reveal(100);
    widget.advance_reveal(500);
    let label = value_label_of(&widget, "6");
    assert_eq!(label.x, 150.0 + (50.0 * 6.0 * 0.5) / 2.0);
}
