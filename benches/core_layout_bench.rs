use criterion::{Criterion, criterion_group, criterion_main};
use dotbar_rs::api::{ChartWidget, ChartWidgetConfig};
use dotbar_rs::core::{
    AxisMetadata, DataPoint, OffsetMode, PlotOffsets, RowConvention, Viewport, plot_area,
    x_position_for_value, y_position_for_row,
};
use dotbar_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_row_and_value_placement(c: &mut Criterion) {
    let viewport = Viewport::new(1000, 500);
    let plot = plot_area(viewport, PlotOffsets::default(), OffsetMode::Absolute)
        .expect("valid plot area");

    c.bench_function("row_and_value_placement", |b| {
        b.iter(|| {
            for row in 0..64usize {
                let y = y_position_for_row(
                    black_box(row),
                    black_box(64),
                    black_box(plot.height),
                    RowConvention::TrailingEdge,
                )
                .expect("row in range");
                let x = x_position_for_value(
                    black_box(row as f64 * 0.25),
                    black_box(plot.x),
                    black_box(plot.width),
                    black_box(10),
                    black_box(0.75),
                )
                .expect("valid divisions");
                black_box((x, y));
            }
        })
    });
}

fn bench_frame_build_256_rows(c: &mut Criterion) {
    let axis = AxisMetadata::new((1..=10).map(|i| i.to_string()).collect(), 10);
    let config = ChartWidgetConfig::new(Viewport::new(1920, 1080)).with_axis_metadata(axis);
    let mut widget = ChartWidget::new(NullRenderer::default(), config).expect("widget init");
    widget.set_dataset(
        (0..256)
            .map(|i| DataPoint::new(format!("row-{i}"), (i % 11) as f64))
            .collect(),
    );

    c.bench_function("frame_build_256_rows", |b| {
        b.iter(|| {
            let built = widget
                .build_render_frame()
                .expect("frame build should succeed");
            black_box(built.frame.circles.len());
        })
    });
}

fn bench_full_render_cycle(c: &mut Criterion) {
    let axis = AxisMetadata::new((1..=10).map(|i| i.to_string()).collect(), 10);
    let config = ChartWidgetConfig::new(Viewport::new(1920, 1080)).with_axis_metadata(axis);
    let mut widget = ChartWidget::new(NullRenderer::default(), config).expect("widget init");
    widget.set_dataset(
        (0..64)
            .map(|i| DataPoint::new(format!("row-{i}"), (i % 11) as f64))
            .collect(),
    );

    c.bench_function("full_render_cycle_64_rows", |b| {
        b.iter(|| {
            widget.set_dataset(
                (0..64)
                    .map(|i| DataPoint::new(format!("row-{i}"), (i % 11) as f64))
                    .collect(),
            );
            widget.render().expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_row_and_value_placement,
    bench_frame_build_256_rows,
    bench_full_render_cycle
);
criterion_main!(benches);
