use anyhow::Result;
use sketch_core::{compute_chart_layout, BarChart, ChartDatum, RenderOptions, Viewport};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_data(n: usize) -> Vec<ChartDatum> {
    (0..n)
        .map(|i| ChartDatum::new(format!("c{i}"), ((i as f64 * 0.37).sin() + 1.2) * 100.0))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_layout");
    for &n in &[6usize, 120usize, 2_000usize] {
        let data = build_data(n);
        let viewport = Viewport::default();
        group.bench_function(format!("bars_{n}"), |b| {
            b.iter(|| black_box(compute_chart_layout(black_box(&data), &viewport)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_png_bytes");
    for &n in &[6usize, 120usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let chart = BarChart::new(build_data(n));
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
