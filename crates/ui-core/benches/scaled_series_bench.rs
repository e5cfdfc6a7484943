use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ui_core::{make_scaled_series, resolve_base_date, ChartSeries, Color, Series, ValueScale};

fn gen_chart(n: usize) -> Vec<ChartSeries<f64>> {
    let line = |phase: f64| (0..n).map(move |i| (i as f64, (i as f64 * 0.01 + phase).sin() * 10.0));
    vec![
        ChartSeries::new(Series::line("a", line(0.0)), Color::from_rgb(64, 160, 255)),
        ChartSeries::new(Series::line("b", line(1.5)), Color::from_rgb(220, 80, 80)),
        ChartSeries::new(Series::bar("c", line(3.0)), Color::from_rgb(40, 200, 120)),
        ChartSeries::new(Series::threshold("limit", 7.5), Color::from_rgb(255, 230, 70)),
        ChartSeries::new(Series::x_threshold("marker", (n / 2) as f64), Color::from_rgb(150, 150, 160)),
    ]
}

fn bench_scaled_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_scaled_series");
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let chart = gen_chart(n);
        let xs = ValueScale::new_linear(72.0, 1000.0, 0.0, n as f64);
        let ys = ValueScale::vertical(24.0, 584.0, -10.0, 10.0);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &chart, |b, chart| {
            b.iter(|| black_box(make_scaled_series(chart, &xs, &ys).len()));
        });
    }
    group.finish();
}

fn bench_base_date(c: &mut Criterion) {
    let month = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    c.bench_function("resolve_base_date_last_day", |b| {
        b.iter(|| black_box(resolve_base_date(month, |d| chrono::Datelike::day(&d) == 31)));
    });
}

criterion_group!(benches, bench_scaled_series, bench_base_date);
criterion_main!(benches);
