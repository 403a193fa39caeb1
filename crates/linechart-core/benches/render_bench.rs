use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linechart_core::style::FIVE_LINES;
use linechart_core::{render_to_bytes, ChartRequest, Result, Series};

fn build_request(n: usize, series: usize) -> ChartRequest {
    let mut req = ChartRequest::new("bench.png").with_axis_labels("X", "Y").with_title("Bench");
    for k in 0..series {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01 + k as f64).sin() * 10.0).collect();
        req.add_series(Series::new(format!("s{k}"), x, y).expect("valid series"));
    }
    req
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 20_000usize] {
        group.bench_function(format!("xy_{n}x3"), |b| {
            let req = build_request(n, 3);
            b.iter(|| -> Result<()> {
                let bytes = render_to_bytes(&req, &FIVE_LINES)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
