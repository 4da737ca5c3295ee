use std::hint::black_box;
use std::io::Cursor;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use filament_estimator::{ParsedLine, estimate_lines, estimate_reader, parse_line};

fn generate_gcode_content(size_mb: usize) -> String {
    let target_bytes = size_mb * 1024 * 1024;
    let mut content = String::with_capacity(target_bytes + 1000);

    content.push_str("; filament_density = 1.24\n; filament_diameter = 1.75\n");

    // Roughly what a slicer emits per layer
    let patterns = [
        ";LAYER:0\n",
        "G1 Z.4 F720\n",
        "G1 E-.8 F2100\n",
        "G1 X80.5 Y90.2 F9000\n",
        "G1 E.8 F2100\n",
        "G1 X90.5 Y90.2 E.33257 F1500 ; perimeter\n",
        "G1 X90.5 Y100.2 E.33257\n",
        "G1 X80.5 Y100.2 E.33257\n",
        "M106 S255\n",
        "G1 X80.5 Y90.2 E.33257\n",
    ];

    let mut pattern_index = 0;
    while content.len() < target_bytes {
        content.push_str(patterns[pattern_index % patterns.len()]);
        pattern_index += 1;
        if pattern_index % 5_000 == 0 {
            content.push_str("M600\n");
        }
    }

    content
}

fn bench_estimate_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_reader");

    for size_mb in [1, 5, 10].iter() {
        let content = generate_gcode_content(*size_mb);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("size_mb", size_mb),
            &content,
            |b, content| {
                b.iter(|| {
                    let estimate =
                        estimate_reader(Cursor::new(content.as_bytes()), Path::new("bench.gcode"))
                            .expect("estimate");
                    black_box(estimate.layer_count())
                })
            },
        );
    }
    group.finish();
}

fn bench_aggregation_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size_mb in [1, 5].iter() {
        let content = generate_gcode_content(*size_mb);
        let lines: Vec<ParsedLine> = content
            .lines()
            .map(|l| parse_line(l).expect("parse"))
            .collect();

        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::new("size_mb", size_mb), &lines, |b, lines| {
            b.iter(|| {
                let estimate = estimate_lines(lines).expect("estimate");
                black_box(estimate.total_extruded())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimate_reader, bench_aggregation_only);
criterion_main!(benches);
