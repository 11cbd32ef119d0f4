use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use film_packer_core::prelude::*;

fn generate_specs(count: usize, min_size: u32, max_size: u32) -> Vec<PieceSpec> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| PieceSpec {
            id: format!("piece_{}", i),
            width: rng.gen_range(min_size..=max_size),
            height: rng.gen_range(min_size..=max_size),
            count: 1,
            color: None,
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_pieces");

    for count in [50, 200, 800] {
        let specs = generate_specs(count, 8, 96);
        group.throughput(Throughput::Elements(count as u64));

        for (name, axis) in [
            ("horizontal", LayoutAxis::Horizontal),
            ("vertical", LayoutAxis::Vertical),
        ] {
            group.bench_with_input(BenchmarkId::new(name, count), &specs, |b, specs| {
                b.iter(|| {
                    let cfg = PackConfig::builder()
                        .sheet_dimensions(512, 512)
                        .axis(axis)
                        .build();
                    black_box(pack_pieces(specs.clone(), cfg).unwrap())
                });
            });
        }
    }

    group.finish();
}

fn bench_single_sheet_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_inserts");

    let cfg = PackConfig::builder().sheet_dimensions(4096, 4096).build();
    let pieces: Vec<Piece> = generate_specs(500, 8, 64)
        .iter()
        .map(|s| s.unit())
        .collect();

    group.bench_function("skyline_horizontal", |b| {
        b.iter(|| {
            let mut sheet = HorizontalSheet::new(&cfg, 0, 0);
            for piece in &pieces {
                black_box(sheet.place(piece));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pack, bench_single_sheet_inserts);
criterion_main!(benches);
