use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn create_pair(dir: &TempDir, size_mb: usize) -> (std::path::PathBuf, std::path::PathBuf) {
    let left = dir.path().join("left.bin");
    let right = dir.path().join("right.bin");

    let mut data = vec![0u8; size_mb * 1024 * 1024];
    fs::write(&left, &data).unwrap();

    // Scatter one differing byte per megabyte
    for chunk in data.chunks_mut(1024 * 1024) {
        chunk[chunk.len() / 2] ^= 0xFF;
    }
    fs::write(&right, &data).unwrap();

    (left, right)
}

fn bench_default_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_default_sizes");
    group.sample_size(10);

    for size_mb in [1, 8, 32].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}MB", size_mb)),
            size_mb,
            |b, &size_mb| {
                let dir = TempDir::new().unwrap();
                let (left, right) = create_pair(&dir, size_mb);

                b.iter(|| {
                    let output = Command::new(env!("CARGO_BIN_EXE_blockcmp"))
                        .args([left.to_str().unwrap(), right.to_str().unwrap()])
                        .output()
                        .unwrap();

                    assert!(output.status.success());
                    black_box(output);
                });
            },
        );
    }
    group.finish();
}

fn bench_single_block_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_4k_blocks_8MB");
    group.sample_size(10);

    let dir = TempDir::new().unwrap();
    let (left, right) = create_pair(&dir, 8);

    group.bench_function("bsizes=4096", |b| {
        b.iter(|| {
            let output = Command::new(env!("CARGO_BIN_EXE_blockcmp"))
                .args([
                    left.to_str().unwrap(),
                    right.to_str().unwrap(),
                    "--bsizes",
                    "4096",
                ])
                .output()
                .unwrap();

            assert!(output.status.success());
            black_box(output);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_default_block_sizes, bench_single_block_size);
criterion_main!(benches);
