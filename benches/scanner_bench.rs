//! Benchmark tests for the scanner module

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rusty_du::scanner::{format_size, scan_directory, FsLister, Reporter, ScanOptions};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tempfile::TempDir;

/// Create a benchmark directory with the given number of files and directories
fn create_benchmark_dir(file_count: usize, dir_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let files_per_dir = if dir_count > 0 {
        file_count / dir_count
    } else {
        file_count
    };

    for d in 0..dir_count {
        let subdir = root.join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();

        for f in 0..files_per_dir {
            let mut file = File::create(subdir.join(format!("file{}.txt", f))).unwrap();
            file.write_all(&vec![b'x'; 1024]).unwrap();
        }
    }

    // Create remaining files in root if needed
    let remaining = file_count - (files_per_dir * dir_count);
    for f in 0..remaining {
        let mut file = File::create(root.join(format!("root_file{}.txt", f))).unwrap();
        file.write_all(&vec![b'y'; 1024]).unwrap();
    }

    dir
}

fn scan(root: &Path, options: &ScanOptions) -> u64 {
    let mut reporter = Reporter::from_options(io::sink(), io::sink(), options);
    scan_directory(&FsLister::new(), root, options, &mut reporter).unwrap()
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for size in [100, 500, 1000].iter() {
        let dir = create_benchmark_dir(*size, 10);
        let dirs_only = ScanOptions::default();
        let with_files = ScanOptions::new().with_files(true);

        group.bench_with_input(BenchmarkId::new("dirs_only", size), size, |b, _| {
            b.iter(|| scan(black_box(dir.path()), &dirs_only))
        });

        group.bench_with_input(BenchmarkId::new("with_files", size), size, |b, _| {
            b.iter(|| scan(black_box(dir.path()), &with_files))
        });
    }

    group.finish();
}

fn benchmark_deep_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_scan");

    // Create 5 levels deep with 10 files each
    let dir = TempDir::new().unwrap();
    let mut current = dir.path().to_path_buf();
    for level in 0..5 {
        current = current.join(format!("level{}", level));
        fs::create_dir(&current).unwrap();

        for f in 0..10 {
            let mut file = File::create(current.join(format!("file{}.txt", f))).unwrap();
            file.write_all(&vec![b'z'; 512]).unwrap();
        }
    }

    let options = ScanOptions::new().with_files(true);

    group.bench_function("sequential", |b| {
        b.iter(|| scan(black_box(dir.path()), &options))
    });

    group.finish();
}

fn benchmark_format_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_size");

    group.bench_function("kibibytes", |b| {
        b.iter(|| format_size(black_box(123_456_789.0), false))
    });

    group.bench_function("human_readable", |b| {
        b.iter(|| format_size(black_box(123_456_789.0), true))
    });

    group.finish();
}

criterion_group!(benches, benchmark_scan, benchmark_deep_scan, benchmark_format_size);
criterion_main!(benches);
