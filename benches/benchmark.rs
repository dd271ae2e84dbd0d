use criterion::{black_box, criterion_group, criterion_main, Criterion};
use digestify::{file_checksum, text_hash};
use std::io::Write;
use tempfile::NamedTempFile;

fn bench_file_checksum(c: &mut Criterion) {
    // One MiB spans 128 chunks.
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(&vec![0xA5u8; 1024 * 1024]).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");

    c.bench_function("file_checksum_1mib", |b| {
        b.iter(|| {
            let checksum = file_checksum(black_box(file.path()));
            black_box(checksum)
        })
    });
}

fn bench_text_hash(c: &mut Criterion) {
    let text = "lorem ipsum dolor sit amet ".repeat(64);

    c.bench_function("text_hash", |b| {
        b.iter(|| black_box(text_hash(black_box(&text))))
    });
}

criterion_group!(benches, bench_file_checksum, bench_text_hash);
criterion_main!(benches);
