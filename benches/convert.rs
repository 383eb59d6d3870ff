//! Benchmark for converting a full 256-glyph 8x16 font source.

use criterion::{criterion_group, criterion_main, Criterion};
use makefont::{convert_str, ConvertOptions, FontTable, RowMode};
use std::hint::black_box;

/// Build a source in the hankaku layout: two header lines, then one marker
/// and sixteen rows per glyph.
fn synthetic_source() -> String {
    let mut src = String::from("# synthetic 8x16 font\n# generated for benchmarking\n");
    for code in 0u32..256 {
        src.push_str(&format!("\nchar 0x{code:02x}\n"));
        for row in 0..16u32 {
            let bits = ((code * 31 + row * 17) & 0xff) as u8;
            let line: String = (0..8)
                .map(|i| if bits & (0x80 >> i) != 0 { '*' } else { '.' })
                .collect();
            src.push_str(&line);
            src.push('\n');
        }
    }
    src
}

fn bench_convert(c: &mut Criterion) {
    let src = synthetic_source();
    let options = ConvertOptions::default();
    c.bench_function("convert_256_glyphs", |b| {
        b.iter(|| convert_str(black_box(&src), &options).unwrap())
    });
    c.bench_function("parse_256_glyphs", |b| {
        b.iter(|| FontTable::parse_str(black_box(&src), RowMode::Strict).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
