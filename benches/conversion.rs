use criterion::{Criterion, criterion_group, criterion_main};
use mdhtml_lib::convert;
use std::hint::black_box;

fn generate_document(sections: usize) -> String {
    let mut content = String::with_capacity(sections * 160);
    for i in 0..sections {
        content.push_str(&format!("## Section {i}\n\n"));
        content.push_str("- first **item**\n- second __item__\n\n");
        content.push_str("* one\n* two\n\n");
        content.push_str(&format!("Paragraph {i} with [[hash me]] and ((Cocoa)).\nSecond line.\n\n"));
    }
    content
}

fn bench_convert(c: &mut Criterion) {
    let small = generate_document(10);
    let large = generate_document(1000);

    c.bench_function("convert 10 sections", |b| b.iter(|| convert(black_box(&small))));
    c.bench_function("convert 1000 sections", |b| b.iter(|| convert(black_box(&large))));
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
