//! Throughput benchmarks for sweepmark
//!
//! Run with: cargo bench --bench rendering

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample documents in the supported subset
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = "# Heading
This is a paragraph with *emphasis* and **strong** text.
- Item 1
- Item 2
- Item 3
A [link](https://example.com) and an ![image](logo.png \"Logo\").
";

    pub const NESTED_LIST: &str = "- Fast
  - Single pass
  - No tree
    - Explicit stack
    - Toggle emphasis
- Total
  - Malformed input degrades to text
";

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = "
## Section Title
This paragraph contains inline elements like *emphasis*, __strong__ and [links](https://example.com).
- First bullet point with **bold** text
  - Nested point with _italic_ text
- Third point with ![an image](https://cdn/img.png \"Title\")
Another paragraph to add some content, long enough to exercise bulk copying of plain text runs.
";
        section.repeat(200)
    }

    /// Many emphasis toggles on one line
    pub fn pathological_emphasis() -> String {
        "*a ".repeat(1000) + &"b* ".repeat(1000)
    }

    /// Deep indentation staircase
    pub fn pathological_nested() -> String {
        (0..200).map(|depth| format!("{}- deep\n", "  ".repeat(depth))).collect()
    }

    /// Long link text patched in place at the closing bracket
    pub fn long_links() -> String {
        format!("[{}](target) ", "x".repeat(500)).repeat(100)
    }
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| sweepmark::render(black_box(samples::TINY)))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| sweepmark::render(black_box(samples::SMALL)))
    });

    group.throughput(Throughput::Bytes(samples::NESTED_LIST.len() as u64));
    group.bench_function("nested_list", |b| {
        b.iter(|| sweepmark::render(black_box(samples::NESTED_LIST)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| sweepmark::render(black_box(&large)))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let emphasis = samples::pathological_emphasis();
    group.throughput(Throughput::Bytes(emphasis.len() as u64));
    group.bench_function("emphasis_toggles", |b| {
        b.iter(|| sweepmark::render(black_box(&emphasis)))
    });

    let nested = samples::pathological_nested();
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("deep_nesting", |b| {
        b.iter(|| sweepmark::render(black_box(&nested)))
    });

    let links = samples::long_links();
    group.throughput(Throughput::Bytes(links.len() as u64));
    group.bench_function("link_patching", |b| {
        b.iter(|| sweepmark::render(black_box(&links)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::large();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| sweepmark::render(black_box(&input)))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = Vec::with_capacity(input.len() * 2);
        b.iter(|| {
            sweepmark::render_into(black_box(&input), &mut buffer);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_pathological, bench_buffer_reuse);
criterion_main!(benches);
