use std::hint::black_box;

use attributed_text_engine::{
    InlineModel, MarkerConfig, ModelRegistry, RichDocument, SnapPolicy, StyleSet, TokenScanner,
    adjust_caret, project,
};
use criterion::{Criterion, criterion_group, criterion_main};

fn registry(users: usize) -> ModelRegistry {
    let marker = MarkerConfig::default();
    ModelRegistry::from_models((0..users).map(|id| {
        InlineModel::new(marker.wrap(&format!("user:{id}")), format!("user{id}")).with_symbol("@")
    }))
}

fn generate_text(paragraphs: usize, users: usize) -> String {
    let marker = MarkerConfig::default();
    let mut text = String::new();
    for i in 0..paragraphs {
        text.push_str("Some words before a mention ");
        text.push_str(&marker.wrap(&format!("user:{}", i % users)));
        text.push_str(" and an unknown one ");
        text.push_str(&marker.wrap("nobody"));
        text.push_str(".\n");
    }
    text
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_load");
    group.sample_size(20);

    let registry = registry(10);
    let scanner = TokenScanner::default();
    let styles = StyleSet::default();
    let text = generate_text(200, 10);

    group.bench_function("load", |b| {
        b.iter(|| {
            let doc = RichDocument::load(black_box(&text), &scanner, &registry, &styles);
            black_box(doc);
        });
    });

    let doc = RichDocument::load(&text, &scanner, &registry, &styles);
    group.bench_function("project", |b| {
        b.iter(|| black_box(project(black_box(&doc))));
    });

    group.finish();
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_edits");
    group.sample_size(20);

    let registry = registry(10);
    let text = generate_text(200, 10);
    let doc = RichDocument::load(&text, &TokenScanner::default(), &registry, &StyleSet::default());
    let middle = doc.len() / 2;

    group.bench_function("adjust_caret", |b| {
        b.iter(|| black_box(adjust_caret(&doc, black_box(middle), SnapPolicy::Nearest)));
    });

    group.bench_function("delete_range", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            doc.delete_range(black_box(middle), 10).unwrap();
            black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_edits);
criterion_main!(benches);
