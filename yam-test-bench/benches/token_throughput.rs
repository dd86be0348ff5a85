use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use yam_lexer::{Lexer, TokenKind};
use yam_test_bench::consts::{FLOW_IN_BLOCK_INPUT, FLOW_IN_BLOCK_TOKENS};
use yam_test_bench::{assert_eq_tokens, dump_tokens};

const FOLD_INPUT: &str = r"
>
 Sammy Sosa completed another
 fine season with great stats.

   63 Home Runs
   0.288 Batting Average

 What a year!";

const FOLD_EXPECTED: &str = r"
0 =VAL Sammy Sosa completed another fine season with great stats.\n\n  63 Home Runs\n  0.288 Batting Average\n\nWhat a year!\n
-STR
ERR UnterminatedBlockScalar";

fn nested_document(entries: usize) -> String {
    let mut doc = String::new();
    for i in 0..entries {
        doc.push_str(&format!(
            "item{i}:\n  name: \"Entry {i}\"\n  tags: [a, b, c]\n  text: |\n    line one\n    line two\n"
        ));
    }
    doc
}

fn count_tokens(input: &str) -> usize {
    let mut lexer = Lexer::new_from_str(input);
    let mut count = 0;
    while lexer.next_token(0).kind != TokenKind::EndOfStream {
        count += 1;
    }
    count
}

fn bench_folded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-tokens");
    group.throughput(Throughput::Bytes(FOLD_INPUT.len() as u64));
    group.bench_function("bench_folded", |b| {
        b.iter(|| assert_eq_tokens(black_box(FOLD_INPUT), black_box(FOLD_EXPECTED)));
    });
    group.finish();
}

fn bench_flow_in_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-tokens");
    group.throughput(Throughput::Bytes(FLOW_IN_BLOCK_INPUT.len() as u64));
    group.bench_function("bench_flow_in_block", |b| {
        b.iter(|| {
            assert_eq_tokens(
                black_box(FLOW_IN_BLOCK_INPUT),
                black_box(FLOW_IN_BLOCK_TOKENS),
            );
        });
    });
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let doc = nested_document(500);
    let mut group = c.benchmark_group("bench-tokens");
    group.throughput(Throughput::Bytes(doc.len() as u64));
    group.bench_function("fixed-reference", |b| {
        b.iter(|| assert!(count_tokens(black_box(&doc)) > 0));
    });
    group.bench_function("indent-stack", |b| {
        b.iter(|| assert!(!dump_tokens(black_box(&doc)).is_empty()));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().significance_level(0.01).sample_size(200).warm_up_time(Duration::from_millis(10));
    targets = bench_folded, bench_flow_in_block, bench_nested
}
criterion_main!(benches);
