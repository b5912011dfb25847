mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_syntax::Lexer;
use graphql_syntax::ParseOptions;
use graphql_syntax::Source;
use graphql_syntax::parse;
use graphql_syntax::token::TokenKind;
use std::sync::Arc;

fn query_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parse");

    let cases: Vec<(&str, String, ParseOptions)> = vec![
        (
            "kitchen_sink",
            fixtures::KITCHEN_SINK_QUERY.to_string(),
            ParseOptions::default(),
        ),
        (
            "kitchen_sink_no_location",
            fixtures::KITCHEN_SINK_QUERY.to_string(),
            ParseOptions::default().without_locations(),
        ),
        (
            "flat_200_fields",
            fixtures::flat_query(200),
            ParseOptions::default(),
        ),
        (
            "nested_50_levels",
            fixtures::deeply_nested_query(50),
            ParseOptions::default(),
        ),
        (
            "argument_heavy_100",
            fixtures::argument_heavy_query(100),
            ParseOptions::default(),
        ),
    ];

    for (name, body, options) in cases {
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(parse(Source::new(body.as_str()), options)))
        });
    }

    group.finish();
}

fn lex_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_only");

    let body = fixtures::KITCHEN_SINK_QUERY;
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("kitchen_sink", |b| {
        let source = Arc::new(Source::new(body));
        b.iter(|| {
            let mut lexer = Lexer::new(Arc::clone(&source));
            loop {
                match lexer.next_token() {
                    Ok(token) if token.kind == TokenKind::Eof => break,
                    Ok(token) => {
                        black_box(token);
                    }
                    Err(error) => panic!("lexing failed: {error}"),
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, query_parse, lex_only);
criterion_main!(benches);
