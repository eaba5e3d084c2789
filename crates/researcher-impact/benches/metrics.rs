//! Metric computation benchmarks over a synthetic corpus.
//!
//! Run with `cargo bench -p researcher-impact --bench metrics`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use researcher_impact::corpus::CorpusTables;
use researcher_impact::models::{Author, Authorship, CitationEdge, Paper, VenueTier};
use researcher_impact::network::CoauthorGraph;
use researcher_impact::{Config, Corpus, Scorer};

/// Deterministic corpus: each paper has three authors drawn from a ring and
/// cites up to five earlier papers.
fn synthetic_corpus(authors: usize, papers: usize) -> Corpus {
    let venues = ["ACL", "EMNLP", "NAACL", "Workshop"];
    let paper_rows: Vec<Paper> = (0..papers)
        .map(|i| {
            let mut p = Paper::new(format!("p{i}"), format!("Paper {i}"), 2005 + (i % 20) as i32);
            p.venue = Some(venues[i % venues.len()].to_string());
            p.citation_count = ((i * 37) % 200) as u32;
            p.alt_ids = vec![format!("P{:02}-{}{:03}", i % 20, 1 + i % 5, i % 1000)];
            p
        })
        .collect();

    let authorships = (0..papers)
        .flat_map(|i| {
            (0..3).map(move |k| Authorship::new(format!("a{}", (i * 7 + k * 13) % authors), format!("p{i}")))
        })
        .collect();

    let citation_edges = (0..papers)
        .flat_map(|i| {
            (1..=i.min(5)).map(move |d| CitationEdge::new(format!("p{i}"), format!("p{}", i - d)))
        })
        .collect();

    Corpus::new(CorpusTables {
        papers: paper_rows,
        authors: (0..authors).map(|i| Author::new(format!("a{i}"), "Test", &format!("Author{i}"))).collect(),
        authorships,
        citation_edges,
        venue_tiers: vec![
            VenueTier { venue: "ACL".into(), tier: "A".into() },
            VenueTier { venue: "EMNLP".into(), tier: "A".into() },
            VenueTier { venue: "NAACL".into(), tier: "B".into() },
        ],
        ..CorpusTables::default()
    })
}

fn bench_score_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_all");

    for &(authors, papers) in &[(100, 500), (1_000, 5_000)] {
        let corpus = synthetic_corpus(authors, papers);
        group.throughput(Throughput::Elements(authors as u64));

        for parallel in [false, true] {
            let config = Config { parallel, ..Config::for_testing() };
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, authors), &corpus, |b, corpus| {
                b.iter(|| Scorer::new(black_box(corpus), &config).score_all());
            });
        }
    }
    group.finish();
}

fn bench_coauthor_graph(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000, 5_000);
    c.bench_function("coauthor_graph_5000_papers", |b| {
        b.iter(|| CoauthorGraph::build(black_box(&corpus)).edges());
    });
}

criterion_group!(benches, bench_score_all, bench_coauthor_graph);
criterion_main!(benches);
