//! Property-based tests for metric and normalization invariants.

use std::collections::BTreeMap;

use proptest::prelude::*;
use researcher_impact::citations::h_index;
use researcher_impact::corpus::CorpusTables;
use researcher_impact::models::{Author, AuthorityRecord, Authorship, AwardScale, Paper, YearlyCitations};
use researcher_impact::normalize::normalize_text;
use researcher_impact::resolver::{resolve_corpus, ResolverOptions};
use researcher_impact::scoring::acceleration::{acceleration, cagr};
use researcher_impact::scoring::anci::{anci, PaperImpact};
use researcher_impact::scoring::awards::AwardCatalog;
use researcher_impact::Corpus;

fn arb_impact() -> impl Strategy<Value = PaperImpact> {
    (-5i32..2030, 0u32..100_000, 0usize..50)
        .prop_map(|(year, citation_count, author_count)| PaperImpact { year, citation_count, author_count })
}

fn arb_histogram() -> impl Strategy<Value = BTreeMap<i32, u32>> {
    proptest::collection::btree_map(1990i32..2030, 0u32..10_000, 0..20)
}

/// Small corpus with abbreviated names and a noisy authority.
fn arb_corpus() -> impl Strategy<Value = Corpus> {
    let first = prop_oneof![Just(""), Just("J."), Just("J"), Just("Jo"), Just("John"), Just("Jane"), Just("M")];
    let last = prop_oneof![Just("Smith"), Just("Smyth"), Just("Curie")];
    let authority_first = prop_oneof![Just("John"), Just("Jane"), Just("J."), Just("Marie"), Just("")];

    (
        proptest::collection::vec((first, last.clone(), 0usize..3), 1..6),
        proptest::collection::vec((0usize..3, authority_first, last), 0..8),
    )
        .prop_map(|(authors, authority)| {
            let papers = (0..3).map(|i| Paper::new(format!("p{i}"), format!("Paper {i}"), 2020)).collect();
            let authorships = authors
                .iter()
                .enumerate()
                .map(|(i, (_, _, p))| Authorship::new(format!("a{i}"), format!("p{p}")))
                .collect();
            let authors = authors
                .iter()
                .enumerate()
                .map(|(i, (f, l, _))| Author::new(format!("a{i}"), f, l))
                .collect();
            let authority = authority
                .into_iter()
                .map(|(p, f, l)| AuthorityRecord {
                    paper_id: Some(format!("p{p}")),
                    paper_title: None,
                    first_name: Some(f.to_string()),
                    last_name: Some(l.to_string()),
                })
                .collect();
            Corpus::new(CorpusTables { papers, authors, authorships, authority, ..CorpusTables::default() })
        })
}

proptest! {
    /// h never exceeds the number of papers, nor the largest count.
    #[test]
    fn h_index_bounded(counts in proptest::collection::vec(0u32..1_000, 0..60)) {
        let h = h_index(counts.iter().copied());
        prop_assert!(h as usize <= counts.len());
        prop_assert!(h <= counts.iter().copied().max().unwrap_or(0));
        // h papers have at least h citations
        prop_assert!(counts.iter().filter(|&&c| c >= h).count() >= h as usize);
    }

    /// ANCI is finite and non-negative.
    #[test]
    fn anci_non_negative(papers in proptest::collection::vec(arb_impact(), 0..30), current in 1990i32..2040) {
        let score = anci(&papers, current);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    /// A flat histogram never accelerates.
    #[test]
    fn constant_histogram_has_zero_cagr(count in 0u32..1_000, career in 2i32..40, start in 1990i32..2010) {
        let hist: YearlyCitations = (start..=2024).map(|y| (y, count)).collect();
        let g = cagr(&hist, career, 2024).unwrap();
        prop_assert!(g.abs() < 1e-12);
    }

    /// Composite acceleration is the CAGR whenever it is defined.
    #[test]
    fn composite_prefers_cagr(map in arb_histogram(), career in 0i32..40) {
        let hist: YearlyCitations = map.into_iter().collect();
        let acc = acceleration(&hist, career, 2024);
        match acc.cagr {
            Some(g) => prop_assert_eq!(acc.composite, g),
            None => prop_assert_eq!(acc.composite, acc.linear_trend),
        }
        if let Some(r) = acc.period_ratio {
            prop_assert!(r >= 0.0);
        }
    }

    /// Award scores stay within [0, 1] on both scales.
    #[test]
    fn award_score_in_unit_interval(awards in proptest::collection::vec(
        prop_oneof![
            Just("Best Paper".to_string()),
            Just("outstanding paper award".to_string()),
            Just("Reproduction Award".to_string()),
            "[A-Za-z ]{0,30}",
        ],
        0..5,
    )) {
        for scale in [AwardScale::Points, AwardScale::Tiered] {
            let s = AwardCatalog::builtin(scale).score(&awards);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }

    /// Normalizing twice changes nothing.
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,40}") {
        let once = normalize_text(&s);
        prop_assert_eq!(normalize_text(&once), once);
    }

    /// A histogram written as a mapping parses back to itself.
    #[test]
    fn histogram_parses_formatted_mapping(map in arb_histogram(), quoted in any::<bool>()) {
        let body: Vec<String> = map
            .iter()
            .map(|(y, c)| if quoted { format!("'{y}': {c}") } else { format!("{y}: {c}") })
            .collect();
        let text = format!("{{{}}}", body.join(", "));

        let parsed = YearlyCitations::parse(&text).unwrap();
        let expected: YearlyCitations = map.into_iter().collect();
        prop_assert_eq!(parsed, expected);
    }

    /// Name completion applied to its own output changes nothing.
    #[test]
    fn name_completion_is_idempotent(corpus in arb_corpus()) {
        let (once, _) = resolve_corpus(&corpus, ResolverOptions::default());
        let (twice, report) = resolve_corpus(&once, ResolverOptions::default());
        prop_assert!(report.completed.is_empty());
        prop_assert_eq!(once.authors(), twice.authors());
    }
}
