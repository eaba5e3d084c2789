//! Impact scoring: ANCI, citation acceleration, PQI and the leaderboard.
//!
//! The individual formulas live in the submodules as pure functions.
//! [`Scorer`] binds them to a corpus and a configuration and produces one
//! [`AuthorMetrics`] row per author.

pub mod acceleration;
pub mod anci;
pub mod awards;
pub mod pqi;
pub mod track;

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::citations::{h_index, CitationIndex};
use crate::config::Config;
use crate::corpus::{Corpus, HistogramSource};
use crate::error::HistogramError;
use crate::models::{AuthorMetrics, LeaderboardEntry, LeaderboardMetric, Paper, PaperQuality, YearlyCitations};

use self::acceleration::{acceleration, Acceleration};
use self::anci::{anci, career_length, PaperImpact};
use self::awards::AwardCatalog;
use self::pqi::{author_pqi, paper_quality};

/// Computes metrics for the authors of one corpus.
#[derive(Debug)]
pub struct Scorer<'a> {
    corpus: &'a Corpus,
    config: &'a Config,
    catalog: AwardCatalog,
    citations: CitationIndex,
}

impl<'a> Scorer<'a> {
    /// Prepare a scorer. The corpus's award catalog override, when present,
    /// replaces the built-in catalog on the configured scale.
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: &'a Config) -> Self {
        let catalog = corpus
            .award_catalog()
            .cloned()
            .unwrap_or_else(|| AwardCatalog::builtin(config.award_scale));
        Self { corpus, config, catalog, citations: CitationIndex::build(corpus) }
    }

    /// The corpus being scored.
    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Award catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &AwardCatalog {
        &self.catalog
    }

    /// Edge-derived citation histograms.
    #[must_use]
    pub const fn citations(&self) -> &CitationIndex {
        &self.citations
    }

    /// PQI breakdown of one paper.
    #[must_use]
    pub fn paper_quality(&self, paper: &Paper) -> PaperQuality {
        let tier = self.corpus.venue_tier(paper.venue.as_deref());
        paper_quality(paper, tier, &self.catalog, self.config.current_year)
    }

    /// Yearly citations of an author's papers.
    ///
    /// Uses the declared histogram when the corpus carries one for the
    /// author, otherwise the histogram recomputed from citation edges.
    ///
    /// # Errors
    ///
    /// Returns the parse error of a malformed declared histogram.
    pub fn author_histogram(&self, author_id: &str) -> Result<YearlyCitations, HistogramError> {
        if self.corpus.histogram_source() == HistogramSource::Declared {
            if let Some(declared) = self.corpus.declared_histogram(author_id) {
                return declared.clone();
            }
            debug!(author_id, "No declared histogram, falling back to citation edges");
        }
        Ok(self.citations.author_histogram(self.corpus, author_id))
    }

    /// Metric row for one author. Unknown authors or authors without papers
    /// get an all-neutral row.
    #[must_use]
    pub fn author_metrics(&self, author_id: &str) -> AuthorMetrics {
        let papers: Vec<&Paper> = self.corpus.papers_of(author_id).collect();
        if papers.is_empty() {
            return AuthorMetrics::empty(author_id);
        }

        let current_year = self.config.current_year;
        let impacts: Vec<PaperImpact> = papers
            .iter()
            .map(|p| PaperImpact {
                year: p.year,
                citation_count: p.citation_count,
                author_count: self.corpus.author_count(&p.paper_id),
            })
            .collect();
        let career = career_length(papers.iter().map(|p| p.year), current_year);

        let (acc, error) = match self.author_histogram(author_id) {
            Ok(hist) => (acceleration(&hist, career, self.config.reference_year()), None),
            Err(e) => {
                warn!(author_id, error = %e, "Acceleration unavailable");
                (Acceleration::UNAVAILABLE, Some(e.to_string()))
            }
        };

        let qualities: Vec<PaperQuality> = papers.iter().map(|p| self.paper_quality(p)).collect();

        AuthorMetrics {
            author_id: author_id.to_string(),
            anci_score: anci(&impacts, current_year),
            cagr_score: acc.cagr,
            linear_trend_score: acc.linear_trend,
            acceleration_score: acc.composite,
            period_ratio: acc.period_ratio,
            pqi_score: author_pqi(&qualities),
            h_index: h_index(papers.iter().map(|p| p.citation_count)),
            career_length: career,
            paper_count: papers.len() as u32,
            total_citations: papers.iter().map(|p| u64::from(p.citation_count)).sum(),
            edge_citations: papers.iter().map(|p| self.citations.edge_citations(&p.paper_id)).sum(),
            error,
        }
    }

    /// Metric rows for every author, sorted by author ID.
    #[instrument(skip(self), fields(authors = self.corpus.authors().len(), parallel = self.config.parallel))]
    pub fn score_all(&self) -> Vec<AuthorMetrics> {
        let ids: Vec<&str> = self.corpus.authors().iter().map(|a| a.author_id.as_str()).collect();

        let mut rows: Vec<AuthorMetrics> = if self.config.parallel {
            ids.par_iter().map(|id| self.author_metrics(id)).collect()
        } else {
            ids.iter().map(|id| self.author_metrics(id)).collect()
        };
        rows.sort_by(|a, b| a.author_id.cmp(&b.author_id));

        let failed = rows.iter().filter(|r| r.error.is_some()).count();
        info!(rows = rows.len(), failed, "Scored authors");
        rows
    }
}

/// Value of a leaderboard metric for one row.
#[must_use]
pub fn metric_value(row: &AuthorMetrics, metric: LeaderboardMetric) -> f64 {
    match metric {
        LeaderboardMetric::Impact => row.anci_score,
        LeaderboardMetric::Acceleration => row.acceleration_score,
        LeaderboardMetric::Quality => row.pqi_score,
        LeaderboardMetric::HIndex => f64::from(row.h_index),
    }
}

/// Top `limit` authors by `metric`, descending, ties broken by author ID.
/// Authors with fewer than `min_papers` papers are left out.
#[must_use]
pub fn leaderboard(
    corpus: &Corpus,
    rows: &[AuthorMetrics],
    metric: LeaderboardMetric,
    limit: usize,
    min_papers: u32,
) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<(&AuthorMetrics, f64)> = rows
        .iter()
        .filter(|r| r.paper_count >= min_papers)
        .map(|r| (r, metric_value(r, metric)))
        .collect();
    ranked.sort_by(|(a, va), (b, vb)| match vb.total_cmp(va) {
        Ordering::Equal => a.author_id.cmp(&b.author_id),
        other => other,
    });

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (row, value))| LeaderboardEntry {
            rank: i + 1,
            author_id: row.author_id.clone(),
            name: corpus.author(&row.author_id).map_or_else(|| row.author_id.clone(), |a| a.display_name()),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusTables;
    use crate::models::{Author, Authorship, CitationEdge, DeclaredHistogram, VenueTier};

    fn tables() -> CorpusTables {
        let mut p1 = Paper::new("p1", "First", 2019);
        p1.citation_count = 10;
        p1.venue = Some("ACL".into());
        let mut p2 = Paper::new("p2", "Second", 2021);
        p2.citation_count = 5;

        CorpusTables {
            papers: vec![p1, p2, Paper::new("c1", "Citer", 2023), Paper::new("c2", "Citer", 2024)],
            authors: vec![
                Author::new("a2", "Bea", "Two"),
                Author::new("a1", "Ann", "One"),
                Author::new("a3", "Cal", "Idle"),
            ],
            authorships: vec![
                Authorship::new("a1", "p1"),
                Authorship::new("a2", "p1"),
                Authorship::new("a1", "p2"),
            ],
            citation_edges: vec![CitationEdge::new("c1", "p1"), CitationEdge::new("c2", "p2")],
            venue_tiers: vec![VenueTier { venue: "acl".into(), tier: "A".into() }],
            ..CorpusTables::default()
        }
    }

    #[test]
    fn test_author_metrics() {
        let corpus = Corpus::new(tables());
        let config = Config::for_testing();
        let row = Scorer::new(&corpus, &config).author_metrics("a1");

        assert!((row.anci_score - 10.0 / (2.0 * 7f64.sqrt())).abs() < 1e-12);
        assert_eq!(row.career_length, 7);
        assert_eq!(row.paper_count, 2);
        assert_eq!(row.h_index, 2);
        assert_eq!(row.total_citations, 15);
        assert_eq!(row.edge_citations, 2);
        assert!(row.cagr_score.is_some());
        assert!(row.error.is_none());
    }

    #[test]
    fn test_author_without_papers_is_neutral() {
        let corpus = Corpus::new(tables());
        let config = Config::for_testing();
        let scorer = Scorer::new(&corpus, &config);
        assert_eq!(scorer.author_metrics("a3"), AuthorMetrics::empty("a3"));
        assert_eq!(scorer.author_metrics("ghost"), AuthorMetrics::empty("ghost"));
    }

    #[test]
    fn test_score_all_sorted_and_parallel_agrees() {
        let corpus = Corpus::new(tables());
        let sequential = Config::for_testing();
        let parallel = Config { parallel: true, ..Config::for_testing() };

        let a = Scorer::new(&corpus, &sequential).score_all();
        let b = Scorer::new(&corpus, &parallel).score_all();
        let ids: Vec<&str> = a.iter().map(|r| r.author_id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_declared_histogram_is_isolated() {
        let mut t = tables();
        t.declared_histograms = vec![
            DeclaredHistogram { author_id: "a1".into(), citations_by_year: "not a histogram".into() },
            DeclaredHistogram { author_id: "a2".into(), citations_by_year: "{2021: 2, 2024: 8}".into() },
        ];
        let corpus = Corpus::new(t);
        let config = Config::for_testing();
        let rows = Scorer::new(&corpus, &config).score_all();

        let a1 = &rows[0];
        assert!(a1.error.is_some());
        assert_eq!(a1.cagr_score, None);
        assert_eq!(a1.acceleration_score, 0.0);
        assert!(a1.anci_score > 0.0);

        let a2 = &rows[1];
        assert!(a2.error.is_none());
        // career 7 -> n = 3: (8 + 1) / (2 + 1)
        assert!((a2.cagr_score.unwrap() - (3f64.cbrt() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_venue_tier_feeds_pqi() {
        let corpus = Corpus::new(tables());
        let config = Config::for_testing();
        let scorer = Scorer::new(&corpus, &config);
        let q = scorer.paper_quality(corpus.paper("p1").unwrap());
        assert_eq!(q.venue_score, 4.0);
        let q = scorer.paper_quality(corpus.paper("p2").unwrap());
        assert_eq!(q.venue_score, 1.0);
    }

    #[test]
    fn test_leaderboard_ordering() {
        let corpus = Corpus::new(tables());
        let config = Config::for_testing();
        let rows = Scorer::new(&corpus, &config).score_all();

        let board = leaderboard(&corpus, &rows, LeaderboardMetric::HIndex, 10, 0);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].author_id, "a1");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].name, "Ann One");
        assert_eq!(board[1].author_id, "a2");
        assert_eq!(board[2].author_id, "a3");

        let board = leaderboard(&corpus, &rows, LeaderboardMetric::Impact, 10, 1);
        assert_eq!(board.len(), 2);
        let board = leaderboard(&corpus, &rows, LeaderboardMetric::Impact, 1, 0);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_leaderboard_ties_by_id() {
        let corpus = Corpus::new(CorpusTables::default());
        let rows = vec![AuthorMetrics::empty("b"), AuthorMetrics::empty("a")];
        let board = leaderboard(&corpus, &rows, LeaderboardMetric::Quality, 10, 0);
        assert_eq!(board[0].author_id, "a");
        assert_eq!(board[0].name, "a");
        assert_eq!(board[1].rank, 2);
    }
}
