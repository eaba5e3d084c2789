//! Citation aggregation: per-paper and per-author yearly histograms, h-index.

use std::collections::HashMap;

use tracing::debug;

use crate::corpus::Corpus;
use crate::models::YearlyCitations;

/// Yearly citation histograms recomputed from the edge relation.
///
/// Each distinct edge contributes one citation to the cited paper, in the
/// citing paper's publication year. Edges whose citing paper is unknown or
/// has no positive year are dropped.
#[derive(Debug, Clone, Default)]
pub struct CitationIndex {
    per_paper: HashMap<String, YearlyCitations>,
    dropped_edges: usize,
}

impl CitationIndex {
    /// Aggregate the corpus's citation edges.
    #[must_use]
    pub fn build(corpus: &Corpus) -> Self {
        let mut per_paper: HashMap<String, YearlyCitations> = HashMap::new();
        let mut dropped_edges = 0;

        for edge in corpus.citation_edges() {
            match corpus.paper(&edge.citing_paper_id).and_then(|p| p.known_year()) {
                Some(year) => per_paper.entry(edge.cited_paper_id.clone()).or_default().add(year, 1),
                None => dropped_edges += 1,
            }
        }

        debug!(
            cited_papers = per_paper.len(),
            dropped_edges,
            "Built citation histograms"
        );
        Self { per_paper, dropped_edges }
    }

    /// Histogram of one paper (empty if never cited).
    #[must_use]
    pub fn paper_histogram(&self, paper_id: &str) -> YearlyCitations {
        self.per_paper.get(paper_id).cloned().unwrap_or_default()
    }

    /// Sum of the histograms of an author's papers.
    #[must_use]
    pub fn author_histogram(&self, corpus: &Corpus, author_id: &str) -> YearlyCitations {
        let mut total = YearlyCitations::new();
        for paper in corpus.papers_of(author_id) {
            if let Some(hist) = self.per_paper.get(&paper.paper_id) {
                total.merge(hist);
            }
        }
        total
    }

    /// Citations of one paper recovered from edges.
    #[must_use]
    pub fn edge_citations(&self, paper_id: &str) -> u64 {
        self.per_paper.get(paper_id).map_or(0, YearlyCitations::total)
    }

    /// Edges dropped for lack of a citing-paper year.
    #[must_use]
    pub const fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }
}

/// Largest `h` such that `h` of the counts are at least `h`.
///
/// ```
/// use researcher_impact::citations::h_index;
///
/// assert_eq!(h_index([10, 8, 5, 4, 3]), 4);
/// assert_eq!(h_index([0, 0]), 0);
/// assert_eq!(h_index(std::iter::empty()), 0);
/// ```
#[must_use]
pub fn h_index(counts: impl IntoIterator<Item = u32>) -> u32 {
    let mut sorted: Vec<u32> = counts.into_iter().collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
        .iter()
        .enumerate()
        .take_while(|&(i, &c)| c as usize > i)
        .count() as u32
}

/// h-index of an author over their papers' declared citation counts.
///
/// `None` when the corpus holds none of the author's papers.
#[must_use]
pub fn author_h_index(corpus: &Corpus, author_id: &str) -> Option<u32> {
    let counts: Vec<u32> = corpus.papers_of(author_id).map(|p| p.citation_count).collect();
    (!counts.is_empty()).then(|| h_index(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusTables;
    use crate::models::{Authorship, CitationEdge, Paper};

    fn corpus() -> Corpus {
        Corpus::new(CorpusTables {
            papers: vec![
                Paper::new("p1", "Cited", 2018),
                Paper::new("p2", "Also cited", 2019),
                Paper::new("c1", "Citer one", 2021),
                Paper::new("c2", "Citer two", 2022),
                Paper::new("c3", "Yearless", 0),
            ],
            authorships: vec![
                Authorship::new("a1", "p1").with_position(true, true),
                Authorship::new("a1", "p2").with_position(true, true),
            ],
            citation_edges: vec![
                CitationEdge::new("c1", "p1"),
                CitationEdge::new("c1", "p1"),
                CitationEdge::new("c2", "p1"),
                CitationEdge::new("c2", "p2"),
                CitationEdge::new("c3", "p2"),
                CitationEdge::new("ghost", "p2"),
            ],
            ..CorpusTables::default()
        })
    }

    #[test]
    fn test_paper_histogram() {
        let index = CitationIndex::build(&corpus());
        let h = index.paper_histogram("p1");
        assert_eq!(h.get(2021), 1);
        assert_eq!(h.get(2022), 1);
        assert_eq!(index.edge_citations("p1"), 2);
        assert_eq!(index.edge_citations("p2"), 1);
        assert!(index.paper_histogram("c1").is_empty());
        assert_eq!(index.dropped_edges(), 2);
    }

    #[test]
    fn test_author_histogram_sums_papers() {
        let c = corpus();
        let index = CitationIndex::build(&c);
        let h = index.author_histogram(&c, "a1");
        assert_eq!(h.get(2021), 1);
        assert_eq!(h.get(2022), 2);
        assert_eq!(h.total(), 3);
        assert!(index.author_histogram(&c, "nobody").is_empty());
    }

    #[test]
    fn test_author_h_index() {
        let c = corpus();
        assert_eq!(author_h_index(&c, "a1"), Some(0));
        assert_eq!(author_h_index(&c, "nobody"), None);
    }

    #[test]
    fn test_h_index() {
        assert_eq!(h_index([3, 0, 6, 1, 5]), 3);
        assert_eq!(h_index([1, 1, 1]), 1);
        assert_eq!(h_index([100]), 1);
        assert_eq!(h_index([5, 5, 5, 5, 5]), 5);
    }
}
