//! Weighted co-authorship graph.
//!
//! Two authors are linked once per paper they share. Pairs are stored once
//! with the smaller ID first and expanded to both directions on output.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use crate::corpus::Corpus;
use crate::models::{Authorship, CoauthorEdge, CoauthorHIndex, Collaborator};

/// Undirected pair weights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoauthorGraph {
    pairs: BTreeMap<(String, String), u32>,
}

impl CoauthorGraph {
    /// Graph over every authorship row.
    #[must_use]
    pub fn build(corpus: &Corpus) -> Self {
        let graph = Self::from_authorships(corpus.authorships());
        debug!(pairs = graph.pair_count(), "Built co-author graph");
        graph
    }

    /// Ego network of `author_id`: all pairs within that author's papers.
    ///
    /// Pairs are enumerated per paper, so two co-authors of the target who
    /// never wrote together are not linked.
    #[must_use]
    pub fn ego(corpus: &Corpus, author_id: &str) -> Self {
        let own: HashSet<&str> = corpus
            .authorships()
            .iter()
            .filter(|r| r.author_id == author_id)
            .map(|r| r.paper_id.as_str())
            .collect();
        Self::from_authorships(corpus.authorships().iter().filter(|r| own.contains(r.paper_id.as_str())))
    }

    /// Graph from authorship rows grouped by paper.
    pub fn from_authorships<'a>(rows: impl IntoIterator<Item = &'a Authorship>) -> Self {
        let mut by_paper: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for row in rows {
            by_paper.entry(row.paper_id.as_str()).or_default().insert(row.author_id.as_str());
        }

        let mut pairs = BTreeMap::new();
        for authors in by_paper.values() {
            let authors: Vec<&str> = authors.iter().copied().collect();
            for (i, a) in authors.iter().enumerate() {
                for b in &authors[i + 1..] {
                    // BTreeSet order guarantees a < b
                    *pairs.entry(((*a).to_string(), (*b).to_string())).or_insert(0) += 1;
                }
            }
        }
        Self { pairs }
    }

    /// Shared-paper count of two authors (order-insensitive).
    #[must_use]
    pub fn weight(&self, a: &str, b: &str) -> u32 {
        let key = if a <= b { (a.to_string(), b.to_string()) } else { (b.to_string(), a.to_string()) };
        self.pairs.get(&key).copied().unwrap_or(0)
    }

    /// Number of linked pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pair is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Adjacency rows in both directions, sorted by `(author_id, coauthor_id)`.
    #[must_use]
    pub fn edges(&self) -> Vec<CoauthorEdge> {
        let mut edges: Vec<CoauthorEdge> = self
            .pairs
            .iter()
            .flat_map(|((a, b), &n)| {
                [
                    CoauthorEdge { author_id: a.clone(), coauthor_id: b.clone(), shared_paper_count: n },
                    CoauthorEdge { author_id: b.clone(), coauthor_id: a.clone(), shared_paper_count: n },
                ]
            })
            .collect();
        edges.sort();
        edges
    }

    /// Neighbors of an author with shared-paper counts, by ID.
    #[must_use]
    pub fn neighbors(&self, author_id: &str) -> BTreeMap<&str, u32> {
        self.pairs
            .iter()
            .filter_map(|((a, b), &n)| {
                if a == author_id {
                    Some((b.as_str(), n))
                } else if b == author_id {
                    Some((a.as_str(), n))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Collaborators with at least `min_shared` shared papers, most frequent
    /// first (ties by ID), capped at `limit`.
    #[must_use]
    pub fn collaborators(&self, corpus: &Corpus, author_id: &str, min_shared: u32, limit: usize) -> Vec<Collaborator> {
        let mut list: Vec<Collaborator> = self
            .neighbors(author_id)
            .into_iter()
            .filter(|&(_, n)| n >= min_shared)
            .map(|(id, n)| Collaborator {
                author_id: id.to_string(),
                name: corpus.author(id).map_or_else(|| id.to_string(), |a| a.display_name()),
                shared_papers: n,
            })
            .collect();
        list.sort_by(|a, b| b.shared_papers.cmp(&a.shared_papers).then_with(|| a.author_id.cmp(&b.author_id)));
        list.truncate(limit);
        list
    }

    /// Mean h-index of an author's co-authors.
    ///
    /// `h_index_of` returns `None` for co-authors without a usable value;
    /// those are counted but left out of the mean.
    pub fn coauthor_h_index(&self, author_id: &str, h_index_of: impl Fn(&str) -> Option<u32>) -> CoauthorHIndex {
        let neighbors = self.neighbors(author_id);
        let rated: Vec<u32> = neighbors.keys().filter_map(|id| h_index_of(*id)).collect();
        let mean_h_index = (!rated.is_empty())
            .then(|| rated.iter().map(|&h| f64::from(h)).sum::<f64>() / rated.len() as f64);

        CoauthorHIndex {
            author_id: author_id.to_string(),
            coauthor_count: neighbors.len() as u32,
            rated_coauthors: rated.len() as u32,
            mean_h_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusTables;
    use crate::models::{Author, Paper};

    fn corpus() -> Corpus {
        // p1: a,b,c   p2: a,b   p3: c,d   p4: e (solo)
        let rows = [("a", "p1"), ("b", "p1"), ("c", "p1"), ("a", "p2"), ("b", "p2"), ("c", "p3"), ("d", "p3"), ("e", "p4")];
        Corpus::new(CorpusTables {
            papers: ["p1", "p2", "p3", "p4"].iter().map(|id| Paper::new(*id, *id, 2020)).collect(),
            authors: vec![Author::new("a", "Ada", "A"), Author::new("b", "Bob", "B")],
            authorships: rows.iter().map(|(a, p)| Authorship::new(*a, *p)).collect(),
            ..CorpusTables::default()
        })
    }

    #[test]
    fn test_pair_weights() {
        let graph = CoauthorGraph::build(&corpus());
        assert_eq!(graph.weight("a", "b"), 2);
        assert_eq!(graph.weight("b", "a"), 2);
        assert_eq!(graph.weight("a", "c"), 1);
        assert_eq!(graph.weight("c", "d"), 1);
        assert_eq!(graph.weight("a", "d"), 0);
        assert_eq!(graph.weight("e", "a"), 0);
        assert_eq!(graph.pair_count(), 4);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let edges = CoauthorGraph::build(&corpus()).edges();
        assert_eq!(edges.len(), 8);
        for edge in &edges {
            assert!(edges.iter().any(|e| e.author_id == edge.coauthor_id
                && e.coauthor_id == edge.author_id
                && e.shared_paper_count == edge.shared_paper_count));
        }
    }

    #[test]
    fn test_ego_network_is_per_paper() {
        let ego = CoauthorGraph::ego(&corpus(), "a");
        assert_eq!(ego.weight("a", "b"), 2);
        assert_eq!(ego.weight("b", "c"), 1);
        // c-d share p3, which is not one of a's papers
        assert_eq!(ego.weight("c", "d"), 0);
        assert!(CoauthorGraph::ego(&corpus(), "e").is_empty());
    }

    #[test]
    fn test_repeated_authorship_rows_count_once() {
        let rows = vec![Authorship::new("x", "p"), Authorship::new("x", "p"), Authorship::new("y", "p")];
        let graph = CoauthorGraph::from_authorships(&rows);
        assert_eq!(graph.weight("x", "y"), 1);
    }

    #[test]
    fn test_collaborators_sorted_and_filtered() {
        let c = corpus();
        let graph = CoauthorGraph::build(&c);
        let list = graph.collaborators(&c, "a", 1, 10);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].author_id, "b");
        assert_eq!(list[0].name, "Bob B");
        assert_eq!(list[0].shared_papers, 2);
        assert_eq!(list[1].name, "c");

        assert_eq!(graph.collaborators(&c, "a", 2, 10).len(), 1);
        assert_eq!(graph.collaborators(&c, "a", 1, 1).len(), 1);
    }

    #[test]
    fn test_coauthor_h_index() {
        let graph = CoauthorGraph::build(&corpus());
        let h = |id: &str| match id {
            "b" => Some(4),
            "c" => Some(2),
            _ => None,
        };
        let result = graph.coauthor_h_index("a", h);
        assert_eq!(result.coauthor_count, 2);
        assert_eq!(result.rated_coauthors, 2);
        assert_eq!(result.mean_h_index, Some(3.0));

        let lonely = graph.coauthor_h_index("e", h);
        assert_eq!(lonely.coauthor_count, 0);
        assert_eq!(lonely.mean_h_index, None);
    }
}
