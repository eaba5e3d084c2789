//! Duplicate paper detection by shared external id.
//!
//! Rows sharing an external id and a normalized title are the same paper
//! ingested twice; the first row in input order survives. A dropped row that
//! repeats the kept row's `paper_id` needs no remap and is removed silently.
//! Rows sharing an external id but not a title are left alone and flagged for
//! re-verification.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use crate::models::{DedupReport, DroppedPaper, IdConflict, Paper};
use crate::normalize::normalize_title;

/// Result of [`deduplicate_papers`].
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    /// Papers relation without the dropped rows, in input order.
    pub papers: Vec<Paper>,
    /// What was dropped and what still conflicts.
    pub report: DedupReport,
}

/// Drop exact duplicates among papers sharing an external id.
#[must_use]
pub fn deduplicate_papers(papers: &[Paper]) -> DedupOutcome {
    let mut groups: BTreeMap<&str, Vec<(usize, &Paper)>> = BTreeMap::new();
    for (i, paper) in papers.iter().enumerate() {
        if let Some(ext) = paper.external_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            groups.entry(ext).or_default().push((i, paper));
        }
    }

    let mut dropped_rows = BTreeSet::new();
    let mut dropped = Vec::new();
    let mut repeated_rows = 0;
    let mut conflicts = Vec::new();

    for (external_id, members) in groups {
        if members.len() < 2 {
            continue;
        }

        // normalized title -> kept row
        let mut kept: Vec<(String, &Paper)> = Vec::new();
        for (i, paper) in members {
            let key = normalize_title(&paper.title);
            match kept.iter().find(|(k, _)| *k == key) {
                Some((_, first)) => {
                    debug!(paper_id = %paper.paper_id, kept_as = %first.paper_id, "Dropping duplicate paper");
                    dropped_rows.insert(i);
                    if paper.paper_id == first.paper_id {
                        repeated_rows += 1;
                    } else {
                        dropped.push(DroppedPaper {
                            paper_id: paper.paper_id.clone(),
                            kept_as: first.paper_id.clone(),
                        });
                    }
                }
                None => kept.push((key, paper)),
            }
        }

        if kept.len() > 1 {
            warn!(external_id, papers = kept.len(), "External id shared by different titles");
            conflicts.push(IdConflict {
                external_id: external_id.to_string(),
                paper_ids: kept.iter().map(|(_, p)| p.paper_id.clone()).collect(),
                titles: kept.iter().map(|(_, p)| p.title.clone()).collect(),
            });
        }
    }

    let kept_papers: Vec<Paper> = papers
        .iter()
        .enumerate()
        .filter(|(i, _)| !dropped_rows.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    info!(
        examined = papers.len(),
        dropped_rows = dropped_rows.len(),
        repeated_rows,
        conflicts = conflicts.len(),
        "Paper dedup complete"
    );

    DedupOutcome {
        papers: kept_papers,
        report: DedupReport { examined: papers.len(), dropped, repeated_rows, conflicts },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, ext: Option<&str>, title: &str) -> Paper {
        Paper { external_id: ext.map(Into::into), ..Paper::new(id, title, 2020) }
    }

    #[test]
    fn test_equal_titles_collapse_to_first_row() {
        let papers = vec![
            paper("p1", Some("doi:1"), "Neural Parsing"),
            paper("p2", Some("doi:1"), "neural parsing."),
            paper("p3", Some("doi:1"), "  Neural   Parsing "),
        ];
        let outcome = deduplicate_papers(&papers);

        assert_eq!(outcome.papers.len(), 1);
        assert_eq!(outcome.papers[0].paper_id, "p1");
        assert_eq!(
            outcome.report.dropped,
            vec![
                DroppedPaper { paper_id: "p2".into(), kept_as: "p1".into() },
                DroppedPaper { paper_id: "p3".into(), kept_as: "p1".into() },
            ]
        );
        assert!(outcome.report.conflicts.is_empty());
    }

    #[test]
    fn test_different_titles_are_flagged_not_merged() {
        let papers = vec![
            paper("p1", Some("doi:2"), "Parsing"),
            paper("p2", Some("doi:2"), "Tagging"),
            paper("p3", Some("doi:2"), "parsing"),
        ];
        let outcome = deduplicate_papers(&papers);

        assert_eq!(outcome.papers.iter().map(|p| p.paper_id.as_str()).collect::<Vec<_>>(), ["p1", "p2"]);
        assert_eq!(outcome.report.dropped.len(), 1);
        assert_eq!(outcome.report.conflicts.len(), 1);
        assert_eq!(outcome.report.conflicts[0].paper_ids, vec!["p1", "p2"]);
        assert_eq!(outcome.report.conflicts[0].titles, vec!["Parsing", "Tagging"]);
    }

    #[test]
    fn test_missing_external_ids_never_group() {
        let papers = vec![paper("p1", None, "Same"), paper("p2", Some(" "), "Same"), paper("p3", None, "Same")];
        let outcome = deduplicate_papers(&papers);
        assert_eq!(outcome.papers.len(), 3);
        assert_eq!(outcome.report.examined, 3);
        assert!(outcome.report.dropped.is_empty());
    }

    #[test]
    fn test_repeated_row_keeps_one_copy() {
        let mut twice = paper("p1", Some("doi:1"), "Neural Parsing");
        twice.citation_count = 10;
        let papers = vec![twice.clone(), twice, paper("p2", Some("doi:1"), "neural parsing")];
        let outcome = deduplicate_papers(&papers);

        assert_eq!(outcome.papers.len(), 1);
        assert_eq!(outcome.papers[0].paper_id, "p1");
        assert_eq!(outcome.papers[0].citation_count, 10);
        // only the row with a different id needs remapping
        assert_eq!(outcome.report.dropped, vec![DroppedPaper { paper_id: "p2".into(), kept_as: "p1".into() }]);
        assert_eq!(outcome.report.repeated_rows, 1);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let papers = vec![
            paper("p1", Some("x"), "A"),
            paper("p2", Some("x"), "a"),
            paper("p3", Some("y"), "B"),
        ];
        let once = deduplicate_papers(&papers);
        let twice = deduplicate_papers(&once.papers);
        assert_eq!(once.papers, twice.papers);
        assert!(twice.report.dropped.is_empty());
    }
}
