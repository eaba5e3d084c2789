//! Paper, citation edge and award relations.

use serde::{Deserialize, Serialize};

/// A published paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Canonical paper ID (unique within a corpus).
    pub paper_id: String,

    /// Cross-source identifier used for duplicate detection.
    #[serde(default)]
    pub external_id: Option<String>,

    /// Alternate identifiers (e.g. anthology ids such as `2023.acl-long.12`).
    #[serde(default)]
    pub alt_ids: Vec<String>,

    /// Paper title.
    #[serde(default)]
    pub title: String,

    /// Publication venue.
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication year.
    pub year: i32,

    /// Citation count declared by the source.
    #[serde(default)]
    pub citation_count: u32,

    /// Explicit track label, when the source provides one.
    #[serde(default)]
    pub track: Option<String>,

    /// Raw award strings joined from the awards relation.
    #[serde(default)]
    pub awards: Vec<String>,
}

impl Paper {
    /// Create a paper with the required fields.
    #[must_use]
    pub fn new(paper_id: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self { paper_id: paper_id.into(), title: title.into(), year, ..Self::default() }
    }

    /// Get the title, falling back to "Untitled" when blank.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.trim().is_empty() { "Untitled" } else { &self.title }
    }

    /// Year if it is a usable (positive) publication year.
    #[must_use]
    pub const fn known_year(&self) -> Option<i32> {
        if self.year > 0 { Some(self.year) } else { None }
    }

    /// Alternate ids joined into one searchable string.
    #[must_use]
    pub fn joined_alt_ids(&self) -> String {
        self.alt_ids.join(";")
    }
}

/// A directed citation: `citing_paper_id` cites `cited_paper_id`.
///
/// Either endpoint may reference a paper outside the corpus.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CitationEdge {
    /// Paper doing the citing.
    pub citing_paper_id: String,

    /// Paper being cited.
    pub cited_paper_id: String,
}

impl CitationEdge {
    /// Create an edge.
    #[must_use]
    pub fn new(citing: impl Into<String>, cited: impl Into<String>) -> Self {
        Self { citing_paper_id: citing.into(), cited_paper_id: cited.into() }
    }
}

/// One award attached to a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAward {
    /// Awarded paper.
    pub paper_id: String,

    /// Raw award string as published.
    pub award: String,
}

/// Catalog row overriding the built-in award mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardCatalogEntry {
    /// Raw award string.
    pub award: String,

    /// Canonical category.
    pub category: String,

    /// Weight of the category.
    pub weight: f64,
}
