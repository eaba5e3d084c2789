//! Immutable, indexed view over the bibliographic relations.
//!
//! A [`Corpus`] is built once from [`CorpusTables`] and never mutated.
//! Operations that correct data (name completion, paper dedup) return a new
//! corpus built from new tables.

pub mod loader;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::error::HistogramError;
use crate::models::{
    Author, AuthorityRecord, Authorship, AwardCatalogEntry, CitationEdge, DeclaredHistogram,
    DedupReport, Paper, PaperAward, Tier, VenueTier, YearlyCitations,
};
use crate::normalize::normalize_venue;
use crate::resolver::dedup::{deduplicate_papers, DedupOutcome};
use crate::scoring::awards::AwardCatalog;

/// Raw relations as read from storage.
#[derive(Debug, Clone, Default)]
pub struct CorpusTables {
    /// Papers relation.
    pub papers: Vec<Paper>,
    /// Authors relation.
    pub authors: Vec<Author>,
    /// Authorship join relation.
    pub authorships: Vec<Authorship>,
    /// Citation edges (may dangle, may repeat).
    pub citation_edges: Vec<CitationEdge>,
    /// Venue tier table.
    pub venue_tiers: Vec<VenueTier>,
    /// Awards per paper, joined into `Paper::awards`.
    pub paper_awards: Vec<PaperAward>,
    /// Award catalog override; empty means the built-in catalog.
    pub award_catalog: Vec<AwardCatalogEntry>,
    /// Secondary name authority.
    pub authority: Vec<AuthorityRecord>,
    /// Declared per-author histograms; empty means histograms come from edges.
    pub declared_histograms: Vec<DeclaredHistogram>,
}

/// Where per-author citation histograms come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramSource {
    /// Recomputed from citation edges and citing-paper years.
    Edges,
    /// Read from the declared histogram table.
    Declared,
}

/// An authorship-relation problem found by [`Corpus::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A paper's authorships do not flag exactly one first author.
    FirstAuthorCount {
        /// Paper ID
        paper_id: String,
        /// Number of rows flagged
        count: usize,
    },
    /// A paper's authorships do not flag exactly one last author.
    LastAuthorCount {
        /// Paper ID
        paper_id: String,
        /// Number of rows flagged
        count: usize,
    },
    /// An authorship names a paper absent from the papers relation.
    UnknownPaper {
        /// Author ID
        author_id: String,
        /// Paper ID
        paper_id: String,
    },
    /// An authorship names an author absent from the authors relation.
    UnknownAuthor {
        /// Author ID
        author_id: String,
        /// Paper ID
        paper_id: String,
    },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstAuthorCount { paper_id, count } => {
                write!(f, "paper {paper_id} has {count} first authors (expected 1)")
            }
            Self::LastAuthorCount { paper_id, count } => {
                write!(f, "paper {paper_id} has {count} last authors (expected 1)")
            }
            Self::UnknownPaper { author_id, paper_id } => {
                write!(f, "authorship {author_id} -> {paper_id} references an unknown paper")
            }
            Self::UnknownAuthor { author_id, paper_id } => {
                write!(f, "authorship {author_id} -> {paper_id} references an unknown author")
            }
        }
    }
}

/// Indexed relations.
#[derive(Debug, Clone)]
pub struct Corpus {
    papers: Vec<Paper>,
    authors: Vec<Author>,
    authorships: Vec<Authorship>,
    citation_edges: Vec<CitationEdge>,
    venue_tier_rows: Vec<VenueTier>,
    venue_tiers: HashMap<String, Tier>,
    award_catalog_rows: Vec<AwardCatalogEntry>,
    award_catalog: Option<AwardCatalog>,
    authority: Vec<AuthorityRecord>,
    declared_rows: Vec<DeclaredHistogram>,
    declared: HashMap<String, Result<YearlyCitations, HistogramError>>,
    paper_index: HashMap<String, usize>,
    author_index: HashMap<String, usize>,
    papers_by_author: HashMap<String, Vec<usize>>,
    authors_by_paper: HashMap<String, Vec<String>>,
}

impl Corpus {
    /// Index a set of tables.
    ///
    /// Awards are joined into their papers, citation edges are de-duplicated,
    /// venue names are normalized and declared histograms are parsed. Rows
    /// that cannot be interpreted are logged and skipped, except malformed
    /// histograms which are kept as errors for the affected author.
    #[must_use]
    pub fn new(tables: CorpusTables) -> Self {
        let CorpusTables {
            mut papers,
            authors,
            authorships,
            citation_edges,
            venue_tiers: venue_tier_rows,
            paper_awards,
            award_catalog: award_catalog_rows,
            authority,
            declared_histograms: declared_rows,
        } = tables;

        let mut paper_index = HashMap::with_capacity(papers.len());
        for (i, paper) in papers.iter().enumerate() {
            if paper_index.contains_key(&paper.paper_id) {
                warn!(paper_id = %paper.paper_id, "Duplicate paper_id, keeping first row");
            } else {
                paper_index.insert(paper.paper_id.clone(), i);
            }
        }

        for award in paper_awards {
            match paper_index.get(&award.paper_id) {
                Some(&i) => {
                    let awards = &mut papers[i].awards;
                    if !awards.contains(&award.award) {
                        awards.push(award.award);
                    }
                }
                None => debug!(paper_id = %award.paper_id, "Award for unknown paper ignored"),
            }
        }

        let mut author_index = HashMap::with_capacity(authors.len());
        for (i, author) in authors.iter().enumerate() {
            if author_index.contains_key(&author.author_id) {
                warn!(author_id = %author.author_id, "Duplicate author_id, keeping first row");
            } else {
                author_index.insert(author.author_id.clone(), i);
            }
        }

        let mut papers_by_author: HashMap<String, Vec<usize>> = HashMap::new();
        let mut authors_by_paper: HashMap<String, Vec<String>> = HashMap::new();
        for row in &authorships {
            let Some(&pi) = paper_index.get(&row.paper_id) else {
                continue;
            };
            let papers_of = papers_by_author.entry(row.author_id.clone()).or_default();
            if !papers_of.contains(&pi) {
                papers_of.push(pi);
            }
            let authors_of = authors_by_paper.entry(row.paper_id.clone()).or_default();
            if !authors_of.contains(&row.author_id) {
                authors_of.push(row.author_id.clone());
            }
        }

        let citation_edges: Vec<CitationEdge> =
            citation_edges.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

        let mut venue_tiers = HashMap::new();
        for row in &venue_tier_rows {
            match row.tier.parse::<Tier>() {
                Ok(tier) => {
                    venue_tiers.insert(normalize_venue(&row.venue), tier);
                }
                Err(e) => warn!(venue = %row.venue, error = %e, "Skipping venue tier row"),
            }
        }

        let award_catalog = (!award_catalog_rows.is_empty())
            .then(|| AwardCatalog::from_entries(&award_catalog_rows));

        let mut declared = HashMap::with_capacity(declared_rows.len());
        for row in &declared_rows {
            let parsed = YearlyCitations::parse(&row.citations_by_year);
            if let Err(e) = &parsed {
                warn!(author_id = %row.author_id, error = %e, "Malformed citation histogram");
            }
            declared.insert(row.author_id.clone(), parsed);
        }

        Self {
            papers,
            authors,
            authorships,
            citation_edges,
            venue_tier_rows,
            venue_tiers,
            award_catalog_rows,
            award_catalog,
            authority,
            declared_rows,
            declared,
            paper_index,
            author_index,
            papers_by_author,
            authors_by_paper,
        }
    }

    /// Copy the relations back out, with awards already joined into papers.
    #[must_use]
    pub fn to_tables(&self) -> CorpusTables {
        CorpusTables {
            papers: self.papers.clone(),
            authors: self.authors.clone(),
            authorships: self.authorships.clone(),
            citation_edges: self.citation_edges.clone(),
            venue_tiers: self.venue_tier_rows.clone(),
            paper_awards: Vec::new(),
            award_catalog: self.award_catalog_rows.clone(),
            authority: self.authority.clone(),
            declared_histograms: self.declared_rows.clone(),
        }
    }

    /// A new corpus with the authors relation replaced.
    #[must_use]
    pub fn with_authors(&self, authors: Vec<Author>) -> Self {
        Self::new(CorpusTables { authors, ..self.to_tables() })
    }

    /// Drop duplicate papers and remap authorships and edges to the kept rows.
    ///
    /// Rows that become identical after remapping collapse into one.
    #[must_use]
    pub fn deduplicated(&self) -> (Self, DedupReport) {
        let DedupOutcome { papers, report } = deduplicate_papers(&self.papers);
        if papers.len() == self.papers.len() {
            return (self.clone(), report);
        }

        let remap: HashMap<&str, &str> = report
            .dropped
            .iter()
            .map(|d| (d.paper_id.as_str(), d.kept_as.as_str()))
            .collect();
        let target = |id: &str| remap.get(id).map_or_else(|| id.to_string(), |k| (*k).to_string());

        let mut seen = BTreeMap::new();
        for row in &self.authorships {
            let paper_id = target(&row.paper_id);
            let entry = seen
                .entry((row.author_id.clone(), paper_id.clone()))
                .or_insert_with(|| Authorship::new(row.author_id.clone(), paper_id));
            entry.is_first_author |= row.is_first_author;
            entry.is_last_author |= row.is_last_author;
        }
        // BTreeMap ordering would reshuffle rows; keep first-seen order instead.
        let mut authorships = Vec::with_capacity(seen.len());
        for row in &self.authorships {
            if let Some(merged) = seen.remove(&(row.author_id.clone(), target(&row.paper_id))) {
                authorships.push(merged);
            }
        }

        // An edge between two copies of the same paper is not a citation.
        let citation_edges = self
            .citation_edges
            .iter()
            .filter_map(|e| {
                let remapped = CitationEdge::new(target(&e.citing_paper_id), target(&e.cited_paper_id));
                let collapsed = e.citing_paper_id != e.cited_paper_id
                    && remapped.citing_paper_id == remapped.cited_paper_id;
                (!collapsed).then_some(remapped)
            })
            .collect();

        let tables = CorpusTables { papers, authorships, citation_edges, ..self.to_tables() };
        (Self::new(tables), report)
    }

    /// Check the authorship relation. Violations are logged, never fatal.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut first: BTreeMap<&str, usize> = BTreeMap::new();
        let mut last: BTreeMap<&str, usize> = BTreeMap::new();
        let mut warnings = Vec::new();

        for row in &self.authorships {
            if !self.paper_index.contains_key(&row.paper_id) {
                warnings.push(ValidationWarning::UnknownPaper {
                    author_id: row.author_id.clone(),
                    paper_id: row.paper_id.clone(),
                });
                continue;
            }
            if !self.author_index.contains_key(&row.author_id) {
                warnings.push(ValidationWarning::UnknownAuthor {
                    author_id: row.author_id.clone(),
                    paper_id: row.paper_id.clone(),
                });
            }
            *first.entry(&row.paper_id).or_insert(0) += usize::from(row.is_first_author);
            *last.entry(&row.paper_id).or_insert(0) += usize::from(row.is_last_author);
        }

        for (paper_id, count) in first {
            if count != 1 {
                warnings.push(ValidationWarning::FirstAuthorCount { paper_id: paper_id.into(), count });
            }
        }
        for (paper_id, count) in last {
            if count != 1 {
                warnings.push(ValidationWarning::LastAuthorCount { paper_id: paper_id.into(), count });
            }
        }

        for warning in &warnings {
            warn!(%warning, "Authorship invariant violated");
        }
        warnings
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// All papers, in input order.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// All authors, in input order.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All authorship rows.
    #[must_use]
    pub fn authorships(&self) -> &[Authorship] {
        &self.authorships
    }

    /// Distinct citation edges, sorted.
    #[must_use]
    pub fn citation_edges(&self) -> &[CitationEdge] {
        &self.citation_edges
    }

    /// Secondary name authority rows, in input order.
    #[must_use]
    pub fn authority(&self) -> &[AuthorityRecord] {
        &self.authority
    }

    /// Paper by ID.
    #[must_use]
    pub fn paper(&self, paper_id: &str) -> Option<&Paper> {
        self.paper_index.get(paper_id).map(|&i| &self.papers[i])
    }

    /// Author by ID.
    #[must_use]
    pub fn author(&self, author_id: &str) -> Option<&Author> {
        self.author_index.get(author_id).map(|&i| &self.authors[i])
    }

    /// Distinct known papers of an author, in authorship order.
    pub fn papers_of<'a>(&'a self, author_id: &str) -> impl Iterator<Item = &'a Paper> + 'a {
        self.papers_by_author
            .get(author_id)
            .into_iter()
            .flatten()
            .map(|&i| &self.papers[i])
    }

    /// Distinct authors of a paper, in authorship order.
    #[must_use]
    pub fn authors_of(&self, paper_id: &str) -> &[String] {
        self.authors_by_paper.get(paper_id).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct authors on a paper.
    #[must_use]
    pub fn author_count(&self, paper_id: &str) -> usize {
        self.authors_of(paper_id).len()
    }

    /// Tier of a venue; unknown or missing venues are tier D.
    #[must_use]
    pub fn venue_tier(&self, venue: Option<&str>) -> Tier {
        venue
            .and_then(|v| self.venue_tiers.get(&normalize_venue(v)))
            .copied()
            .unwrap_or_default()
    }

    /// Award catalog override, if one was supplied.
    #[must_use]
    pub fn award_catalog(&self) -> Option<&AwardCatalog> {
        self.award_catalog.as_ref()
    }

    /// Which histogram source metric computation should use.
    #[must_use]
    pub fn histogram_source(&self) -> HistogramSource {
        if self.declared.is_empty() { HistogramSource::Edges } else { HistogramSource::Declared }
    }

    /// Declared histogram of an author, if the table has a row for them.
    #[must_use]
    pub fn declared_histogram(&self, author_id: &str) -> Option<&Result<YearlyCitations, HistogramError>> {
        self.declared.get(author_id)
    }
}
