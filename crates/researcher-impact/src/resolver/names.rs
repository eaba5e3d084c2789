//! First-name completion against a secondary name authority.
//!
//! An author whose first name is missing or abbreviated ("J.", "JR") is
//! matched against authority rows observed on the same papers, by paper id
//! (ours, the external id or an alternate id) or by normalized title. A unique compatible candidate replaces the name;
//! anything else leaves the record untouched.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::corpus::Corpus;
use crate::models::{AmbiguousMatch, Author, AuthorityRecord, NameChange, Paper, ResolutionReport};
use crate::normalize::{first_initial, is_incomplete_first_name, normalize_text, normalize_title};

/// Name completion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Replace the last name with the candidate's spelling as well.
    pub replace_last_name: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self { replace_last_name: true }
    }
}

/// Authority rows indexed by paper id and by normalized title.
struct AuthorityIndex<'a> {
    rows: &'a [AuthorityRecord],
    by_paper: HashMap<&'a str, Vec<usize>>,
    by_title: HashMap<String, Vec<usize>>,
}

impl<'a> AuthorityIndex<'a> {
    fn new(rows: &'a [AuthorityRecord]) -> Self {
        let mut by_paper: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if let Some(pid) = row.paper_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                by_paper.entry(pid).or_default().push(i);
            }
            if let Some(title) = row.paper_title.as_deref() {
                let key = normalize_title(title);
                if !key.is_empty() {
                    by_title.entry(key).or_default().push(i);
                }
            }
        }
        Self { rows, by_paper, by_title }
    }

    /// Rows observed on a paper, in authority order. Authority paper ids
    /// are matched against the paper's own id, its external id and each of
    /// its alternate ids.
    fn rows_for(&self, paper_id: &str, paper: Option<&Paper>, out: &mut BTreeSet<usize>) {
        let external = paper.and_then(|p| p.external_id.as_deref());
        let alt_ids = paper.map_or(&[][..], |p| p.alt_ids.as_slice());

        let ids = std::iter::once(paper_id).chain(external).chain(alt_ids.iter().map(String::as_str));
        for id in ids.map(str::trim).filter(|id| !id.is_empty()) {
            if let Some(rows) = self.by_paper.get(id) {
                out.extend(rows);
            }
        }
        if let Some(rows) = paper.map(|p| normalize_title(&p.title)).and_then(|t| self.by_title.get(&t)) {
            out.extend(rows);
        }
    }
}

/// Outcome for one incomplete author.
enum Resolution<'a> {
    Unique(&'a AuthorityRecord),
    Ambiguous(Vec<&'a AuthorityRecord>),
    Unmatched,
}

fn trimmed(s: Option<&str>) -> &str {
    s.map_or("", str::trim)
}

/// Distinct compatible candidates for an author, first occurrence kept.
fn resolve_one<'a>(author: &Author, row_ids: &BTreeSet<usize>, index: &AuthorityIndex<'a>) -> Resolution<'a> {
    let last = normalize_text(trimmed(author.last_name.as_deref()));
    if last.is_empty() {
        return Resolution::Unmatched;
    }
    let initial = first_initial(trimmed(author.first_name.as_deref()));

    let rows: &'a [AuthorityRecord] = index.rows;
    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
    let mut distinct = Vec::new();
    for &i in row_ids {
        let row = &rows[i];
        let first_raw = trimmed(row.first_name.as_deref());
        let last_raw = trimmed(row.last_name.as_deref());
        if first_raw.is_empty() || last_raw.is_empty() || is_incomplete_first_name(Some(first_raw)) {
            continue;
        }

        let cand_last = normalize_text(last_raw);
        if cand_last != last {
            continue;
        }
        if let Some(initial) = initial {
            if first_initial(first_raw) != Some(initial) {
                continue;
            }
        }

        if seen.insert((normalize_text(first_raw), cand_last)) {
            distinct.push(row);
        }
    }

    match distinct.len() {
        0 => Resolution::Unmatched,
        1 => Resolution::Unique(distinct[0]),
        _ => Resolution::Ambiguous(distinct),
    }
}

fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    let parts: Vec<&str> = [trimmed(first), trimmed(last)].into_iter().filter(|s| !s.is_empty()).collect();
    parts.join(" ")
}

/// Complete incomplete first names.
///
/// Returns a new authors relation (same order, same IDs) and a report.
/// Applying the result again changes nothing.
#[must_use]
pub fn resolve_names(corpus: &Corpus, options: ResolverOptions) -> (Vec<Author>, ResolutionReport) {
    let index = AuthorityIndex::new(corpus.authority());

    let mut papers_by_author: HashMap<&str, Vec<&str>> = HashMap::new();
    for row in corpus.authorships() {
        papers_by_author.entry(row.author_id.as_str()).or_default().push(row.paper_id.as_str());
    }

    let mut report = ResolutionReport::default();
    let mut authors = Vec::with_capacity(corpus.authors().len());

    for author in corpus.authors() {
        if !is_incomplete_first_name(author.first_name.as_deref()) {
            authors.push(author.clone());
            continue;
        }
        report.examined += 1;

        let mut row_ids = BTreeSet::new();
        for &paper_id in papers_by_author.get(author.author_id.as_str()).into_iter().flatten() {
            index.rows_for(paper_id, corpus.paper(paper_id), &mut row_ids);
        }

        let before = full_name(author.first_name.as_deref(), author.last_name.as_deref());
        match resolve_one(author, &row_ids, &index) {
            Resolution::Unique(row) => {
                let mut updated = author.clone();
                updated.first_name = Some(trimmed(row.first_name.as_deref()).to_string());
                if options.replace_last_name {
                    updated.last_name = Some(trimmed(row.last_name.as_deref()).to_string());
                }
                let after = full_name(updated.first_name.as_deref(), updated.last_name.as_deref());
                debug!(author_id = %author.author_id, %before, %after, "Completed first name");
                report.completed.push(NameChange { author_id: author.author_id.clone(), before, after });
                authors.push(updated);
            }
            Resolution::Ambiguous(rows) => {
                let candidates: Vec<String> = rows
                    .iter()
                    .map(|r| full_name(r.first_name.as_deref(), r.last_name.as_deref()))
                    .collect();
                warn!(author_id = %author.author_id, name = %before, ?candidates, "Ambiguous name completion");
                report.ambiguous.push(AmbiguousMatch {
                    author_id: author.author_id.clone(),
                    name: before,
                    candidates,
                });
                authors.push(author.clone());
            }
            Resolution::Unmatched => {
                report.unmatched += 1;
                authors.push(author.clone());
            }
        }
    }

    info!(
        examined = report.examined,
        completed = report.completed.len(),
        ambiguous = report.ambiguous.len(),
        unmatched = report.unmatched,
        "Name completion complete"
    );
    (authors, report)
}

/// Complete names and return the corrected corpus.
#[must_use]
pub fn resolve_corpus(corpus: &Corpus, options: ResolverOptions) -> (Corpus, ResolutionReport) {
    let (authors, report) = resolve_names(corpus, options);
    (corpus.with_authors(authors), report)
}
