//! CSV ingestion and export.
//!
//! Tables are read on tokio's blocking pool, one task per file, and joined
//! with `try_join!`. Optional tables that are absent read as empty.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, instrument};

use super::{Corpus, CorpusTables};
use crate::config::files;
use crate::error::{LoadError, LoadResult};
use crate::models::{
    deserialize_count, Author, AuthorityRecord, Authorship, AwardCatalogEntry, CitationEdge,
    DeclaredHistogram, Paper, PaperAward, VenueTier,
};

/// Row of `papers.csv`; alternate ids are `;`-separated in one column.
#[derive(Debug, Deserialize)]
struct PaperRecord {
    paper_id: String,
    #[serde(default)]
    external_id: Option<String>,
    #[serde(default)]
    alt_ids: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    venue: Option<String>,
    #[serde(deserialize_with = "deserialize_year")]
    year: i32,
    #[serde(default, deserialize_with = "deserialize_count")]
    citation_count: Option<u32>,
    #[serde(default)]
    track: Option<String>,
}

impl From<PaperRecord> for Paper {
    fn from(row: PaperRecord) -> Self {
        let alt_ids = row
            .alt_ids
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let blank_to_none = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        Self {
            paper_id: row.paper_id,
            external_id: blank_to_none(row.external_id),
            alt_ids,
            title: row.title.unwrap_or_default(),
            venue: blank_to_none(row.venue),
            year: row.year,
            citation_count: row.citation_count.unwrap_or(0),
            track: blank_to_none(row.track),
            awards: Vec::new(),
        }
    }
}

/// Integer year, accepting `"2021.0"`; blank reads as 0 (unknown).
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.strip_suffix(".0")
        .unwrap_or(raw)
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid year '{raw}'")))
}

/// Read every row of a CSV table.
///
/// # Errors
///
/// Returns [`LoadError::MissingTable`] if the file does not exist,
/// [`LoadError::Io`] if it cannot be opened, and [`LoadError::Csv`] on the
/// first row that does not decode.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    if !path.exists() {
        return Err(LoadError::MissingTable(path.to_path_buf()));
    }
    let table = table_name(path);
    let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(file);

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| LoadError::csv(&table, e))?;
    debug!(table = %table, rows = rows.len(), "Read table");
    Ok(rows)
}

/// Like [`read_table`], but a missing file reads as an empty table.
///
/// # Errors
///
/// Same as [`read_table`], except for a missing file.
pub fn read_optional_table<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    match read_table(path) {
        Err(LoadError::MissingTable(_)) => {
            debug!(table = %table_name(path), "Optional table absent");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Write rows as a CSV table with a header row.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be created and
/// [`LoadError::Csv`] if a row cannot be written.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> LoadResult<()> {
    let table = table_name(path);
    let mut writer = csv::Writer::from_path(path).map_err(|e| LoadError::csv(&table, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| LoadError::csv(&table, e))?;
    }
    writer.flush().map_err(|e| LoadError::io(path, e))?;
    debug!(table = %table, rows = rows.len(), "Wrote table");
    Ok(())
}

fn table_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn read_papers(path: &Path) -> LoadResult<Vec<Paper>> {
    Ok(read_table::<PaperRecord>(path)?.into_iter().map(Paper::from).collect())
}

/// Read all tables from a directory synchronously.
///
/// # Errors
///
/// Fails if a required table is missing or any table is malformed.
pub fn load_dir_blocking(dir: &Path) -> LoadResult<Corpus> {
    let tables = CorpusTables {
        papers: read_papers(&dir.join(files::PAPERS))?,
        authors: read_table(&dir.join(files::AUTHORS))?,
        authorships: read_table(&dir.join(files::AUTHORSHIPS))?,
        citation_edges: read_table(&dir.join(files::CITATION_EDGES))?,
        venue_tiers: read_optional_table(&dir.join(files::VENUE_TIERS))?,
        paper_awards: read_optional_table(&dir.join(files::PAPER_AWARDS))?,
        award_catalog: read_optional_table(&dir.join(files::AWARD_CATALOG))?,
        authority: read_optional_table(&dir.join(files::AUTHORITY_AUTHORS))?,
        declared_histograms: read_optional_table(&dir.join(files::AUTHOR_CITATIONS))?,
    };
    Ok(build(tables))
}

/// Read all tables from a directory, one blocking task per table.
///
/// # Errors
///
/// Fails if a required table is missing, any table is malformed, or a
/// loader task panics.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub async fn load_dir(dir: impl AsRef<Path>) -> LoadResult<Corpus> {
    let dir = dir.as_ref().to_path_buf();
    let path = |name: &str| -> PathBuf { dir.join(name) };

    fn spawn<T, F>(path: PathBuf, read: F) -> tokio::task::JoinHandle<LoadResult<Vec<T>>>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> LoadResult<Vec<T>> + Send + 'static,
    {
        tokio::task::spawn_blocking(move || read(&path))
    }

    let (papers, authors, authorships, edges, tiers, awards, catalog, authority, declared) = tokio::try_join!(
        spawn(path(files::PAPERS), read_papers),
        spawn(path(files::AUTHORS), read_table::<Author>),
        spawn(path(files::AUTHORSHIPS), read_table::<Authorship>),
        spawn(path(files::CITATION_EDGES), read_table::<CitationEdge>),
        spawn(path(files::VENUE_TIERS), read_optional_table::<VenueTier>),
        spawn(path(files::PAPER_AWARDS), read_optional_table::<PaperAward>),
        spawn(path(files::AWARD_CATALOG), read_optional_table::<AwardCatalogEntry>),
        spawn(path(files::AUTHORITY_AUTHORS), read_optional_table::<AuthorityRecord>),
        spawn(path(files::AUTHOR_CITATIONS), read_optional_table::<DeclaredHistogram>),
    )?;

    let tables = CorpusTables {
        papers: papers?,
        authors: authors?,
        authorships: authorships?,
        citation_edges: edges?,
        venue_tiers: tiers?,
        paper_awards: awards?,
        award_catalog: catalog?,
        authority: authority?,
        declared_histograms: declared?,
    };
    Ok(build(tables))
}

fn build(tables: CorpusTables) -> Corpus {
    info!(
        papers = tables.papers.len(),
        authors = tables.authors.len(),
        authorships = tables.authorships.len(),
        edges = tables.citation_edges.len(),
        authority = tables.authority.len(),
        declared_histograms = tables.declared_histograms.len(),
        "Loaded corpus tables"
    );
    Corpus::new(tables)
}
