//! Author, authorship and name-authority relations.

use serde::{Deserialize, Deserializer, Serialize};

/// A researcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique author ID.
    pub author_id: String,

    /// Given name (may be an initial).
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Total citation count from an external source.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub citation_count: Option<u32>,

    /// h-index from an external source.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub h_index: Option<u32>,
}

impl Author {
    /// Create an author with a name.
    #[must_use]
    pub fn new(author_id: impl Into<String>, first_name: &str, last_name: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            author_id: author_id.into(),
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            ..Self::default()
        }
    }

    /// "First Last", falling back to the ID when both names are missing.
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() { self.author_id.clone() } else { parts.join(" ") }
    }
}

/// Links an author to a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorship {
    /// Author ID.
    pub author_id: String,

    /// Paper ID.
    pub paper_id: String,

    /// Whether this is the paper's first author.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_first_author: bool,

    /// Whether this is the paper's last author.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_last_author: bool,
}

impl Authorship {
    /// Create an authorship row.
    #[must_use]
    pub fn new(author_id: impl Into<String>, paper_id: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            paper_id: paper_id.into(),
            is_first_author: false,
            is_last_author: false,
        }
    }

    /// Set the first/last author flags.
    #[must_use]
    pub const fn with_position(mut self, first: bool, last: bool) -> Self {
        self.is_first_author = first;
        self.is_last_author = last;
        self
    }
}

/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` (any case); blank is false.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_lowercase().as_str() {
        "" | "false" | "0" | "no" | "f" => Ok(false),
        "true" | "1" | "yes" | "t" => Ok(true),
        other => Err(serde::de::Error::custom(format!("invalid boolean flag '{other}'"))),
    }
}

/// Accepts integer counts, including the `"12.0"` spelling spreadsheet exports produce.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let digits = raw.strip_suffix(".0").unwrap_or(raw);
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid count '{raw}'")))
}

/// A row of the secondary name authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityRecord {
    /// Paper the name was observed on, by ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper the name was observed on, by title.
    #[serde(default)]
    pub paper_title: Option<String>,

    /// Given name as published.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name as published.
    #[serde(default)]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Author::new("a1", "Ada", "Lovelace").display_name(), "Ada Lovelace");
        assert_eq!(Author::new("a2", "", "Turing").display_name(), "Turing");
        assert_eq!(Author::new("a3", "", "").display_name(), "a3");
    }

    #[test]
    fn test_flag_parsing_from_csv() {
        let data = "author_id,paper_id,is_first_author,is_last_author\n\
                    a1,p1,True,0\n\
                    a2,p1,,yes\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Authorship> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert!(rows[0].is_first_author && !rows[0].is_last_author);
        assert!(!rows[1].is_first_author && rows[1].is_last_author);
    }

    #[test]
    fn test_author_counts_accept_float_spelling() {
        let data = "author_id,first_name,last_name,citation_count,h_index\n\
                    a1,Ada,Lovelace,120.0,7\n\
                    a2,,Turing,,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Author> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows[0].citation_count, Some(120));
        assert_eq!(rows[0].h_index, Some(7));
        assert_eq!(rows[1].first_name, None);
        assert_eq!(rows[1].citation_count, None);
    }

    #[test]
    fn test_flag_rejects_garbage() {
        let data = "author_id,paper_id,is_first_author,is_last_author\na1,p1,maybe,0\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: Result<Authorship, _> = reader.deserialize().next().unwrap();
        assert!(row.is_err());
    }
}
