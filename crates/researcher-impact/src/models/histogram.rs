//! Year-indexed citation histograms.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::HistogramError;

/// Citations received per calendar year.
///
/// Serializes as a JSON object keyed by year (`{"2021": 3}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearlyCitations(BTreeMap<i32, u32>);

impl YearlyCitations {
    /// Empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` citations to `year`.
    pub fn add(&mut self, year: i32, count: u32) {
        *self.0.entry(year).or_insert(0) += count;
    }

    /// Fold another histogram into this one.
    pub fn merge(&mut self, other: &Self) {
        for (&year, &count) in &other.0 {
            self.add(year, count);
        }
    }

    /// Citations in `year` (0 when absent).
    #[must_use]
    pub fn get(&self, year: i32) -> u32 {
        self.0.get(&year).copied().unwrap_or(0)
    }

    /// Sum over an inclusive year range.
    #[must_use]
    pub fn sum_range(&self, years: RangeInclusive<i32>) -> u64 {
        self.range(years).map(|(_, c)| u64::from(c)).sum()
    }

    /// Total citations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().map(|&c| u64::from(c)).sum()
    }

    /// Earliest year present.
    #[must_use]
    pub fn earliest_year(&self) -> Option<i32> {
        self.0.keys().next().copied()
    }

    /// Number of years present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no year is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(year, count)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.0.iter().map(|(&y, &c)| (y, c))
    }

    /// `(year, count)` pairs whose year lies in an inclusive range. An inverted
    /// range yields nothing.
    pub fn range(&self, years: RangeInclusive<i32>) -> impl Iterator<Item = (i32, u32)> + '_ {
        let years = if years.start() <= years.end() { Some(years) } else { None };
        years.into_iter().flat_map(|r| self.0.range(r)).map(|(&y, &c)| (y, c))
    }

    /// Parse a serialized histogram.
    ///
    /// Accepts a JSON object (`{"2021": 3}`), the same mapping with bare
    /// (`{2021: 3}`) or single-quoted (`{'2021': 3}`) keys, and `{}`. A blank
    /// string is an empty histogram. Later duplicate keys win.
    ///
    /// ```
    /// use researcher_impact::models::YearlyCitations;
    ///
    /// let h = YearlyCitations::parse("{'2021': 3, 2022: 5}").unwrap();
    /// assert_eq!(h.get(2021), 3);
    /// assert_eq!(h.total(), 8);
    /// assert!(YearlyCitations::parse("[2021, 3]").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, HistogramError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::new());
        }

        let inner = text
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| HistogramError::Syntax(text.to_string()))?
            .trim();

        let mut map = BTreeMap::new();
        if inner.is_empty() {
            return Ok(Self(map));
        }

        let entries: Vec<&str> = inner.split(',').collect();
        let last = entries.len() - 1;
        for (i, entry) in entries.into_iter().enumerate() {
            let entry = entry.trim();
            if entry.is_empty() {
                if i == last {
                    break;
                }
                return Err(HistogramError::Syntax(text.to_string()));
            }

            let (key, value) =
                entry.split_once(':').ok_or_else(|| HistogramError::Syntax(text.to_string()))?;

            let key = unquote(key.trim());
            let year: i32 = key.parse().map_err(|_| HistogramError::InvalidYear(key.to_string()))?;

            let value = value.trim();
            let count = parse_count(value)
                .ok_or_else(|| HistogramError::InvalidCount { year, count: value.to_string() })?;

            map.insert(year, count);
        }

        Ok(Self(map))
    }
}

/// Row of the declared per-author histogram table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredHistogram {
    /// Author ID.
    pub author_id: String,

    /// Serialized `{year: count}` mapping.
    #[serde(default)]
    pub citations_by_year: String,
}

impl FromIterator<(i32, u32)> for YearlyCitations {
    fn from_iter<I: IntoIterator<Item = (i32, u32)>>(iter: I) -> Self {
        let mut hist = Self::new();
        for (year, count) in iter {
            hist.add(year, count);
        }
        hist
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner.trim();
        }
    }
    s
}

/// Non-negative integer, allowing a trailing `.0`.
fn parse_count(value: &str) -> Option<u32> {
    let value = unquote(value);
    value.strip_suffix(".0").unwrap_or(value).parse().ok()
}
