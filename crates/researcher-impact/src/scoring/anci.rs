//! Career length and age-normalized fractional citation impact (ANCI).

/// The inputs ANCI needs from one paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperImpact {
    /// Publication year (non-positive means unknown).
    pub year: i32,
    /// Declared citation count.
    pub citation_count: u32,
    /// Distinct authors on the paper.
    pub author_count: usize,
}

impl PaperImpact {
    /// Citations divided evenly among the paper's authors.
    #[must_use]
    pub fn fractional_citations(&self) -> f64 {
        f64::from(self.citation_count) / self.author_count.max(1) as f64
    }
}

/// Years from the first publication through `current_year`, inclusive.
///
/// Only positive years count. No such year, or a first year after
/// `current_year`, gives 0.
#[must_use]
pub fn career_length(years: impl IntoIterator<Item = i32>, current_year: i32) -> i32 {
    years
        .into_iter()
        .filter(|&y| y > 0)
        .min()
        .map_or(0, |first| (current_year - first + 1).max(0))
}

/// `Σ fractional citations / (paper count × √career length)`.
///
/// Zero when there are no papers or the career length is not positive.
///
/// ```
/// use researcher_impact::scoring::anci::{anci, PaperImpact};
///
/// let papers = [
///     PaperImpact { year: 2019, citation_count: 10, author_count: 2 },
///     PaperImpact { year: 2021, citation_count: 5, author_count: 1 },
/// ];
/// assert!((anci(&papers, 2025) - 1.8898).abs() < 1e-4);
/// ```
#[must_use]
pub fn anci(papers: &[PaperImpact], current_year: i32) -> f64 {
    let years = career_length(papers.iter().map(|p| p.year), current_year);
    if papers.is_empty() || years <= 0 {
        return 0.0;
    }
    let fractional: f64 = papers.iter().map(PaperImpact::fractional_citations).sum();
    fractional / (papers.len() as f64 * f64::from(years).sqrt())
}
