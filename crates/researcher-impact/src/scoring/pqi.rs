//! Publication quality index.
//!
//! `PQI = 0.4·venue + 0.3·ln(citations + 1) + 0.2·award + 0.1·recency`
//! where `venue` is the tier score times the track weight and `award` is the
//! best known award normalized by the catalog's scale.

use crate::config::scoring::{PQI_AWARD_WEIGHT, PQI_CITATION_WEIGHT, PQI_RECENCY_WEIGHT, PQI_VENUE_WEIGHT};
use crate::models::{Paper, PaperQuality, Tier};

use super::awards::AwardCatalog;
use super::track::paper_track;

/// `1 / (1 + age)`, with future years treated as age 0 and unknown years as 0.0.
#[must_use]
pub fn recency(year: i32, current_year: i32) -> f64 {
    if year <= 0 {
        return 0.0;
    }
    1.0 / (1.0 + f64::from((current_year - year).max(0)))
}

/// Sub-scores and PQI of one paper.
#[must_use]
pub fn paper_quality(paper: &Paper, tier: Tier, catalog: &AwardCatalog, current_year: i32) -> PaperQuality {
    let track = paper_track(paper);
    let venue_score = tier.score() * track.weight();
    let citation_score = f64::from(paper.citation_count).ln_1p();
    let award_score = catalog.score(&paper.awards);
    let recency_score = recency(paper.year, current_year);

    PaperQuality {
        paper_id: paper.paper_id.clone(),
        tier,
        track,
        venue_score,
        citation_score,
        award_score,
        recency_score,
        pqi: PQI_VENUE_WEIGHT * venue_score
            + PQI_CITATION_WEIGHT * citation_score
            + PQI_AWARD_WEIGHT * award_score
            + PQI_RECENCY_WEIGHT * recency_score,
    }
}

/// Mean PQI over an author's papers (0.0 with no papers).
#[must_use]
pub fn author_pqi(papers: &[PaperQuality]) -> f64 {
    if papers.is_empty() {
        return 0.0;
    }
    papers.iter().map(|q| q.pqi).sum::<f64>() / papers.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AwardScale, Track};

    fn paper(citations: u32, year: i32, track: &str, awards: &[&str]) -> Paper {
        Paper {
            citation_count: citations,
            track: Some(track.to_string()),
            awards: awards.iter().map(|a| (*a).to_string()).collect(),
            ..Paper::new("p1", "Title", year)
        }
    }

    #[test]
    fn test_worked_example() {
        let catalog = AwardCatalog::builtin(AwardScale::Points);
        let q = paper_quality(&paper(24, 2023, "long", &["Best Paper"]), Tier::A, &catalog, 2025);

        assert_eq!(q.track, Track::Long);
        assert_eq!(q.venue_score, 4.0);
        assert!((q.citation_score - 25f64.ln()).abs() < 1e-12);
        assert_eq!(q.award_score, 1.0);
        assert!((q.recency_score - 1.0 / 3.0).abs() < 1e-12);
        assert!((q.pqi - 2.7990).abs() < 1e-4);
    }

    #[test]
    fn test_track_weight_scales_venue() {
        let catalog = AwardCatalog::builtin(AwardScale::Points);
        let q = paper_quality(&paper(0, 2025, "short", &[]), Tier::B, &catalog, 2025);
        assert!((q.venue_score - 2.4).abs() < 1e-12);
        assert_eq!(q.citation_score, 0.0);
        assert_eq!(q.award_score, 0.0);
        assert_eq!(q.recency_score, 1.0);
        assert!((q.pqi - (0.4 * 2.4 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_track_zeroes_venue() {
        let catalog = AwardCatalog::builtin(AwardScale::Points);
        let q = paper_quality(&paper(3, 2020, "Poster session", &[]), Tier::A, &catalog, 2025);
        assert_eq!(q.track, Track::Unknown);
        assert_eq!(q.venue_score, 0.0);
    }

    #[test]
    fn test_recency() {
        assert_eq!(recency(2025, 2025), 1.0);
        assert_eq!(recency(2024, 2025), 0.5);
        assert_eq!(recency(2030, 2025), 1.0);
        assert_eq!(recency(0, 2025), 0.0);
    }

    #[test]
    fn test_author_mean() {
        let catalog = AwardCatalog::builtin(AwardScale::Points);
        let a = paper_quality(&paper(0, 2025, "main", &[]), Tier::D, &catalog, 2025);
        let b = paper_quality(&paper(0, 2025, "main", &[]), Tier::A, &catalog, 2025);
        assert!((author_pqi(&[a.clone(), b.clone()]) - (a.pqi + b.pqi) / 2.0).abs() < 1e-12);
        assert_eq!(author_pqi(&[]), 0.0);
    }
}
