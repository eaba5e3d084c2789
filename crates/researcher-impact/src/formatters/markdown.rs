//! Markdown output formatting.

use crate::models::{format_ratio, AuthorMetrics, LeaderboardEntry, LeaderboardMetric, PaperQuality, YearlyCitations};

/// Format an optional score, `n/a` when unavailable.
#[must_use]
pub fn format_score(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
}

/// Format metric rows as a Markdown table. `name_of` maps an author ID to a
/// display name.
#[must_use]
pub fn format_metrics_markdown(rows: &[AuthorMetrics], name_of: impl Fn(&str) -> String) -> String {
    if rows.is_empty() {
        return "No authors found.".to_string();
    }

    let mut output = format!("# Author Metrics ({} authors)\n\n", rows.len());
    output.push_str(
        "| Author | Papers | Citations | h | Career | ANCI | CAGR | Trend | Acceleration | Period ratio | PQI |\n\
         |---|---|---|---|---|---|---|---|---|---|---|\n",
    );

    for row in rows {
        output.push_str(&format!(
            "| {} ({}) | {} | {} | {} | {} | {:.4} | {} | {:.4} | {:.4} | {} | {:.4} |\n",
            name_of(&row.author_id),
            row.author_id,
            row.paper_count,
            row.total_citations,
            row.h_index,
            row.career_length,
            row.anci_score,
            format_score(row.cagr_score),
            row.linear_trend_score,
            row.acceleration_score,
            format_ratio(row.period_ratio),
            row.pqi_score,
        ));
    }

    let failed: Vec<&AuthorMetrics> = rows.iter().filter(|r| r.error.is_some()).collect();
    if !failed.is_empty() {
        output.push_str("\n## Unavailable metrics\n\n");
        for row in failed {
            output.push_str(&format!("- {}: {}\n", row.author_id, row.error.as_deref().unwrap_or_default()));
        }
    }

    output
}

/// Format a leaderboard.
#[must_use]
pub fn format_leaderboard_markdown(entries: &[LeaderboardEntry], metric: LeaderboardMetric) -> String {
    let mut output = format!("# Leaderboard: {}\n\n", metric.label());

    if entries.is_empty() {
        output.push_str("*No authors matched the criteria.*");
        return output;
    }

    output.push_str("| Rank | Author | Value |\n|---|---|---|\n");
    for entry in entries {
        output.push_str(&format!("| {} | {} ({}) | {:.4} |\n", entry.rank, entry.name, entry.author_id, entry.value));
    }
    output
}

/// Format PQI breakdowns. `title_of` maps a paper ID to its title.
#[must_use]
pub fn format_quality_markdown(qualities: &[PaperQuality], title_of: impl Fn(&str) -> String) -> String {
    if qualities.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Publication Quality ({} papers)\n\n", qualities.len());
    for (i, q) in qualities.iter().enumerate() {
        output.push_str(&format!(
            "## {}. {}\n\n\
             **ID**: {} | **Tier**: {:?} | **Track**: {}\n\n\
             - Venue: {:.4}\n\
             - Citation: {:.4}\n\
             - Award: {:.4}\n\
             - Recency: {:.4}\n\
             - **PQI**: {:.4}\n\n",
            i + 1,
            title_of(&q.paper_id),
            q.paper_id,
            q.tier,
            q.track,
            q.venue_score,
            q.citation_score,
            q.award_score,
            q.recency_score,
            q.pqi,
        ));
    }

    let mean = qualities.iter().map(|q| q.pqi).sum::<f64>() / qualities.len() as f64;
    output.push_str(&format!("---\n\n**Mean PQI**: {mean:.4}\n"));
    output
}

/// Format a yearly histogram with a heading.
#[must_use]
pub fn format_histogram_markdown(heading: &str, hist: &YearlyCitations) -> String {
    let mut output = format!("# {heading}\n\n");

    if hist.is_empty() {
        output.push_str("*No citations recorded.*");
        return output;
    }

    output.push_str("| Year | Citations |\n|---|---|\n");
    for (year, count) in hist.iter() {
        output.push_str(&format!("| {year} | {count} |\n"));
    }
    output.push_str(&format!("\n**Total**: {}\n", hist.total()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(None), "n/a");
        assert_eq!(format_score(Some(0.44226)), "0.4423");
    }

    #[test]
    fn test_metrics_table_lists_failures() {
        let mut bad = AuthorMetrics::empty("a2");
        bad.error = Some("invalid year key 'x'".into());
        let rows = vec![AuthorMetrics::empty("a1"), bad];
        let md = format_metrics_markdown(&rows, |id| id.to_uppercase());
        assert!(md.starts_with("# Author Metrics (2 authors)"));
        assert!(md.contains("| A1 (a1) | 0 | 0 | 0 | 0 |"));
        assert!(md.contains("## Unavailable metrics"));
        assert!(md.contains("- a2: invalid year key 'x'"));
    }

    #[test]
    fn test_empty_outputs() {
        assert_eq!(format_metrics_markdown(&[], |id| id.to_string()), "No authors found.");
        assert!(format_histogram_markdown("H", &YearlyCitations::new()).contains("No citations recorded"));
        assert!(format_leaderboard_markdown(&[], LeaderboardMetric::Impact).contains("No authors matched"));
    }

    #[test]
    fn test_histogram_table() {
        let hist: YearlyCitations = [(2020, 1), (2021, 4)].into_iter().collect();
        let md = format_histogram_markdown("Citations", &hist);
        assert!(md.contains("| 2020 | 1 |\n| 2021 | 4 |"));
        assert!(md.contains("**Total**: 5"));
    }
}
