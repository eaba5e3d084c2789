//! Compact JSON representations for tool output.

use serde_json::{Map, Value, json};

use crate::models::{AuthorMetrics, PaperQuality, YearlyCitations};

/// JSON value of a ratio that may be infinite.
#[must_use]
pub fn ratio_value(ratio: Option<f64>) -> Value {
    match ratio {
        Some(r) if r.is_infinite() => json!("inf"),
        Some(r) => json!(r),
        None => Value::Null,
    }
}

/// Compact metric row. Nullable metrics are omitted when unavailable.
#[must_use]
pub fn compact_metrics(row: &AuthorMetrics, name: &str) -> Value {
    let mut obj = json!({
        "id": row.author_id,
        "name": name,
        "papers": row.paper_count,
        "citations": row.total_citations,
        "edgeCitations": row.edge_citations,
        "hIndex": row.h_index,
        "careerLength": row.career_length,
        "anci": row.anci_score,
        "linearTrend": row.linear_trend_score,
        "acceleration": row.acceleration_score,
        "pqi": row.pqi_score,
    });

    if let Some(cagr) = row.cagr_score {
        obj["cagr"] = json!(cagr);
    }

    if row.period_ratio.is_some() {
        obj["periodRatio"] = ratio_value(row.period_ratio);
    }

    if let Some(error) = &row.error {
        obj["error"] = json!(error);
    }

    obj
}

/// PQI breakdown of one paper.
#[must_use]
pub fn compact_quality(quality: &PaperQuality, title: &str) -> Value {
    json!({
        "id": quality.paper_id,
        "title": title,
        "tier": quality.tier,
        "track": quality.track,
        "venue": quality.venue_score,
        "citation": quality.citation_score,
        "award": quality.award_score,
        "recency": quality.recency_score,
        "pqi": quality.pqi,
    })
}

/// Histogram as an object keyed by year.
#[must_use]
pub fn compact_histogram(hist: &YearlyCitations) -> Value {
    let map: Map<String, Value> = hist.iter().map(|(year, count)| (year.to_string(), json!(count))).collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_metrics_omits_unavailable() {
        let row = AuthorMetrics::empty("a1");
        let v = compact_metrics(&row, "Ada");
        assert_eq!(v["id"], "a1");
        assert_eq!(v["name"], "Ada");
        assert!(v.get("cagr").is_none());
        assert!(v.get("periodRatio").is_none());
        assert!(v.get("error").is_none());
    }

    #[test]
    fn test_infinite_ratio_is_string() {
        let mut row = AuthorMetrics::empty("a1");
        row.period_ratio = Some(f64::INFINITY);
        row.cagr_score = Some(0.5);
        let v = compact_metrics(&row, "a1");
        assert_eq!(v["periodRatio"], "inf");
        assert_eq!(v["cagr"], 0.5);
    }

    #[test]
    fn test_compact_histogram() {
        let hist: YearlyCitations = [(2021, 3), (2020, 1)].into_iter().collect();
        assert_eq!(compact_histogram(&hist), json!({"2020": 1, "2021": 3}));
    }
}
