//! Track inference.
//!
//! Precedence for a paper without an explicit track:
//!
//! 1. the first keyword found in its joined alternate ids, searched in the
//!    order `findings, short, srw, demo, tutorials, industry, main`;
//! 2. otherwise the first `-NNNN` number, whose leading digit maps
//!    `1 → long, 2 → short, 3 → srw, 4 → demo, 5 → tutorials`;
//! 3. otherwise `main`.
//!
//! An explicit track label wins over inference. Labels that are not a bare
//! track name are searched for the same keywords (plus `long`); a label
//! matching nothing is `unknown`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Paper, Track};

/// Keywords searched in alternate ids, highest priority first.
const ID_KEYWORDS: [(&str, Track); 7] = [
    ("findings", Track::Findings),
    ("short", Track::Short),
    ("srw", Track::Srw),
    ("demo", Track::Demo),
    ("tutorials", Track::Tutorials),
    ("industry", Track::Industry),
    ("main", Track::Main),
];

static NUMBERED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d)\d{3}").expect("valid track id pattern"));

/// First keyword contained in `text` (case-insensitive).
#[must_use]
pub fn keyword_track(text: &str) -> Option<Track> {
    let text = text.to_lowercase();
    ID_KEYWORDS.iter().find(|(kw, _)| text.contains(kw)).map(|&(_, track)| track)
}

/// Track from a numbered identifier such as `P19-1042` or `W19-4001`.
#[must_use]
pub fn numbered_track(text: &str) -> Option<Track> {
    let digit = NUMBERED_ID.captures(text)?.get(1)?.as_str();
    match digit {
        "1" => Some(Track::Long),
        "2" => Some(Track::Short),
        "3" => Some(Track::Srw),
        "4" => Some(Track::Demo),
        "5" => Some(Track::Tutorials),
        _ => None,
    }
}

/// Track inferred from an alternate-id string.
#[must_use]
pub fn infer_from_ids(alt_ids: &str) -> Track {
    keyword_track(alt_ids).or_else(|| numbered_track(alt_ids)).unwrap_or(Track::Main)
}

/// Track of an explicit label.
#[must_use]
pub fn parse_explicit(label: &str) -> Track {
    match Track::from_label(label) {
        Track::Unknown => keyword_track(label)
            .or_else(|| label.to_lowercase().contains("long").then_some(Track::Long))
            .unwrap_or(Track::Unknown),
        track => track,
    }
}

/// Track of a paper: explicit when given, else inferred from its alternate ids.
#[must_use]
pub fn paper_track(paper: &Paper) -> Track {
    match paper.track.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(label) => parse_explicit(label),
        None => infer_from_ids(&paper.joined_alt_ids()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_precedence() {
        assert_eq!(infer_from_ids("2023.findings-acl.12"), Track::Findings);
        assert_eq!(infer_from_ids("2022.acl-short.3"), Track::Short);
        assert_eq!(infer_from_ids("2021.acl-srw.7"), Track::Srw);
        assert_eq!(infer_from_ids("2020.acl-demos.1"), Track::Demo);
        assert_eq!(infer_from_ids("2020.acl-tutorials.2"), Track::Tutorials);
        assert_eq!(infer_from_ids("2023.acl-industry.9"), Track::Industry);
        assert_eq!(infer_from_ids("2020.acl-main.447"), Track::Main);
        // findings outranks short when both appear
        assert_eq!(infer_from_ids("2021.findings-short.1"), Track::Findings);
    }

    #[test]
    fn test_numbered_ids() {
        assert_eq!(infer_from_ids("P19-1042"), Track::Long);
        assert_eq!(infer_from_ids("P18-2010"), Track::Short);
        assert_eq!(infer_from_ids("P19-3001"), Track::Srw);
        assert_eq!(infer_from_ids("P19-4005"), Track::Demo);
        assert_eq!(infer_from_ids("P19-5002"), Track::Tutorials);
        assert_eq!(infer_from_ids("W19-6001"), Track::Main);
    }

    #[test]
    fn test_default_is_main() {
        assert_eq!(infer_from_ids(""), Track::Main);
        assert_eq!(infer_from_ids("2023.acl-long.12"), Track::Main);
        assert_eq!(infer_from_ids("P19-12"), Track::Main);
    }

    #[test]
    fn test_explicit_labels() {
        assert_eq!(parse_explicit("short"), Track::Short);
        assert_eq!(parse_explicit("Long Papers"), Track::Long);
        assert_eq!(parse_explicit("Findings of ACL"), Track::Findings);
        assert_eq!(parse_explicit("Poster session"), Track::Unknown);
    }

    #[test]
    fn test_paper_track() {
        let mut paper = Paper::new("p1", "T", 2020);
        paper.alt_ids = vec!["x".into(), "2021.acl-srw.7".into()];
        assert_eq!(paper_track(&paper), Track::Srw);

        paper.track = Some("demo".into());
        assert_eq!(paper_track(&paper), Track::Demo);

        paper.track = Some("  ".into());
        assert_eq!(paper_track(&paper), Track::Srw);
    }
}
