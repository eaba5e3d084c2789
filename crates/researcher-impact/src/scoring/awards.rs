//! Award catalog: raw award strings to canonical categories and weights.

use std::collections::HashMap;

use crate::models::{AwardCatalogEntry, AwardScale};
use crate::normalize::normalize_text;

/// Canonical categories with the raw strings that map to them.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Test-of-Time Award",
        &[
            "ACL 2020 Test-of-Time Award (25 years)",
            "ACL 2022 25-Year Test of Time",
            "ACL 25-Year Test of Time Paper Award",
            "NAACL 2018 Test-of-Time",
            "NAACL 2018 Test-of-Time Award",
        ],
    ),
    ("Best Overall Paper", &["Best Long Paper", "Best Overall Paper", "Best Paper", "Best Paper Award"]),
    (
        "Outstanding Paper",
        &["Outstanding Long Paper", "Outstanding Paper", "Outstanding Paper Award", "Outstanding Short Paper"],
    ),
    ("Best Short Paper", &["Best Short Paper"]),
    (
        "Best Demo Paper",
        &[
            "Best Demo Paper",
            "Best Demo Paper Award",
            "Best Demonstration Paper",
            "Demo Track: Best Paper Award",
            "Demo Track: Outstanding Paper Award",
            "Outstanding Demo Paper Award",
        ],
    ),
    (
        "Best Thematic/Resource/Impact Paper",
        &[
            "Best Resource Paper",
            "Best Resource Paper Award",
            "Best Social Impact Paper Award",
            "Best Special Theme Paper",
            "Best Thematic Paper",
            "Best Theme Paper",
            "Best Theme Paper Award",
            "Best paper on human-centered NLP special theme",
            "Resource Award",
            "Resource Paper Award",
            "Social Impact Award",
            "Social Impact Paper Award",
            "Special Theme Paper Award",
            "Theme Paper Award",
        ],
    ),
    ("Best Paper Runner-Up", &["Best Paper Runner-Up"]),
    (
        "Honorable Mention",
        &[
            "Best Demonstration Runner-up",
            "Honorable Demonstration Paper",
            "Honorable Mention Paper",
            "Honorable Mention for Best Demonstration Paper",
            "Honorable Mention for Best Overall Paper",
            "Honorable Mention for Best Theme Paper",
            "Honorable mention for contribution to methods",
            "Honorable mention for contribution to special theme on human-centered NLP",
            "Honorable mention for contributions to resources",
        ],
    ),
    (
        "Area Chair/SAC Award",
        &[
            "Area Chair Award (Discourse and Pragmatics)",
            "Area Chair Award (Interpretability and Analysis of Models for NLP)",
            "Area Chair Award (Linguistic Diversity)",
            "Area Chair Award (Linguistic Theories, Cognitive Modeling, and Psycholinguistics)",
            "Area Chair Award (Multilingualism and Cross-Lingual NLP)",
            "Area Chair Award (NLP Applications)",
            "Area Chair Award (Question Answering)",
            "Area Chair Award (Resources and Evaluation)",
            "Area Chair Award (Semantics: Lexical)",
            "Area Chair Award (Semantics: Sentence-level Semantics, Textual Inference, and Other Areas)",
            "Area Chair Award (Sentiment Analysis, Stylistic Analysis, and Argument Mining)",
            "Area Chair Award (Speech and Multimodality)",
            "SAC Award: Computational Social Science and Cultural Analytics",
            "SAC Award: Discourse and Pragmatics",
            "SAC Award: Efficient/Low-Resource Methods for NLP",
            "SAC Award: Ethics, Bias, and Fairness",
            "SAC Award: Generation",
            "SAC Award: Information Retrieval and Text Mining",
            "SAC Award: Interpretability and Analysis of Models for NLP",
            "SAC Award: Linguistic theories, Cognitive Modeling and Psycholinguistics",
            "SAC Award: Machine Learning for NLP",
            "SAC Award: Machine Translation",
            "SAC Award: Multilinguality and Language Diversity",
            "SAC Award: Multimodality and Language Grounding to Vision, Robotics and Beyond",
            "SAC Award: Phonology, Morphology and Word Segmentation",
            "SAC Award: Question Answering",
            "SAC Award: Resources and Evaluation",
            "SAC Award: Semantics(Lexical)",
            "SAC Award: Semantics(Sentence-level Semantics, Textual Inference and Other areas)",
            "SAC Award: Sentiment Analysis, Stylistic Analysis, and Argument Mining",
            "SAC Award: Speech recognition, text-to-speech and spoken language understanding",
            "SAC Award: Summarization",
            "SAC Award: Syntax(Tagging, Chunking and Parsing)",
        ],
    ),
    (
        "Specific Contribution Award",
        &[
            "Best Explainable NLP Paper",
            "Best Industry Paper",
            "Best Linguistic Insight Paper",
            "Best efficient NLP paper",
            "Best new method paper",
            "Best new task (tied) and new resource paper",
            "Best new task paper (tied)",
        ],
    ),
    ("SRW Best Paper Award", &["SRW Best Paper Award"]),
    ("Reproduction Award", &["Reproduction Award"]),
];

/// Weight of a canonical category on a scale.
fn category_weight(category: &str, scale: AwardScale) -> f64 {
    match scale {
        AwardScale::Points => match category {
            "Test-of-Time Award" | "Best Overall Paper" => 5.0,
            "Outstanding Paper" | "Best Short Paper" | "Best Paper Runner-Up" => 4.0,
            "Best Demo Paper" | "Best Thematic/Resource/Impact Paper" => 3.0,
            "Honorable Mention"
            | "Area Chair/SAC Award"
            | "Specific Contribution Award"
            | "SRW Best Paper Award" => 2.0,
            "Reproduction Award" => 1.0,
            _ => 0.0,
        },
        AwardScale::Tiered => match category {
            "Test-of-Time Award" | "Best Overall Paper" => 2.0,
            "Outstanding Paper"
            | "Best Short Paper"
            | "Best Demo Paper"
            | "Best Thematic/Resource/Impact Paper"
            | "Best Paper Runner-Up" => 1.5,
            "Honorable Mention"
            | "Area Chair/SAC Award"
            | "Specific Contribution Award"
            | "SRW Best Paper Award" => 1.0,
            "Reproduction Award" => 0.5,
            _ => 0.0,
        },
    }
}

/// Lookup from raw award strings to `(category, weight)`.
///
/// Keys are normalized, so spelling variants that differ only in case or
/// punctuation resolve to the same category.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardCatalog {
    entries: HashMap<String, (String, f64)>,
    max_weight: f64,
}

impl AwardCatalog {
    /// The built-in catalog on a given scale.
    #[must_use]
    pub fn builtin(scale: AwardScale) -> Self {
        let mut entries = HashMap::new();
        for &(category, raws) in CATEGORIES {
            let weight = category_weight(category, scale);
            entries.insert(normalize_text(category), (category.to_string(), weight));
            for raw in raws {
                entries.insert(normalize_text(raw), (category.to_string(), weight));
            }
        }
        Self { entries, max_weight: scale.max_weight() }
    }

    /// A catalog read from an override table. Awards are normalized by the
    /// largest weight in the table.
    #[must_use]
    pub fn from_entries(rows: &[AwardCatalogEntry]) -> Self {
        let mut entries = HashMap::new();
        let mut max_weight: f64 = 0.0;
        for row in rows {
            let weight = row.weight.max(0.0);
            max_weight = max_weight.max(weight);
            entries.insert(normalize_text(&row.award), (row.category.trim().to_string(), weight));
        }
        Self { entries, max_weight }
    }

    /// Canonical category and weight for a raw award string.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<(&str, f64)> {
        self.entries.get(&normalize_text(raw)).map(|(c, w)| (c.as_str(), *w))
    }

    /// Weight of the best-known award, 0.0 when none are known.
    #[must_use]
    pub fn best_weight<S: AsRef<str>>(&self, awards: &[S]) -> f64 {
        awards
            .iter()
            .filter_map(|a| self.lookup(a.as_ref()).map(|(_, w)| w))
            .fold(0.0, f64::max)
    }

    /// Best award weight normalized into [0, 1].
    #[must_use]
    pub fn score<S: AsRef<str>>(&self, awards: &[S]) -> f64 {
        if self.max_weight <= 0.0 {
            return 0.0;
        }
        (self.best_weight(awards) / self.max_weight).clamp(0.0, 1.0)
    }

    /// Largest weight on this catalog's scale.
    #[must_use]
    pub const fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Number of raw strings known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog knows no awards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
