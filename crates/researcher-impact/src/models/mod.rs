//! Data models for the bibliographic relations and metric outputs.
//!
//! Relation rows use snake_case field names matching the CSV column headers;
//! tool inputs use camelCase like the rest of the JSON-RPC surface.

mod author;
mod enums;
mod histogram;
mod inputs;
mod outputs;
mod paper;
mod venue;

pub(crate) use author::deserialize_count;
pub use author::{Author, AuthorityRecord, Authorship};
pub use enums::{AwardScale, LeaderboardMetric, ResponseFormat, Track};
pub use histogram::{DeclaredHistogram, YearlyCitations};
pub use inputs::*;
pub use outputs::*;
pub use paper::{AwardCatalogEntry, CitationEdge, Paper, PaperAward};
pub use venue::{Tier, VenueTier};
