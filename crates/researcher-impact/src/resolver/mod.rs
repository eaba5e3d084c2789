//! Identity resolution: first-name completion and duplicate paper removal.

pub mod dedup;
pub mod names;

pub use dedup::{deduplicate_papers, DedupOutcome};
pub use names::{resolve_corpus, resolve_names, ResolverOptions};
