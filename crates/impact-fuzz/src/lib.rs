//! Fuzzing library for researcher-impact.
//!
//! Targets cover the text-facing entry points: declared histogram parsing,
//! track inference from alternate ids, and name/title normalization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/impact-fuzz
//! cargo +nightly fuzz run fuzz_histogram_parse -- -max_total_time=60
//! ```

pub use researcher_impact::{models, normalize, scoring};
