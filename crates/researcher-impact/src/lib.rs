//! Researcher Impact
//!
//! Researcher identity resolution and reproducible impact metrics over a
//! bibliographic corpus (papers, authors, authorships, citation edges).
//!
//! # Features
//!
//! - **Identity resolution**: complete abbreviated first names from a
//!   secondary authority, drop duplicate paper rows
//! - **Metrics**: h-index, age-normalized fractional citation impact (ANCI),
//!   citation acceleration (CAGR, linear trend, period ratio) and the
//!   publication quality index (PQI)
//! - **Co-authorship**: weighted adjacency, ego networks, co-author h-index
//! - **Tools**: every operation exposed as a tool over stdio JSON-RPC
//!
//! # Example
//!
//! ```no_run
//! use researcher_impact::{corpus::loader, scoring::Scorer, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let corpus = loader::load_dir("data").await?;
//!     let config = Config::from_env()?;
//!
//!     for row in Scorer::new(&corpus, &config).score_all() {
//!         println!("{} {:.3}", row.author_id, row.anci_score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod citations;
pub mod config;
pub mod corpus;
pub mod error;
pub mod formatters;
pub mod models;
pub mod network;
pub mod normalize;
pub mod resolver;
pub mod scoring;
pub mod server;
pub mod tools;

pub use config::Config;
pub use corpus::{Corpus, CorpusTables};
pub use error::{HistogramError, LoadError, ToolError};
pub use scoring::Scorer;
