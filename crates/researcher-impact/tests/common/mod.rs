//! Shared fixture helpers.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use researcher_impact::corpus::loader;
use researcher_impact::tools::ToolContext;
use researcher_impact::{Config, Corpus};

/// Directory holding the fixture tables.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Fixture corpus, loaded synchronously.
pub fn fixture_corpus() -> Corpus {
    loader::load_dir_blocking(&fixture_dir()).expect("fixture tables load")
}

/// Tool context over the fixture corpus, pinned to 2025.
pub fn fixture_context() -> ToolContext {
    ToolContext::new(Arc::new(fixture_corpus()), Arc::new(Config::for_testing()))
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("researcher-impact-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Copy every fixture table into `dir`.
pub fn copy_fixtures(dir: &std::path::Path) {
    for entry in std::fs::read_dir(fixture_dir()).expect("read fixtures") {
        let entry = entry.expect("fixture entry");
        std::fs::copy(entry.path(), dir.join(entry.file_name())).expect("copy fixture");
    }
}
