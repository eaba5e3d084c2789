#![no_main]

use libfuzzer_sys::fuzz_target;
use researcher_impact::normalize::{normalize_text, normalize_title};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let once = normalize_text(&text);
    // Normalization is idempotent
    assert_eq!(normalize_text(&once), once);
    let _ = normalize_title(&text);
});
