#![no_main]

use libfuzzer_sys::fuzz_target;
use researcher_impact::scoring::track::{infer_from_ids, parse_explicit};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let inferred = infer_from_ids(&text);
    let explicit = parse_explicit(&text);
    assert!((0.0..=1.0).contains(&inferred.weight()));
    assert!((0.0..=1.0).contains(&explicit.weight()));
});
