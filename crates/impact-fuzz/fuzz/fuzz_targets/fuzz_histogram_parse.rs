#![no_main]

use libfuzzer_sys::fuzz_target;
use researcher_impact::models::YearlyCitations;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Never panics; a parsed histogram sums without overflow.
    if let Ok(hist) = YearlyCitations::parse(text) {
        let _ = hist.total();
        let _ = hist.earliest_year();
    }
});
