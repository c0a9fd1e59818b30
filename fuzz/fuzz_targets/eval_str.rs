#![no_main]
use libfuzzer_sys::fuzz_target;

use memecalc::{eval_str, AngleMode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = eval_str(s, AngleMode::Degrees);
        let _ = eval_str(s, AngleMode::Radians);
    }
});
