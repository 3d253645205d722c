//! Fuzz target for scalar inference.
//!
//! Checks that inference never panics and that a string result is
//! already trimmed.

#![no_main]

use csvjson::{infer, InferredValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let InferredValue::String(s) = infer(text) {
            assert_eq!(s, s.trim());
        }
    }
});
