//! Fuzz target for CSV conversion.
//!
//! Arbitrary bytes go through the reader, record assembly and JSON
//! emission. Any error is fine; a panic is not.

#![no_main]

use csvjson::{to_json_string, Converter, JsonFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(result) = Converter::new().convert_reader(data) {
        let _ = to_json_string(&result, JsonFormat::Minified);
    }
});
