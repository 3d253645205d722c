//! Serialization of result sets.

mod json;

pub use json::{to_json_string, write_json, write_json_file, JsonFormat};
