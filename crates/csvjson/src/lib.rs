//! csvjson: convert CSV tables into keyed JSON objects.
//!
//! The first column of each row becomes the key of a JSON object whose value
//! is a record of the remaining columns. Cells are type-inferred as boolean,
//! integer, float or string, and columns carrying an array prefix (`JA_` by
//! default) are split into JSON arrays.
//!
//! # Core Rules
//!
//! - **Blank cells are dropped**: empty or whitespace-only cells produce no field
//! - **Ordered output**: fields follow column order, keys follow first appearance
//! - **Last row wins**: a repeated key replaces the earlier record
//!
//! # Example
//!
//! ```
//! use csvjson::{Converter, JsonFormat, to_json_string};
//!
//! let result = Converter::new()
//!     .convert_str("id,name,JA_tags\n1,Alice,\"a,b\"\n")
//!     .unwrap();
//!
//! let json = to_json_string(&result, JsonFormat::Minified).unwrap();
//! assert_eq!(json, r#"{"1":{"name":"Alice","tags":["a","b"]}}"#);
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod output;
pub mod schema;
pub mod transform;

mod converter;

pub use crate::converter::{ConversionSummary, Converter, ConverterConfig};
pub use error::{ConvertError, Result};
pub use inference::{infer, reconstruct_array, ArrayConfig, ArrayField};
pub use input::{DataTable, Parser, Row};
pub use output::{to_json_string, write_json, write_json_file, JsonFormat};
pub use schema::{FieldValue, InferredValue, Integer, KeyedRecord, Record, ResultSet};
pub use transform::{assemble_record, convert_rows, convert_table, AssemblyStats};
