//! Value, record and result-set types.

mod record;
mod types;

pub use record::{KeyedRecord, Record, ResultSet};
pub use types::{FieldValue, InferredValue, Integer};
