//! Assembly of rows into keyed records.

mod assembly;

pub use assembly::{assemble_record, convert_rows, convert_table, AssemblyStats};
