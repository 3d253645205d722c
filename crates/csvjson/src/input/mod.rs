//! Input parsing and row views.

mod parser;
mod source;

pub use parser::Parser;
pub use source::{DataTable, Row};
