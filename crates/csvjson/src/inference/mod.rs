//! Type inference for cells and array columns.

mod array;
mod scalar;

pub use array::{
    reconstruct_array, split_values, ArrayConfig, ArrayField, DEFAULT_ARRAY_PREFIX,
    DEFAULT_ARRAY_SEPARATOR,
};
pub use scalar::infer;
