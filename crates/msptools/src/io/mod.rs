//! Plain-text storage for vectors and matrices.
mod number;
pub mod text;

pub(crate) use number::format_g;
pub use number::FULL_PRECISION_DIGITS;
