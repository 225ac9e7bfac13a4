/// Comparison and equality operators.
pub mod comparison;
/// Operator dispatch and the numeric operators.
pub mod core;
/// `&` and `|`.
pub mod logic;
