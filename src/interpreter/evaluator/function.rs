/// Built-in mathematical functions.
///
/// `rand`, `sin`, `cos`, `exp` and `sqrt`.
pub mod builtin;
/// Logarithm to an arbitrary base.
pub mod log;
/// The `print` function implementation.
///
/// Writes a value to the context's output sink and returns it.
pub mod print;

/// The builtin table and call evaluation.
pub mod core;
