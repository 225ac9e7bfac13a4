/// The runtime value type.
///
/// Defines the `Value` enum with its conversions, type checks and display
/// rules. Every operator and builtin goes through the checked accessors here
/// so type errors are reported uniformly.
pub mod core;
