/// Binary operator evaluation logic.
///
/// Handles arithmetic, concatenation, comparisons and the logical operators.
/// Both operands are always evaluated before the operator is applied.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical not.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and the output
/// sink `print` writes to.
pub mod core;

/// Evaluation of `let ... in ...` expressions.
pub mod let_in;

/// Scoped variable bindings.
///
/// Provides the guard that pushes bindings for a `let` or a call frame and
/// pops them again on every exit path.
pub mod scope;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
