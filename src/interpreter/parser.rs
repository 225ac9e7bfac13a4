/// Parsing of `let ... in`, conditionals and the expression entry point.
///
/// Provides the core recursive descent functions for the lowest precedence
/// constructs and the shared `ParseResult` alias.
pub mod core;

/// Parsing of binary operators.
///
/// Implements the precedence levels from logical or down to exponentiation.
/// Every level is a left-associative loop.
pub mod binary;

/// Parsing of unary expressions, groupings, calls and literals.
///
/// Covers prefix operators and the atomic expressions at the leaves of the
/// precedence hierarchy.
pub mod unary;

/// Parsing of whole statements.
///
/// Handles function declarations and the `;` terminator rules, and exposes
/// the entry point that turns a token list into one expression tree.
pub mod statement;

/// Parsing utilities.
///
/// Contains helpers such as comma separated lists, identifier parsing and
/// error construction that are shared across parser submodules.
pub mod utils;
