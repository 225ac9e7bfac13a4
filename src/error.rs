/// Lexical errors.
///
/// Defines the errors the scanner records while tokenizing source text:
/// unexpected characters, unterminated strings and numbers glued to
/// identifiers. Scanning continues past every one of them.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from a token stream, such as unexpected tokens, a missing statement
/// terminator or tokens trailing after it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, undeclared variables, unknown functions, wrong arity and
/// function redefinitions.
pub mod runtime_error;

pub use lexical_error::{LexicalError, LexicalErrorKind};
pub use parse_error::{ParseError, ParseErrorKind};
pub use runtime_error::{RuntimeError, RuntimeErrorKind};

/// Any failure of the pipeline for one line of source, tagged with the stage
/// that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The scanner rejected part of the input. All lexical errors of the line
    /// are kept, in source order.
    #[error("{}", render_all(.0))]
    Lexical(Vec<LexicalError>),
    /// The token stream does not form a valid statement.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// Evaluation of a well-formed statement failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn render_all(errors: &[LexicalError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
