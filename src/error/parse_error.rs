/// The grammar violation behind a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Found a token that does not fit the construct being parsed.
    #[error("{expected}")]
    UnexpectedToken {
        /// Describes what the parser was looking for.
        expected: String,
    },
    /// The input ended while a construct was still open.
    #[error("{expected}")]
    UnexpectedEndOfInput {
        /// Describes what the parser was looking for.
        expected: String,
    },
    /// The statement is not terminated by `;`.
    #[error("Expected ';' at end of statement.")]
    MissingSemicolon,
    /// Something other than end of input follows the terminating `;`.
    #[error("Unexpected tokens after ';'.")]
    TrailingTokens,
    /// A function declares the same parameter name twice.
    #[error("Duplicate parameter '{name}' in function '{function}'.")]
    DuplicateParameter {
        /// The repeated parameter name.
        name:     String,
        /// The function being declared.
        function: String,
    },
}

/// Represents all errors that can occur during parsing.
///
/// Every error points at the token where parsing stopped. When that token is
/// the end of input, `found` is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}, column {column}: {kind} Found '{found}'.")]
pub struct ParseError {
    /// What went wrong.
    pub kind:   ParseErrorKind,
    /// Lexeme of the offending token.
    pub found:  String,
    /// The source line where the error occurred.
    pub line:   usize,
    /// The column of the offending token.
    pub column: usize,
}

impl ParseError {
    /// Whether parsing ran into the end of input rather than a real token.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.found.is_empty()
    }
}
