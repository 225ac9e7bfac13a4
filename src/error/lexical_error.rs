/// The reason a piece of source text could not be turned into a token.
///
/// This is also the error type of the `logos` lexer, which is why it has a
/// default: input no rule matches at all is an unexpected character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
pub enum LexicalErrorKind {
    /// A character that starts no token.
    #[default]
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// A string literal still open at the end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A number immediately followed by identifier characters, e.g. `12abc`.
    #[error("Is not a valid token.")]
    InvalidToken,
}

/// A lexical error together with the offending text and its location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}, column {column}: {kind} Found '{lexeme}'.")]
pub struct LexicalError {
    /// What went wrong.
    pub kind:   LexicalErrorKind,
    /// The rejected source text. For unterminated strings this is everything
    /// from the opening quote to the end of input.
    pub lexeme: String,
    /// The source line where the error occurred.
    pub line:   usize,
    /// The column of the first rejected character.
    pub column: usize,
}
