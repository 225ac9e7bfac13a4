use logos::{Lexer, Logos};

use crate::error::{LexicalError, LexicalErrorKind};

/// The kind of a lexical token.
///
/// This enum defines all recognized tokens in the language. Literal tokens
/// carry their parsed value.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexicalErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+(\.[0-9]+)?[A-Za-z_][A-Za-z0-9_]*", reject_glued_number)]
    Number(f64),
    /// String literal tokens, `"..."`, holding the unescaped contents.
    #[token("\"", scan_string)]
    Str(String),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `function`
    #[token("function")]
    Function,
    /// `PI`
    #[token("PI")]
    Pi,
    /// `E`
    #[token("E", priority = 3)]
    Euler,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `@`
    #[token("@")]
    At,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=>`
    #[token("=>")]
    Arrow,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by the lexer itself; [`scan`] appends it.
    Eof,
}

/// A token with the source text it was produced from and its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any literal value.
    pub kind:   TokenKind,
    /// The exact source text of the token. Empty for end of input.
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

/// Maps byte offsets of a source text to line and column numbers.
struct LineIndex<'s> {
    source:     &'s str,
    starts:     Vec<usize>,
    first_line: usize,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str, first_line: usize) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { source,
               starts,
               first_line }
    }

    fn locate(&self, offset: usize) -> (usize, usize) {
        let row = self.starts.partition_point(|&start| start <= offset) - 1;
        let column = self.source[self.starts[row]..offset].chars().count() + 1;
        (self.first_line + row, column)
    }
}

/// Scans `source` into tokens, numbering lines from 1.
///
/// Equivalent to [`scan_from_line`] with `first_line` set to 1.
///
/// # Example
/// ```
/// use hulk::interpreter::lexer::{TokenKind, scan};
///
/// let (tokens, errors) = scan("let x = 2 in x;");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::Let);
/// assert_eq!(tokens[3].kind, TokenKind::Number(2.0));
/// assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    scan_from_line(source, 1)
}

/// Scans `source` into tokens, numbering its first line `first_line`.
///
/// Scanning never stops early: every lexical error is recorded and the lexer
/// resumes right after the rejected text. The token list always ends with a
/// [`TokenKind::Eof`] token, even when errors were found.
#[must_use]
pub fn scan_from_line(source: &str, first_line: usize) -> (Vec<Token>, Vec<LexicalError>) {
    let index = LineIndex::new(source, first_line);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let (line, column) = index.locate(lexer.span().start);
        let lexeme = lexer.slice().to_string();
        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme,
                                            line,
                                            column }),
            Err(kind) => errors.push(LexicalError { kind,
                                                    lexeme,
                                                    line,
                                                    column }),
        }
    }

    let (line, column) = index.locate(source.len());
    tokens.push(Token { kind: TokenKind::Eof,
                        lexeme: String::new(),
                        line,
                        column });

    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scanned source");
    (tokens, errors)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Rejects a number immediately followed by identifier characters.
///
/// The whole run is reported as one invalid token instead of silently
/// splitting it into a number and an identifier.
const fn reject_glued_number(_: &Lexer<TokenKind>) -> Result<f64, LexicalErrorKind> {
    Err(LexicalErrorKind::InvalidToken)
}

/// Scans the rest of a string literal after its opening quote.
///
/// A backslash directly before a quote escapes it. On success the lexer is
/// advanced past the closing quote and the contents are returned with `\t`,
/// `\n` and `\"` unescaped. Without a closing quote the rest of the input is
/// consumed and reported as unterminated.
fn scan_string(lex: &mut Lexer<TokenKind>) -> Result<String, LexicalErrorKind> {
    let remainder = lex.remainder();
    let mut chars = remainder.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(unescape(&remainder[..i]));
            },
            '\\' if matches!(chars.peek(), Some((_, '"'))) => {
                chars.next();
            },
            _ => {},
        }
    }

    lex.bump(remainder.len());
    Err(LexicalErrorKind::UnterminatedString)
}

fn unescape(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            let escaped = match chars.peek() {
                Some('t') => Some('\t'),
                Some('n') => Some('\n'),
                Some('"') => Some('"'),
                _ => None,
            };
            if let Some(escaped) = escaped {
                chars.next();
                value.push(escaped);
                continue;
            }
        }
        value.push(c);
    }

    value
}
