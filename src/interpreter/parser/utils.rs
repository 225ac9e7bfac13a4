use std::iter::Peekable;

use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds a parse error pointing at `token`.
///
/// A missing token is treated as the end of input at an unknown position.
pub(in crate::interpreter::parser) fn error_at(token: Option<&Token>,
                                               kind: ParseErrorKind)
                                               -> ParseError {
    match token {
        Some(token) => ParseError { kind,
                                    found: token.lexeme.clone(),
                                    line: token.line,
                                    column: token.column },
        None => ParseError { kind,
                             found: String::new(),
                             line: 0,
                             column: 0 },
    }
}

/// Builds an error at `token` describing what was expected.
///
/// Running into the end of input yields `UnexpectedEndOfInput`, any other
/// token `UnexpectedToken`.
pub(in crate::interpreter::parser) fn unexpected(token: Option<&Token>,
                                                 expected: &str)
                                                 -> ParseError {
    let expected = expected.to_string();
    let kind = match token {
        Some(token) if token.kind != TokenKind::Eof => ParseErrorKind::UnexpectedToken { expected },
        _ => ParseErrorKind::UnexpectedEndOfInput { expected },
    };
    error_at(token, kind)
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns an `UnexpectedToken` error carrying `expected` when the next token
/// is of a different kind. The token is not consumed in that case.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(&token) = tokens.peek()
       && token.kind == *kind
    {
        tokens.next();
        return Ok(token);
    }
    Err(unexpected(tokens.peek().copied(), expected))
}

/// Returns whether the next token has the given kind, without consuming it.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>,
                                                   kind: &TokenKind)
                                                   -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.kind == *kind)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments and parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than a
/// comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind,
    expected: &str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if check(tokens, closing) {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(token) if token.kind == TokenKind::Comma => {
                tokens.next();
            },
            Some(token) if token.kind == *closing => {
                tokens.next();
                break;
            },
            other => return Err(unexpected(other.copied(), expected)),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name and token.
///
/// # Errors
/// Returns an `UnexpectedToken` error carrying `expected` if the next token is
/// not an identifier. Keywords such as `in` or `PI` are not identifiers.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &str)
                                                              -> ParseResult<(String, &'a Token)>
    where I: Iterator<Item = &'a Token>
{
    if let Some(&token) = tokens.peek()
       && let TokenKind::Identifier(name) = &token.kind
    {
        tokens.next();
        return Ok((name.clone(), token));
    }
    Err(unexpected(tokens.peek().copied(), expected))
}
