use std::{collections::HashSet, iter::Peekable};

use crate::{
    ast::{Expr, FunctionDef},
    error::ParseErrorKind,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{error_at, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a complete token list into one expression tree.
///
/// The tokens must hold exactly one statement: a function declaration or an
/// expression, terminated by `;` and followed by nothing but the end of
/// input.
///
/// Parsing stops at the first syntax error. The line is the statement
/// boundary, so the next line starts from a clean state.
///
/// # Example
/// ```
/// use hulk::interpreter::{lexer::scan, parser::statement::parse};
///
/// let (tokens, _) = scan("let x = 1 in x + 2;");
/// let tree = parse(&tokens).unwrap();
///
/// assert_eq!(tree.to_string(), "let-in {= (x 1)}(+ (x, 2))");
/// ```
///
/// # Errors
/// Returns the first `ParseError` found.
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let tree = parse_statement(&mut iter)?;

    tracing::debug!(tree = %tree, "parsed statement");
    Ok(tree)
}

/// Parses a single `;`-terminated statement.
///
/// Grammar:
/// ```text
///     program := (function_decl | expression) ";" EOF
/// ```
///
/// # Errors
/// - `MissingSemicolon` if the statement is not followed by `;`.
/// - `TrailingTokens` if anything but end of input follows the `;`.
/// - Propagates any errors from the statement body.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let is_declaration = tokens.peek()
                               .is_some_and(|token| token.kind == TokenKind::Function);
    let expr = if is_declaration {
        parse_function_declaration(tokens)?
    } else {
        parse_expression(tokens)?
    };

    match tokens.peek() {
        Some(token) if token.kind == TokenKind::Semicolon => {
            tokens.next();
        },
        other => return Err(error_at(other.copied(), ParseErrorKind::MissingSemicolon)),
    }

    match tokens.peek() {
        None => {},
        Some(token) if token.kind == TokenKind::Eof => {},
        Some(token) => return Err(error_at(Some(*token), ParseErrorKind::TrailingTokens)),
    }

    Ok(expr)
}

/// Parses a function declaration of the form
/// `function <name>(param1, param2, ...) => <expression>`.
///
/// The body is a single expression. Parameter names must be distinct.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name, the parentheses or `=>` are missing,
/// - a parameter is not an identifier or is repeated,
/// - the body expression fails to parse.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, &TokenKind::Function, "Expected 'function'.")?;
    let (name, _) = parse_identifier(tokens, "Expected function name after 'function'.")?;
    expect(tokens, &TokenKind::LParen, "Expected '(' after function name.")?;

    let parameters = parse_comma_separated(tokens,
                                           |tokens| parse_identifier(tokens, "Expected parameter name."),
                                           &TokenKind::RParen,
                                           "Expected ',' or ')' after parameter.")?;

    let mut seen = HashSet::new();
    for (param, token) in &parameters {
        if !seen.insert(param.as_str()) {
            return Err(error_at(Some(*token),
                                ParseErrorKind::DuplicateParameter { name:     param.clone(),
                                                                     function: name, }));
        }
    }

    expect(tokens, &TokenKind::Arrow, "Expected '=>' after parameters.")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::Function(FunctionDef { name,
                                    params: parameters.into_iter()
                                                      .map(|(param, _)| param)
                                                      .collect(),
                                    body: Box::new(body),
                                    line: keyword.line }))
}
