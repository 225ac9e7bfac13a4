use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | grouping
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(&token) = tokens.peek()
       && let Some(op) = token_to_unary_operator(&token.kind)
    {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                operand: Box::new(operand),
                                line: token.line });
    }
    parse_grouping(tokens)
}

const fn token_to_unary_operator(token: &TokenKind) -> Option<UnaryOperator> {
    match token {
        TokenKind::Minus => Some(UnaryOperator::Negate),
        TokenKind::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}

/// Parses a parenthesized expression, or falls through to calls.
///
/// Grammar: `grouping := "(" expression ")" | call`
///
/// # Errors
/// Returns an `UnexpectedToken` error if the closing `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(&token) = tokens.peek()
       && token.kind == TokenKind::LParen
    {
        tokens.next();
        let expr = parse_expression(tokens)?;
        expect(tokens, &TokenKind::RParen, "Expected ')' after expression.")?;
        return Ok(expr);
    }
    parse_call(tokens)
}

/// Parses a function call, or falls through to literals.
///
/// An identifier directly followed by `(` starts a call. Any other
/// identifier is a variable reference and handled by [`parse_literal`].
///
/// Grammar: `call := IDENT "(" (expression ("," expression)*)? ")" | literal`
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(&token) = tokens.peek()
       && let TokenKind::Identifier(name) = &token.kind
    {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(next) = lookahead.peek()
           && next.kind == TokenKind::LParen
        {
            tokens.next();
            tokens.next();
            let arguments = parse_comma_separated(tokens,
                                                  parse_expression,
                                                  &TokenKind::RParen,
                                                  "Expected ',' or ')' after argument.")?;
            return Ok(Expr::Call { name: name.clone(),
                                   arguments,
                                   line: token.line });
        }
    }
    parse_literal(tokens)
}

/// Parses a literal or a variable reference.
///
/// Grammar:
/// ```text
///     literal := NUMBER | STRING | "true" | "false" | PI | E | IDENT
/// ```
/// `PI` and `E` become number literals holding the mathematical constants.
///
/// # Errors
/// Returns an `UnexpectedToken` error when the next token cannot start an
/// expression.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(unexpected(None, "Expected expression."));
    };

    let value = match &token.kind {
        TokenKind::Number(n) => LiteralValue::Number(*n),
        TokenKind::Str(s) => LiteralValue::Str(s.clone()),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::Pi => LiteralValue::Number(std::f64::consts::PI),
        TokenKind::Euler => LiteralValue::Number(std::f64::consts::E),
        TokenKind::Identifier(name) => {
            tokens.next();
            return Ok(Expr::Variable { name: name.clone(),
                                       line: token.line });
        },
        _ => return Err(unexpected(Some(token), "Expected expression.")),
    };
    tokens.next();

    Ok(Expr::Literal { value,
                       line: token.line })
}
