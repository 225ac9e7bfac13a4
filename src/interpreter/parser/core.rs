use std::iter::Peekable;

use crate::{
    ast::{Assign, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            utils::{check, expect, parse_identifier},
        },
    },
};

/// Result type used by every parsing function.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence construct, `let ... in`, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := let_in`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_let_in(tokens)
}

/// Parses a `let` expression with one or more bindings.
///
/// Syntax:
/// ```text
///     let <name> = <expression> (, <name> = <expression>)* in <expression>
/// ```
/// Bindings are kept in source order; each one is in scope for the bindings
/// after it and for the body.
///
/// If the next token is not `let`, parsing falls through to conditionals.
///
/// # Errors
/// - `UnexpectedToken` if a binding name, `=` or `in` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_let_in<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&let_token) = tokens.peek() else {
        return parse_conditional(tokens);
    };
    if let_token.kind != TokenKind::Let {
        return parse_conditional(tokens);
    }
    tokens.next();

    let mut bindings = Vec::new();
    loop {
        let (name, name_token) = parse_identifier(tokens, "Expected variable name in 'let'.")?;
        expect(tokens, &TokenKind::Equals, "Expected '=' after variable name.")?;
        let value = parse_expression(tokens)?;
        bindings.push(Assign { name,
                               value,
                               line: name_token.line });

        if !check(tokens, &TokenKind::Comma) {
            break;
        }
        tokens.next();
    }

    expect(tokens, &TokenKind::In, "Expected 'in' after 'let' bindings.")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::LetIn { bindings,
                     body: Box::new(body),
                     line: let_token.line })
}

/// Parses an `if` expression.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <then_expr> else <else_expr>
/// ```
/// The `else` branch is mandatory since every expression must produce a
/// value.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses around the condition or the `else`
///   keyword are missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&if_token) = tokens.peek() else {
        return parse_logical_or(tokens);
    };
    if if_token.kind != TokenKind::If {
        return parse_logical_or(tokens);
    }
    tokens.next();

    expect(tokens, &TokenKind::LParen, "Expected '(' after 'if'.")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::RParen, "Expected ')' after if condition.")?;

    let then_branch = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Else, "Expected 'else' after if branch.")?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::Conditional { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch),
                           line:        if_token.line, })
}
