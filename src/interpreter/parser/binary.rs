use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Operands are parsed with `parse_operand`; the loop continues while the
/// next token maps to one of `operators`.
///
/// Grammar: `level := operand (op operand)*`
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      operators: &[BinaryOperator],
                      parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&token.kind)
           && operators.contains(&op)
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Both operands are always evaluated; `|` does not short-circuit.
///
/// Grammar: `logic_or := logic_and ("|" logic_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `logic_and := equality ("&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens, &[BinaryOperator::And], parse_equality)
}

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                parse_comparison)
}

/// Parses relational expressions.
///
/// Grammar: `comparison := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                &[BinaryOperator::Less,
                  BinaryOperator::LessEqual,
                  BinaryOperator::Greater,
                  BinaryOperator::GreaterEqual],
                parse_additive)
}

/// Parses addition, subtraction and concatenation.
///
/// `@` shares the precedence of `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-" | "@") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                &[BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Concat],
                parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                parse_power)
}

/// Parses exponentiation expressions.
///
/// Exponentiation uses the same left-associative loop as every other level:
/// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// Grammar: `power := unary ("^" unary)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens, &[BinaryOperator::Pow], parse_unary)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use hulk::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::At),
///            Some(BinaryOperator::Concat));
/// assert_eq!(token_to_binary_operator(&TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        TokenKind::At => Some(BinaryOperator::Concat),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Ampersand => Some(BinaryOperator::And),
        TokenKind::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
