use std::fmt;

use crate::{
    ast::LiteralValue,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible results of evaluating an expression.
/// Values are plain scalars; nothing is shared between them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. The condition of an `if`
    /// must evaluate to `Bool`.
    Bool(bool),
    /// Absence of a value. Only a function declaration evaluates to `Nil`;
    /// no operator accepts it.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Example
    /// ```
    /// use hulk::{error::RuntimeErrorKind, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Number(10.0).as_number(1).unwrap(), 10.0);
    ///
    /// let error = Value::from("a").as_number(1).unwrap_err();
    /// assert_eq!(error.kind, RuntimeErrorKind::ExpectedNumber);
    /// assert_eq!(error.token, "a");
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch(RuntimeErrorKind::ExpectedNumber, line)),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(RuntimeErrorKind::ExpectedBoolean, line)),
        }
    }

    /// Converts the value into an operand of `@`.
    ///
    /// Numbers are stringified first; any other non-string value is an
    /// `ExpectedString` error.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(4.0).into_concat_operand(1).unwrap(), "4");
    /// assert_eq!(Value::from("3").into_concat_operand(1).unwrap(), "3");
    /// assert!(Value::Bool(true).into_concat_operand(1).is_err());
    /// ```
    pub fn into_concat_operand(self, line: usize) -> EvalResult<String> {
        match self {
            Self::Str(s) => Ok(s),
            Self::Number(n) => Ok(n.to_string()),
            _ => Err(self.mismatch(RuntimeErrorKind::ExpectedString, line)),
        }
    }

    /// Whether this is the `Nil` placeholder.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    fn mismatch(&self, kind: RuntimeErrorKind, line: usize) -> RuntimeError {
        RuntimeError::new(kind, self.to_string(), line)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
