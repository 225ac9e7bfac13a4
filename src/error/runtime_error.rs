/// The reason evaluation failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    /// An arithmetic or comparison operand, or a numeric builtin argument,
    /// was not a number.
    #[error("Must be number.")]
    ExpectedNumber,
    /// A `!`, `&` or `|` operand was not a boolean.
    #[error("Must be boolean.")]
    ExpectedBoolean,
    /// A `@` operand was neither a string nor a number.
    #[error("Must be string.")]
    ExpectedString,
    /// The condition of an `if` did not evaluate to a boolean.
    #[error("Condition must be a boolean expression.")]
    ConditionNotBoolean,
    /// A variable was used outside every `let` or call that binds it.
    #[error("is not declared.")]
    UndeclaredVariable,
    /// A call names neither a builtin nor a declared function.
    #[error("Expected function.")]
    ExpectedFunction,
    /// A declared function was called with an argument count it has no
    /// overload for.
    #[error("incorrect arity for this function: called with {found}, declared with {declared:?}.")]
    IncorrectArity {
        /// Number of arguments at the call site.
        found:    usize,
        /// Arities the function is declared with, ascending.
        declared: Vec<usize>,
    },
    /// A declaration used the exact name and arity of a builtin.
    #[error("is a built-in function.")]
    BuiltinRedefinition {
        /// Arity of the rejected declaration.
        arity: usize,
    },
    /// A declaration repeated a name and arity that is already declared.
    #[error("already exists.")]
    FunctionAlreadyExists {
        /// Arity of the rejected declaration.
        arity: usize,
    },
}

/// Represents all errors that can occur during evaluation.
///
/// `token` is the source text the error is about: the operand value that had
/// the wrong type, the undeclared name, or the function name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}: `{token}` {kind}")]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:  RuntimeErrorKind,
    /// Text of the value or name involved.
    pub token: String,
    /// The source line where the error occurred.
    pub line:  usize,
}

impl RuntimeError {
    /// Creates a runtime error about `token` on `line`.
    ///
    /// # Example
    /// ```
    /// use hulk::error::{RuntimeError, RuntimeErrorKind};
    ///
    /// let error = RuntimeError::new(RuntimeErrorKind::UndeclaredVariable, "x", 3);
    /// assert_eq!(error.to_string(), "Error on line 3: `x` is not declared.");
    /// ```
    pub fn new(kind: RuntimeErrorKind, token: impl Into<String>, line: usize) -> Self {
        Self { kind,
               token: token.into(),
               line }
    }

    /// The value or name the error is about.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
