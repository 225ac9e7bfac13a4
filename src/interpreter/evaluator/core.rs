use std::io::{self, Write};

use crate::{
    ast::Expr,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{atmosphere::Atmosphere, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: every variable binding and user
/// defined function, plus the sink that `print` writes to.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every line. State
/// persists between lines, so a function declared on one line can be called
/// on the next.
///
/// ```
/// use hulk::interpreter::{
///     evaluator::core::Context, lexer::scan, parser::statement::parse, value::core::Value,
/// };
///
/// let mut context = Context::with_output(Vec::new());
///
/// let (tokens, _) = scan("function double(x) => x * 2;");
/// assert_eq!(context.eval(&parse(&tokens).unwrap()).unwrap(), Value::Nil);
///
/// let (tokens, _) = scan("double(21);");
/// assert_eq!(context.eval(&parse(&tokens).unwrap()).unwrap(), Value::Number(42.0));
/// ```
pub struct Context {
    /// Variables and functions visible to evaluation.
    pub atmosphere: Atmosphere,
    output:         Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with an empty atmosphere that prints
    /// to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Creates a new evaluation context that prints to `output`.
    #[must_use]
    pub fn with_output(output: impl Write + 'static) -> Self {
        Self { atmosphere: Atmosphere::new(),
               output:     Box::new(output), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. A function declaration registers
    /// the function and evaluates to [`Value::Nil`].
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in the tree. Every
    /// binding pushed while evaluating `expr` has been popped again by then.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Unary { op, operand, line } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => self.eval_conditional(condition, then_branch, else_branch),
            Expr::Variable { name, line } => self.atmosphere.lookup(name, *line).cloned(),
            Expr::LetIn { bindings, body, .. } => self.eval_let_in(bindings, body),
            Expr::Function(def) => {
                self.atmosphere.declare_function(def.clone())?;
                Ok(Value::Nil)
            },
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line),
        }
    }

    /// Evaluates `if (condition) then_branch else else_branch`.
    ///
    /// Only the selected branch is evaluated. A non-boolean condition is
    /// reported with the condition's own source form.
    fn eval_conditional(&mut self,
                        condition: &Expr,
                        then_branch: &Expr,
                        else_branch: &Expr)
                        -> EvalResult<Value> {
        match self.eval(condition)? {
            Value::Bool(true) => self.eval(then_branch),
            Value::Bool(false) => self.eval(else_branch),
            _ => Err(RuntimeError::new(RuntimeErrorKind::ConditionNotBoolean,
                                       condition.to_string(),
                                       condition.line_number())),
        }
    }

    /// Writes `value` and a newline to the output sink.
    ///
    /// A failing sink is logged and otherwise ignored; printing never fails
    /// evaluation.
    pub(crate) fn write_line(&mut self, value: &Value) {
        if let Err(error) = writeln!(self.output, "{value}").and_then(|()| self.output.flush()) {
            tracing::warn!(%error, "could not write printed value");
        }
    }
}
