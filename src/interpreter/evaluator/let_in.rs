use crate::{
    ast::{Assign, Expr},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::ScopeGuard,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `let a = .., b = .. in body`.
    ///
    /// Bindings are evaluated and pushed left to right, so each one sees the
    /// ones before it. The body is evaluated with all of them in scope and
    /// they are popped again afterwards, whether the body succeeded or not.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::{
    ///     evaluator::core::Context, lexer::scan, parser::statement::parse, value::core::Value,
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let (tokens, _) = scan("let a = 2, b = a * 3 in a + b;");
    ///
    /// assert_eq!(context.eval(&parse(&tokens).unwrap()).unwrap(), Value::Number(8.0));
    /// assert!(!context.atmosphere.is_bound("a"));
    /// ```
    pub(crate) fn eval_let_in(&mut self, bindings: &[Assign], body: &Expr) -> EvalResult<Value> {
        let mut scope = ScopeGuard::new(self);

        for assign in bindings {
            let value = scope.eval(&assign.value)?;
            scope.bind(&assign.name, value);
        }

        scope.eval(body)
    }
}
