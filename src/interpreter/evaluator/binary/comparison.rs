use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, values are compared structurally with no
    /// coercion and no type check: a number never equals a string. The
    /// relational operators need two numbers.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &3.0.into(), &5.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &"1".into(), &1.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => left == right,
            BinaryOperator::NotEqual => left != right,
            _ => {
                let (l, r) = (left.as_number(line)?, right.as_number(line)?);
                match op {
                    BinaryOperator::Less => l < r,
                    BinaryOperator::LessEqual => l <= r,
                    BinaryOperator::Greater => l > r,
                    BinaryOperator::GreaterEqual => l >= r,
                    _ => unreachable!("eval_comparison used with non comparison operator"),
                }
            },
        };
        Ok(Value::Bool(result))
    }
}
