use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`. Both operands
    /// have already been evaluated by the caller; nothing short-circuits.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &false.into(), &true.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// assert!(Context::eval_logic(BinaryOperator::And, &true.into(), &1.0.into(), 1).is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        let (l, r) = (left.as_bool(line)?, right.as_bool(line)?);

        match op {
            BinaryOperator::And => Ok(Value::Bool(l && r)),
            BinaryOperator::Or => Ok(Value::Bool(l || r)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }
}
