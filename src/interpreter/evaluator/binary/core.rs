use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Arithmetic operators need two numbers and follow IEEE semantics, so
    /// division by zero yields an infinity or `NaN` rather than an error.
    /// `%` is the floating point remainder and `^` is `powf`.
    /// Concatenation stringifies numbers before joining.
    /// Relational and equality operators use `eval_comparison`.
    /// Logical operators call `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, 3.0.into(), 4.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Concat, "x = ".into(), 4.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::from("x = 4"));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, 1.0.into(), 0.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod | Pow => Self::eval_arithmetic(op, &left, &right, line),
            Concat => {
                let mut text = left.into_concat_operand(line)?;
                text.push_str(&right.into_concat_operand(line)?);
                Ok(Value::Str(text))
            },
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, &left, &right, line)
            },
            And | Or => Self::eval_logic(op, &left, &right, line),
        }
    }

    /// Applies a numeric operator after checking both operands are numbers.
    /// The left operand is checked first.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        let (l, r) = (left.as_number(line)?, right.as_number(line)?);

        let result = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => l / r,
            BinaryOperator::Mod => l % r,
            BinaryOperator::Pow => l.powf(r),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
        };
        Ok(Value::Number(result))
    }
}
