use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::check_arity},
    value::core::Value,
};

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments, `base` first, then `value`. Both must be
/// numbers. Degenerate bases such as `1` or negative numbers follow IEEE
/// semantics and produce infinities or `NaN`.
///
/// # Example
/// ```
/// use hulk::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let Value::Number(n) = log(&[Value::Number(2.0), Value::Number(8.0)], 1).unwrap() else {
///     panic!("log returned a non-number")
/// };
/// assert!((n - 3.0).abs() < 1e-12);
/// ```
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    let [base, value] = check_arity::<2>("log", args, line)?;

    let base = base.as_number(line)?;
    let value = value.as_number(line)?;

    Ok(Value::Number(value.log(base)))
}
