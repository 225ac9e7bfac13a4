use rand::Rng;

use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::check_arity},
    value::core::Value,
};

/// Applies a one-argument `f64` method as a builtin.
///
/// The generated functions accept exactly one argument, which must be a
/// number. Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use hulk::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Number(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)` for a number `x`.")]
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let [x] = check_arity::<1>(stringify!($fname), args, line)?;
            Ok(Value::Number(x.as_number(line)?.$fname()))
        }
    };
}

real_builtin!(sin);
real_builtin!(cos);
real_builtin!(exp);
real_builtin!(sqrt);

/// Returns a uniformly distributed number in `[0, 1)`.
///
/// # Example
/// ```
/// use hulk::interpreter::{evaluator::function::builtin::rand, value::core::Value};
///
/// let Value::Number(n) = rand(&[], 1).unwrap() else { panic!("rand returned a non-number") };
/// assert!((0.0..1.0).contains(&n));
/// ```
pub fn rand(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity::<0>("rand", args, line)?;

    Ok(Value::Number(rand::thread_rng().r#gen::<f64>()))
}
