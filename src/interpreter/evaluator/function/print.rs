use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        function::core::check_arity,
    },
    value::core::Value,
};

/// Prints a value to the context's output and returns it unchanged.
///
/// Accepts exactly one argument of any kind. The value is formatted using its
/// `Display` implementation and followed by a newline.
///
/// # Example
/// ```
/// use hulk::interpreter::{
///     evaluator::{core::Context, function::print::print},
///     value::core::Value,
/// };
///
/// let mut context = Context::with_output(std::io::sink());
/// let result = print(&mut context, &[Value::from("hello")], 1).unwrap();
///
/// assert_eq!(result, Value::from("hello"));
/// ```
pub fn print(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = check_arity::<1>("print", args, line)?;

    context.write_line(value);
    Ok(value.clone())
}
