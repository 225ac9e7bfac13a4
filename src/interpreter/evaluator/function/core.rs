use crate::{
    ast::Expr,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, log, print},
            scope::ScopeGuard,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context, a slice of evaluated argument values and
/// the line number of the call.
pub type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments it takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "rand"  => { arity: 0, func: |_, args, line| builtin::rand(args, line) },
    "cos"   => { arity: 1, func: |_, args, line| builtin::cos(args, line) },
    "sin"   => { arity: 1, func: |_, args, line| builtin::sin(args, line) },
    "exp"   => { arity: 1, func: |_, args, line| builtin::exp(args, line) },
    "sqrt"  => { arity: 1, func: |_, args, line| builtin::sqrt(args, line) },
    "log"   => { arity: 2, func: |_, args, line| log::log(args, line) },
    "print" => { arity: 1, func: print::print },
}

/// Looks up the builtin registered under exactly `name` and `arity`.
///
/// # Example
/// ```
/// use hulk::interpreter::evaluator::function::core::find_builtin;
///
/// assert!(find_builtin("log", 2).is_some());
/// assert!(find_builtin("log", 1).is_none());
/// assert!(find_builtin("tan", 1).is_none());
/// ```
#[must_use]
pub fn find_builtin(name: &str, arity: usize) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name && builtin.arity == arity)
                 .map(|builtin| builtin.func)
}

/// Views `args` as an array of exactly `N` values.
///
/// Builtins are only dispatched with the arity they are registered under, so
/// this only fails when one is called directly with the wrong arguments.
///
/// # Errors
/// Returns `IncorrectArity` naming `name` if `args` does not hold `N` values.
pub fn check_arity<'v, const N: usize>(name: &str,
                                       args: &'v [Value],
                                       line: usize)
                                       -> EvalResult<&'v [Value; N]> {
    <&[Value; N]>::try_from(args).map_err(|_| {
                                     RuntimeError::new(RuntimeErrorKind::IncorrectArity { found:    args.len(),
                                                                                          declared: vec![N], },
                                                       name,
                                                       line)
                                 })
}

impl Context {
    /// Evaluates a function call.
    ///
    /// A builtin registered under the name and argument count wins. Otherwise
    /// the name must be a declared function with an overload for the argument
    /// count.
    ///
    /// Arguments are evaluated once each, left to right, in the caller's
    /// scope. A user function then runs in a frame binding each parameter to
    /// its argument. The frame is pushed on top of the caller's bindings, so
    /// the body also sees every variable visible at the call site.
    ///
    /// # Errors
    /// - `ExpectedFunction` if `name` is neither a builtin nor declared.
    /// - `IncorrectArity` if `name` is declared but not for this many
    ///   arguments.
    /// - Any error raised by an argument or the body.
    #[tracing::instrument(level = "debug", skip(self, arguments), fields(arity = arguments.len()))]
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        if let Some(builtin) = find_builtin(name, arguments.len()) {
            let values = self.eval_arguments(arguments)?;
            return builtin(self, &values, line);
        }

        if !self.atmosphere.is_function(name) {
            return Err(RuntimeError::new(RuntimeErrorKind::ExpectedFunction, name, line));
        }

        let Some(def) = self.atmosphere.function(name, arguments.len()) else {
            let declared = self.atmosphere.arities(name);
            return Err(RuntimeError::new(RuntimeErrorKind::IncorrectArity { found: arguments.len(),
                                                                            declared },
                                         name,
                                         line));
        };

        let values = self.eval_arguments(arguments)?;

        let mut frame = ScopeGuard::new(self);
        for (param, value) in def.params.iter().zip(values) {
            frame.bind(param, value);
        }
        frame.eval(&def.body)
    }

    fn eval_arguments(&mut self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.eval(argument))
                 .collect()
    }
}
