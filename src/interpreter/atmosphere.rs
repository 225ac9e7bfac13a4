use std::{
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use crate::{
    ast::{Expr, FunctionDef},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::{core::EvalResult, function::core::find_builtin},
        value::core::Value,
    },
};

/// The global store of variable bindings and function definitions.
///
/// Every variable name maps to a stack of values. The top of the stack is the
/// visible binding, so a nested `let` shadows an outer one and popping it
/// makes the outer one visible again. A name whose stack would become empty
/// is removed entirely.
///
/// Functions are keyed by name and arity. Builtins are fixed and cannot be
/// redeclared with their exact name and arity.
///
/// ## Usage
/// ```
/// use hulk::interpreter::{atmosphere::Atmosphere, value::core::Value};
///
/// let mut atmosphere = Atmosphere::new();
/// atmosphere.define("x", Value::Number(1.0));
/// atmosphere.define("x", Value::Number(2.0));
/// assert_eq!(atmosphere.lookup("x", 1).unwrap(), &Value::Number(2.0));
///
/// atmosphere.remove("x");
/// assert_eq!(atmosphere.lookup("x", 1).unwrap(), &Value::Number(1.0));
///
/// atmosphere.remove("x");
/// assert!(atmosphere.lookup("x", 1).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Atmosphere {
    variables: HashMap<String, Vec<Value>>,
    functions: HashMap<String, BTreeMap<usize, Rc<FunctionDef>>>,
}

impl Atmosphere {
    /// Creates an atmosphere with no variables and no user functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new binding for `name`, shadowing any existing one.
    pub fn define(&mut self, name: &str, value: Value) {
        self.variables
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    /// Pops the most recent binding of `name`.
    ///
    /// Calls must balance the calls to [`Atmosphere::define`]. Removing a name
    /// that is not bound does nothing.
    pub fn remove(&mut self, name: &str) {
        if let Some(stack) = self.variables.get_mut(name) {
            stack.pop();
            if stack.is_empty() {
                self.variables.remove(name);
            }
        }
    }

    /// Returns the visible binding of `name`.
    ///
    /// # Errors
    /// Returns `UndeclaredVariable` if nothing binds `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .and_then(|stack| stack.last())
            .ok_or_else(|| RuntimeError::new(RuntimeErrorKind::UndeclaredVariable, name, line))
    }

    /// Whether `name` currently has at least one binding.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Registers a user function under its name and arity.
    ///
    /// # Errors
    /// - `BuiltinRedefinition` if the name and arity belong to a builtin.
    /// - `FunctionAlreadyExists` if the overload is already declared.
    pub fn declare_function(&mut self, def: FunctionDef) -> EvalResult<()> {
        let arity = def.arity();

        if Self::is_builtin(&def.name, arity) {
            return Err(RuntimeError::new(RuntimeErrorKind::BuiltinRedefinition { arity },
                                         def.name,
                                         def.line));
        }
        if self.has_overload(&def.name, arity) {
            return Err(RuntimeError::new(RuntimeErrorKind::FunctionAlreadyExists { arity },
                                         def.name,
                                         def.line));
        }

        tracing::debug!(name = %def.name, arity, "declared function");
        self.functions
            .entry(def.name.clone())
            .or_default()
            .insert(arity, Rc::new(def));
        Ok(())
    }

    /// Whether `name` with `arity` arguments is a builtin.
    #[must_use]
    pub fn is_builtin(name: &str, arity: usize) -> bool {
        find_builtin(name, arity).is_some()
    }

    /// Whether any overload of `name` is declared.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Whether `name` is declared with exactly `arity` parameters.
    #[must_use]
    pub fn has_overload(&self, name: &str, arity: usize) -> bool {
        self.functions
            .get(name)
            .is_some_and(|overloads| overloads.contains_key(&arity))
    }

    /// The declared overload of `name` taking `arity` arguments.
    #[must_use]
    pub fn function(&self, name: &str, arity: usize) -> Option<Rc<FunctionDef>> {
        self.functions
            .get(name)
            .and_then(|overloads| overloads.get(&arity))
            .cloned()
    }

    /// Parameter names of the `arity` overload of `name`.
    #[must_use]
    pub fn parameters(&self, name: &str, arity: usize) -> Option<&[String]> {
        self.functions
            .get(name)?
            .get(&arity)
            .map(|def| def.params.as_slice())
    }

    /// Body of the `arity` overload of `name`.
    #[must_use]
    pub fn body(&self, name: &str, arity: usize) -> Option<&Expr> {
        self.functions
            .get(name)?
            .get(&arity)
            .map(|def| def.body.as_ref())
    }

    /// Every arity `name` is declared with, ascending. Empty if `name` is not
    /// a declared function.
    #[must_use]
    pub fn arities(&self, name: &str) -> Vec<usize> {
        self.functions
            .get(name)
            .map(|overloads| overloads.keys().copied().collect())
            .unwrap_or_default()
    }
}
