use std::ops::{Deref, DerefMut};

use crate::interpreter::{evaluator::core::Context, value::core::Value};

/// Pushes variable bindings for the lifetime of a `let` or a call frame.
///
/// Every name bound through the guard is popped from the atmosphere when the
/// guard is dropped, in reverse order of binding. This happens on every exit
/// path, early returns through `?` included. While the guard lives, it stands
/// in for the context it borrows.
///
/// # Example
/// ```
/// use hulk::interpreter::{
///     evaluator::{core::Context, scope::ScopeGuard},
///     value::core::Value,
/// };
///
/// let mut context = Context::with_output(Vec::new());
/// {
///     let mut scope = ScopeGuard::new(&mut context);
///     scope.bind("x", Value::Number(1.0));
///     assert!(scope.atmosphere.is_bound("x"));
/// }
/// assert!(!context.atmosphere.is_bound("x"));
/// ```
pub struct ScopeGuard<'c> {
    context: &'c mut Context,
    names:   Vec<String>,
}

impl<'c> ScopeGuard<'c> {
    /// Opens an empty scope over `context`.
    pub fn new(context: &'c mut Context) -> Self {
        Self { context,
               names: Vec::new() }
    }

    /// Binds `name` to `value` until the guard is dropped.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.context.atmosphere.define(name, value);
        self.names.push(name.to_string());
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.context
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.context
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        for name in self.names.iter().rev() {
            self.context.atmosphere.remove(name);
        }
    }
}
