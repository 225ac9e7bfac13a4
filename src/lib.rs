//! # hulk
//!
//! hulk is an interpreter for a small, dynamically typed expression language
//! written in Rust. Every line of source is one `;`-terminated statement that
//! goes through a scanner, a recursive descent parser and a tree-walking
//! evaluator. It supports arithmetic, strings, booleans, conditionals, scoped
//! `let ... in` bindings and user functions overloaded by arity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    diagnostics::Reporter,
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::scan_from_line, parser::statement::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs, function
///   declarations included.
/// - Attaches source lines to AST nodes for error reporting.
/// - Prints trees in a compact prefix notation.
pub mod ast;
/// Reporting of diagnostics.
///
/// Declares the `Reporter` trait every session reports its errors through, a
/// reporter that writes to the console and one that collects messages in
/// memory.
pub mod diagnostics;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a line of
/// code. Each carries the source line it is about and renders to a readable
/// message.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers, and columns where known, for context.
/// - Combines them into one `Error` for the `Result` based API.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the atmosphere of bindings to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Scans and parses one statement, numbering its first line `first_line`.
///
/// # Errors
/// Returns every lexical error of the source if there are any, otherwise the
/// first syntax error.
///
/// # Example
/// ```
/// use hulk::parse_line;
///
/// let tree = parse_line("if (x > 0) x else -x;", 1).unwrap();
/// assert_eq!(tree.to_string(), "if-else (> (x, 0), x, - (x))");
/// ```
pub fn parse_line(source: &str, first_line: usize) -> Result<Expr, Error> {
    let (tokens, errors) = scan_from_line(source, first_line);
    if !errors.is_empty() {
        return Err(Error::Lexical(errors));
    }
    Ok(parse(&tokens)?)
}

/// Runs one statement against `context` and returns its value.
///
/// Function declarations persist in `context` and evaluate to
/// [`Value::Nil`].
///
/// # Errors
/// Returns the error of the first stage that failed. Later stages do not run.
///
/// # Examples
/// ```
/// use hulk::{evaluate, interpreter::{evaluator::core::Context, value::core::Value}};
///
/// let mut context = Context::with_output(Vec::new());
///
/// evaluate(&mut context, "function fib(n) => if (n < 2) n else fib(n - 1) + fib(n - 2);").unwrap();
/// assert_eq!(evaluate(&mut context, "fib(10);").unwrap(), Value::Number(55.0));
///
/// // 'y' is never bound.
/// assert!(evaluate(&mut context, "y + 1;").is_err());
/// ```
pub fn evaluate(context: &mut Context, source: &str) -> Result<Value, Error> {
    let tree = parse_line(source, 1)?;
    Ok(context.eval(&tree)?)
}

/// A running interpreter: one context plus the reporter its diagnostics go
/// to.
///
/// Every call to [`Session::run_line`] is one cycle. The error flags of the
/// reporter are cleared first, then the line is scanned, parsed and
/// evaluated. [`Session::parse_line_at`] and [`Session::eval_tree`] run the
/// same cycle in two halves. Function declarations persist across cycles; nothing else
/// does.
///
/// # Example
/// ```
/// use hulk::{
///     Session,
///     diagnostics::{CollectingReporter, Reporter},
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut session = Session::with_context(Context::with_output(Vec::new()),
///                                         CollectingReporter::new());
///
/// assert_eq!(session.run_line("let x = 4 in x * x;"), Some(Value::Number(16.0)));
///
/// assert_eq!(session.run_line("x;"), None);
/// assert!(session.reporter().had_runtime_error());
/// assert_eq!(session.reporter().messages, ["! SEMANTIC ERROR: `x` is not declared."]);
/// ```
pub struct Session<R: Reporter> {
    context:  Context,
    reporter: R,
}

impl<R: Reporter> Session<R> {
    /// Creates a session printing to standard output.
    pub fn new(reporter: R) -> Self {
        Self::with_context(Context::new(), reporter)
    }

    /// Creates a session over an existing context.
    pub const fn with_context(context: Context, reporter: R) -> Self {
        Self { context, reporter }
    }

    /// Runs one line of source, numbered 1.
    pub fn run_line(&mut self, source: &str) -> Option<Value> {
        self.run_line_at(source, 1)
    }

    /// Runs one line of source numbered `line` in diagnostics.
    ///
    /// Returns the value of the statement, or `None` if any stage failed.
    /// Every error has been handed to the reporter by then.
    #[tracing::instrument(level = "debug", skip(self, source))]
    pub fn run_line_at(&mut self, source: &str, line: usize) -> Option<Value> {
        let tree = self.parse_line_at(source, line)?;
        self.eval_tree(&tree)
    }

    /// Starts a cycle: clears the error flags, then scans and parses one line
    /// numbered `line`.
    ///
    /// Returns the tree, or `None` after reporting every lexical error or the
    /// syntax error. Pass the tree to [`Session::eval_tree`] to finish the
    /// cycle.
    ///
    /// # Example
    /// ```
    /// use hulk::{Session, diagnostics::CollectingReporter, interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let mut session = Session::with_context(Context::with_output(Vec::new()),
    ///                                         CollectingReporter::new());
    ///
    /// let tree = session.parse_line_at("2 ^ 10;", 1).unwrap();
    /// assert_eq!(tree.to_string(), "^ (2, 10)");
    /// assert_eq!(session.eval_tree(&tree), Some(Value::Number(1024.0)));
    /// ```
    pub fn parse_line_at(&mut self, source: &str, line: usize) -> Option<Expr> {
        self.reporter.reset_error();
        self.reporter.reset_runtime_error();

        let (tokens, errors) = scan_from_line(source, line);
        for error in &errors {
            self.reporter.lexical_error(error);
        }
        if self.reporter.had_error() {
            return None;
        }

        match parse(&tokens) {
            Ok(tree) => Some(tree),
            Err(error) => {
                self.reporter.syntax_error(&error);
                None
            },
        }
    }

    /// Evaluates a tree from [`Session::parse_line_at`] in the session's
    /// context, reporting a runtime error if it fails.
    pub fn eval_tree(&mut self, tree: &Expr) -> Option<Value> {
        match self.context.eval(tree) {
            Ok(value) => Some(value),
            Err(error) => {
                self.reporter.runtime_error(&error);
                None
            },
        }
    }

    /// The evaluation context shared by every line of the session.
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// The reporter diagnostics are handed to.
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable access to the reporter, e.g. to drain collected messages.
    pub const fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }
}
