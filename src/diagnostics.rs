use crate::error::{LexicalError, ParseError, RuntimeError};

/// Receives every diagnostic produced while running a line.
///
/// The two flags separate failures before evaluation (lexical and syntax
/// errors) from failures during it. A session resets both at the start of
/// every line.
pub trait Reporter {
    /// Records an error found by the scanner.
    fn lexical_error(&mut self, error: &LexicalError);
    /// Records an error found by the parser.
    fn syntax_error(&mut self, error: &ParseError);
    /// Records an error raised during evaluation.
    fn runtime_error(&mut self, error: &RuntimeError);
    /// Whether a lexical or syntax error was recorded since the last reset.
    fn had_error(&self) -> bool;
    /// Whether a runtime error was recorded since the last reset.
    fn had_runtime_error(&self) -> bool;
    /// Clears the lexical and syntax error flag.
    fn reset_error(&mut self);
    /// Clears the runtime error flag.
    fn reset_runtime_error(&mut self);
}

/// Renders a lexical error in console form.
///
/// # Example
/// ```
/// use hulk::{diagnostics::render_lexical, interpreter::lexer::scan};
///
/// let (_, errors) = scan("1 $ 2;");
/// assert_eq!(render_lexical(&errors[0]),
///            "! LEXICAL ERROR [1:3] at '$': Unexpected character.");
/// ```
#[must_use]
pub fn render_lexical(error: &LexicalError) -> String {
    format!("! LEXICAL ERROR [{}:{}] at '{}': {}",
            error.line, error.column, error.lexeme, error.kind)
}

/// Renders a syntax error in console form. Errors at the end of input are
/// reported `at end`.
#[must_use]
pub fn render_syntax(error: &ParseError) -> String {
    let location = if error.is_at_end() {
        "at end".to_string()
    } else {
        format!("at '{}'", error.found)
    };
    format!("! SYNTAX ERROR [{}:{}] {location}: {}",
            error.line, error.column, error.kind)
}

/// Renders a runtime error in console form.
///
/// # Example
/// ```
/// use hulk::{
///     diagnostics::render_runtime,
///     error::{RuntimeError, RuntimeErrorKind},
/// };
///
/// let error = RuntimeError::new(RuntimeErrorKind::ExpectedFunction, "foo", 1);
/// assert_eq!(render_runtime(&error), "! SEMANTIC ERROR: `foo` Expected function.");
/// ```
#[must_use]
pub fn render_runtime(error: &RuntimeError) -> String {
    format!("! SEMANTIC ERROR: `{}` {}", error.token(), error.kind)
}

/// Writes diagnostics to standard error and mirrors them as `tracing` events.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error:         bool,
    had_runtime_error: bool,
}

impl ConsoleReporter {
    /// Creates a reporter with both flags cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn lexical_error(&mut self, error: &LexicalError) {
        tracing::debug!(line = error.line, column = error.column, kind = ?error.kind, "lexical error");
        eprintln!("{}", render_lexical(error));
        self.had_error = true;
    }

    fn syntax_error(&mut self, error: &ParseError) {
        tracing::debug!(line = error.line, column = error.column, kind = ?error.kind, "syntax error");
        eprintln!("{}", render_syntax(error));
        self.had_error = true;
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        tracing::debug!(line = error.line, kind = ?error.kind, "runtime error");
        eprintln!("{}", render_runtime(error));
        self.had_runtime_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset_error(&mut self) {
        self.had_error = false;
    }

    fn reset_runtime_error(&mut self) {
        self.had_runtime_error = false;
    }
}

/// Keeps rendered diagnostics in memory, in the order they were reported.
///
/// Useful for embedding and tests. The flags behave like those of
/// [`ConsoleReporter`]; resetting them does not clear the collected messages.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    /// Every diagnostic reported so far, rendered in console form.
    pub messages:      Vec<String>,
    had_error:         bool,
    had_runtime_error: bool,
}

impl CollectingReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the collected messages.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Reporter for CollectingReporter {
    fn lexical_error(&mut self, error: &LexicalError) {
        self.messages.push(render_lexical(error));
        self.had_error = true;
    }

    fn syntax_error(&mut self, error: &ParseError) {
        self.messages.push(render_syntax(error));
        self.had_error = true;
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.messages.push(render_runtime(error));
        self.had_runtime_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset_error(&mut self) {
        self.had_error = false;
    }

    fn reset_runtime_error(&mut self) {
        self.had_runtime_error = false;
    }
}
