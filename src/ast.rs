use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers (including `PI` and `E`), strings and booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double precision number literal.
    Number(f64),
    /// A string literal, already unescaped.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every construct of the language is an expression, function declarations
/// included. Each node records the line it started on for error reporting.
/// Children are boxed and owned by their parent; no node is shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation, `-x` or `!x`.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An infix operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (condition) then_branch else else_branch`.
    Conditional {
        /// The condition, which must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `let a = 1, b = a in body`.
    LetIn {
        /// The bindings, in source order.
        bindings: Vec<Assign>,
        /// Expression evaluated with all bindings in scope.
        body:     Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A function declaration.
    Function(FunctionDef),
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use hulk::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Conditional { line, .. }
            | Self::Variable { line, .. }
            | Self::LetIn { line, .. }
            | Self::Call { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// One `name = value` pair of a `let` expression.
///
/// Assignments only exist inside [`Expr::LetIn`]; the language has no
/// standalone mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The name being bound.
    pub name:  String,
    /// The expression whose value is bound.
    pub value: Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a user-defined function declaration.
///
/// Functions are keyed by name and arity, so two declarations that only
/// differ in their parameter count are distinct overloads.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Box<Expr>,
    /// Line number in the source code.
    pub line:   usize,
}

impl FunctionDef {
    /// Number of parameters the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// String concatenation (`@`)
    Concat,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Concat => "@",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Prints the tree in prefix form, one operator followed by its operands.
///
/// ```
/// use hulk::ast::{BinaryOperator, Expr};
///
/// let sum = Expr::Binary { left:  Box::new(Expr::Literal { value: 1.0.into(),
///                                                           line:  1, }),
///                          op:    BinaryOperator::Add,
///                          right: Box::new(Expr::Variable { name: "x".to_string(),
///                                                           line: 1, }),
///                          line:  1, };
///
/// assert_eq!(sum.to_string(), "+ (1, x)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Unary { op, operand, .. } => write!(f, "{op} ({operand})"),
            Self::Binary { left, op, right, .. } => write!(f, "{op} ({left}, {right})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                write!(f, "if-else ({condition}, {then_branch}, {else_branch})")
            },
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::LetIn { bindings, body, .. } => {
                write!(f, "let-in {{")?;
                for (i, binding) in bindings.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "= ({} {})", binding.name, binding.value)?;
                }
                write!(f, "}}({body})")
            },
            Self::Function(def) => {
                write!(f, "function {}({}) => {}", def.name, def.params.join(", "), def.body)
            },
            Self::Call { name, arguments, .. } => {
                write!(f, "(call {name}")?;
                if !arguments.is_empty() {
                    let rendered = arguments.iter()
                                            .map(ToString::to_string)
                                            .collect::<Vec<_>>();
                    write!(f, " [{}]", rendered.join(", "))?;
                }
                write!(f, ")")
            },
        }
    }
}
