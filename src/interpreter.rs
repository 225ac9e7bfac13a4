/// The atmosphere holds every variable binding and function definition.
///
/// Variables are stacks of values keyed by name, so nested scopes shadow and
/// restore each other. Functions are keyed by name and arity. The builtins
/// are fixed and cannot be redeclared.
pub mod atmosphere;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, manages variable scopes and calls
/// functions. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Binds `let` variables and call frames and pops them on every exit path.
/// - Reports runtime errors such as type mismatches or unknown functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with lexeme and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Records lexical errors for invalid or malformed input and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of one statement.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports operators, `let`, conditionals, calls and function declarations.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values expressions evaluate to: numbers, strings,
/// booleans and the `Nil` result of a function declaration. It also provides
/// the checked conversions the operators rely on.
pub mod value;
