use std::{cell::RefCell, io, rc::Rc};

use hulk::{
    error::{Error, RuntimeErrorKind},
    evaluate,
    interpreter::{evaluator::core::Context, value::core::Value},
};
use pretty_assertions::assert_eq;

/// An output sink that can still be read after the context owns it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs every line in one fresh context and returns the last result along
/// with everything printed.
fn run_lines(lines: &[&str]) -> (Result<Value, Error>, String) {
    let output = SharedBuffer::default();
    let mut context = Context::with_output(output.clone());

    let mut result = Ok(Value::Nil);
    for line in lines {
        result = evaluate(&mut context, line);
    }
    (result, output.contents())
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match run_lines(&[src]).0 {
        Ok(value) => assert_eq!(value, expected.into(), "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_runtime_failure(lines: &[&str], expected: &RuntimeErrorKind) {
    match run_lines(lines).0 {
        Err(Error::Runtime(error)) => assert_eq!(&error.kind, expected),
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn arithmetic_matches_host_floats() {
    let pairs = [(7.0, 2.0), (0.1, 0.2), (3.5, -1.25), (1.0, 0.0)];

    for (a, b) in pairs {
        assert_value(&format!("{a} + {b};"), a + b);
        assert_value(&format!("({a}) - ({b});"), a - b);
        assert_value(&format!("({a}) * ({b});"), a * b);
        assert_value(&format!("({a}) / ({b});"), a / b);
        assert_value(&format!("({a}) ^ ({b});"), a.powf(b));
    }
    assert_value("7 % 2;", 1.0);
    assert_value("-7.5 % 2;", -7.5 % 2.0);
}

#[test]
fn modulo_by_zero_is_nan() {
    let (result, _) = run_lines(&["5 % 0;"]);
    let Ok(Value::Number(n)) = &result else {
        panic!("expected a number, got {result:?}")
    };
    assert!(n.is_nan());
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3;", 7.0);
    assert_value("(1 + 2) * 3;", 9.0);
    assert_value("10 - 4 - 3;", 3.0);
    assert_value("2 * 3 ^ 2;", 18.0);
    assert_value("2 ^ 3 ^ 2;", 64.0);
    assert_value("-2 ^ 2;", 4.0);
    assert_value("1 < 2 == 2 < 3;", true);
    assert_value("true | false & false;", true);
}

#[test]
fn constants() {
    assert_value("PI;", std::f64::consts::PI);
    assert_value("E;", std::f64::consts::E);
}

#[test]
fn concatenation_stringifies_numbers() {
    assert_value("\"3\" @ 4;", "34");
    assert_value("4 @ \"3\";", "43");
    assert_value("\"a\" @ \"b\" @ 1.5;", "ab1.5");
    assert_runtime_failure(&["\"a\" @ true;"], &RuntimeErrorKind::ExpectedString);
}

#[test]
fn string_escapes() {
    assert_value(r#""a\"b";"#, "a\"b");
    assert_value(r#""tab\there";"#, "tab\there");
    assert_value(r#""back\slash";"#, "back\\slash");
}

#[test]
fn equality_is_structural() {
    assert_value("1 == 1;", true);
    assert_value("\"1\" == 1;", false);
    assert_value("\"a\" != \"b\";", true);
    assert_value("true == true;", true);
    assert_value("true != 1;", true);
}

#[test]
fn logic_never_short_circuits() {
    let (result, output) = run_lines(&["print(true) & print(false);"]);
    assert_eq!(result, Ok(Value::Bool(false)));
    assert_eq!(output, "true\nfalse\n");

    let (result, output) = run_lines(&["print(false) | print(true);"]);
    assert_eq!(result, Ok(Value::Bool(true)));
    assert_eq!(output, "false\ntrue\n");

    let (result, output) = run_lines(&["print(false) & print(false);"]);
    assert_eq!(result, Ok(Value::Bool(false)));
    assert_eq!(output, "false\nfalse\n");
}

#[test]
fn conditionals_evaluate_one_branch() {
    let (result, output) = run_lines(&["if (true) print(1) else print(2);"]);
    assert_eq!(result, Ok(Value::Number(1.0)));
    assert_eq!(output, "1\n");

    let (result, output) = run_lines(&["if (false) print(1) else print(2);"]);
    assert_eq!(result, Ok(Value::Number(2.0)));
    assert_eq!(output, "2\n");
}

#[test]
fn conditions_must_be_boolean() {
    assert_runtime_failure(&["if (1) 2 else 3;"], &RuntimeErrorKind::ConditionNotBoolean);

    let (result, _) = run_lines(&["if (1 / 0) 1 else 2;"]);
    let Err(Error::Runtime(error)) = &result else {
        panic!("Expected a runtime error, got {result:?}");
    };
    assert_eq!(error.token(), "/ (1, 0)");
    assert_eq!(error.to_string(),
               "Error on line 1: `/ (1, 0)` Condition must be a boolean expression.");
}

#[test]
fn let_shadows_and_restores() {
    assert_value("let x = 1 in let x = x + 1 in x;", 2.0);
    assert_value("let x = 1 in (let x = 5 in x) + x;", 6.0);
    assert_value("let a = 1, b = a + 1, c = b * 3 in a + b + c;", 9.0);

    assert_runtime_failure(&["let x = 1 in let x = x + 1 in x;", "x;"],
                           &RuntimeErrorKind::UndeclaredVariable);
}

#[test]
fn let_bindings_are_popped_on_error() {
    let output = SharedBuffer::default();
    let mut context = Context::with_output(output);

    assert!(evaluate(&mut context, "let x = 1, y = 2 in x + true;").is_err());
    assert!(!context.atmosphere.is_bound("x"));
    assert!(!context.atmosphere.is_bound("y"));

    assert!(evaluate(&mut context, "let x = 1, y = z in x;").is_err());
    assert!(!context.atmosphere.is_bound("x"));
}

#[test]
fn overloads_by_arity() {
    let (result, _) = run_lines(&["function f(a) => a + 1;",
                                  "function f(a, b) => a + b;",
                                  "f(1, 2) @ \",\" @ f(1);"]);
    assert_eq!(result, Ok(Value::from("3,2")));

    assert_runtime_failure(&["function f(a) => a + 1;", "function f(b) => b;"],
                           &RuntimeErrorKind::FunctionAlreadyExists { arity: 1 });
}

#[test]
fn recursion_through_the_function_table() {
    let (result, _) = run_lines(&["function f(n) => if (n == 0) 1 else n * f(n - 1);", "f(5);"]);
    assert_eq!(result, Ok(Value::Number(120.0)));
}

#[test]
fn calls_see_the_callers_bindings() {
    let (result, _) = run_lines(&["function g() => y * 2;", "let y = 21 in g();"]);
    assert_eq!(result, Ok(Value::Number(42.0)));

    assert_runtime_failure(&["function g() => y * 2;", "g();"],
                           &RuntimeErrorKind::UndeclaredVariable);
}

#[test]
fn arguments_are_evaluated_once() {
    let (result, output) = run_lines(&["function twice(x) => x + x;", "twice(print(3));"]);
    assert_eq!(result, Ok(Value::Number(6.0)));
    assert_eq!(output, "3\n");
}

#[test]
fn parameters_are_popped_after_the_call() {
    let output = SharedBuffer::default();
    let mut context = Context::with_output(output);

    evaluate(&mut context, "function id(p) => p;").unwrap();
    assert_eq!(evaluate(&mut context, "id(7);"), Ok(Value::Number(7.0)));
    assert!(!context.atmosphere.is_bound("p"));

    evaluate(&mut context, "function bad(p) => p + true;").unwrap();
    assert!(evaluate(&mut context, "bad(1);").is_err());
    assert!(!context.atmosphere.is_bound("p"));
}

#[test]
fn type_errors() {
    assert_runtime_failure(&["1 + \"a\";"], &RuntimeErrorKind::ExpectedNumber);
    assert_runtime_failure(&["-\"a\";"], &RuntimeErrorKind::ExpectedNumber);
    assert_runtime_failure(&["!1;"], &RuntimeErrorKind::ExpectedBoolean);
    assert_runtime_failure(&["1 & true;"], &RuntimeErrorKind::ExpectedBoolean);
    assert_runtime_failure(&["\"a\" < 1;"], &RuntimeErrorKind::ExpectedNumber);
    assert_runtime_failure(&["sqrt(\"4\");"], &RuntimeErrorKind::ExpectedNumber);
}

#[test]
fn wrong_builtin_arity_is_a_user_call() {
    assert_runtime_failure(&["print(1, 2);"], &RuntimeErrorKind::ExpectedFunction);
    assert_runtime_failure(&["undefined(1);"], &RuntimeErrorKind::ExpectedFunction);
}

#[test]
fn wrong_user_arity_lists_declared_overloads() {
    assert_runtime_failure(&["function h(a) => a;", "function h(a, b, c) => a;", "h(1, 2);"],
                           &RuntimeErrorKind::IncorrectArity { found:    2,
                                                               declared: vec![1, 3], });
}

#[test]
fn builtins_cannot_be_redeclared() {
    assert_runtime_failure(&["function print(x) => x;"],
                           &RuntimeErrorKind::BuiltinRedefinition { arity: 1 });
    assert_runtime_failure(&["function rand() => 4;"],
                           &RuntimeErrorKind::BuiltinRedefinition { arity: 0 });

    let (result, output) = run_lines(&["function print(a, b) => a @ b;", "print(1, 2);"]);
    assert_eq!(result, Ok(Value::from("12")));
    assert_eq!(output, "");
}

#[test]
fn builtin_math() {
    assert_value("sqrt(16);", 4.0);
    assert_value("sin(0);", 0.0);
    assert_value("cos(0);", 1.0);
    assert_value("exp(0);", 1.0);
    assert_value("log(10, 100);", 100_f64.log(10.0));
    assert_value("let r = rand() in r >= 0 & r < 1;", true);
}

#[test]
fn print_returns_its_argument() {
    let (result, output) = run_lines(&["print(\"hi\") @ \"!\";"]);
    assert_eq!(result, Ok(Value::from("hi!")));
    assert_eq!(output, "hi\n");
}

#[test]
fn declarations_evaluate_to_nil() {
    assert_value("function k() => 1;", Value::Nil);
}

#[test]
fn stages_fail_in_order() {
    assert!(matches!(run_lines(&["1 $ 2;"]).0, Err(Error::Lexical(_))));
    assert!(matches!(run_lines(&["1 +;"]).0, Err(Error::Syntax(_))));
    assert!(matches!(run_lines(&["1 + x;"]).0, Err(Error::Runtime(_))));

    // A lexical error stops the line before anything is printed.
    let (_, output) = run_lines(&["print(1) $;"]);
    assert_eq!(output, "");
}
