use hulk::{
    Session,
    diagnostics::{CollectingReporter, Reporter},
    interpreter::{evaluator::core::Context, value::core::Value},
};
use pretty_assertions::assert_eq;

fn session() -> Session<CollectingReporter> {
    Session::with_context(Context::with_output(std::io::sink()), CollectingReporter::new())
}

#[test]
fn flags_are_reset_every_line() {
    let mut session = session();

    assert_eq!(session.run_line("1 $ 2;"), None);
    assert!(session.reporter().had_error());
    assert!(!session.reporter().had_runtime_error());

    assert_eq!(session.run_line("nope;"), None);
    assert!(!session.reporter().had_error());
    assert!(session.reporter().had_runtime_error());

    assert_eq!(session.run_line("1;"), Some(Value::Number(1.0)));
    assert!(!session.reporter().had_error());
    assert!(!session.reporter().had_runtime_error());
}

#[test]
fn a_lexical_error_skips_parsing() {
    let mut session = session();

    assert_eq!(session.run_line("1 + ? ;"), None);
    assert_eq!(session.reporter().messages,
               ["! LEXICAL ERROR [1:5] at '?': Unexpected character."]);
}

#[test]
fn declarations_persist_across_lines() {
    let mut session = session();

    assert_eq!(session.run_line("function sq(x) => x * x;"), Some(Value::Nil));
    assert_eq!(session.run_line("sq(9);"), Some(Value::Number(81.0)));
    assert!(session.context().atmosphere.has_overload("sq", 1));
    assert_eq!(session.context().atmosphere.arities("sq"), vec![1]);
}

#[test]
fn line_numbers_reach_diagnostics() {
    let mut session = session();

    session.run_line_at("(1;", 12);
    assert_eq!(session.reporter_mut().take(),
               vec!["! SYNTAX ERROR [12:3] at ';': Expected ')' after expression.".to_string()]);

    session.run_line_at("y;", 13);
    assert_eq!(session.reporter_mut().take(),
               vec!["! SEMANTIC ERROR: `y` is not declared.".to_string()]);
}

#[test]
fn sessions_are_independent() {
    let mut first = session();
    let mut second = session();

    first.run_line("function only_here() => 1;");
    assert_eq!(first.run_line("only_here();"), Some(Value::Number(1.0)));
    assert_eq!(second.run_line("only_here();"), None);
}

#[test]
fn declared_overloads_expose_parameters_and_body() {
    let mut session = session();

    session.run_line("function hyp(a, b) => sqrt(a * a + b * b);");
    session.run_line("function hyp(a) => a;");
    let atmosphere = &session.context().atmosphere;

    assert_eq!(atmosphere.parameters("hyp", 2),
               Some(&["a".to_string(), "b".to_string()][..]));
    assert_eq!(atmosphere.parameters("hyp", 1), Some(&["a".to_string()][..]));
    assert_eq!(atmosphere.body("hyp", 2).map(ToString::to_string),
               Some("(call sqrt [+ (* (a, a), * (b, b))])".to_string()));
    assert_eq!(atmosphere.parameters("hyp", 3), None);
    assert!(atmosphere.body("missing", 0).is_none());
}

#[test]
fn the_tree_shown_is_the_tree_evaluated() {
    let mut session = session();

    let tree = session.parse_line_at("let x = 3 in x * 2;", 4);
    assert_eq!(tree.as_ref().map(ToString::to_string),
               Some("let-in {= (x 3)}(* (x, 2))".to_string()));
    assert_eq!(tree.and_then(|tree| session.eval_tree(&tree)), Some(Value::Number(6.0)));

    assert_eq!(session.parse_line_at("let x = in x;", 5), None);
    assert!(session.reporter().had_error());
    assert_eq!(session.reporter_mut().take(),
               vec!["! SYNTAX ERROR [5:9] at 'in': Expected expression.".to_string()]);

    assert_eq!(session.parse_line_at("1 + 1;", 6).map(|tree| tree.to_string()),
               Some("+ (1, 1)".to_string()));
    assert!(!session.reporter().had_error());
}
