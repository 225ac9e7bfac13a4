use hulk::{
    error::LexicalErrorKind,
    interpreter::lexer::{TokenKind, scan, scan_from_line},
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    let (tokens, errors) = scan(src);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    tokens.into_iter().map(|token| token.kind).collect()
}

#[test]
fn operators_use_longest_match() {
    use TokenKind::{
        Arrow, Bang, BangEqual, Eof, EqualEqual, Equals, Greater, GreaterEqual, Less, LessEqual,
    };

    assert_eq!(kinds("! != = == => < <= > >="),
               vec![Bang,
                    BangEqual,
                    Equals,
                    EqualEqual,
                    Arrow,
                    Less,
                    LessEqual,
                    Greater,
                    GreaterEqual,
                    Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("let in if else function true false PI E letter Ex _x1"),
               vec![TokenKind::Let,
                    TokenKind::In,
                    TokenKind::If,
                    TokenKind::Else,
                    TokenKind::Function,
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::Pi,
                    TokenKind::Euler,
                    TokenKind::Identifier("letter".to_string()),
                    TokenKind::Identifier("Ex".to_string()),
                    TokenKind::Identifier("_x1".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn euler_only_when_alone() {
    assert_eq!(kinds("E + PI + Ex + _a;"),
               vec![TokenKind::Euler,
                    TokenKind::Plus,
                    TokenKind::Pi,
                    TokenKind::Plus,
                    TokenKind::Identifier("Ex".to_string()),
                    TokenKind::Plus,
                    TokenKind::Identifier("_a".to_string()),
                    TokenKind::Semicolon,
                    TokenKind::Eof]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("0 42 3.25"),
               vec![TokenKind::Number(0.0),
                    TokenKind::Number(42.0),
                    TokenKind::Number(3.25),
                    TokenKind::Eof]);
}

#[test]
fn number_glued_to_letters_is_one_invalid_token() {
    let (tokens, errors) = scan("12abc + 1;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexicalErrorKind::InvalidToken);
    assert_eq!(errors[0].lexeme, "12abc");
    assert_eq!(tokens[0].kind, TokenKind::Plus);
}

#[test]
fn strings_unescape_quotes_tabs_and_newlines() {
    assert_eq!(kinds(r#""a\"b""#),
               vec![TokenKind::Str("a\"b".to_string()), TokenKind::Eof]);
    assert_eq!(kinds(r#""x\ty\nz""#),
               vec![TokenKind::Str("x\ty\nz".to_string()), TokenKind::Eof]);
    assert_eq!(kinds(r#""c:\path""#),
               vec![TokenKind::Str("c:\\path".to_string()), TokenKind::Eof]);
}

#[test]
fn unterminated_string() {
    let (tokens, errors) = scan("\"abc");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexicalErrorKind::UnterminatedString);
    assert_eq!(errors[0].lexeme, "\"abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn errors_accumulate() {
    let (tokens, errors) = scan("1 $ 2 # 3;");

    assert_eq!(errors.len(), 2);
    assert!(errors.iter()
                  .all(|error| error.kind == LexicalErrorKind::UnexpectedCharacter));
    assert_eq!(errors[0].lexeme, "$");
    assert_eq!(errors[1].lexeme, "#");
    assert_eq!(tokens.len(), 5);
}

#[test]
fn positions_are_one_based() {
    let (tokens, _) = scan("let x\n  = 1;");

    let positions = tokens.iter()
                          .map(|token| (token.line, token.column))
                          .collect::<Vec<_>>();
    assert_eq!(positions, vec![(1, 1), (1, 5), (2, 3), (2, 5), (2, 6), (2, 7)]);
}

#[test]
fn first_line_offsets_every_position() {
    let (tokens, errors) = scan_from_line("1 ? 2;", 7);

    assert_eq!(tokens[0].line, 7);
    assert_eq!(errors[0].line, 7);
    assert_eq!(errors[0].column, 3);
    assert_eq!(errors[0].to_string(),
               "Error on line 7, column 3: Unexpected character. Found '?'.");
}

#[test]
fn empty_input_is_just_the_end() {
    let (tokens, errors) = scan("");

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
}
