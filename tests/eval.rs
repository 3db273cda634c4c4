use termcalc::common::vec1;
use termcalc::ops::{Abs, Add, Div, Mul, Neg, Sub};
use termcalc::parse::{Expected, ParseErrorKind, Token, Tokenizer};
use termcalc::{Context, Error, EvalError, Term};

fn check(s: &str, expected: f64) {
    assert_eq!(termcalc::eval(s, &Context::new()), Ok(expected), "{}", s);
}

fn check_parse_err(s: &str, expected: ParseErrorKind) {
    match termcalc::eval(s, &Context::new()) {
        Err(Error::ParseError(err)) => assert_eq!(err.kind, expected, "{}", s),
        other => panic!("expected parse error for {:?}, got {:?}", s, other),
    }
}

#[test]
fn evaluates_expressions() {
    check("7", 7.0);
    check("(2*5)", 10.0);
    check("((2*5))", 10.0);
    check("((2+(4*5))-(9/3))", 19.0);
    check("((((3+5)-3)*(4+4))/(2*4))", 5.0);
    check("(0-9)", -9.0);
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(
        termcalc::eval("(4/(2-2))", &Context::new()),
        Err(Error::EvalError(EvalError::DivisionByZero))
    );
}

#[test]
fn parse_errors_are_reported() {
    check_parse_err(
        "",
        ParseErrorKind::UnexpectedToken {
            expected: vec1![Expected::LeftParen, Expected::Constant],
        },
    );
    check_parse_err("(((3)+(5))*(4)))", ParseErrorKind::Unbalanced);
    check_parse_err(
        "(2+)",
        ParseErrorKind::UnexpectedToken {
            expected: vec1![Expected::LeftParen, Expected::Constant],
        },
    );
    check_parse_err(
        "(10+2)",
        ParseErrorKind::UnexpectedToken {
            expected: vec1![Expected::Operator, Expected::RightParen],
        },
    );
}

#[test]
fn error_messages() {
    let err = termcalc::eval("(2+)", &Context::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "error at position 3 ()): left parenthesis or constant expected"
    );

    let err = termcalc::eval("(1/0)", &Context::new()).unwrap_err();
    assert_eq!(err.to_string(), "cannot divide by zero");

    let err = Term::variable("v2").unwrap().eval(&Context::new()).unwrap_err();
    assert_eq!(err.to_string(), "the variable 'v2' is not bound to a value");

    let err = Context::new().bind("", 1.0).unwrap_err();
    assert_eq!(err.to_string(), "the variable's name is empty in bind");
}

#[test]
fn parsed_terms_print_back() {
    for s in ["7", "(2*5)", "((2+(4*5))-(9/3))"] {
        assert_eq!(termcalc::parse(s).unwrap().to_string(), s);
    }
}

#[test]
fn trace_follows_the_grammar() {
    let tokens = termcalc::trace("((1+2)*3)").unwrap();
    assert_eq!(tokens, ["(", "(", "1", "+", "2", ")", "*", "3", ")"]);
    assert!(termcalc::trace("(1+2").is_err());
}

#[test]
fn terms_with_variables() {
    let mut ctx = Context::new();
    ctx.bind("d", 7.0).unwrap();

    let neg = Term::unary(Neg, Term::variable("d").unwrap());
    assert_eq!(neg.eval(&ctx), Ok(-7.0));

    let addition = Term::binary(Term::constant(3), Add, neg);
    assert_eq!(addition.eval(&ctx), Ok(-4.0));

    let product = Term::binary(addition, Mul, Term::constant(5));
    assert_eq!(product.eval(&ctx), Ok(-20.0));

    let absolute = Term::unary(Abs, Term::constant(-23));
    assert_eq!(absolute.eval(&ctx), Ok(23.0));

    ctx.bind("d", 1.0).unwrap();
    assert_eq!(product.eval(&ctx), Ok(10.0));

    let quotient = Term::binary(
        Term::constant(1),
        Div,
        Term::binary(product, Sub, Term::constant(10)),
    );
    assert_eq!(quotient.eval(&ctx), Err(EvalError::DivisionByZero));
}

#[test]
fn one_tree_many_contexts() {
    let term = Term::binary(Term::variable("x").unwrap(), Mul, Term::constant(2));
    for x in [-1.5, 0.0, 4.0] {
        let mut ctx = Context::new();
        ctx.bind("x", x).unwrap();
        assert_eq!(term.eval(&ctx), Ok(x * 2.0));
    }
    assert_eq!(
        term.eval(&Context::new()),
        Err(EvalError::NotBound("x".to_string()))
    );
}

#[test]
fn tokenizer_is_public() {
    let tokens: Vec<_> = Tokenizer::new("(9/3)").collect();
    assert_eq!(
        tokens,
        [
            Token::LeftParen,
            Token::Constant(9),
            Token::Div,
            Token::Constant(3),
            Token::RightParen,
        ]
    );
}
