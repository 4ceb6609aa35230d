use bitcalc::{
    CalcError, Environment,
    error::{EvalError, LexError, ParseError},
    eval_line, parse_line,
    util::num::{format_number, format_result},
};

fn eval_fresh(src: &str) -> f64 {
    eval_line(src, &mut Environment::new()).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn assert_value(src: &str, expected: f64) {
    let result = eval_fresh(src);
    assert!((result - expected).abs() < 1e-9,
            "'{src}' expected {expected}, got {result}");
}

fn assert_failure(src: &str) -> CalcError {
    match eval_line(src, &mut Environment::new()) {
        Ok(v) => panic!("'{src}' succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_render(src: &str, expected: &str) {
    let expr = parse_line(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    assert_eq!(expr.to_string(), expected, "render of '{src}'");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("10 - 3", 7.0);
    assert_value("4 * 2.5", 10.0);
    assert_value("10 / 4", 2.5);
    assert_value("2 ** 3", 8.0);
    assert_value("10 % 3", 1.0);
    assert_value("-5 + 10", 5.0);
    assert_value("-(2 + 3) * 4", -20.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ** 3 ** 2", 512.0);
    assert_value("2 ** (3 ** 2)", 512.0);
    assert_value("(2 ** 3) ** 2", 64.0);
}

#[test]
fn power_binds_tighter_than_shift_and_mul() {
    assert_value("4 * 2 ** 2", 16.0);
    assert_value("1 << 2 ** 3", 256.0);
}

#[test]
fn bitwise_precedence_chain() {
    // & binds tighter than |: 5 | (2 & 3) = 5 | 2.
    assert_value("5 | 2 & 3", 7.0);
    // >> binds tighter than &: (8 >> 1) & 3 = 4 & 3.
    assert_value("8 >> 1 & 3", 0.0);
    // ^ sits between | and &.
    assert_value("1 | 2 ^ 3", 1.0);
    assert_value("5 ^ 1", 4.0);
}

#[test]
fn bitwise_binds_tighter_than_multiplication() {
    // The non-conventional part of the ladder: 2 * (3 | 4).
    assert_value("2 * 3 | 4", 14.0);
    assert_value("12 / 2 & 3", 6.0);
}

#[test]
fn bitwise_and_shift_operations() {
    assert_value("5 & 3", 1.0);
    assert_value("5 | 2", 7.0);
    assert_value("1 << 3", 8.0);
    assert_value("16 >> 2", 4.0);
    assert_value("~5", -6.0);
}

#[test]
fn bitwise_operands_truncate_toward_zero() {
    assert_value("5.7 & 3", 1.0);
    assert_value("~5.9", -6.0);
    assert_value("-5.7 & 7", 3.0); // -5.7 truncates to -5
}

#[test]
fn modulo_sign_follows_dividend() {
    assert_value("-7 % 3", -1.0);
    assert_value("7 % -3", 1.0);
    assert_value("5.5 % 2", 1.5);
}

#[test]
fn fractional_and_negative_exponents() {
    assert_value("9 ** 0.5", 3.0);
    assert_value("2 ** -1", 0.5);
    // Negative base with fractional exponent yields NaN, surfaced as-is.
    assert!(eval_fresh("-9 ** 0.5").is_nan());
}

#[test]
fn assignment_persists_across_lines() {
    let mut env = Environment::new();

    assert_eq!(eval_line("x = 5", &mut env).unwrap(), 5.0);
    assert_eq!(eval_line("y = x + 3", &mut env).unwrap(), 8.0);

    assert_eq!(env.get("x"), Some(5.0));
    assert_eq!(env.get("y"), Some(8.0));
    assert_eq!(env.len(), 2);

    assert_eq!(eval_line("x = x + 1", &mut env).unwrap(), 6.0);
    assert_eq!(env.get("x"), Some(6.0));
}

#[test]
fn chained_assignment() {
    let mut env = Environment::new();

    assert_eq!(eval_line("x = y = 5", &mut env).unwrap(), 5.0);
    assert_eq!(env.get("x"), Some(5.0));
    assert_eq!(env.get("y"), Some(5.0));
}

#[test]
fn failed_assignment_leaves_store_untouched() {
    let mut env = Environment::new();

    assert!(eval_line("x = 10 / 0", &mut env).is_err());
    assert!(env.is_empty());

    // A chain writes nothing when the innermost right-hand side fails.
    assert!(eval_line("x = y = 10 % 0", &mut env).is_err());
    assert!(env.is_empty());

    // An earlier line's binding survives a later failure.
    assert_eq!(eval_line("kept = 1", &mut env).unwrap(), 1.0);
    assert!(eval_line("kept = missing + 1", &mut env).is_err());
    assert_eq!(env.get("kept"), Some(1.0));
}

#[test]
fn underscore_identifiers() {
    let mut env = Environment::new();

    assert_eq!(eval_line("_x = 1", &mut env).unwrap(), 1.0);
    assert_eq!(eval_line("x2 = _x + 1", &mut env).unwrap(), 2.0);
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    let err = assert_failure("10 / 0");
    assert!(matches!(err, CalcError::Eval(EvalError::DivisionByZero { .. })),
            "got {err:?}");

    let err = assert_failure("10 % 0");
    assert!(matches!(err, CalcError::Eval(EvalError::ModuloByZero { .. })),
            "got {err:?}");
}

#[test]
fn unknown_variable_is_an_error() {
    let err = assert_failure("undefinedName + 1");
    assert!(matches!(err,
                     CalcError::Eval(EvalError::UnknownVariable { ref name, .. }) if name == "undefinedName"),
            "got {err:?}");
}

#[test]
fn invalid_characters_are_lex_errors() {
    let err = assert_failure("2 $ 2");
    assert!(matches!(err, CalcError::Lex(LexError::InvalidCharacter { ch: '$', .. })),
            "got {err:?}");

    let err = assert_failure("2 ! 2");
    assert!(matches!(err, CalcError::Lex(LexError::InvalidCharacter { ch: '!', .. })),
            "got {err:?}");
}

#[test]
fn single_angle_brackets_are_incomplete_shifts() {
    let err = assert_failure("1 < 2");
    assert!(matches!(err, CalcError::Lex(LexError::IncompleteShift { found: '<', .. })),
            "got {err:?}");

    let err = assert_failure("3 > 4");
    assert!(matches!(err, CalcError::Lex(LexError::IncompleteShift { found: '>', .. })),
            "got {err:?}");
}

#[test]
fn second_decimal_point_stops_the_scan() {
    // "1.2" is scanned as a literal; the stray "." then fails on the next
    // scan as an invalid character.
    let err = assert_failure("1.2.3");
    assert!(matches!(err, CalcError::Lex(LexError::InvalidCharacter { ch: '.', .. })),
            "got {err:?}");

    // A trailing decimal point alone is part of the literal.
    assert_value("5.", 5.0);
    assert_value("5. + 1", 6.0);
}

#[test]
fn parse_errors() {
    let err = assert_failure("2 + 3 4");
    assert!(matches!(err, CalcError::Parse(ParseError::UnexpectedTrailingTokens { .. })),
            "got {err:?}");

    let err = assert_failure("(2 + 3");
    assert!(matches!(err, CalcError::Parse(ParseError::ExpectedClosingParen { .. })),
            "got {err:?}");

    let err = assert_failure("2 +");
    assert!(matches!(err, CalcError::Parse(ParseError::UnexpectedEndOfInput)),
            "got {err:?}");

    let err = assert_failure("");
    assert!(matches!(err, CalcError::Parse(ParseError::UnexpectedEndOfInput)),
            "got {err:?}");

    let err = assert_failure("2 , 3");
    assert!(matches!(err, CalcError::Parse(ParseError::UnexpectedTrailingTokens { .. })),
            "got {err:?}");

    let err = assert_failure("* 2");
    assert!(matches!(err, CalcError::Parse(ParseError::UnexpectedToken { .. })),
            "got {err:?}");
}

#[test]
fn assignment_is_rejected_inside_parentheses() {
    // Parenthesized groups re-enter the grammar below the assignment rule.
    assert!(parse_line("(x = 5)").is_err());
    assert!(parse_line("1 + (x = 5)").is_err());
}

#[test]
fn nesting_deeper_than_the_guard_is_an_error() {
    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    let err = assert_failure(&deep);
    assert!(matches!(err, CalcError::Parse(ParseError::NestingTooDeep { .. })),
            "got {err:?}");

    // Fifty levels is comfortably inside the limit.
    let fine = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_value(&fine, 1.0);
}

#[test]
fn rendering_is_fully_parenthesized() {
    assert_render("2 + 3 * 4", "(2 + (3 * 4))");
    assert_render("(2 + 3) * 4", "((2 + 3) * 4)");
    assert_render("x = y = 5", "(x = (y = 5))");
    assert_render("~5", "(~5)");
    assert_render("-(2 + 3) * 4", "((-(2 + 3)) * 4)");
    assert_render("2 ** 3 ** 2", "(2 ** (3 ** 2))");
    assert_render("8 >> 1 & 3", "((8 >> 1) & 3)");
    assert_render("2.50", "2.5");
    assert_render("5", "5");
}

#[test]
fn rendering_round_trips_through_the_parser() {
    let sources = ["2 + 3 * 4",
                   "(2 + 3) * 4",
                   "2 ** 3 ** 2",
                   "5 | 2 & 3",
                   "8 >> 1 & 3",
                   "~5.9 + 1",
                   "-(2 + 3) * 4",
                   "x = y = 5.5",
                   "10 / 4 % 3"];

    for src in sources {
        let expr = parse_line(src).unwrap();
        let rendered = expr.to_string();
        let reparsed = parse_line(&rendered).unwrap_or_else(|e| {
                           panic!("render of '{src}' ('{rendered}') failed to re-parse: {e}")
                       });

        // The canonical form is a fixed point of render-then-parse.
        assert_eq!(reparsed.to_string(), rendered, "re-render of '{src}'");

        let mut env_a = Environment::new();
        let mut env_b = Environment::new();
        let a = env_a.eval(&expr).unwrap();
        let b = env_b.eval(&reparsed).unwrap();
        assert!((a - b).abs() < 1e-12 || (a.is_nan() && b.is_nan()),
                "'{src}' evaluated to {a} but its render to {b}");
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  1 \t +  2  ", 3.0);
    assert_value("1 +\n2", 3.0);
    assert_value("1+2*3", 7.0);
}

#[test]
fn result_formatting() {
    assert_eq!(format_result(eval_fresh("2 + 3 * 4")), "14");
    assert_eq!(format_result(eval_fresh("10 / 4")), "2.5");
    assert_eq!(format_result(eval_fresh("10 / 3")), "3.333333");
    assert_eq!(format_result(eval_fresh("~5")), "-6");
    assert_eq!(format_result(2.999_999_999_9), "3");
    assert_eq!(format_number(5.0), "5");
    assert_eq!(format_number(2.5), "2.5");
}

#[test]
fn oversized_shift_counts_are_masked() {
    // Shift counts wrap into 0..64 instead of panicking.
    assert_value("1 << 64", 1.0);
    assert_value("1 << 65", 2.0);
}
