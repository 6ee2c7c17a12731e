use tally::{AngleUnit, evaluate, preview,
            error::{ArithmeticError, EvalError, FactorialError}};

/// Asserts that `input` evaluates to `expected` in degree mode.
fn assert_result(input: &str, expected: &str) {
    assert_eq!(evaluate(input, AngleUnit::Degrees).as_deref(),
               Ok(expected),
               "input: {input}");
}

/// Asserts that `input` fails to evaluate in degree mode.
fn assert_error(input: &str) {
    assert!(evaluate(input, AngleUnit::Degrees).is_err(), "input: {input}");
}

#[test]
fn addition_and_multiplication_precedence() {
    assert_result("2+3*4", "14");
    assert_result("2*3+4", "10");
    assert_result("1+2*3-4/2", "5");
}

#[test]
fn additive_operators_are_left_associative() {
    assert_result("10-2-3", "5");
    assert_result("20/2/5", "2");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_result("2^3^2", "512");
}

#[test]
fn unary_minus_binds_looser_than_exponentiation() {
    assert_result("-2^2", "-4");
    assert_result("(-2)^2", "4");
}

#[test]
fn exponent_may_be_negative() {
    assert_result("2^-3", "0.125");
}

#[test]
fn unary_minus_stacks() {
    assert_result("--2", "2");
    assert_result("5--2", "7");
}

#[test]
fn display_glyphs_are_operator_aliases() {
    assert_result("6×7", "42");
    assert_result("1÷4", "0.25");
    assert_result("3−1", "2");
}

#[test]
fn modulo_in_both_spellings() {
    assert_result("10%3", "1");
    assert_result("10 mod 3", "1");
    assert_result("10mod3", "1");
}

#[test]
fn parentheses_override_precedence() {
    assert_result("(2+3)*4", "20");
    assert_result("((1+1))", "2");
}

#[test]
fn implicit_multiplication_by_juxtaposition() {
    assert_result("2π", "6.2831853072");
    assert_result("3(1+2)", "9");
    assert_result("(1+2)(3+4)", "21");
    assert_result("2sin(90)", "2");
}

#[test]
fn constants_are_tokens() {
    assert_result("pi-π", "0");
    assert_result("e^0", "1");
}

#[test]
fn factorial_of_small_integers() {
    assert_result("0!", "1");
    assert_result("1!", "1");
    assert_result("5!", "120");
    assert_result("3!!", "720");
}

#[test]
fn factorial_of_twenty_formats_scientifically() {
    assert_result("20!", "2.432902E+18");
}

#[test]
fn factorial_rejects_out_of_domain_operands() {
    assert_eq!(evaluate("21!", AngleUnit::Degrees).unwrap_err(),
               EvalError::Factorial(FactorialError::TooLarge { pos: 2 }));
    assert_eq!(evaluate("2.5!", AngleUnit::Degrees).unwrap_err(),
               EvalError::Factorial(FactorialError::NotAnInteger { pos: 3 }));
    assert_eq!(evaluate("(0-3)!", AngleUnit::Degrees).unwrap_err(),
               EvalError::Factorial(FactorialError::Negative { pos: 5 }));
}

#[test]
fn squaring_glyph_is_a_postfix_power() {
    assert_result("3²", "9");
    assert_result("3!²", "36");
    assert_result("-3²", "-9");
}

#[test]
fn square_root_in_both_spellings() {
    assert_result("sqrt(9)", "3");
    assert_result("√(16)", "4");
}

#[test]
fn trigonometry_defaults_to_degrees() {
    assert_result("sin(90)", "1");
    assert_result("cos(0)", "1");
    assert_result("tan(45)", "1");
}

#[test]
fn trigonometry_in_radian_mode() {
    assert_eq!(evaluate("sin(pi/2)", AngleUnit::Radians).as_deref(), Ok("1"));
    assert_eq!(evaluate("cos(0)", AngleUnit::Radians).as_deref(), Ok("1"));

    // The same text reads as 90 radians here, not a quarter turn.
    assert_eq!(evaluate("sin(90)", AngleUnit::Radians).as_deref(),
               Ok("0.8939966636"));
}

#[test]
fn logarithms_and_exponential() {
    assert_result("log(1)", "0");
    assert_result("log10(1000)", "3");
    assert_result("exp(0)", "1");
    assert_result("exp(1)", "2.7182818285");
    assert_result("abs(0-5)", "5");
}

#[test]
fn out_of_domain_function_arguments_are_errors() {
    assert_error("log(0)");
    assert_error("log(-1)");
    assert_error("log10(0)");
    assert_error("sqrt(-4)");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(evaluate("1/0", AngleUnit::Degrees).unwrap_err(),
               EvalError::Arithmetic(ArithmeticError::DivisionByZero { pos: 1 }));
    assert_error("0/0");
    assert_error("5%0");
}

#[test]
fn nan_power_is_undefined() {
    assert_error("(-8)^(1/3)");
}

#[test]
fn infinite_results_are_overflow_errors() {
    assert_error("10^400");
    assert_error("(10^200)*(10^200)");
}

#[test]
fn integral_results_print_without_a_fraction() {
    assert_result("41+1", "42");
    assert_result("1.5+2.5", "4");
}

#[test]
fn fractional_results_are_trimmed_to_ten_digits() {
    assert_result("1/3", "0.3333333333");
    assert_result("0.1+0.2", "0.3");
    assert_result("1/4", "0.25");
}

#[test]
fn large_and_tiny_magnitudes_use_scientific_notation() {
    assert_result("2^50", "1.125900E+15");
    assert_result("0.00001", "1.000000E-05");
    assert_result("0-2^50", "-1.125900E+15");
}

#[test]
fn formatting_is_idempotent() {
    for input in ["1/3", "41+1", "2^50", "0.00001"] {
        let first = evaluate(input, AngleUnit::Degrees).unwrap();
        let second = evaluate(&first, AngleUnit::Degrees).unwrap();
        assert_eq!(first, second, "input: {input}");
    }
}

#[test]
fn scientific_output_feeds_back_as_input() {
    // Chained input: a result in scientific range goes back into the
    // expression field and must tokenize as one literal.
    let formatted = evaluate("2^50", AngleUnit::Degrees).unwrap();
    assert_eq!(formatted, "1.125900E+15");
    assert_eq!(evaluate(&formatted, AngleUnit::Degrees).unwrap(), formatted);

    assert_result("1.000000E-05", "1.000000E-05");
    assert_result("2E5+1", "200001");
    assert_result("1.5E+12/3", "5.000000E+11");
}

#[test]
fn exponent_suffix_is_uppercase_only() {
    // "2e3" is 2·e followed by a trailing 3, not two thousand.
    assert_error("2e3");
    assert_error("1.2.3E5");
}

#[test]
fn malformed_literals_are_lexing_errors() {
    assert_error("1.2.3");
    assert_error("1..2");
    assert_error(".");
}

#[test]
fn unknown_characters_are_lexing_errors() {
    assert_error("2$3");
    assert_error("1 # 2");
}

#[test]
fn incomplete_input_is_a_parsing_error() {
    assert_error("");
    assert_error("   ");
    assert_error("1+");
    assert_error("*3");
    assert_error("(1+2");
    assert_error("1+2)");
    assert_error("1 2");
}

#[test]
fn function_argument_requires_parentheses() {
    assert_error("sin 1");
    assert_error("√25");
}

#[test]
fn preview_returns_results_for_complete_input() {
    assert_eq!(preview("1+2", AngleUnit::Degrees), Some("3".to_string()));
    assert_eq!(preview("2π", AngleUnit::Degrees),
               Some("6.2831853072".to_string()));
}

#[test]
fn preview_is_silent_on_partial_input() {
    assert_eq!(preview("", AngleUnit::Degrees), None);
    assert_eq!(preview("1+", AngleUnit::Degrees), None);
    assert_eq!(preview("sin(", AngleUnit::Degrees), None);
    assert_eq!(preview("(1+2", AngleUnit::Degrees), None);
    assert_eq!(preview("√(25", AngleUnit::Degrees), None);
}

#[test]
fn preview_is_silent_on_invalid_input() {
    assert_eq!(preview("1/0", AngleUnit::Degrees), None);
    assert_eq!(preview("1.2.3", AngleUnit::Degrees), None);
    assert_eq!(preview("10^400", AngleUnit::Degrees), None);
}
