use sluc::{
    error::{Error, ParseError, RuntimeError},
    get_output,
    interpreter::evaluator::core::{EvalConfig, ReturnMode},
    run_source,
};

fn assert_success(src: &str) {
    if let Err(e) = get_output(src) {
        panic!("Program failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_output(src).is_ok() {
        panic!("Program succeeded but was expected to fail")
    }
}

fn assert_output(src: &str, expected: &str) {
    match get_output(src) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Program failed: {e}\n{src}"),
    }
}

fn output_with(src: &str, return_mode: ReturnMode) -> Result<String, Error> {
    let config = EvalConfig { return_mode,
                              ..EvalConfig::default() };
    let mut out = Vec::new();
    run_source(src, &config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn main_with(body: &str) -> String {
    format!("int main() {{ {body} }}")
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_output(&main_with("int a; a = 2 + 3 * 4 ** 2; print(a);"), "50\n");
    assert_output(&main_with("int a; a = 2 ** 3 ** 2; print(a);"), "512\n");
    assert_output(&main_with("int a; a = 10 - 4 - 3; print(a);"), "3\n");
    assert_output(&main_with("int a; a = 100 / 10 / 5; print(a);"), "2\n");
    assert_output(&main_with("int a; a = (2 + 3) * 4; print(a);"), "20\n");
    assert_output(&main_with("int a; a = 3 + 4 * 2; print(a);"), "11\n");
}

#[test]
fn integer_division_and_remainder_truncate_toward_zero() {
    assert_output(&main_with("print(7 / 2, -7 / 2, 7 % 3, -7 % 2);"), "3 -3 1 -1\n");
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_output(&main_with("print(1 + 0.5, 3 * 1.5, 1.0 / 4, 7.5 % 2);"),
                  "1.5 4.5 0.25 1.5\n");
}

#[test]
fn power_with_negative_exponent_is_float() {
    assert_output(&main_with("float f; f = 2 ** -1; print(f);"), "0.5\n");
    assert_output(&main_with("print(2 ** 0, 2.0 ** 2);"), "1 4.0\n");
}

#[test]
fn assignment_converts_numbers() {
    assert_output(&main_with("float f; f = 3; print(f);"), "3.0\n");
    assert_output(&main_with("int i; i = 3.9; print(i);"), "3\n");
    assert_output(&main_with("int i; i = -3.9; print(i);"), "-3\n");
}

#[test]
fn assignment_rejects_incompatible_types() {
    assert_failure(&main_with("bool b; b = 3;"));
    assert_failure(&main_with("int i; i = true;"));
    assert_failure(&main_with("float f; f = \"3\";"));
    assert_failure(&main_with("str s; s = 3;"));
}

#[test]
fn type_error_happens_before_any_output() {
    let mut out = Vec::new();
    let result = run_source("int main() { bool b; b = 3; print(b); }",
                            &EvalConfig::default(),
                            &mut out);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::IncompatibleAssignment { .. }))));
    assert!(out.is_empty());
}

#[test]
fn undeclared_identifier_is_a_syntax_error() {
    let result = get_output("int main() { print(x); }");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::UndefinedVariable { ref name, line: 1 }))
                     if name == "x"));
}

#[test]
fn duplicate_parameters_and_locals_are_rejected() {
    let result = get_output("int f(int a, int a) { return a; }\nint main() { }");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::DuplicateIdentifier { ref name, .. }))
                     if name == "a"));

    let result = get_output("int f(int a) { float a; return 1; }\nint main() { }");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::DuplicateIdentifier { ref name, .. }))
                     if name == "a"));
}

#[test]
fn same_names_in_different_functions_are_allowed() {
    assert_output("int f(int a) { int b; b = a; return b; }
                   int main() { int a; int b; a = 1; b = f(a); print(a, b); }",
                  "1 1\n");
}

#[test]
fn declarations_must_come_first() {
    let result = get_output("int main() {\n int a;\n a = 1;\n int b;\n}");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::DeclarationAfterStatement { line: 4 }))));
}

#[test]
fn function_calls() {
    assert_output("int f(int x) { return x * x; } int main() { int y; y = f(5); print(y); }",
                  "25\n");
    assert_output("float half(float x) { return x / 2; } int main() { print(half(3)); }",
                  "1.5\n");
    assert_output("int trunc() { return 3.7; } int main() { print(trunc()); }",
                  "3\n");
    assert_output("int add(int a, int b) { return a + b; }
                   int main() { print(add(2, add(3, 4))); }",
                  "9\n");
}

#[test]
fn recursion() {
    assert_output("int fact(int n) { if (n <= 1) return 1; return n * fact(n - 1); }
                   int main() { print(fact(5)); }",
                  "120\n");
    assert_output("int fib(int n) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); }
                   int main() { print(fib(15)); }",
                  "610\n");
}

#[test]
fn functions_must_be_defined_before_use() {
    let result = get_output("int main() { int x; x = f(); } int f() { return 1; }");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::UndefinedFunction { .. }))));
}

#[test]
fn main_is_not_callable() {
    let result = get_output("int main() { int x; x = main(); }");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::UndefinedFunction { .. }))));
}

#[test]
fn call_arity_is_checked_while_parsing() {
    let result = get_output("int f(int a) { return a; } int main() { int x; x = f(1, 2); }");
    assert!(matches!(result,
                     Err(Error::Syntax(ParseError::ArgumentCountMismatch { expected: 1,
                                                                           found: 2,
                                                                           .. }))));
}

#[test]
fn program_structure_errors() {
    assert!(matches!(get_output("int f() { return 1; }"),
                     Err(Error::Syntax(ParseError::MissingMain { .. }))));
    assert!(matches!(get_output("int main() { } int main() { }"),
                     Err(Error::Syntax(ParseError::DuplicateFunction { .. }))));
    assert!(matches!(get_output("str f() { return \"x\"; } int main() { }"),
                     Err(Error::Syntax(ParseError::InvalidReturnType { .. }))));
    assert!(matches!(get_output("int main() { print(1);"),
                     Err(Error::Syntax(ParseError::UnexpectedEndOfInput { .. }))));
}

#[test]
fn while_loops() {
    assert_output(&main_with("int i; int sum; i = 1; sum = 0;
                              while (i <= 10) { sum = sum + i; i = i + 1; }
                              print(sum);"),
                  "55\n");
    assert_output(&main_with("int i; i = 0; while (false) i = 1; print(i);"), "0\n");
}

#[test]
fn if_else() {
    assert_output(&main_with("if (1 < 2) print(\"yes\"); else print(\"no\");"),
                  "yes\n");
    assert_output(&main_with("if (1 > 2) print(\"yes\"); else print(\"no\");"),
                  "no\n");
    assert_output(&main_with("if (false) print(1);"), "");
}

#[test]
fn conditions_must_be_boolean() {
    let result = get_output(&main_with("if (1) print(1);"));
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::ExpectedBoolean { .. }))));
    assert_failure(&main_with("while (0) print(1);"));
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_output("bool f() { print(\"called\"); return true; }
                   int main() { bool b; b = false && f(); print(b); b = true || f(); print(b); }",
                  "called\nfalse\ncalled\ntrue\n");
    assert_failure(&main_with("bool b; b = true && 1;"));
    assert_failure(&main_with("bool b; b = !3;"));
    assert_failure(&main_with("int i; i = -true;"));
}

#[test]
fn comparisons() {
    assert_output(&main_with("print(1 < 2, 2 <= 2, 3 > 4, 4 >= 5, 1 == 1.0, 2 != 2);"),
                  "true true false false true false\n");
    assert_output(&main_with("print(true == true, \"a\" == \"a\", \"a\" != \"b\");"),
                  "true true true\n");
    assert_failure(&main_with("bool b; b = true == 1;"));
    assert_failure(&main_with("bool b; b = \"a\" < \"b\";"));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(get_output(&main_with("bool b; b = 1 < 2 < 3;")),
                     Err(Error::Syntax(_))));
    assert!(matches!(get_output(&main_with("bool b; b = 1 == 1 == true;")),
                     Err(Error::Syntax(_))));
}

#[test]
fn unary_operators_apply_once() {
    assert_output(&main_with("int x; x = 3; print(-x, -x ** 2, !(x > 2));"),
                  "-3 9 false\n");
    assert!(matches!(get_output(&main_with("int x; x = 3; x = --x;")),
                     Err(Error::Syntax(_))));
}

#[test]
fn print_formats_values() {
    assert_output(&main_with("print(\"x =\", 1, 2.5, true, 3.0);"),
                  "x = 1 2.5 true 3.0\n");
    assert_output(&main_with("print(\"tab\\there\", \"quote \\\"q\\\"\");"),
                  "tab\there quote \"q\"\n");
    assert_output(&main_with("str s; s = \"hi\"; print(s);"), "hi\n");
    assert!(matches!(get_output(&main_with("print();")), Err(Error::Syntax(_))));
}

#[test]
fn empty_statements_and_blocks() {
    assert_output(&main_with("; { } {{ }} print(1); ;"), "1\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("/* a\n multi-line\n comment */\nint main() {\n // line comment\n print(1); // trailing\n}",
                  "1\n");
}

#[test]
fn numeric_literals() {
    assert_output(&main_with("print(1_000, 2.5e2, 1e3);"), "1000 250.0 1000.0\n");
    assert!(matches!(get_output(&main_with("print(99999999999999999999);")),
                     Err(Error::Syntax(ParseError::LiteralTooLarge { .. }))));
}

#[test]
fn runtime_errors() {
    assert!(matches!(get_output("int main() {\n int a;\n a = 1 / 0;\n}"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { line: 3 }))));
    assert!(matches!(get_output(&main_with("int a; a = 5 % 0;")),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(matches!(get_output(&main_with("float a; a = 1.0 / 0;")),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(matches!(get_output(&main_with("int a; a = 9223372036854775807 + 1;")),
                     Err(Error::Runtime(RuntimeError::Overflow { .. }))));
    assert!(matches!(get_output(&main_with("int a; print(a);")),
                     Err(Error::Runtime(RuntimeError::UninitializedVariable { .. }))));
    assert!(matches!(get_output("int f() { print(1); } int main() { int x; x = f(); }"),
                     Err(Error::Runtime(RuntimeError::MissingReturn { .. }))));
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = run_source(&main_with("print(1); print(1 / 0);"),
                            &EvalConfig::default(),
                            &mut out);

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn structured_returns_leave_blocks_and_loops() {
    let src = "int f() { { return 1; } return 2; } int main() { print(f()); }";
    assert_eq!(output_with(src, ReturnMode::Structured).unwrap(), "1\n");
    assert_eq!(output_with(src, ReturnMode::TopLevel).unwrap(), "2\n");

    let src = "int f(int n) { while (n < 3) { n = n + 1; return 10; } return n; }
               int main() { print(f(0)); }";
    assert_eq!(output_with(src, ReturnMode::Structured).unwrap(), "10\n");
    assert_eq!(output_with(src, ReturnMode::TopLevel).unwrap(), "3\n");
}

#[test]
fn top_level_returns_pass_through_if_else() {
    let src = "int sign(int n) { if (n < 0) return -1; else if (n > 0) return 1; else return 0; }
               int main() { print(sign(-5), sign(0), sign(7)); }";
    assert_eq!(output_with(src, ReturnMode::Structured).unwrap(), "-1 0 1\n");
    assert_eq!(output_with(src, ReturnMode::TopLevel).unwrap(), "-1 0 1\n");
}

#[test]
fn top_level_mode_reports_returns_hidden_in_blocks() {
    let src = "int f() { { return 1; } } int main() { print(f()); }";
    assert!(matches!(output_with(src, ReturnMode::TopLevel),
                     Err(Error::Runtime(RuntimeError::MissingReturn { .. }))));
}

#[test]
fn top_level_if_without_return_is_fine() {
    assert_success("int main() { int a; a = 1; if (a == 1) print(a); print(2); }");
    assert_eq!(output_with("int main() { if (true) print(1); print(2); }",
                           ReturnMode::TopLevel).unwrap(),
               "1\n2\n");
}

#[test]
fn main_may_return() {
    assert_output("int main() { print(1); return 0; print(2); }", "1\n");
}

#[test]
fn recursion_limit() {
    let src = "int f(int n) { return f(n + 1); } int main() { int x; x = f(0); }";
    let config = EvalConfig { max_call_depth: Some(50),
                              ..EvalConfig::default() };
    let mut out = Vec::new();

    let result = run_source(src, &config, &mut out);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::RecursionLimit { limit: 50, line: 1 }))));
}

#[test]
fn recursion_within_limit_succeeds() {
    let src = "int down(int n) { if (n == 0) return 0; return down(n - 1); }
               int main() { print(down(20)); }";
    let config = EvalConfig { max_call_depth: Some(21),
                              ..EvalConfig::default() };
    let mut out = Vec::new();

    run_source(src, &config, &mut out).unwrap();
    assert_eq!(out, b"0\n");
}

#[test]
fn print_writes_each_argument_before_evaluating_the_next() {
    assert_output("int f() { print(\"inner\"); return 2; } int main() { print(1, f()); }",
                  "1 inner\n2\n");
}

#[test]
fn print_keeps_arguments_written_before_a_failing_one() {
    let mut out = Vec::new();
    let result = run_source(&main_with("print(1, 1 / 0);"), &EvalConfig::default(), &mut out);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert_eq!(out, b"1 ");
}

#[test]
fn large_integers_widen_to_the_nearest_float() {
    assert_output(&main_with("float f; f = 9007199254740993; print(f, 9007199254740993 + 0.5);"),
                  "9007199254740992.0 9007199254740992.0\n");
}

#[test]
fn reals_use_signed_two_digit_exponents() {
    assert_output(&main_with("print(1e16, 0.00001, 2.5e-7, 1e15);"),
                  "1e+16 1e-05 2.5e-07 1000000000000000.0\n");
}
