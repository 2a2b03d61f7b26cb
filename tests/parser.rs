use sluc::{
    ast::{BinaryOperator, DataType, Expr, LiteralValue, Statement, UnaryOperator},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::program::parse_program,
    },
    parse_source,
};

fn parse_main_statement(body: &str) -> Statement {
    let program = parse_source(&format!("int main() {{ int x; bool b; {body} }}"))
        .unwrap_or_else(|e| panic!("Failed to parse {body:?}: {e}"));
    program.functions[0].body[0].clone()
}

fn assigned_expr(src: &str) -> String {
    match parse_main_statement(src) {
        Statement::Assignment { value, .. } => value.to_string(),
        other => panic!("expected an assignment, got {other:?}"),
    }
}

fn syntax_error(src: &str) -> ParseError {
    match parse_source(src) {
        Err(Error::Syntax(e)) => e,
        Err(e) => panic!("expected a syntax error, got {e}"),
        Ok(_) => panic!("expected a syntax error for:\n{src}"),
    }
}

#[test]
fn tokens_carry_line_numbers() {
    let tokens = tokenize("int\n/* one\ntwo */ x\n// note\n;").unwrap();

    assert_eq!(tokens,
               vec![(Token::Int, 1),
                    (Token::Identifier("x".to_string()), 3),
                    (Token::Semicolon, 5)]);
}

#[test]
fn keywords_are_not_identifiers() {
    let tokens = tokenize("while whilex str print_").unwrap();

    assert_eq!(tokens[0].0, Token::While);
    assert_eq!(tokens[1].0, Token::Identifier("whilex".to_string()));
    assert_eq!(tokens[2].0, Token::StrType);
    assert_eq!(tokens[3].0, Token::Identifier("print_".to_string()));
}

#[test]
fn lexer_rejects_unknown_characters() {
    assert!(matches!(tokenize("x = 1 & 2;"),
                     Err(ParseError::UnexpectedToken { ref token, line: 1 }) if token == "&"));
    assert!(tokenize("\"unterminated").is_err());
    assert!(tokenize("\"bad \\q escape\"").is_err());
}

#[test]
fn precedence_climbs_through_every_level() {
    assert_eq!(assigned_expr("x = 2 + 3 * 4 ** 2;"), "(2 + (3 * (4 ** 2)))");
    assert_eq!(assigned_expr("x = 2 ** 3 ** 2;"), "(2 ** (3 ** 2))");
    assert_eq!(assigned_expr("x = 10 - 4 - 3;"), "((10 - 4) - 3)");
    assert_eq!(assigned_expr("x = 8 / 4 % 3;"), "((8 / 4) % 3)");
    assert_eq!(assigned_expr("b = x + 1 < 3 == true;"), "(((x + 1) < 3) == true)");
    assert_eq!(assigned_expr("b = b || b && !b;"), "(b || (b && !(b)))");
    assert_eq!(assigned_expr("x = -x ** 2;"), "(-(x) ** 2)");
    assert_eq!(assigned_expr("x = (2 + 3) * 4;"), "((2 + 3) * 4)");
}

#[test]
fn binary_nodes_record_operator_and_line() {
    let Statement::Assignment { value, .. } = parse_main_statement("x = 1\n+\n2;") else {
        panic!("expected an assignment");
    };

    let Expr::BinaryOp { left, op, right, line } = value else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(line, 2);
    assert!(matches!(*left, Expr::Literal { value: LiteralValue::Integer(1), .. }));
    assert!(matches!(*right, Expr::Literal { value: LiteralValue::Integer(2), line: 3 }));
}

#[test]
fn unary_operators() {
    let Statement::Assignment { value, .. } = parse_main_statement("b = !b;") else {
        panic!("expected an assignment");
    };
    assert!(matches!(value, Expr::UnaryOp { op: UnaryOperator::Not, .. }));

    assert!(matches!(syntax_error("int main() { int x; x = - -1; }"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn function_headers_and_declarations() {
    let program = parse_source("float avg(int a, float b) { float sum; str label; sum = a + b; return sum / 2; }
                                int main() { print(avg(1, 2.0)); }").unwrap();

    let avg = &program.functions[0];
    assert_eq!(avg.name, "avg");
    assert_eq!(avg.return_type, DataType::Float);
    assert_eq!(avg.params.iter().map(|p| p.data_type).collect::<Vec<_>>(),
               vec![DataType::Int, DataType::Float]);
    assert_eq!(avg.locals.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
               vec!["sum", "label"]);
    assert_eq!(avg.body.len(), 2);

    assert!(program.main_function().is_some());
}

#[test]
fn statements() {
    assert!(matches!(parse_main_statement(";"), Statement::Empty));
    assert!(matches!(parse_main_statement("{ }"),
                     Statement::Block { ref statements, .. } if statements.is_empty()));
    assert!(matches!(parse_main_statement("if (b) x = 1; else ;"),
                     Statement::If { else_branch: Some(_), .. }));
    assert!(matches!(parse_main_statement("while (b) { x = 1; }"),
                     Statement::While { .. }));
    assert!(matches!(parse_main_statement("print(\"x\", x, 1.5)"),
                     Statement::Print { ref arguments, .. } if arguments.len() == 3));
    assert!(matches!(parse_main_statement("return x;"), Statement::Return { .. }));
}

#[test]
fn else_binds_to_nearest_if() {
    let Statement::If { then_branch, else_branch, .. } =
        parse_main_statement("if (b) if (b) x = 1; else x = 2;")
    else {
        panic!("expected an if statement");
    };

    assert!(else_branch.is_none());
    assert!(matches!(*then_branch, Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn syntax_errors_name_the_problem() {
    assert_eq!(syntax_error("int main() { int x; x = 1 }").to_string(),
               "Syntax error on line 1: Expected ';', found '}'.");
    assert!(matches!(syntax_error("int main() { int x; int x; }"),
                     ParseError::DuplicateIdentifier { ref name, .. } if name == "x"));
    assert!(matches!(syntax_error("int main() { y = 1; }"),
                     ParseError::UndefinedVariable { ref name, .. } if name == "y"));
    assert!(matches!(syntax_error("int main() { int x; x = g(1); }"),
                     ParseError::UndefinedFunction { ref name, .. } if name == "g"));
    assert!(matches!(syntax_error("int main() { int x; x = 1; float y; }"),
                     ParseError::DeclarationAfterStatement { .. }));
    assert!(matches!(syntax_error("int main() { if b) ; }"),
                     ParseError::ExpectedToken { .. }));
    assert!(matches!(syntax_error("int main( { }"), ParseError::ExpectedToken { .. }));
    assert!(matches!(syntax_error(""), ParseError::MissingMain { .. }));
}

#[test]
fn recursive_calls_resolve_while_parsing_the_body() {
    assert!(parse_source("int f(int n) { return f(n); } int main() { }").is_ok());
}

#[test]
fn parse_program_accepts_a_token_slice() {
    let tokens = tokenize("bool t() { return true; } int main() { bool b; b = t(); }").unwrap();
    let program = parse_program(&tokens).unwrap();

    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions[0].return_type, DataType::Bool);
}

#[test]
fn printed_program_parses_back_to_the_same_tree() {
    let src = "int fact(int n) {
                   int r;
                   r = 1;
                   while (n > 1) { r = r * n; n = n - 1; }
                   if (r == 0) return -1; else { ; }
                   return r;
               }
               int main() { str s; s = \"tab\\tquote\\\"\"; print(s, fact(5), 2.5e-3, !true) }";

    let first = parse_source(src).unwrap().to_string();
    let second = parse_source(&first).unwrap().to_string();

    assert_eq!(first, second);
    assert!(first.contains("r = (r * n);"));
    assert!(first.contains("print(s, fact(5), 0.0025, !(true))"));
}

#[test]
fn printed_literals_stay_lexable() {
    let src = "int main() { str s; float f; s = \"cr\rtab\tquote\\\"slash\\\\\"; f = 1e16 + 2.5e-7; }";

    let first = parse_source(src).unwrap().to_string();
    let second = parse_source(&first).unwrap().to_string();

    assert_eq!(first, second);
    assert!(first.contains("s = \"cr\rtab\\tquote\\\"slash\\\\\";"));
    assert!(first.contains("f = (1e+16 + 2.5e-07);"));
}
