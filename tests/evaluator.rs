use sluc::{
    ast::{BinaryOperator, DataType, Declaration, Expr, FunctionDef, LiteralValue, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalConfig},
            environment::Environment,
        },
        value::core::Value,
    },
};

fn int(n: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(n),
                    line:  1, }
}

fn declaration(data_type: DataType, name: &str) -> Declaration {
    Declaration { data_type,
                  name: name.to_string(),
                  line: 1 }
}

fn main_function(locals: Vec<Declaration>, body: Vec<Statement>) -> FunctionDef {
    FunctionDef { return_type: DataType::Int,
                  name: "main".to_string(),
                  params: Vec::new(),
                  locals,
                  body,
                  line: 1 }
}

fn run(program: &Program) -> Result<String, RuntimeError> {
    let mut out = Vec::new();
    program.run(&EvalConfig::default(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn environment_tracks_declared_types() {
    let mut env = Environment::new();
    env.declare(&declaration(DataType::Int, "i"));
    env.declare(&declaration(DataType::Bool, "b"));

    env.assign("i", Value::Real(-2.7), 1).unwrap();
    assert_eq!(env.get("i", 1).unwrap(), &Value::Integer(-2));

    assert!(matches!(env.assign("b", Value::Integer(1), 5),
                     Err(RuntimeError::IncompatibleAssignment { declared: DataType::Bool,
                                                                found: DataType::Int,
                                                                line: 5,
                                                                .. })));
    assert!(matches!(env.get("b", 6),
                     Err(RuntimeError::UninitializedVariable { line: 6, .. })));
    assert!(matches!(env.assign("nope", Value::Integer(1), 7),
                     Err(RuntimeError::UnknownVariable { line: 7, .. })));
}

#[test]
fn parameters_are_bound_with_conversion() {
    let mut env = Environment::new();
    env.bind(&declaration(DataType::Float, "f"), Value::Integer(4), 1)
       .unwrap();

    assert_eq!(env.get("f", 1).unwrap(), &Value::Real(4.0));
    assert!(env.bind(&declaration(DataType::Str, "s"), Value::Bool(true), 1)
               .is_err());
}

#[test]
fn binary_operations_on_values() {
    let eval = |op, l: Value, r: Value| Context::eval_binary(op, &l, &r, 1);

    assert_eq!(eval(BinaryOperator::Sub, Value::Integer(2), Value::Integer(5)).unwrap(),
               Value::Integer(-3));
    assert_eq!(eval(BinaryOperator::Add, Value::Integer(2), Value::Real(0.5)).unwrap(),
               Value::Real(2.5));
    assert_eq!(eval(BinaryOperator::Pow, Value::Real(2.0), Value::Integer(3)).unwrap(),
               Value::Real(8.0));
    assert_eq!(eval(BinaryOperator::NotEqual, Value::from("a"), Value::from("b")).unwrap(),
               Value::Bool(true));
    assert_eq!(eval(BinaryOperator::GreaterEqual, Value::Real(2.0), Value::Integer(2)).unwrap(),
               Value::Bool(true));

    assert!(matches!(eval(BinaryOperator::Add, Value::Bool(true), Value::Integer(1)),
                     Err(RuntimeError::ExpectedNumber { found: DataType::Bool, .. })));
    assert!(matches!(eval(BinaryOperator::Mul, Value::Integer(i64::MAX), Value::Integer(2)),
                     Err(RuntimeError::Overflow { .. })));
    assert!(matches!(eval(BinaryOperator::Div, Value::Integer(i64::MIN), Value::Integer(-1)),
                     Err(RuntimeError::Overflow { .. })));
    assert!(matches!(eval(BinaryOperator::Pow, Value::Integer(10), Value::Integer(40)),
                     Err(RuntimeError::Overflow { .. })));
    assert!(matches!(eval(BinaryOperator::And, Value::Bool(true), Value::from("x")),
                     Err(RuntimeError::ExpectedBoolean { found: DataType::Str, .. })));
}

#[test]
fn hand_built_program_runs() {
    let body = vec![Statement::Assignment { name:  "x".to_string(),
                                            value: Expr::BinaryOp { left:  Box::new(int(6)),
                                                                    op:    BinaryOperator::Mul,
                                                                    right: Box::new(int(7)),
                                                                    line:  1, },
                                            line:  1, },
                    Statement::Print { arguments: vec![Expr::Variable { name: "x".to_string(),
                                                                        line: 2, }],
                                       line:      2, }];
    let program = Program { functions: vec![main_function(vec![declaration(DataType::Float, "x")],
                                                          body)], };

    assert_eq!(run(&program).unwrap(), "42.0\n");
}

#[test]
fn missing_main_is_reported_at_run_time() {
    let program = Program { functions: Vec::new() };

    assert!(matches!(run(&program), Err(RuntimeError::MissingMain)));
}

#[test]
fn calls_to_unregistered_functions_fail() {
    let body = vec![Statement::Print { arguments: vec![Expr::FunctionCall { name:      "main".to_string(),
                                                                            arguments: Vec::new(),
                                                                            line:      3, }],
                                       line:      3, }];
    let program = Program { functions: vec![main_function(Vec::new(), body)] };

    assert!(matches!(run(&program),
                     Err(RuntimeError::UnknownFunction { line: 3, .. })));
}

#[test]
fn argument_count_is_checked_at_run_time() {
    let callee = FunctionDef { return_type: DataType::Int,
                               name:        "one".to_string(),
                               params:      vec![declaration(DataType::Int, "a")],
                               locals:      Vec::new(),
                               body:        vec![Statement::Return { value: int(1),
                                                                     line:  1, }],
                               line:        1, };
    let body = vec![Statement::Print { arguments: vec![Expr::FunctionCall { name:      "one".to_string(),
                                                                            arguments: Vec::new(),
                                                                            line:      2, }],
                                       line:      2, }];
    let program = Program { functions: vec![callee, main_function(Vec::new(), body)] };

    assert!(matches!(run(&program),
                     Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                               found: 0,
                                                               .. })));
}

#[test]
fn output_errors_are_reported() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let program = Program { functions: vec![main_function(Vec::new(),
                                                          vec![Statement::Print { arguments: vec![int(1)],
                                                                                  line:      4, }])], };

    let result = program.run(&EvalConfig::default(), &mut Broken);
    assert!(matches!(result, Err(RuntimeError::Output { line: 4, .. })));
}
