use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, FunctionDef, Program},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How far a `return` statement reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnMode {
    /// A `return` anywhere in a function body ends the call.
    #[default]
    Structured,
    /// A `return` ends the call only when it is reached through the
    /// function's own statement list or through `if`/`else` branches. Inside
    /// a block or a loop body it is evaluated and then ignored.
    TopLevel,
}

/// Settings for one program run.
///
/// ```
/// use sluc::interpreter::evaluator::core::{EvalConfig, ReturnMode};
///
/// let config = EvalConfig::default();
/// assert_eq!(config.return_mode, ReturnMode::Structured);
/// assert_eq!(config.max_call_depth, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    /// Return propagation rule.
    pub return_mode:    ReturnMode,
    /// Maximum number of nested user function calls. `None` means unlimited.
    pub max_call_depth: Option<usize>,
}

/// Stores the runtime evaluation context.
///
/// A `Context` is created for a single program run. It owns the function
/// table, which is filled once before `main` starts and only read afterwards,
/// and tracks the current call depth. Variables live in per-call
/// [`Environment`]s, not here.
pub struct Context<'a> {
    /// Every function except `main`, keyed by name.
    functions: HashMap<&'a str, &'a FunctionDef>,
    /// Settings of this run.
    config:    EvalConfig,
    /// Destination of `print`.
    out:       &'a mut dyn Write,
    /// Number of user function calls currently active.
    depth:     usize,
}

impl<'a> Context<'a> {
    /// Creates a context for `program` and registers its functions.
    ///
    /// `main` is skipped: it is the entry point and cannot be called.
    pub fn new(program: &'a Program, config: EvalConfig, out: &'a mut dyn Write) -> Self {
        let mut functions = HashMap::new();
        for function in &program.functions {
            if function.name == Program::ENTRY_POINT {
                continue;
            }
            log::debug!("registering function '{}' returning {}",
                        function.name,
                        function.return_type);
            functions.insert(function.name.as_str(), function);
        }

        Self { functions,
               config,
               out,
               depth: 0 }
    }

    /// The settings this context was created with.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Runs `main` in a fresh environment.
    ///
    /// Parameters and locals of `main` start uninitialized. A value returned
    /// by `main` is discarded.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while executing the program.
    pub fn run_main(&mut self, main: &FunctionDef) -> EvalResult<()> {
        let mut env = Environment::new();
        for declaration in main.params.iter().chain(&main.locals) {
            env.declare(declaration);
        }

        log::trace!("entering '{}'", main.name);
        let result = self.exec_body(&main.body, &mut env)?;
        log::trace!("leaving '{}' with {result:?}", main.name);

        Ok(())
    }

    /// Looks up a callable function by name.
    pub(crate) fn function(&self, name: &str) -> Option<&'a FunctionDef> {
        self.functions.get(name).copied()
    }

    /// Writes program output.
    pub(crate) fn write_output(&mut self, text: impl std::fmt::Display, line: usize) -> EvalResult<()> {
        write!(self.out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                       line })
    }

    /// Marks the start of a user function call.
    ///
    /// # Errors
    /// `RuntimeError::RecursionLimit` if the configured depth is reached.
    pub(crate) fn enter_call(&mut self, line: usize) -> EvalResult<()> {
        if let Some(limit) = self.config.max_call_depth
           && self.depth >= limit
        {
            return Err(RuntimeError::RecursionLimit { limit, line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Marks the end of a user function call.
    pub(crate) fn leave_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, unary and
    /// binary operations and function calls. Both operands of a binary
    /// operation are always evaluated, left first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Variables of the function being executed.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the expression or a function it calls.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => env.get(name, *line).cloned(),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr, env)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, env, *line),
        }
    }
}

impl Program {
    /// Executes the program, writing `print` output to `out`.
    ///
    /// # Errors
    /// - `RuntimeError::MissingMain` if the program has no `main`.
    /// - Any `RuntimeError` raised while executing it.
    ///
    /// # Example
    /// ```
    /// use sluc::{interpreter::evaluator::core::EvalConfig, parse_source};
    ///
    /// let program = parse_source("int main() { print(1, 2.0, \"three\"); }").unwrap();
    /// let mut out = Vec::new();
    /// program.run(&EvalConfig::default(), &mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "1 2.0 three\n");
    /// ```
    pub fn run<W: Write>(&self, config: &EvalConfig, out: &mut W) -> EvalResult<()> {
        let main = self.main_function().ok_or(RuntimeError::MissingMain)?;
        let mut context = Context::new(self, *config, out);
        context.run_main(main)
    }

    /// Executes the program, writing `print` output to standard output.
    ///
    /// # Errors
    /// See [`Program::run`].
    pub fn run_with_stdout(&self, config: &EvalConfig) -> EvalResult<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run(config, &mut lock)
    }
}
