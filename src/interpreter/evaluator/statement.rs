use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, ReturnMode},
            environment::Environment,
        },
        value::core::Value,
    },
};

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` was executed with this value.
    Return(Value),
}

impl Context<'_> {
    /// Executes the statement list of a function body.
    ///
    /// The body always honours a `return`, whatever the [`ReturnMode`].
    ///
    /// # Returns
    /// `Some(value)` if a `return` completed the body, `None` if execution
    /// ran off its end.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a statement.
    pub fn exec_body(&mut self,
                     statements: &[Statement],
                     env: &mut Environment)
                     -> EvalResult<Option<Value>> {
        for statement in statements {
            if let Completion::Return(value) = self.exec_statement(statement, env)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Executes a single statement.
    ///
    /// `if`/`else` passes the completion of the chosen branch through. Blocks
    /// and loop bodies pass a `return` through only in
    /// [`ReturnMode::Structured`]; in [`ReturnMode::TopLevel`] the returned
    /// value is dropped and execution continues.
    ///
    /// # Errors
    /// - `ExpectedBoolean` for a condition that is not a `bool`.
    /// - `IncompatibleAssignment` for a value the target cannot hold.
    /// - `Output` if writing `print` output fails.
    /// - Any error raised while evaluating an expression.
    pub fn exec_statement(&mut self,
                          statement: &Statement,
                          env: &mut Environment)
                          -> EvalResult<Completion> {
        match statement {
            Statement::Empty => Ok(Completion::Normal),
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value, env)?;
                env.assign(name, value, *line)?;
                Ok(Completion::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval_condition(condition, env)? {
                    self.exec_statement(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch, env)
                } else {
                    Ok(Completion::Normal)
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval_condition(condition, env)? {
                    let completion = self.exec_statement(body, env)?;
                    if let Some(completion) = self.propagate(completion) {
                        return Ok(completion);
                    }
                }
                Ok(Completion::Normal)
            },
            Statement::Block { statements, .. } => {
                for statement in statements {
                    let completion = self.exec_statement(statement, env)?;
                    if let Some(completion) = self.propagate(completion) {
                        return Ok(completion);
                    }
                }
                Ok(Completion::Normal)
            },
            Statement::Print { arguments, line } => {
                self.exec_print(arguments, env, *line)?;
                Ok(Completion::Normal)
            },
            Statement::Return { value, .. } => Ok(Completion::Return(self.eval(value, env)?)),
        }
    }

    /// Decides whether a completion leaves a block or loop body.
    fn propagate(&self, completion: Completion) -> Option<Completion> {
        match (completion, self.config().return_mode) {
            (Completion::Normal, _) => None,
            (completion @ Completion::Return(_), ReturnMode::Structured) => Some(completion),
            (Completion::Return(value), ReturnMode::TopLevel) => {
                log::trace!("dropping nested return of {value:?}");
                None
            },
        }
    }

    /// Evaluates an `if` or `while` condition, which must be a `bool`.
    fn eval_condition(&mut self, condition: &Expr, env: &Environment) -> EvalResult<bool> {
        self.eval(condition, env)?
            .as_bool(condition.line_number())
    }

    /// Writes each argument as soon as it is evaluated, separated by single
    /// spaces, and ends the line after the last one. Output produced while
    /// evaluating a later argument appears after the earlier values.
    fn exec_print(&mut self, arguments: &[Expr], env: &Environment, line: usize) -> EvalResult<()> {
        for (index, argument) in arguments.iter().enumerate() {
            let value = self.eval(argument, env)?;
            self.write_output(&value, line)?;
            let separator = if index + 1 < arguments.len() { " " } else { "\n" };
            self.write_output(separator, line)?;
        }
        Ok(())
    }
}
