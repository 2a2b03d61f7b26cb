use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a call to a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's environment. The
    /// callee gets a fresh environment in which every parameter is bound to
    /// its argument (converted with the assignment rules) and every local
    /// starts uninitialized. The value of the `return` that completes the
    /// body is converted to the declared return type.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `env`: The caller's environment.
    /// - `line`: Line of the call, used for error reporting.
    ///
    /// # Errors
    /// - `UnknownFunction` if no such function is registered.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `IncompatibleAssignment` for an argument or result of the wrong type.
    /// - `MissingReturn` if the body finishes without a `return`.
    /// - `RecursionLimit` if the configured call depth is exceeded.
    ///
    /// # Example
    /// ```
    /// use sluc::get_output;
    ///
    /// let source = "int fact(int n) { if (n <= 1) return 1; return n * fact(n - 1); }
    ///               int main() { print(fact(10)); }";
    ///
    /// assert_eq!(get_output(source).unwrap(), "3628800\n");
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              env: &Environment,
                              line: usize)
                              -> EvalResult<Value> {
        let function =
            self.function(name)
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                               line })?;

        if function.params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval(argument, env)?);
        }

        let mut callee_env = Environment::new();
        for (param, value) in function.params.iter().zip(values) {
            callee_env.bind(param, value, line)?;
        }
        for local in &function.locals {
            callee_env.declare(local);
        }

        self.enter_call(line)?;
        log::trace!("calling '{name}' from line {line}");
        let result = self.exec_body(&function.body, &mut callee_env);
        self.leave_call();

        match result? {
            Some(value) => {
                log::trace!("'{name}' returned {value:?}");
                value.convert_to(function.return_type, name, line)
            },
            None => Err(RuntimeError::MissingReturn { name: name.to_string(),
                                                      line }),
        }
    }
}
