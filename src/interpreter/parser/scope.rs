use std::collections::{HashMap, HashSet};

use crate::{
    ast::{Declaration, Program},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// The parser's symbol table.
///
/// A `Scope` lives for one [`parse_program`] call and is threaded by
/// reference through every parsing procedure. It records the functions defined
/// so far and the parameters and locals of the function currently being
/// parsed. Identifier checks happen against it while the tree is being built,
/// so a program that uses an undeclared name never reaches the evaluator.
///
/// [`parse_program`]: crate::interpreter::parser::program::parse_program
#[derive(Debug, Default)]
pub struct Scope {
    /// Parameter count of every function defined so far, including `main`.
    functions: HashMap<String, usize>,
    /// Parameters and locals of the function being parsed.
    variables: HashSet<String>,
    /// Line reported when the token stream ends early.
    end_line:  usize,
}

impl Scope {
    /// Creates an empty scope. `end_line` is the line reported for errors at
    /// the end of the input.
    #[must_use]
    pub fn new(end_line: usize) -> Self {
        Self { end_line,
               ..Self::default() }
    }

    /// The line used for `UnexpectedEndOfInput` errors.
    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.end_line
    }

    /// Starts a new function: forgets all variables of the previous one.
    pub fn begin_function(&mut self) {
        self.variables.clear();
    }

    /// Records a parameter or local of the current function.
    ///
    /// # Errors
    /// `ParseError::DuplicateIdentifier` if the name is already declared in
    /// this function.
    ///
    /// # Example
    /// ```
    /// use sluc::{
    ///     ast::{DataType, Declaration},
    ///     error::ParseError,
    ///     interpreter::parser::scope::Scope,
    /// };
    ///
    /// let mut scope = Scope::new(1);
    /// let x = Declaration { data_type: DataType::Int,
    ///                       name:      "x".to_string(),
    ///                       line:      1, };
    ///
    /// assert!(scope.declare_variable(&x).is_ok());
    /// assert!(matches!(scope.declare_variable(&x),
    ///                  Err(ParseError::DuplicateIdentifier { .. })));
    /// ```
    pub fn declare_variable(&mut self, declaration: &Declaration) -> ParseResult<()> {
        if !self.variables.insert(declaration.name.clone()) {
            return Err(ParseError::DuplicateIdentifier { name: declaration.name.clone(),
                                                         line: declaration.line, });
        }
        Ok(())
    }

    /// Checks that `name` is a parameter or local of the current function.
    ///
    /// # Errors
    /// `ParseError::UndefinedVariable` otherwise.
    pub fn check_variable(&self, name: &str, line: usize) -> ParseResult<()> {
        if self.variables.contains(name) {
            Ok(())
        } else {
            Err(ParseError::UndefinedVariable { name: name.to_string(),
                                                line })
        }
    }

    /// Records a function header. Called before the body is parsed, so a
    /// function may call itself.
    ///
    /// # Errors
    /// `ParseError::DuplicateFunction` if a function with this name exists.
    pub fn define_function(&mut self, name: &str, arity: usize, line: usize) -> ParseResult<()> {
        if self.functions.contains_key(name) {
            return Err(ParseError::DuplicateFunction { name: name.to_string(),
                                                       line });
        }
        self.functions.insert(name.to_string(), arity);
        Ok(())
    }

    /// Looks up the parameter count of a function that may be called. `main`
    /// is never callable.
    ///
    /// # Errors
    /// `ParseError::UndefinedFunction` if no function with this name was
    /// defined earlier in the source.
    pub fn callable(&self, name: &str, line: usize) -> ParseResult<usize> {
        self.functions
            .get(name)
            .copied()
            .filter(|_| name != Program::ENTRY_POINT)
            .ok_or_else(|| ParseError::UndefinedFunction { name: name.to_string(),
                                                           line })
    }

    /// Checks that a call passes as many arguments as the callee declares.
    ///
    /// # Errors
    /// - `ParseError::UndefinedFunction` for an unknown callee.
    /// - `ParseError::ArgumentCountMismatch` for a wrong argument count.
    pub fn check_call(&self, name: &str, found: usize, line: usize) -> ParseResult<()> {
        let expected = self.callable(name, line)?;
        if expected != found {
            return Err(ParseError::ArgumentCountMismatch { name: name.to_string(),
                                                           expected,
                                                           found,
                                                           line });
        }
        Ok(())
    }

    /// Returns `true` once a function with the given name has been defined.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}
