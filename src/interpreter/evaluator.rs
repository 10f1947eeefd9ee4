use std::collections::HashMap;

use crate::{
    ast::{Expr, Program, Statement},
    error::{Cause, Diagnostic, Stage},
    interpreter::{
        ops::{self, OpError},
        trit::Trit,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// Runtime-stage [`Diagnostic`] describing the failure.
pub type EvalResult<T> = Result<T, Diagnostic>;

/// The runtime environment: a mapping from signal names to trit values.
///
/// An environment is owned exclusively by one run at a time. It is created
/// empty (or handed in by the caller to chain several program executions
/// against the same variable set), mutated only by declaration and
/// assignment statements, and returned to the caller afterwards. It is not
/// safe for concurrent mutation; independent runs on separate threads must
/// each use their own instance.
///
/// After a failed run the environment's contents are partial and
/// unspecified; callers must not resume evaluation past a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<String, Trit>,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a signal's current value, if it is declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Trit> {
        self.vars.get(name).copied()
    }

    /// Sets a signal from a raw integer, declaring it if needed.
    ///
    /// This is the boundary for callers holding plain integers (detector
    /// outputs, UI state) who want to pre-populate an environment before a
    /// run. Values outside `{-1, 0, +1}` are rejected.
    ///
    /// # Errors
    /// Returns a Runtime "Invalid Trit Value" diagnostic. Seeding happens
    /// outside any program text, so the diagnostic carries the default
    /// position of line 1, column 1 and an empty source line.
    ///
    /// ## Example
    /// ```
    /// use trine::interpreter::{evaluator::Env, trit::Trit};
    ///
    /// let mut env = Env::new();
    /// env.seed("A", -1).unwrap();
    /// assert_eq!(env.get("A"), Some(Trit::Neg));
    /// assert!(env.seed("B", 5).is_err());
    /// ```
    pub fn seed(&mut self, name: &str, value: i8) -> EvalResult<()> {
        let value = Trit::try_from(value).map_err(|e| {
                        Diagnostic { stage:       Stage::Runtime,
                                     cause:       Cause::InvalidTritValue,
                                     line:        1,
                                     column:      1,
                                     line_text:   String::new(),
                                     description: format!("Cannot seed '{name}': {e}."), }
                    })?;
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    /// The number of declared signals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no signals are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns all signals sorted by name, for deterministic reporting.
    ///
    /// Insertion order is irrelevant to the language's semantics; sorting
    /// gives shells and tests a stable listing.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, Trit)> {
        let mut entries: Vec<_> = self.vars.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Evaluates a program's statements strictly in source order, mutating
    /// this environment.
    ///
    /// The source text is the same string the program was parsed from; it is
    /// used to resolve node offsets into diagnostic positions.
    ///
    /// # Errors
    /// Returns the first Runtime diagnostic and stops at the failing
    /// statement; later statements are not evaluated.
    ///
    /// ## Example
    /// ```
    /// use trine::interpreter::{evaluator::Env, parser::parse_source, trit::Trit};
    ///
    /// let src = "trit A; A = C(0);";
    /// let mut env = Env::new();
    /// env.eval_program(&parse_source(src).unwrap(), src).unwrap();
    /// assert_eq!(env.get("A"), Some(Trit::Pos));
    /// ```
    pub fn eval_program(&mut self, program: &Program, src: &str) -> EvalResult<()> {
        for statement in &program.statements {
            self.eval_statement(statement, src)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// A declaration declares each listed name left to right as an
    /// independent signal initialized to zero; a name that already exists
    /// (from this statement's own list included) is a "Redeclaration of
    /// Variable" failure. An assignment evaluates its expression in the
    /// current environment first, then stores the value, so an expression
    /// failure surfaces before an undeclared-target failure.
    fn eval_statement(&mut self, statement: &Statement, src: &str) -> EvalResult<()> {
        match statement {
            Statement::Decl { names, offset } => {
                for name in names {
                    if self.vars.contains_key(name) {
                        return Err(Diagnostic::at(Stage::Runtime,
                                                  Cause::Redeclaration,
                                                  src,
                                                  *offset,
                                                  format!("Variable '{name}' is already declared.")));
                    }
                    self.vars.insert(name.clone(), Trit::Zero);
                }
                Ok(())
            },
            Statement::Assign { name, value, offset } => {
                let value = self.eval(value, src)?;
                if !self.vars.contains_key(name) {
                    return Err(Diagnostic::at(Stage::Runtime,
                                              Cause::AssignUndeclared,
                                              src,
                                              *offset,
                                              format!("Variable '{name}' is not declared.")));
                }
                self.vars.insert(name.clone(), value);
                Ok(())
            },
        }
    }

    /// Evaluates an expression to a trit value.
    ///
    /// Call arguments are evaluated left to right; the first failing
    /// argument stops the whole run and later arguments are never
    /// evaluated. Dispatch failures from the operator library are reported
    /// at the call site's position.
    fn eval(&self, expr: &Expr, src: &str) -> EvalResult<Trit> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Name { name, offset } => self.get(name).ok_or_else(|| {
                                               Diagnostic::at(Stage::Runtime,
                                                              Cause::UseUndeclared,
                                                              src,
                                                              *offset,
                                                              format!("Variable '{name}' is not declared."))
                                           }),
            Expr::Call { name, args, offset } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg, src)?);
                }
                ops::apply(name, &values).map_err(|e| {
                                             let cause = match e {
                                                 OpError::UnknownFunction { .. } => Cause::UnknownFunction,
                                                 OpError::WrongArity { .. } => Cause::WrongArgumentCount,
                                             };
                                             Diagnostic::at(Stage::Runtime, cause, src, *offset, e.to_string())
                                         })
            },
        }
    }
}
