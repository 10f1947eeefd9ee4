//! # trine
//!
//! trine is an interpreter for a small textual language describing balanced
//! ternary ("trit") logic circuits. A program is a flat sequence of signal
//! declarations and assignments built from named multi-valued logic
//! functions; running it yields a mapping from every declared signal to its
//! final value, or a single position-accurate diagnostic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::Env, lexer::tokenize, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the closed variant sets for statements and expressions.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Forces exhaustive matching at every consumption site.
pub mod ast;
/// Provides the unified error shape for all pipeline stages.
///
/// This module defines the single diagnostic record produced by lexing,
/// parsing and evaluation alike. It carries the stage, a short cause label,
/// a 1-based line and column, the offending source line's text, and a
/// free-form description, and renders as a display-ready multi-line
/// message.
///
/// # Responsibilities
/// - Defines the `Stage`, `Cause` and `Diagnostic` types.
/// - Resolves byte offsets into positions at construction time.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the trit domain
/// type, and the operator library to provide the complete pipeline from
/// source text to a populated environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, operators, evaluator.
/// - Provides the building blocks behind [`run_source`].
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities shared across the pipeline.
///
/// Currently this is the source position mapping used by diagnostics.
pub mod util;

/// Parses and executes a program, returning the final environment.
///
/// This is the single entry point collaborators use: source text in, either
/// a populated environment or a diagnostic out. The pipeline is fail-fast;
/// the first error at any stage halts the run and is returned in place of a
/// result, and no partial result is produced.
///
/// An existing environment may be passed in to chain several executions
/// against the same variable set; `None` starts from an empty one. A run is
/// a pure function of the source text and the prior environment, so
/// re-running the same source against a fresh environment always yields the
/// same result.
///
/// # Errors
/// Returns the first [`Diagnostic`] encountered during lexing, parsing or
/// evaluation. Its `Display` form is suitable for direct display.
///
/// ## Example
/// ```
/// use trine::{interpreter::trit::Trit, run_source};
///
/// let env = run_source("trit A, S; A = +1; S = TNOT(A);", None).unwrap();
/// assert_eq!(env.get("S"), Some(Trit::Neg));
///
/// // 'B' was never declared, so the run fails.
/// let err = run_source("trit A; B = 0;", None).unwrap_err();
/// assert_eq!(err.cause.label(), "Assignment to Undeclared Variable");
/// ```
pub fn run_source(src: &str, env: Option<Env>) -> Result<Env, Diagnostic> {
    let tokens = tokenize(src)?;
    let program = Parser::new(tokens, src).parse_program()?;

    let mut env = env.unwrap_or_default();
    env.eval_program(&program, src)?;
    Ok(env)
}
