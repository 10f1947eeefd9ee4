use crate::util::position::{Position, locate};

/// The pipeline stage a diagnostic originated from.
///
/// Every failing run produces exactly one diagnostic, tagged with the stage
/// that detected it. Callers can treat all stages uniformly or branch on
/// this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tokenization of the raw source text.
    Lex,
    /// Construction of the syntax tree from the token stream.
    Parse,
    /// Evaluation of the syntax tree against an environment.
    Runtime,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Lex => "Lexing Error",
            Self::Parse => "Parsing Error",
            Self::Runtime => "Runtime Error",
        };
        write!(f, "{label}")
    }
}

/// The short cause label of a diagnostic.
///
/// Each variant names one distinct failure mode of the toolchain. The labels
/// are stable, user-visible text; tests and embedding shells match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// A character the lexer has no rule for.
    UnexpectedCharacter,
    /// A sign/digit run that is not exactly `-1`, `0` or `+1`.
    InvalidTritLiteral,
    /// A token that cannot begin a statement.
    UnexpectedStatementStart,
    /// A statement not terminated by `;`.
    MissingSemicolon,
    /// A `trit` declaration not followed by an identifier.
    ExpectedIdentifierInDeclaration,
    /// An assignment target not followed by `=`.
    ExpectedEquals,
    /// A token that cannot begin an expression.
    UnexpectedExpressionToken,
    /// A call's argument list not closed by `)`.
    MissingClosingParen,
    /// Declaring a variable name that already exists.
    Redeclaration,
    /// Assigning to a name that was never declared.
    AssignUndeclared,
    /// Reading a name that was never declared.
    UseUndeclared,
    /// A value outside the three-valued domain crossing into the toolchain.
    InvalidTritValue,
    /// Calling an operator with the wrong argument count.
    WrongArgumentCount,
    /// Calling a name that matches no operator.
    UnknownFunction,
}

impl Cause {
    /// Returns the user-visible label for this cause.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnexpectedCharacter => "Unexpected Character",
            Self::InvalidTritLiteral => "Invalid Trit Literal",
            Self::UnexpectedStatementStart => "Unexpected Token at Statement Start",
            Self::MissingSemicolon => "Missing Semicolon",
            Self::ExpectedIdentifierInDeclaration => "Expected Identifier in Declaration",
            Self::ExpectedEquals => "Expected '=' After Identifier",
            Self::UnexpectedExpressionToken => "Unexpected Token in Expression",
            Self::MissingClosingParen => "Missing Closing Parenthesis",
            Self::Redeclaration => "Redeclaration of Variable",
            Self::AssignUndeclared => "Assignment to Undeclared Variable",
            Self::UseUndeclared => "Use of Undeclared Variable",
            Self::InvalidTritValue => "Invalid Trit Value",
            Self::WrongArgumentCount => "Wrong Number of Arguments",
            Self::UnknownFunction => "Unknown Function",
        }
    }
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A structured, position-carrying error record.
///
/// All three pipeline stages report failures through this one shape, so a
/// caller can handle any failure uniformly. A diagnostic is produced at the
/// exact point of failure and returned in place of a result; the pipeline
/// never recovers, aggregates or continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The stage that detected the failure.
    pub stage:       Stage,
    /// The short cause label.
    pub cause:       Cause,
    /// 1-based line number of the failure.
    pub line:        usize,
    /// 1-based column number of the failure.
    pub column:      usize,
    /// The text of the offending source line, without its terminator.
    pub line_text:   String,
    /// A free-form description of what went wrong.
    pub description: String,
}

impl Diagnostic {
    /// Builds a diagnostic at a byte offset, resolving the offset against
    /// the source text.
    ///
    /// # Parameters
    /// - `stage`: The pipeline stage reporting the failure.
    /// - `cause`: The short cause label.
    /// - `src`: The full source text of the failing run.
    /// - `offset`: The byte offset of the failure in `src`.
    /// - `description`: A free-form description.
    #[must_use]
    pub fn at(stage: Stage, cause: Cause, src: &str, offset: usize, description: String) -> Self {
        let Position { line, column, line_text } = locate(src, offset);
        Self { stage,
               cause,
               line,
               column,
               line_text,
               description }
    }
}

impl std::fmt::Display for Diagnostic {
    /// Formats the diagnostic as the multi-line message shown to users:
    ///
    /// ```text
    /// Runtime Error: Unknown Function
    ///     in line 2: S = MAJ(A, B);
    ///     Function 'MAJ' is not defined.
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}: {}\n    in line {}: {}\n    {}",
               self.stage, self.cause, self.line, self.line_text, self.description)
    }
}

impl std::error::Error for Diagnostic {}
