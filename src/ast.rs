use crate::interpreter::trit::Trit;

/// An abstract syntax tree node representing an expression.
///
/// `Expr` is a closed set of three forms: a reference to a declared signal,
/// a trit literal, and a call to a named logic function. Every consumption
/// site matches exhaustively, so a new form cannot be silently mishandled.
///
/// Each variant carries the byte offset of its first token so that runtime
/// failures (an undeclared name, a bad call) can be reported at the exact
/// source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a signal by name, e.g. `A`.
    Name {
        /// Name of the signal.
        name:   String,
        /// Byte offset of the name in the source.
        offset: usize,
    },
    /// A literal trit value: `-1`, `0` or `+1`.
    ///
    /// The value is a [`Trit`], never a raw integer; malformed literals are
    /// rejected at the lexer boundary.
    Literal {
        /// The constant value.
        value:  Trit,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
    /// A call to a named logic function, e.g. `TXOR(A, B)`.
    Call {
        /// Name of the function being called.
        name:   String,
        /// Argument expressions, in source order.
        args:   Vec<Self>,
        /// Byte offset of the function name in the source.
        offset: usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use trine::ast::Expr;
    ///
    /// let expr = Expr::Name { name:   "A".to_string(),
    ///                         offset: 9, };
    ///
    /// assert_eq!(expr.offset(), 9);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Name { offset, .. } | Self::Literal { offset, .. } | Self::Call { offset, .. } => {
                *offset
            },
        }
    }
}

/// A top-level statement.
///
/// A program is a flat sequence of these; there is no control flow, no
/// nesting and no user-defined functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Declaration of one or more trit signals, e.g. `trit A, B, S;`.
    ///
    /// Each name becomes an independent environment entry initialized to
    /// zero; later names in the list cannot reference earlier ones.
    Decl {
        /// The declared names, in source order.
        names:  Vec<String>,
        /// Byte offset of the `trit` keyword.
        offset: usize,
    },
    /// Assignment of an expression to a declared signal, e.g.
    /// `S = TXOR(A, B);`.
    Assign {
        /// The name of the target signal.
        name:   String,
        /// The expression whose value is assigned.
        value:  Expr,
        /// Byte offset of the target name.
        offset: usize,
    },
}

/// A complete parsed program: its statements in source order.
///
/// Evaluation processes the statements strictly in this order; there is no
/// reordering or hoisting of declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The program's statements.
    pub statements: Vec<Statement>,
}
