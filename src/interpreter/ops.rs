use crate::interpreter::trit::Trit::{self, Neg, Pos, Zero};

/// A pure operator over the balanced-ternary domain.
///
/// The slice is guaranteed by [`apply`] to have the arity recorded in the
/// dispatch table before the function is invoked.
pub type OpFn = fn(&[Trit]) -> Trit;

/// One entry of the operator dispatch table.
#[derive(Clone, Copy)]
pub struct Op {
    /// The name used to call the operator from source code.
    pub name:  &'static str,
    /// The number of arguments the operator takes.
    pub arity: usize,
    /// The operator itself.
    pub func:  OpFn,
}

/// The fixed set of named ternary logic operators, resolvable by exact name.
///
/// | name   | arity | definition                                   |
/// |--------|-------|----------------------------------------------|
/// | C      | 1     | cyclic inverter: -1 -> 0, 0 -> +1, +1 -> -1  |
/// | N      | 1     | negator: constant -1                         |
/// | A      | 1     | antinegator: constant +1                     |
/// | TNOT   | 1     | sign inversion, 0 fixed                      |
/// | TAND   | 2     | min(a, b)                                    |
/// | TOR    | 2     | max(a, b)                                    |
/// | TNAND  | 2     | -min(a, b)                                   |
/// | TNOR   | 2     | -max(a, b)                                   |
/// | TXOR   | 2     | table-defined symmetric difference detector  |
/// | TSUM   | 2     | half-adder sum digit                         |
/// | TCARRY | 2     | half-adder carry digit                       |
pub static OPS: [Op; 11] = [Op { name:  "C",
                                 arity: 1,
                                 func:  |args| cyclic(args[0]), },
                            Op { name:  "N",
                                 arity: 1,
                                 func:  |_| Neg, },
                            Op { name:  "A",
                                 arity: 1,
                                 func:  |_| Pos, },
                            Op { name:  "TNOT",
                                 arity: 1,
                                 func:  |args| -args[0], },
                            Op { name:  "TAND",
                                 arity: 2,
                                 func:  |args| args[0].min(args[1]), },
                            Op { name:  "TOR",
                                 arity: 2,
                                 func:  |args| args[0].max(args[1]), },
                            Op { name:  "TNAND",
                                 arity: 2,
                                 func:  |args| -args[0].min(args[1]), },
                            Op { name:  "TNOR",
                                 arity: 2,
                                 func:  |args| -args[0].max(args[1]), },
                            Op { name:  "TXOR",
                                 arity: 2,
                                 func:  |args| table(&TXOR, args), },
                            Op { name:  "TSUM",
                                 arity: 2,
                                 func:  |args| table(&TSUM, args), },
                            Op { name:  "TCARRY",
                                 arity: 2,
                                 func:  |args| table(&TCARRY, args), }];

/// Cyclic inverter: each value maps to the next one around the cycle
/// `-1 -> 0 -> +1 -> -1`.
const fn cyclic(x: Trit) -> Trit {
    match x {
        Neg => Zero,
        Zero => Pos,
        Pos => Neg,
    }
}

// The three table-defined binary operators, row indexed by the first
// argument and column by the second, in the order -1, 0, +1.

/// `TXOR`: 0 on the diagonal, +1 for opposite signs, -1 otherwise.
const TXOR: [[Trit; 3]; 3] = [[Zero, Neg, Pos], [Neg, Zero, Neg], [Pos, Neg, Zero]];

/// `TSUM`: the result digit of a single-digit balanced-ternary addition.
const TSUM: [[Trit; 3]; 3] = [[Zero, Neg, Zero], [Neg, Zero, Pos], [Zero, Pos, Zero]];

/// `TCARRY`: the carry digit of a single-digit balanced-ternary addition.
const TCARRY: [[Trit; 3]; 3] = [[Neg, Zero, Zero], [Zero, Zero, Zero], [Zero, Zero, Pos]];

fn table(t: &[[Trit; 3]; 3], args: &[Trit]) -> Trit {
    t[args[0].index()][args[1].index()]
}

/// Error returned by [`apply`] when dispatch fails.
///
/// The operator library carries no source positions of its own; the
/// evaluator attaches the call site's position when it converts an `OpError`
/// into a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// The name matched none of the defined operators.
    UnknownFunction {
        /// The name that was called.
        name: String,
    },
    /// The operator exists but was called with the wrong number of
    /// arguments.
    WrongArity {
        /// The name that was called.
        name:     String,
        /// The arity recorded in the dispatch table.
        expected: usize,
        /// The number of arguments actually supplied.
        got:      usize,
    },
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Function '{name}' is not defined."),
            Self::WrongArity { name, expected, got } => {
                write!(f,
                       "Function '{name}' expects {expected} argument(s), but {got} was provided.")
            },
        }
    }
}

impl std::error::Error for OpError {}

/// Dispatches an operator call by exact name match.
///
/// Looks the name up in the static table, validates the argument count
/// against the recorded arity, and invokes the operator. Both failure modes
/// are ordinary result values so the evaluator's error path stays uniform
/// with the lexer's and parser's.
///
/// # Parameters
/// - `name`: The operator name as written in source code.
/// - `args`: The already-evaluated argument values, in source order.
///
/// # Errors
/// - `OpError::UnknownFunction` if no operator has this name.
/// - `OpError::WrongArity` if the argument count does not match.
///
/// ## Example
/// ```
/// use trine::interpreter::{ops::apply, trit::Trit};
///
/// assert_eq!(apply("TAND", &[Trit::Neg, Trit::Pos]), Ok(Trit::Neg));
/// assert!(apply("TAND", &[Trit::Neg]).is_err());
/// assert!(apply("MAJ", &[Trit::Neg]).is_err());
/// ```
pub fn apply(name: &str, args: &[Trit]) -> Result<Trit, OpError> {
    let Some(op) = OPS.iter().find(|op| op.name == name) else {
        return Err(OpError::UnknownFunction { name: name.to_string() });
    };
    if args.len() != op.arity {
        return Err(OpError::WrongArity { name:     name.to_string(),
                                         expected: op.arity,
                                         got:      args.len(), });
    }
    Ok((op.func)(args))
}
