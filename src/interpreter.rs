/// The evaluator module executes AST nodes against an environment.
///
/// The evaluator walks the AST, declares and assigns signals, evaluates
/// expressions by calling into the operator library, and produces the final
/// variable-to-value mapping. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates statements strictly in source order, failing fast.
/// - Owns the run's variable table (the [`evaluator::Env`] type).
/// - Reports runtime errors such as undeclared variables or bad calls, with
///   real source positions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat stream of tokens
/// with byte offsets, ending in a single end-of-input token. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   offset.
/// - Validates trit literals and identifiers, and skips whitespace and line
///   comments.
/// - Reports lexical errors for malformed literals or unknown characters.
pub mod lexer;
/// The operator library: the named ternary logic functions.
///
/// Defines the eleven pure, total functions over the three-valued domain
/// (cyclic inverter, negators, ternary AND/OR/NAND/NOR/XOR, half-adder sum
/// and carry) and a single name-based dispatcher.
///
/// # Responsibilities
/// - Implements each operator's exact semantics over [`trit::Trit`].
/// - Resolves calls by exact name match through one static table.
/// - Validates argument counts before invoking an operator.
pub mod ops;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the program's declarations and
/// assignments. Parsing is recursive descent with a single token of
/// lookahead and no backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the grammar, reporting each violation at the offending
///   token's exact position.
/// - Distinguishes variable references from calls by one token of
///   lookahead.
pub mod parser;
/// The trit module defines the three-valued signal type.
///
/// Declares the [`trit::Trit`] enum and its conversions to and from raw
/// integers and literal spellings. The enum makes values outside the domain
/// unrepresentable past the lexer boundary.
///
/// # Responsibilities
/// - Defines the `Trit` enum with the `Neg < Zero < Pos` ordering.
/// - Provides checked conversions at integer and text boundaries.
/// - Implements the sign-inversion operator used by `TNOT`.
pub mod trit;
