use logos::Logos;

use crate::{
    error::{Cause, Diagnostic, Stage},
    interpreter::trit::Trit,
};

/// Raw token as matched by logos, before end-of-input handling.
///
/// Whitespace (any Unicode space) and `//` line comments are skipped at this
/// level. Anything logos cannot match surfaces as an error in [`tokenize`],
/// where it is classified as either a malformed trit literal or an
/// unexpected character.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    /// Trit literal tokens: an optional sign followed by digits.
    ///
    /// The pattern deliberately matches any sign/digit run (including a bare
    /// sign and runs like `2` or `01`); the callback then accepts only the
    /// exact spellings `-1`, `0` and `+1`, so every malformed run fails at
    /// the full run's start position rather than lexing as garbage.
    #[regex(r"[+-][0-9]*|[0-9]+", |lex| lex.slice().parse().ok())]
    TritLit(Trit),
    /// The declaration keyword `trit`.
    #[token("trit")]
    KwTrit,
    /// Identifier tokens; signal or function names such as `A` or `TXOR`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semi,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The kind of a lexical token, including the synthetic end-of-input kind.
///
/// This is the closed set of token kinds the parser dispatches on with a
/// single token of lookahead.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    /// A signal or function name.
    Ident(String),
    /// A trit literal, already narrowed to the three-valued domain.
    TritLit(Trit),
    /// The declaration keyword `trit`.
    KwTrit,
    /// `=`
    Equals,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input; appended once at the source's final offset.
    Eof,
}

impl std::fmt::Display for TokenKind {
    /// Describes the token for diagnostics, naming its kind and text, e.g.
    /// `identifier 'A'` or `';'`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::TritLit(value) => write!(f, "trit literal '{value}'"),
            Self::KwTrit => write!(f, "keyword 'trit'"),
            Self::Equals => write!(f, "'='"),
            Self::Comma => write!(f, "','"),
            Self::Semi => write!(f, "';'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A lexical token: its kind plus the byte offset where it starts.
///
/// Tokens are immutable once produced; their order in the stream is the only
/// relationship between them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// What was matched.
    pub kind:   TokenKind,
    /// Byte offset of the token's first character in the source.
    pub offset: usize,
}

/// Tokenizes a source string into a flat token sequence.
///
/// Scanning stops at the first invalid construct. On success the sequence
/// always ends with a single [`TokenKind::Eof`] token at the source's final
/// offset.
///
/// # Parameters
/// - `src`: The raw source text.
///
/// # Errors
/// Returns a Lex-stage [`Diagnostic`] with cause
/// - "Invalid Trit Literal" for a sign/digit run that is not exactly `-1`,
///   `0` or `+1` (a bare sign included), positioned at the run's start;
/// - "Unexpected Character" for any character no rule matches.
///
/// ## Example
/// ```
/// use trine::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("trit A; // one signal").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
///
/// let err = tokenize("trit X; X = 2;").unwrap_err();
/// assert_eq!(err.cause.label(), "Invalid Trit Literal");
/// assert_eq!(err.column, 13);
/// ```
pub fn tokenize(src: &str) -> Result<Vec<Token>, Diagnostic> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(src);

    while let Some(raw) = lexer.next() {
        let offset = lexer.span().start;
        let kind = match raw {
            Ok(RawToken::TritLit(value)) => TokenKind::TritLit(value),
            Ok(RawToken::KwTrit) => TokenKind::KwTrit,
            Ok(RawToken::Ident(name)) => TokenKind::Ident(name),
            Ok(RawToken::Equals) => TokenKind::Equals,
            Ok(RawToken::Comma) => TokenKind::Comma,
            Ok(RawToken::Semi) => TokenKind::Semi,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Err(()) => return Err(lex_error(src, lexer.slice(), offset)),
        };
        tokens.push(Token { kind, offset });
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        offset: src.len(), });
    Ok(tokens)
}

/// Classifies a failed match: a run starting with a sign or digit is a
/// malformed trit literal, anything else is an unexpected character.
fn lex_error(src: &str, slice: &str, offset: usize) -> Diagnostic {
    let starts_numeric = slice.starts_with(['+', '-']) || slice.starts_with(|c: char| c.is_ascii_digit());
    if starts_numeric {
        let description = if slice == "+" || slice == "-" {
            "Invalid signed numeric literal; trits must be -1, 0, or +1.".to_string()
        } else {
            format!("'{slice}' is not a valid trit literal; expected -1, 0, or +1.")
        };
        Diagnostic::at(Stage::Lex, Cause::InvalidTritLiteral, src, offset, description)
    } else {
        Diagnostic::at(Stage::Lex,
                       Cause::UnexpectedCharacter,
                       src,
                       offset,
                       format!("'{slice}' is an unexpected character."))
    }
}
