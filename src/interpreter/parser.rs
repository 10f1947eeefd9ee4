use crate::{
    ast::{Expr, Program, Statement},
    error::{Cause, Diagnostic, Stage},
    interpreter::lexer::{Token, TokenKind, tokenize},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a Parse-stage
/// [`Diagnostic`] describing the first grammar violation.
pub type ParseResult<T> = Result<T, Diagnostic>;

/// Recursive-descent parser over a token sequence.
///
/// The parser holds the token stream, the source text (for resolving token
/// offsets into diagnostic positions) and a cursor. It uses a single token
/// of lookahead, chooses deterministically by the current token's kind and
/// never backtracks; the first violation stops parsing and is reported at
/// the offending token's exact position.
pub struct Parser<'src> {
    tokens: Vec<Token>,
    src:    &'src str,
    pos:    usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over an already-tokenized source.
    ///
    /// The token sequence must end with the end-of-input token, as produced
    /// by [`tokenize`].
    #[must_use]
    pub const fn new(tokens: Vec<Token>, src: &'src str) -> Self {
        Self { tokens, src, pos: 0 }
    }

    /// The token under the cursor. The end-of-input token is never consumed,
    /// so the cursor always points at a token.
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Consumes the current token.
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.current().kind == kind {
            self.advance();
            return true;
        }
        false
    }

    /// Builds a Parse diagnostic at the current token's position.
    fn error(&self, cause: Cause, description: String) -> Diagnostic {
        Diagnostic::at(Stage::Parse, cause, self.src, self.current().offset, description)
    }

    /// Parses the whole program: `Program ::= { Statement }`.
    ///
    /// # Errors
    /// Returns the first Parse diagnostic encountered; no partial program is
    /// produced.
    ///
    /// ## Example
    /// ```
    /// use trine::interpreter::{lexer::tokenize, parser::Parser};
    ///
    /// let src = "trit A, B;\nA = TNOT(B);";
    /// let program = Parser::new(tokenize(src).unwrap(), src).parse_program()
    ///                                                        .unwrap();
    /// assert_eq!(program.statements.len(), 2);
    /// ```
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();
        while self.current().kind != TokenKind::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    /// Parses one statement: `Statement ::= (DeclStmt | AssignStmt) ";"`.
    ///
    /// The statement form is chosen by the current token: the `trit` keyword
    /// opens a declaration, an identifier opens an assignment, and anything
    /// else is an "Unexpected Token at Statement Start" diagnostic. A
    /// missing terminating `;` is its own "Missing Semicolon" diagnostic at
    /// the token found instead.
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let statement = match &self.current().kind {
            TokenKind::KwTrit => self.parse_decl()?,
            TokenKind::Ident(_) => self.parse_assign()?,
            kind => {
                return Err(self.error(Cause::UnexpectedStatementStart,
                                      format!("Unexpected {kind} at the beginning of a statement.")));
            },
        };

        if !self.eat(&TokenKind::Semi) {
            return Err(self.error(Cause::MissingSemicolon,
                                  format!("Expected ';' at the end of the statement, found {}.",
                                          self.current().kind)));
        }
        Ok(statement)
    }

    /// Parses a declaration: `DeclStmt ::= "trit" Ident { "," Ident }`.
    ///
    /// The caller has already established that the current token is the
    /// `trit` keyword. Each comma must be followed by another identifier;
    /// every listed name becomes an independent declaration.
    fn parse_decl(&mut self) -> ParseResult<Statement> {
        let offset = self.current().offset;
        self.advance();

        let mut names = vec![self.parse_decl_name("Expected an identifier after 'trit'.")?];
        while self.eat(&TokenKind::Comma) {
            names.push(self.parse_decl_name("Expected an identifier after ','.")?);
        }

        Ok(Statement::Decl { names, offset })
    }

    /// Parses one declared name, or fails with "Expected Identifier in
    /// Declaration" carrying the given description.
    fn parse_decl_name(&mut self, description: &str) -> ParseResult<String> {
        match &self.current().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            },
            kind => Err(self.error(Cause::ExpectedIdentifierInDeclaration,
                                   format!("{description} Found {kind}."))),
        }
    }

    /// Parses an assignment: `AssignStmt ::= Ident "=" Expr`.
    ///
    /// The caller has already established that the current token is an
    /// identifier.
    fn parse_assign(&mut self) -> ParseResult<Statement> {
        let (name, offset) = match &self.current().kind {
            TokenKind::Ident(name) => (name.clone(), self.current().offset),
            _ => unreachable!("parse_assign called without an identifier under the cursor"),
        };
        self.advance();

        if !self.eat(&TokenKind::Equals) {
            return Err(self.error(Cause::ExpectedEquals,
                                  format!("Expected '=' after identifier in assignment, found {}.",
                                          self.current().kind)));
        }

        let value = self.parse_expr()?;
        Ok(Statement::Assign { name, value, offset })
    }

    /// Parses an expression:
    ///
    /// ```text
    /// Expr ::= TritLiteral
    ///        | Ident [ "(" [ Expr { "," Expr } ] ")" ]
    /// ```
    ///
    /// An identifier followed immediately by `(` is a call; without `(` it
    /// is a variable reference. An empty argument list `()` parses fine and
    /// is left for the dispatcher to reject with an arity error.
    fn parse_expr(&mut self) -> ParseResult<Expr> {
        let offset = self.current().offset;

        match &self.current().kind {
            TokenKind::TritLit(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::Literal { value, offset })
            },
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();

                if !self.eat(&TokenKind::LParen) {
                    return Ok(Expr::Name { name, offset });
                }

                let mut args = Vec::new();
                if self.current().kind != TokenKind::RParen {
                    args.push(self.parse_expr()?);
                    while self.eat(&TokenKind::Comma) {
                        args.push(self.parse_expr()?);
                    }
                }
                if !self.eat(&TokenKind::RParen) {
                    return Err(self.error(Cause::MissingClosingParen,
                                          format!("Expected ')' to close function call arguments, found {}.",
                                                  self.current().kind)));
                }
                Ok(Expr::Call { name, args, offset })
            },
            kind => Err(self.error(Cause::UnexpectedExpressionToken,
                                   format!("Unexpected {kind} in expression."))),
        }
    }
}

/// Tokenizes and parses a source string in one step.
///
/// # Errors
/// Returns the first Lex or Parse diagnostic encountered.
///
/// ## Example
/// ```
/// use trine::interpreter::parser::parse_source;
///
/// let err = parse_source("trit A A = 0;").unwrap_err();
/// assert_eq!(err.cause.label(), "Missing Semicolon");
/// assert_eq!(err.column, 8);
/// ```
pub fn parse_source(src: &str) -> ParseResult<Program> {
    let tokens = tokenize(src)?;
    Parser::new(tokens, src).parse_program()
}
