/// A byte offset resolved against its source text.
///
/// Lines are `\n`-delimited; both `line` and `column` are 1-based, and
/// `line_text` is the full text of the line without its terminator, ready
/// for inclusion in a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line:      usize,
    /// 1-based column number, counted in characters.
    pub column:    usize,
    /// The text of the line containing the offset, excluding the `\n`.
    pub line_text: String,
}

/// Resolves a byte offset into a line, column and line text.
///
/// The offset must lie on a character boundary; token offsets produced by
/// the lexer always do. An offset equal to `src.len()` resolves to one past
/// the end of the last line, which is where the end-of-input token lives.
///
/// # Parameters
/// - `src`: The full source text the offset refers to.
/// - `offset`: A byte offset into `src`, at most `src.len()`.
///
/// ## Example
/// ```
/// use trine::util::position::locate;
///
/// let pos = locate("trit A;\nA = 2;", 12);
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 5);
/// assert_eq!(pos.line_text, "A = 2;");
/// ```
#[must_use]
pub fn locate(src: &str, offset: usize) -> Position {
    let offset = offset.min(src.len());

    // The line starts after the last '\n' before the offset and ends at the
    // next '\n' or the end of the source.
    let line_start = src[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = src[offset..].find('\n').map_or(src.len(), |i| offset + i);

    Position { line:      src[..offset].matches('\n').count() + 1,
               column:    src[line_start..offset].chars().count() + 1,
               line_text: src[line_start..line_end].to_string(), }
}
