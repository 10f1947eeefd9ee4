/// Source position helpers.
///
/// This module provides the mapping from a byte offset in source text to a
/// 1-based line number, 1-based column number, and the text of that line.
/// All three pipeline stages use it to attach positions to diagnostics.
pub mod position;
