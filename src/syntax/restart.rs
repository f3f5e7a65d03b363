//! Restart planner
//!
//! Picks where a pass must begin so that it can start in the default
//! state. A line is a safe place to start when the style in effect as
//! the line is entered, i.e. the style of the byte ending the previous
//! line, is `Default`.

use std::ops::Range;

use tracing::trace;

use super::accessor::StyleLookup;
use super::tokens::TokenType;

/// Byte window of one lexing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexWindow {
    pub start: usize,
    pub len: usize,
}

impl LexWindow {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Style in effect when `line` is entered
pub fn line_entry_style<S: StyleLookup + ?Sized>(lookup: &S, line: usize) -> TokenType {
    match lookup.line_start(line) {
        0 => TokenType::Default,
        start => lookup.style_at(start - 1),
    }
}

/// A pass may begin at the start of `line` in the default state
pub fn is_safe_line_start<S: StyleLookup + ?Sized>(lookup: &S, line: usize) -> bool {
    line_entry_style(lookup, line) == TokenType::Default
}

/// Widen a requested window back to the nearest safe line start
///
/// The requested end is kept; it is only clamped to the document.
pub fn plan_restart<S: StyleLookup + ?Sized>(lookup: &S, start: usize, len: usize) -> LexWindow {
    let doc_len = lookup.len();
    let start = start.min(doc_len);
    let end = start.saturating_add(len).min(doc_len);

    let mut line = lookup.line_of(start);
    while line > 0 && !is_safe_line_start(lookup, line) {
        trace!(line, state = line_entry_style(lookup, line).name(), "restart walks back");
        line -= 1;
    }
    let actual = lookup.line_start(line);
    LexWindow::new(actual, end - actual)
}
