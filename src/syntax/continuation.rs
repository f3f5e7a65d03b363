//! Line queries over stored styles
//!
//! Used by hosts that indent or fold by statement rather than by
//! bracket: a trailing `_` joins a line to the next one.

use super::accessor::StyleLookup;
use super::chars::is_space;
use super::tokens::TokenType;

/// Last byte of `line` outside comments and whitespace is `_`
pub fn is_continuation_line<S: StyleLookup + ?Sized>(lookup: &S, line: usize) -> bool {
    let start = lookup.line_start(line);
    let end = lookup.line_end(line);
    (start..end)
        .rev()
        .find(|&pos| !lookup.style_at(pos).is_comment() && !is_space(lookup.safe_byte_at(pos)))
        .is_some_and(|pos| lookup.safe_byte_at(pos) == b'_')
}

/// Style of the first non-whitespace byte of `line`
pub fn first_word_style<S: StyleLookup + ?Sized>(lookup: &S, line: usize) -> Option<TokenType> {
    let start = lookup.line_start(line);
    let end = lookup.line_end(line);
    (start..end)
        .find(|&pos| !is_space(lookup.safe_byte_at(pos)))
        .map(|pos| lookup.style_at(pos))
}
