//! Host capabilities the lexer reads and writes through
//!
//! The document itself is owned by the host. A lexing pass only needs
//! random access to bytes and line boundaries, the styles stored by
//! earlier passes, and a way to write styles and fold records back.

use std::ops::Range;

use super::fold::FoldLevel;
use super::tokens::TokenType;

/// Read-only access to document bytes and line structure
pub trait TextSource {
    /// Document length in bytes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `pos`, `None` past the end
    fn byte_at(&self, pos: usize) -> Option<u8>;

    /// Byte at `pos`, or `0` past the end
    fn safe_byte_at(&self, pos: usize) -> u8 {
        self.byte_at(pos).unwrap_or(0)
    }

    /// Number of lines; a document always has at least one
    fn line_count(&self) -> usize;

    /// Line containing `pos`; positions at or past the end map to the last line
    fn line_of(&self, pos: usize) -> usize;

    /// Offset of the first byte of `line`; lines past the end map to `len()`
    fn line_start(&self, line: usize) -> usize;

    /// Offset one past the last byte of `line`, newline included
    fn line_end(&self, line: usize) -> usize {
        self.line_start(line + 1)
    }
}

/// Read-only access to styles stored by previous passes
pub trait StyleLookup: TextSource {
    /// Stored style at `pos`; `Default` past the end
    fn style_at(&self, pos: usize) -> TokenType;
}

/// Write access used during a pass
pub trait Styler: StyleLookup {
    /// Assign `style` to every byte in `range`
    fn set_style_range(&mut self, range: Range<usize>, style: TokenType);

    /// Stored fold record of `line`
    fn fold_at(&self, line: usize) -> FoldLevel;

    /// Store the fold record of `line`
    fn set_fold(&mut self, line: usize, level: FoldLevel);
}
