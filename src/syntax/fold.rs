//! Fold classifier
//!
//! Derives per-line nesting depth from the styles the tokenizer wrote.
//! Only bytes tagged `FoldBracket` or `BlockComment` take part, so
//! brackets inside strings and comments never open a fold.

use tracing::debug;

use super::accessor::Styler;
use super::tokens::TokenType;

/// Nesting depth at the start and end of a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FoldLevel {
    pub start: u32,
    pub end: u32,
}

impl FoldLevel {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Depth shown for the line: the shallowest point it reaches
    pub fn level(&self) -> u32 {
        self.start.min(self.end)
    }

    /// The line opens more levels than it closes
    pub fn is_header(&self) -> bool {
        self.end > self.start
    }
}

/// Recompute fold records for the lines covering `start..start + len`
///
/// The region is widened to whole lines. Depth is seeded from the end
/// depth of the line before the region. Returns the lines whose stored
/// record changed.
pub fn fold<S: Styler + ?Sized>(styler: &mut S, start: usize, len: usize) -> Vec<usize> {
    let doc_len = styler.len();
    let start = start.min(doc_len);
    let end = start.saturating_add(len).min(doc_len);

    let mut line = styler.line_of(start);
    let mut depth = match line {
        0 => 0,
        _ => styler.fold_at(line - 1).end,
    };
    let region_start = styler.line_start(line);
    let mut in_comment =
        region_start > 0 && styler.style_at(region_start - 1) == TokenType::BlockComment;
    let mut changed = Vec::new();

    while line < styler.line_count() && styler.line_start(line) < end {
        let line_depth = depth;
        for pos in styler.line_start(line)..styler.line_end(line) {
            let ch = styler.safe_byte_at(pos);
            match styler.style_at(pos) {
                TokenType::FoldBracket => match ch {
                    b'{' | b'(' | b'[' => depth += 1,
                    b'}' | b')' | b']' => depth = depth.saturating_sub(1),
                    _ => {}
                },
                TokenType::BlockComment if pos > 0 => {
                    let prev = styler.safe_byte_at(pos - 1);
                    let prev_comment = styler.style_at(pos - 1) == TokenType::BlockComment;
                    if !in_comment && ch == b'*' && prev == b'/' && prev_comment {
                        in_comment = true;
                        depth += 1;
                    } else if in_comment && ch == b'/' && prev == b'*' && prev_comment {
                        in_comment = false;
                        depth = depth.saturating_sub(1);
                    }
                }
                _ => {}
            }
        }
        record(styler, line, FoldLevel::new(line_depth, depth), &mut changed);
        line += 1;
    }

    // empty line after a final newline
    if line < styler.line_count() && styler.line_start(line) == doc_len && end == doc_len {
        record(styler, line, FoldLevel::new(depth, depth), &mut changed);
    }

    if !changed.is_empty() {
        debug!(first = changed[0], count = changed.len(), "fold levels changed");
    }
    changed
}

fn record<S: Styler + ?Sized>(
    styler: &mut S,
    line: usize,
    level: FoldLevel,
    changed: &mut Vec<usize>,
) {
    if styler.fold_at(line) != level {
        styler.set_fold(line, level);
        changed.push(line);
    }
}
