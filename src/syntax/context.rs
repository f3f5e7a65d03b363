//! Cursor over a lexing window
//!
//! Tracks the current, previous and next byte plus the pending segment:
//! the bytes scanned since the last state change. A segment is written
//! to the styler once, when the state changes, with whatever style is
//! current at that moment. Changing the style of a pending segment
//! before it is flushed is how a token gets restyled after its category
//! becomes known.

use super::accessor::Styler;
use super::tokens::TokenType;

/// Maximum number of bytes of a token that take part in keyword matching
pub const WORD_CAPACITY: usize = 99;

pub struct StyleContext<'a, S: Styler + ?Sized> {
    styler: &'a mut S,
    end: usize,
    segment_start: usize,
    pub pos: usize,
    pub state: TokenType,
    pub ch: u8,
    pub ch_prev: u8,
    pub ch_next: u8,
    /// Current byte terminates its line (`\n`, or a lone `\r`)
    pub at_line_end: bool,
}

impl<'a, S: Styler + ?Sized> StyleContext<'a, S> {
    /// Start a window at `start` spanning `len` bytes, clamped to the document
    pub fn new(styler: &'a mut S, start: usize, len: usize, init: TokenType) -> Self {
        let doc_len = styler.len();
        let start = start.min(doc_len);
        let end = start.saturating_add(len).min(doc_len);
        let ch_prev = match start {
            0 => 0,
            _ => styler.safe_byte_at(start - 1),
        };
        let ch = styler.safe_byte_at(start);
        let ch_next = styler.safe_byte_at(start + 1);
        Self {
            styler,
            end,
            segment_start: start,
            pos: start,
            state: init,
            ch,
            ch_prev,
            ch_next,
            at_line_end: is_line_end(ch, ch_next),
        }
    }

    /// Bytes remain in the window
    pub fn more(&self) -> bool {
        self.pos < self.end
    }

    /// Step to the next byte
    pub fn forward(&mut self) {
        if self.pos >= self.end {
            return;
        }
        self.ch_prev = self.ch;
        self.pos += 1;
        self.ch = self.ch_next;
        self.ch_next = self.styler.safe_byte_at(self.pos + 1);
        self.at_line_end = is_line_end(self.ch, self.ch_next);
    }

    /// Flush the pending segment with the current state and start a new one
    pub fn set_state(&mut self, state: TokenType) {
        let end = self.pos.min(self.end);
        if self.segment_start < end {
            self.styler
                .set_style_range(self.segment_start..end, self.state);
        }
        self.segment_start = self.pos;
        self.state = state;
    }

    /// Include the current byte in the pending segment, then change state
    pub fn forward_set_state(&mut self, state: TokenType) {
        self.forward();
        self.set_state(state);
    }

    /// Change the style of the pending segment without flushing it
    pub fn change_state(&mut self, state: TokenType) {
        self.state = state;
    }

    /// Bytes of the pending segment, excluding the current byte
    fn segment(&self) -> impl Iterator<Item = u8> + '_ {
        (self.segment_start..self.pos).map(|pos| self.styler.safe_byte_at(pos))
    }

    /// Pending segment lowered and capped at [`WORD_CAPACITY`] bytes
    pub fn current_lowered(&self) -> String {
        self.segment()
            .take(WORD_CAPACITY)
            .map(|b| b.to_ascii_lowercase() as char)
            .collect()
    }

    /// Compare the lowered pending segment with `word`
    pub fn current_is(&self, word: &str) -> bool {
        self.pos - self.segment_start == word.len()
            && self
                .segment()
                .zip(word.bytes())
                .all(|(a, b)| a.to_ascii_lowercase() == b)
    }

    /// Flush whatever is still pending at the end of the window
    pub fn complete(&mut self) {
        let state = self.state;
        self.pos = self.pos.max(self.end);
        self.set_state(state);
    }
}

#[inline]
fn is_line_end(ch: u8, ch_next: u8) -> bool {
    ch == b'\n' || (ch == b'\r' && ch_next != b'\n')
}
