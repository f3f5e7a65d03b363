//! AutoHotkey syntax module
//!
//! This module provides the incremental lexer:
//! - Per-byte styling of a window of the document
//! - Per-line fold levels derived from those styles
//! - Restart planning so edits only restyle a suffix

pub mod accessor;
mod builtin;
mod chars;
mod context;
mod continuation;
mod fold;
mod keywords;
mod lexer;
mod manager;
mod restart;
mod sendkey;
mod style;
mod tokens;

pub use builtin::default_keywords;
pub use context::WORD_CAPACITY;
pub use continuation::{first_word_style, is_continuation_line};
pub use fold::{fold, FoldLevel};
pub use keywords::{KeywordLists, WordList};
pub use lexer::{classify_word, colourise};
pub use manager::{Highlighter, PassReport};
pub use restart::{is_safe_line_start, line_entry_style, plan_restart, LexWindow};
pub use sendkey::{split_send_key, SendKey};
pub use style::{spans_from_tags, Color, Span, Style};
pub use tokens::{KeywordClass, TokenType};
