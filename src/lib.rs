//! ahklex - incremental AutoHotkey lexer
//!
//! Styles every byte of an AutoHotkey script, derives fold levels from
//! those styles, and restyles only what an edit can affect.

pub mod config;
pub mod document;
pub mod error;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use document::Document;
pub use error::{LexError, Result};
pub use syntax::{Highlighter, KeywordClass, KeywordLists, TokenType};
