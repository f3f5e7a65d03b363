//! Incremental highlighting driver
//!
//! Runs restart planning, tokenizing and fold classification as one
//! pass, and keeps a document's styled watermark moving forward.

use tracing::debug;

use super::accessor::Styler;
use super::builtin;
use super::fold::fold;
use super::keywords::KeywordLists;
use super::lexer::colourise;
use super::restart::{plan_restart, LexWindow};
use super::tokens::TokenType;
use crate::document::Document;

/// What one pass touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Bytes that were restyled
    pub window: LexWindow,
    /// Lines whose fold record changed
    pub fold_changes: Vec<usize>,
}

/// Owns the keyword lists and runs passes over documents
#[derive(Debug, Clone)]
pub struct Highlighter {
    keywords: KeywordLists,
}

impl Highlighter {
    /// Create a highlighter using the built-in keyword lists
    pub fn new() -> Self {
        Self::with_keywords(builtin::default_keywords())
    }

    pub fn with_keywords(keywords: KeywordLists) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordLists {
        &self.keywords
    }

    /// Replace the keyword lists; styles already stored are not touched
    pub fn set_keywords(&mut self, keywords: KeywordLists) {
        self.keywords = keywords;
    }

    /// Restyle at least `start..start + len`, widening back to a safe line start
    pub fn style_range<S: Styler + ?Sized>(
        &self,
        styler: &mut S,
        start: usize,
        len: usize,
    ) -> PassReport {
        let window = plan_restart(&*styler, start, len);
        debug!(
            requested = start,
            start = window.start,
            end = window.end(),
            "style pass"
        );
        colourise(styler, window.start, window.len, TokenType::Default, &self.keywords);
        let fold_changes = fold(styler, window.start, window.len);
        PassReport {
            window,
            fold_changes,
        }
    }

    /// Bring styles up to date as far as `up_to`
    ///
    /// Returns `None` when that part of the document is already styled.
    pub fn ensure_styled(&self, doc: &mut Document, up_to: usize) -> Option<PassReport> {
        let up_to = up_to.min(doc.len());
        let from = doc.end_styled();
        if from >= up_to {
            return None;
        }
        let report = self.style_range(doc, from, up_to - from);
        doc.set_end_styled(report.window.end());
        Some(report)
    }

    /// Restyle the whole document
    pub fn style_all(&self, doc: &mut Document) -> PassReport {
        let len = doc.len();
        let report = self.style_range(doc, 0, len);
        doc.set_end_styled(len);
        report
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
