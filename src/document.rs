//! Document - script text with the styles and fold records lexed for it

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::{LexError, Result};
use crate::syntax::accessor::{StyleLookup, Styler, TextSource};
use crate::syntax::{FoldLevel, TokenType};

/// Script text plus per-byte styles and per-line fold records
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw bytes of the script
    text: Vec<u8>,
    /// Offset of the first byte of each line
    line_starts: Vec<usize>,
    /// One style per byte
    styles: Vec<TokenType>,
    /// One record per line
    folds: Vec<FoldLevel>,
    /// Bytes before this offset hold up-to-date styles
    end_styled: usize,
    /// Display name
    name: String,
    /// Source file, if loaded from disk
    filename: Option<PathBuf>,
}

impl Document {
    /// Create an empty document with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_text(name.into(), Vec::new())
    }

    /// Create an unnamed document holding `text`
    pub fn from_text(text: &str) -> Self {
        Self::with_text("unnamed".to_string(), text.as_bytes().to_vec())
    }

    /// Load a document from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexError::FileNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        let mut doc = Self::with_text(name, bytes);
        doc.filename = Some(path.to_path_buf());
        Ok(doc)
    }

    fn with_text(name: String, text: Vec<u8>) -> Self {
        let line_starts = scan_line_starts(&text);
        Self {
            styles: vec![TokenType::Default; text.len()],
            folds: vec![FoldLevel::default(); line_starts.len()],
            text,
            line_starts,
            end_styled: 0,
            name,
            filename: None,
        }
    }

    /// Get document name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get filename if set
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Stored style of every byte
    pub fn styles(&self) -> &[TokenType] {
        &self.styles
    }

    /// Stored fold record of every line
    pub fn folds(&self) -> &[FoldLevel] {
        &self.folds
    }

    /// Byte range of `line` without its terminator
    pub fn line_range(&self, line: usize) -> Range<usize> {
        let start = self.line_start(line);
        let mut end = self.line_end(line);
        while end > start && matches!(self.text[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        start..end
    }

    /// Bytes of `line` without its terminator
    pub fn line_text(&self, line: usize) -> &[u8] {
        &self.text[self.line_range(line)]
    }

    /// Styles of `line` without its terminator
    pub fn line_styles(&self, line: usize) -> &[TokenType] {
        &self.styles[self.line_range(line)]
    }

    /// Offset up to which styles are current
    pub fn end_styled(&self) -> usize {
        self.end_styled
    }

    pub fn set_end_styled(&mut self, pos: usize) {
        self.end_styled = pos.min(self.len());
    }

    /// Insert `text` at `pos`; inserted bytes start out unstyled
    pub fn insert(&mut self, pos: usize, text: &str) {
        let pos = pos.min(self.len());
        let bytes = text.as_bytes();
        self.text.splice(pos..pos, bytes.iter().copied());
        self.styles
            .splice(pos..pos, std::iter::repeat(TokenType::Default).take(bytes.len()));
        self.edited(pos);
    }

    /// Remove the bytes in `range`
    pub fn delete(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.text.drain(start..end);
        self.styles.drain(start..end);
        self.edited(start);
    }

    /// Rebuild the line index and pull the watermark back to the edited line
    ///
    /// The line is looked up on the rebuilt index from the byte before
    /// `pos`, so a `\r` that now pairs with an inserted `\n` is restyled.
    fn edited(&mut self, pos: usize) {
        self.line_starts = scan_line_starts(&self.text);
        self.folds.resize(self.line_starts.len(), FoldLevel::default());
        let line = self.line_of(pos.saturating_sub(1));
        self.end_styled = self.end_styled.min(self.line_start(line));
    }
}

/// Line starts for `text`; `\r\n`, `\n` and a lone `\r` end a line
fn scan_line_starts(text: &[u8]) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, &b) in text.iter().enumerate() {
        let ends = b == b'\n' || (b == b'\r' && text.get(i + 1) != Some(&b'\n'));
        if ends {
            starts.push(i + 1);
        }
    }
    starts
}

impl TextSource for Document {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.get(pos).copied()
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_of(&self, pos: usize) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts.get(line).copied().unwrap_or(self.text.len())
    }
}

impl StyleLookup for Document {
    fn style_at(&self, pos: usize) -> TokenType {
        self.styles.get(pos).copied().unwrap_or_default()
    }
}

impl Styler for Document {
    fn set_style_range(&mut self, range: Range<usize>, style: TokenType) {
        let end = range.end.min(self.styles.len());
        let start = range.start.min(end);
        self.styles[start..end].fill(style);
    }

    fn fold_at(&self, line: usize) -> FoldLevel {
        self.folds.get(line).copied().unwrap_or_default()
    }

    fn set_fold(&mut self, line: usize, level: FoldLevel) {
        if let Some(slot) = self.folds.get_mut(line) {
            *slot = level;
        }
    }
}
