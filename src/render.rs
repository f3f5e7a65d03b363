//! Rendering of a styled document to a terminal stream
//!
//! Each line is drawn as a run of styled spans, optionally preceded by a
//! line-number gutter and a one-column fold margin.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::syntax::accessor::TextSource;
use crate::syntax::{is_continuation_line, spans_from_tags, Color, Span, Style};

/// Draws documents with the colours and layout from a [`Config`]
pub struct Renderer<'a> {
    config: &'a Config,
    /// Emit colour and attribute escapes
    color: bool,
    /// Display columns available per line, if limited
    max_cols: Option<usize>,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            color: true,
            max_cols: None,
        }
    }

    /// Builder: enable or disable colour output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder: truncate lines to `cols` display columns
    pub fn with_width(mut self, cols: usize) -> Self {
        self.max_cols = Some(cols);
        self
    }

    /// Width of the line number gutter, including its separator
    fn line_number_width(&self, line_count: usize) -> usize {
        if !self.config.show_line_numbers {
            return 0;
        }
        let digits = line_count.max(1).ilog10() as usize + 1;
        digits.max(3) + 1 // minimum 3 digits + space
    }

    /// Write every line of `doc`
    pub fn render<W: Write>(&self, out: &mut W, doc: &Document) -> Result<()> {
        let gutter = self.line_number_width(doc.line_count());
        let margin = if self.config.fold_margin { 2 } else { 0 };
        let text_cols = self.max_cols.map(|cols| cols.saturating_sub(gutter + margin));

        for line in 0..doc.line_count() {
            // no empty row for the line after a final newline
            if line + 1 == doc.line_count() && line > 0 && doc.line_start(line) == doc.len() {
                break;
            }
            if gutter > 0 {
                let number = format!("{:>width$} ", line + 1, width = gutter - 1);
                self.write_styled(out, &number, Style::fg(Color::BrightBlack))?;
            }
            if margin > 0 {
                let mark = format!("{} ", fold_mark(doc, line));
                self.write_styled(out, &mark, Style::fg(Color::BrightBlack))?;
            }
            self.render_line(out, doc, line, text_cols)?;
            queue!(out, Print("\n"))?;
        }
        out.flush()?;
        Ok(())
    }

    fn render_line<W: Write>(
        &self,
        out: &mut W,
        doc: &Document,
        line: usize,
        max_cols: Option<usize>,
    ) -> Result<()> {
        let text = doc.line_text(line);
        let spans = align_spans(text, spans_from_tags(0, doc.line_styles(line)));
        let mut col = 0;
        for span in spans {
            let chunk = String::from_utf8_lossy(&text[span.range()]);
            let (shown, truncated) = layout(&chunk, &mut col, self.config.tab_width, max_cols);
            self.write_styled(out, &shown, self.config.style_for(span.token))?;
            if truncated {
                break;
            }
        }
        Ok(())
    }

    fn write_styled<W: Write>(&self, out: &mut W, text: &str, style: Style) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if !self.color || style.is_default() {
            queue!(out, Print(text))?;
            return Ok(());
        }
        if style.fg != Color::Default {
            queue!(out, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(out, SetBackgroundColor(term_color(style.bg)))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }
}

/// Write one `line:col style text` row per token
pub fn dump<W: Write>(out: &mut W, doc: &Document) -> Result<()> {
    for line in 0..doc.line_count() {
        let text = doc.line_text(line);
        for span in align_spans(text, spans_from_tags(0, doc.line_styles(line))) {
            let chunk = String::from_utf8_lossy(&text[span.range()]);
            writeln!(out, "{}:{} {} {:?}", line + 1, span.start + 1, span.token.name(), chunk)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Fold margin character for `line`
fn fold_mark(doc: &Document, line: usize) -> char {
    let fold = doc.folds()[line];
    if fold.is_header() {
        '+'
    } else if is_continuation_line(doc, line) {
        '\\'
    } else if fold.level() > 0 {
        '|'
    } else {
        ' '
    }
}

/// Move span boundaries off UTF-8 continuation bytes so no character is split
fn align_spans(text: &[u8], spans: Vec<Span>) -> Vec<Span> {
    let mut aligned = Vec::with_capacity(spans.len());
    let mut start = 0;
    for span in spans {
        let mut end = span.end;
        while end < text.len() && (text[end] & 0xC0) == 0x80 {
            end += 1;
        }
        if end > start {
            aligned.push(Span::new(start, end, span.token));
            start = end;
        }
    }
    aligned
}

/// Expand tabs and cut `text` at `max_cols`, advancing `col`
///
/// Returns the displayable text and whether it was cut short.
fn layout(
    text: &str,
    col: &mut usize,
    tab_width: usize,
    max_cols: Option<usize>,
) -> (String, bool) {
    let limit = max_cols.unwrap_or(usize::MAX);
    let mut shown = String::new();
    for ch in text.chars() {
        if ch == '\t' {
            let stop = (*col / tab_width + 1) * tab_width;
            while *col < stop {
                if *col >= limit {
                    return (shown, true);
                }
                shown.push(' ');
                *col += 1;
            }
            continue;
        }
        let ch_width = ch.width().unwrap_or(1);
        if *col + ch_width > limit {
            return (shown, true);
        }
        shown.push(ch);
        *col += ch_width;
    }
    (shown, false)
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Default => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Highlighter, TokenType};

    fn styled(text: &str) -> Document {
        let mut doc = Document::from_text(text);
        Highlighter::new().style_all(&mut doc);
        doc
    }

    fn plain(config: &Config, doc: &Document, width: Option<usize>) -> String {
        let mut renderer = Renderer::new(config).with_color(false);
        if let Some(cols) = width {
            renderer = renderer.with_width(cols);
        }
        let mut out = Vec::new();
        renderer.render(&mut out, doc).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_with_margin() {
        let config = Config::default();
        let doc = styled("if (x) {\n  y _\n}\n");
        assert_eq!(plain(&config, &doc, None), "+ if (x) {\n\\   y _\n  }\n");
    }

    #[test]
    fn test_fold_interior_mark() {
        let config = Config::default();
        let doc = styled("{\nx\n}");
        assert_eq!(plain(&config, &doc, None), "+ {\n| x\n  }\n");
    }

    #[test]
    fn test_line_numbers() {
        let config = Config {
            show_line_numbers: true,
            fold_margin: false,
            ..Config::default()
        };
        let doc = styled("a\nb");
        assert_eq!(plain(&config, &doc, None), "  1 a\n  2 b\n");
    }

    #[test]
    fn test_tabs_and_truncation() {
        let config = Config {
            fold_margin: false,
            tab_width: 4,
            ..Config::default()
        };
        let doc = styled("\tab\nx\u{4e2d}\u{6587}z");
        assert_eq!(plain(&config, &doc, None), "    ab\nx\u{4e2d}\u{6587}z\n");
        assert_eq!(plain(&config, &doc, Some(4)), "    \nx\u{4e2d}\n");
    }

    #[test]
    fn test_color_output_has_escapes() {
        let config = Config::default();
        let doc = styled("; note");
        let mut out = Vec::new();
        Renderer::new(&config).render(&mut out, &doc).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("; note"));
    }

    #[test]
    fn test_dump() {
        let doc = styled("x := 5\n; hi");
        let mut out = Vec::new();
        dump(&mut out, &doc).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(
            rows,
            vec![
                "1:1 default \"x \"",
                "1:3 assignment \":=\"",
                "1:5 default \" \"",
                "1:6 number \"5\"",
                "2:1 comment \"; hi\"",
            ]
        );
    }

    #[test]
    fn test_align_spans_keeps_characters_whole() {
        let text = "\"`\u{e9}\"".as_bytes();
        let spans = vec![
            Span::new(0, 1, TokenType::String),
            Span::new(1, 3, TokenType::Assignment),
            Span::new(3, 5, TokenType::String),
        ];
        let aligned = align_spans(text, spans);
        assert_eq!(aligned[1], Span::new(1, 4, TokenType::Assignment));
        assert_eq!(aligned[2], Span::new(4, 5, TokenType::String));
    }
}
