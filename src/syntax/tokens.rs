//! Token types for AutoHotkey highlighting
//!
//! This module defines the style tag assigned to every byte of a
//! script, the eight keyword categories, and their default visual styles.

use super::style::{Color, Style};

/// One of the eight configurable keyword categories, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordClass {
    /// Control flow and declaration keywords (list 1)
    Keywords,
    /// Built-in functions (list 2)
    Functions,
    /// Built-in variables and macros (list 3)
    Macros,
    /// Send key names (list 4)
    SendKeys,
    /// Preprocessor directives (list 5)
    Preprocessor,
    /// Special directives such as `#region` (list 6)
    Special,
    /// Abbreviations used for expansion (list 7)
    Expand,
    /// User defined functions (list 8)
    Udf,
}

impl KeywordClass {
    /// All classes in priority order
    pub const ALL: [KeywordClass; 8] = [
        KeywordClass::Keywords,
        KeywordClass::Functions,
        KeywordClass::Macros,
        KeywordClass::SendKeys,
        KeywordClass::Preprocessor,
        KeywordClass::Special,
        KeywordClass::Expand,
        KeywordClass::Udf,
    ];

    /// Zero-based list index
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based list number, as shown to users
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            KeywordClass::Keywords => "keywords",
            KeywordClass::Functions => "functions",
            KeywordClass::Macros => "macros",
            KeywordClass::SendKeys => "sendkeys",
            KeywordClass::Preprocessor => "preprocessor",
            KeywordClass::Special => "special",
            KeywordClass::Expand => "expand",
            KeywordClass::Udf => "udf",
        }
    }

    /// Human-readable description of the list
    pub fn description(self) -> &'static str {
        match self {
            KeywordClass::Keywords => "ahk keywords",
            KeywordClass::Functions => "ahk functions",
            KeywordClass::Macros => "ahk macros",
            KeywordClass::SendKeys => "ahk sent keys",
            KeywordClass::Preprocessor => "ahk pre-processors",
            KeywordClass::Special => "ahk special",
            KeywordClass::Expand => "ahk expand",
            KeywordClass::Udf => "ahk udf",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

/// Style tag assigned to each byte of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenType {
    /// Plain text, whitespace and unmatched identifiers
    #[default]
    Default,
    /// `;` comment running to the end of the line
    LineComment,
    /// `/* ... */` comment, may span lines
    BlockComment,
    /// Word found in one of the keyword lists
    Keyword(KeywordClass),
    /// Numeric literals (decimal, hex, exponent)
    Number,
    /// `$`-prefixed variables
    Variable,
    /// Operators and the `_` continuation marker
    Operator,
    /// Quoted strings
    String,
    /// `:=` and escape sequences inside strings
    Assignment,
    /// Member accessed through `.` on an object
    ComObject,
    /// Brackets, parentheses and braces
    FoldBracket,
}

impl TokenType {
    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Default => Style::default(),
            TokenType::LineComment | TokenType::BlockComment => {
                Style::fg(Color::BrightBlack).with_italic()
            }
            TokenType::Keyword(class) => match class {
                KeywordClass::Keywords => Style::fg(Color::Magenta).with_bold(),
                KeywordClass::Functions => Style::fg(Color::Blue),
                KeywordClass::Macros => Style::fg(Color::BrightCyan),
                KeywordClass::SendKeys => Style::fg(Color::BrightYellow),
                KeywordClass::Preprocessor => Style::fg(Color::BrightMagenta),
                KeywordClass::Special => Style::fg(Color::Yellow).with_underline(),
                KeywordClass::Expand => Style::fg(Color::BrightBlue),
                KeywordClass::Udf => Style::fg(Color::Cyan).with_bold(),
            },
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Variable => Style::fg(Color::BrightRed),
            TokenType::Operator => Style::fg(Color::BrightWhite),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Assignment => Style::fg(Color::Red),
            TokenType::ComObject => Style::fg(Color::BrightGreen),
            TokenType::FoldBracket => Style::fg(Color::White).with_bold(),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Default => "default",
            TokenType::LineComment => "comment",
            TokenType::BlockComment => "comment-block",
            TokenType::Keyword(class) => match class {
                KeywordClass::Keywords => "keyword1",
                KeywordClass::Functions => "keyword2",
                KeywordClass::Macros => "keyword3",
                KeywordClass::SendKeys => "keyword4",
                KeywordClass::Preprocessor => "keyword5",
                KeywordClass::Special => "keyword6",
                KeywordClass::Expand => "keyword7",
                KeywordClass::Udf => "keyword8",
            },
            TokenType::Number => "number",
            TokenType::Variable => "variable",
            TokenType::Operator => "operator",
            TokenType::String => "string",
            TokenType::Assignment => "assignment",
            TokenType::ComObject => "com-object",
            TokenType::FoldBracket => "fold-bracket",
        }
    }

    /// Parse a token type from a string name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(TokenType::Default),
            "comment" => Some(TokenType::LineComment),
            "comment-block" => Some(TokenType::BlockComment),
            "number" => Some(TokenType::Number),
            "variable" => Some(TokenType::Variable),
            "operator" => Some(TokenType::Operator),
            "string" => Some(TokenType::String),
            "assignment" => Some(TokenType::Assignment),
            "com-object" => Some(TokenType::ComObject),
            "fold-bracket" => Some(TokenType::FoldBracket),
            _ => {
                let n: usize = name.strip_prefix("keyword")?.parse().ok()?;
                let class = KeywordClass::ALL.get(n.checked_sub(1)?)?;
                Some(TokenType::Keyword(*class))
            }
        }
    }

    /// Whether this tag marks comment text
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenType::LineComment | TokenType::BlockComment)
    }
}
