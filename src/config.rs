//! Configuration file support
//!
//! Loads settings from ~/.ahklex.toml (or %USERPROFILE%\.ahklex.toml on Windows)
//!
//! Example:
//! ```toml
//! line-numbers = true
//! fold-margin = true
//! tab-width = 4
//!
//! [keywords]
//! udf = "MyHelper _ArrayAdd"
//! functions = ["MsgBox", "InStr"]
//!
//! [styles]
//! number = "bright-cyan"
//! keyword8 = { fg = "yellow", bold = true }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::error::{LexError, Result};
use crate::syntax::{
    default_keywords, Color, KeywordClass, KeywordLists, Style, TokenType, WordList,
};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Whether to show the fold margin
    pub fold_margin: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Keyword lists handed to every pass
    pub keywords: KeywordLists,
    /// Style overrides per token type
    pub styles: HashMap<TokenType, Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            fold_margin: true,
            tab_width: 8,
            keywords: default_keywords(),
            styles: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".ahklex.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".ahklex.toml"))
        }
    }

    /// Load configuration from `path`, or from the default location
    ///
    /// A missing default file gives the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(LexError::FileNotFound(path.display().to_string()))
            }
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Config::default()),
            },
        };
        debug!(path = %path.display(), "loading config");
        let contents = fs::read_to_string(&path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match key.as_str() {
                "line-numbers" => self.show_line_numbers = expect_bool(key, value)?,
                "fold-margin" => self.fold_margin = expect_bool(key, value)?,
                "tab-width" => {
                    let n = value.as_integer().ok_or_else(|| invalid(key, "an integer"))?;
                    // Between 1 and 16
                    self.tab_width = n.clamp(1, 16) as usize;
                }
                "keywords" => {
                    let lists = value.as_table().ok_or_else(|| invalid(key, "a table"))?;
                    self.apply_keywords(lists)?;
                }
                "styles" => {
                    let styles = value.as_table().ok_or_else(|| invalid(key, "a table"))?;
                    self.apply_styles(styles)?;
                }
                _ => warn!(key = key.as_str(), "ignoring unknown config key"),
            }
        }
        Ok(())
    }

    fn apply_keywords(&mut self, lists: &Table) -> Result<()> {
        for (name, value) in lists {
            let class = KeywordClass::from_name(name)
                .ok_or_else(|| LexError::UnknownKeywordList(name.clone()))?;
            let list = match value {
                Value::String(words) => WordList::parse(words),
                Value::Array(items) => {
                    let words = items
                        .iter()
                        .map(|item| {
                            item.as_str()
                                .ok_or_else(|| invalid(name, "a list of strings"))
                        })
                        .collect::<Result<Vec<_>>>()?;
                    WordList::from_words(words)
                }
                _ => return Err(invalid(name, "a string or an array of strings")),
            };
            debug!(list = class.name(), words = list.len(), "keyword list replaced");
            self.keywords.set(class, list);
        }
        Ok(())
    }

    fn apply_styles(&mut self, styles: &Table) -> Result<()> {
        for (name, value) in styles {
            let token = TokenType::from_name(name)
                .ok_or_else(|| LexError::UnknownTokenType(name.clone()))?;
            let style = match value {
                Value::String(color) => token.default_style().with_fg(parse_color(color)?),
                Value::Table(attrs) => parse_style(name, attrs)?,
                _ => return Err(invalid(name, "a colour name or a style table")),
            };
            self.styles.insert(token, style);
        }
        Ok(())
    }

    /// Style used to draw `token`
    pub fn style_for(&self, token: TokenType) -> Style {
        self.styles
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.default_style())
    }
}

fn parse_style(name: &str, attrs: &Table) -> Result<Style> {
    let mut style = Style::default();
    for (attr, value) in attrs {
        match attr.as_str() {
            "fg" | "bg" => {
                let color = value.as_str().ok_or_else(|| invalid(name, "a colour name"))?;
                let color = parse_color(color)?;
                if attr == "fg" {
                    style.fg = color;
                } else {
                    style.bg = color;
                }
            }
            "bold" => style.bold = expect_bool(name, value)?,
            "italic" => style.italic = expect_bool(name, value)?,
            "underline" => style.underline = expect_bool(name, value)?,
            _ => warn!(style = name, attr = attr.as_str(), "ignoring unknown style attribute"),
        }
    }
    Ok(style)
}

fn parse_color(name: &str) -> Result<Color> {
    Color::from_name(name).ok_or_else(|| LexError::UnknownColor(name.to_string()))
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::String(s) => parse_bool(s).ok_or_else(|| invalid(key, "a boolean")),
        _ => Err(invalid(key, "a boolean")),
    }
}

fn invalid(key: &str, expected: &'static str) -> LexError {
    LexError::InvalidSetting {
        key: key.to_string(),
        expected,
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
