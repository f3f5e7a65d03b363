//! Send-key names such as `{Enter}` or `{Left 5}`
//!
//! Not consulted by the tokenizer. Hosts that want to flag unknown
//! send keys inside strings can call into this directly.

use std::sync::OnceLock;

use regex::Regex;

use super::keywords::KeywordLists;
use super::tokens::KeywordClass;

/// A send key split into its name and optional argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendKey {
    /// Key name including its braces, e.g. `{enter}`
    pub key: String,
    /// Text after the first space, without the closing brace
    pub argument: String,
}

fn argument_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(?i:up|down|on|off|toggle|[0-9]*)$").ok())
        .as_ref()
}

/// Split `text` at the first space after its opening brace
///
/// Modifier prefixes before the `{` (`^`, `+`, `!`, `#`) are skipped.
pub fn split_send_key(text: &str) -> SendKey {
    let Some(open) = text.find('{') else {
        return SendKey::default();
    };

    let mut key = String::new();
    let mut argument = String::new();
    let mut split = false;
    for ch in text[open..].chars() {
        match ch {
            ' ' if !split => {
                split = true;
                key.push('}');
            }
            ' ' => {}
            _ if !split => key.push(ch),
            '}' => {}
            _ => argument.push(ch),
        }
    }
    SendKey { key, argument }
}

impl SendKey {
    /// Argument is empty, a repeat count, or a key state
    pub fn has_valid_argument(&self) -> bool {
        argument_pattern().is_some_and(|re| re.is_match(&self.argument))
    }

    /// Valid argument and either a single-character key or one from list 4
    pub fn is_known(&self, keywords: &KeywordLists) -> bool {
        self.has_valid_argument()
            && (self.key.chars().count() == 3
                || keywords
                    .get(KeywordClass::SendKeys)
                    .contains(&self.key.to_ascii_lowercase()))
    }
}
