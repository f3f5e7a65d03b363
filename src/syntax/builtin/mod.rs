//! Built-in keyword lists
//!
//! Used when no configuration overrides a list. The expansion and
//! user-defined lists start out empty.

mod ahk;

use super::keywords::KeywordLists;

/// Keyword lists used when the configuration names none
pub fn default_keywords() -> KeywordLists {
    ahk::ahk_keywords()
}
