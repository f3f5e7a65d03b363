//! Keyword lists
//!
//! Eight case-folded word sets, consulted in priority order when a
//! word token ends.

use std::collections::HashSet;

use super::tokens::KeywordClass;

/// A set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a whitespace separated string
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Build from individual words, folding them to lowercase
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Exact match on an already lowered word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The eight keyword lists handed to a lexing pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordLists {
    lists: [WordList; 8],
}

impl KeywordLists {
    /// Create a set of empty lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list for one class
    pub fn set(&mut self, class: KeywordClass, list: WordList) {
        self.lists[class.index()] = list;
    }

    /// Builder form of [`KeywordLists::set`]
    pub fn with(mut self, class: KeywordClass, words: &str) -> Self {
        self.set(class, WordList::parse(words));
        self
    }

    pub fn get(&self, class: KeywordClass) -> &WordList {
        &self.lists[class.index()]
    }

    /// First class (1 through 8) whose list contains `word`
    pub fn classify(&self, word: &str) -> Option<KeywordClass> {
        KeywordClass::ALL
            .into_iter()
            .find(|class| self.lists[class.index()].contains(word))
    }
}
