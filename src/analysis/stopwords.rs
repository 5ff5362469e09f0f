//! Stopword sets for the word-frequency table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const ENGLISH: &str = include_str!("stopwords_en.txt");

/// A set of lowercase words excluded from word counts.
///
/// Lists are plain text: one word per line, blank lines and lines starting
/// with `#` ignored. Matching is case-insensitive because both the list and
/// the tokens are lowercased.
///
/// ```rust
/// use chatstat::analysis::StopWords;
///
/// let words = StopWords::from_text("# greetings\nHello\n\nbye\n");
/// assert!(words.contains("hello"));
/// assert!(words.contains("BYE"));
/// assert_eq!(words.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// The bundled English list.
    pub fn english() -> Self {
        Self::from_text(ENGLISH)
    }

    /// No stopwords at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a stopword list.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .flat_map(str::split_whitespace),
        )
    }

    /// Builds a set from individual words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Adds words to the set.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
