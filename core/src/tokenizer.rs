use std::collections::HashSet;

use crate::error::{Result, SearchError};

/// Split text on ASCII spaces, dropping empty fragments. No case folding and
/// no punctuation stripping: the word is exactly what sits between spaces.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|w| !w.is_empty())
}

/// True if any character is a control code in 0..=31.
pub fn has_forbidden_symbols(text: &str) -> bool {
    text.chars().any(|c| (c as u32) < 32)
}

/// Words ignored both when indexing and when parsing queries.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from space-delimited text, rejecting words with control characters.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(tokenize(text))
    }

    /// Build from any sequence of words. Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if has_forbidden_symbols(word) {
                return Err(SearchError::ForbiddenSymbols(word.to_string()));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Add every word of `text`. Unlike the constructors this does not validate.
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(tokenize(text).map(str::to_string));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tokenize `text` and keep only words that are not stop words.
    pub fn split_no_stop<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        tokenize(text).filter(move |w| !self.contains(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces_only() {
        let words: Vec<_> = tokenize("  funny  pet,and\tcat ").collect();
        assert_eq!(words, vec!["funny", "pet,and\tcat"]);
    }

    #[test]
    fn detects_control_characters() {
        assert!(has_forbidden_symbols("bad\u{1}word"));
        assert!(has_forbidden_symbols("tab\there"));
        assert!(!has_forbidden_symbols("plain words, ünïcode ok"));
        assert!(!has_forbidden_symbols(""));
    }

    #[test]
    fn stop_words_skip_blank_entries() {
        let stop = StopWords::from_words(["in", "", "the"]).unwrap();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("in"));
        assert!(!stop.contains(""));
    }

    #[test]
    fn stop_words_reject_forbidden_symbols() {
        let err = StopWords::from_text("and w\u{12}ith").unwrap_err();
        assert_eq!(err, SearchError::ForbiddenSymbols("w\u{12}ith".to_string()));
    }

    #[test]
    fn split_no_stop_drops_stop_words() {
        let stop = StopWords::from_text("and with").unwrap();
        let words: Vec<_> = stop.split_no_stop("pet with rat and rat").collect();
        assert_eq!(words, vec!["pet", "rat", "rat"]);
    }
}
