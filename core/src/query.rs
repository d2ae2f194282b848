//! Query parsing: plus and minus words.

use std::collections::BTreeSet;

use crate::error::{Result, SearchError};
use crate::tokenizer::{has_forbidden_symbols, tokenize, StopWords};

/// A parsed query. Stop words never appear in either set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Words a document should contain to score.
    pub plus_words: BTreeSet<String>,
    /// Words that disqualify a document outright.
    pub minus_words: BTreeSet<String>,
}

struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_word<'a>(word: &'a str, stop_words: &StopWords) -> Result<QueryWord<'a>> {
    let (data, is_minus) = match word.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (word, false),
    };
    if data.is_empty() || data.starts_with('-') || data.ends_with('-') {
        return Err(SearchError::MalformedQueryWord(word.to_string()));
    }
    if has_forbidden_symbols(data) {
        return Err(SearchError::ForbiddenSymbols(data.to_string()));
    }
    Ok(QueryWord { data, is_minus, is_stop: stop_words.contains(data) })
}

impl Query {
    /// Parse raw query text. One malformed word fails the whole query.
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self> {
        let mut query = Query::default();
        for word in tokenize(text) {
            let word = parse_query_word(word, stop_words)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.insert(word.data.to_string());
            } else {
                query.plus_words.insert(word.data.to_string());
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}
