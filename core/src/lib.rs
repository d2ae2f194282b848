//! In-memory TF-IDF document search.
//!
//! Documents are short whitespace-tokenized texts with a status and an
//! average rating. The [`SearchServer`] keeps three structures in lockstep:
//! an inverted index (term -> ids), a per-document term-frequency table and
//! the document metadata store. Queries support plus and minus words and an
//! arbitrary `(id, status, rating)` predicate.

pub mod dedup;
pub mod error;
pub mod paginator;
pub mod query;
pub mod request_queue;
pub mod server;
pub mod shared;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use dedup::remove_duplicates;
pub use error::{Result, SearchError};
pub use paginator::{paginate, Paginator};
pub use query::Query;
pub use request_queue::RequestQueue;
pub use server::SearchServer;
pub use shared::SharedSearchServer;
pub use tokenizer::StopWords;

pub type DocId = i32;
pub type Rating = i32;

/// Maximum number of documents returned by a top-documents query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevances closer than this are ranked by rating instead.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
/// Number of most recent requests remembered by [`RequestQueue`].
pub const REQUEST_HISTORY_WINDOW: usize = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "actual" => Ok(DocumentStatus::Actual),
            "irrelevant" => Ok(DocumentStatus::Irrelevant),
            "banned" => Ok(DocumentStatus::Banned),
            "removed" => Ok(DocumentStatus::Removed),
            _ => Err(SearchError::UnknownStatus(s.to_string())),
        }
    }
}

/// Immutable metadata kept for every indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub rating: Rating,
    pub status: DocumentStatus,
}

/// A single ranked hit. `relevance` is query specific and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: Rating,
}

impl Document {
    pub fn new(id: DocId, relevance: f64, rating: Rating) -> Self {
        Self { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}
