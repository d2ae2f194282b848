//! Error types for docrank-core.

use thiserror::Error;

use crate::DocId;

/// Errors raised by the search engine. Every variant is detected before any
/// index mutation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Text contains a character in the control range 0..=31.
    #[error("word `{0}` contains forbidden symbols")]
    ForbiddenSymbols(String),

    #[error("document id {0} is negative")]
    NegativeDocumentId(DocId),

    #[error("document id {0} already exists")]
    DuplicateDocumentId(DocId),

    /// A query word that is a bare `-`, starts with `--` or ends with `-`.
    #[error("malformed query word `{0}`")]
    MalformedQueryWord(String),

    #[error("document {0} not found")]
    DocumentNotFound(DocId),

    #[error("unknown document status `{0}`")]
    UnknownStatus(String),
}

impl SearchError {
    /// True for the invalid-argument family (bad input text or ids), false for
    /// lookup failures.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SearchError::DocumentNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
