//! The search server: inverted index, term-frequency table and document store.

use std::borrow::Cow;
use std::collections::{btree_map, BTreeMap, HashMap, HashSet};

use crate::error::{Result, SearchError};
use crate::query::Query;
use crate::tokenizer::{has_forbidden_symbols, StopWords};
use crate::{
    DocId, DocMeta, Document, DocumentStatus, Rating, MAX_RESULT_DOCUMENT_COUNT,
    RELEVANCE_EPSILON,
};

/// Word -> normalized frequency within one document.
pub type WordFrequencies = BTreeMap<String, f64>;

/// In-memory TF-IDF index.
///
/// Invariant between operations: a word maps to document `D` in the inverted
/// index iff `D`'s frequency table has that word, and the frequency table and
/// the document store share the same key set.
#[derive(Debug, Clone, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    /// Ordered by id. Duplicate removal relies on ascending iteration.
    documents: BTreeMap<DocId, DocMeta>,
    word_freqs: HashMap<DocId, WordFrequencies>,
    word_to_documents: HashMap<String, HashSet<DocId>>,
}

impl SearchServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a server whose stop words are the space-separated words of `text`.
    pub fn with_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self { stop_words: StopWords::from_text(text)?, ..Self::default() })
    }

    /// Create a server from any collection of stop words. Empty entries are ignored.
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { stop_words: StopWords::from_words(words)?, ..Self::default() })
    }

    /// Add more stop words. Documents already indexed keep their words.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text);
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Index a document. All validation happens before the index is touched.
    pub fn add_document(
        &mut self,
        document_id: DocId,
        document: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::NegativeDocumentId(document_id));
        }
        if self.documents.contains_key(&document_id) {
            return Err(SearchError::DuplicateDocumentId(document_id));
        }
        if has_forbidden_symbols(document) {
            return Err(SearchError::ForbiddenSymbols(document.to_string()));
        }

        let mut word_count = 0usize;
        let mut freqs = WordFrequencies::new();
        for word in self.stop_words.split_no_stop(document) {
            *freqs.entry(word.to_string()).or_insert(0.0) += 1.0;
            word_count += 1;
        }
        for freq in freqs.values_mut() {
            *freq /= word_count as f64;
        }

        let meta = DocMeta { rating: compute_average_rating(ratings), status };
        self.attach(document_id, meta, freqs);
        tracing::debug!(document_id, word_count, ?status, "indexed document");
        Ok(())
    }

    /// Remove a document from every structure. Unknown ids are ignored.
    pub fn remove_document(&mut self, document_id: DocId) {
        if let Some(unique_words) = self.detach(document_id) {
            tracing::debug!(document_id, unique_words, "removed document");
        }
    }

    fn attach(&mut self, document_id: DocId, meta: DocMeta, freqs: WordFrequencies) {
        for word in freqs.keys() {
            self.word_to_documents.entry(word.clone()).or_default().insert(document_id);
        }
        self.word_freqs.insert(document_id, freqs);
        self.documents.insert(document_id, meta);
    }

    /// Returns the number of distinct words the document had, or `None` if it
    /// was not indexed.
    fn detach(&mut self, document_id: DocId) -> Option<usize> {
        self.documents.remove(&document_id)?;
        let freqs = self.word_freqs.remove(&document_id).unwrap_or_default();
        for word in freqs.keys() {
            if let Some(ids) = self.word_to_documents.get_mut(word) {
                ids.remove(&document_id);
                if ids.is_empty() {
                    self.word_to_documents.remove(word);
                }
            }
        }
        Some(freqs.len())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn contains(&self, document_id: DocId) -> bool {
        self.documents.contains_key(&document_id)
    }

    pub fn document(&self, document_id: DocId) -> Option<&DocMeta> {
        self.documents.get(&document_id)
    }

    /// Live document ids in ascending order.
    pub fn iter(&self) -> DocumentIds<'_> {
        self.documents.keys().copied()
    }

    /// Frequencies of the document's words; an empty map for unknown ids.
    pub fn word_frequencies(&self, document_id: DocId) -> Cow<'_, WordFrequencies> {
        match self.word_freqs.get(&document_id) {
            Some(freqs) => Cow::Borrowed(freqs),
            None => Cow::Owned(WordFrequencies::new()),
        }
    }

    /// Ids of documents containing `word`, if any document does.
    pub fn documents_with_word(&self, word: &str) -> Option<&HashSet<DocId>> {
        self.word_to_documents.get(word)
    }

    /// Every indexed word with the ids of the documents containing it.
    pub fn inverted_index(&self) -> impl Iterator<Item = (&str, &HashSet<DocId>)> + '_ {
        self.word_to_documents.iter().map(|(word, ids)| (word.as_str(), ids))
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, |_, document_status, _| document_status == status)
    }

    /// Top documents accepted by `predicate(id, status, rating)`, best first,
    /// at most [`MAX_RESULT_DOCUMENT_COUNT`] of them.
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut matched: Vec<Document> = self
            .find_all_documents(&query, predicate)
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.documents.get(&id).map(|meta| Document::new(id, relevance, meta.rating))
            })
            .collect();

        sort_by_relevance(&mut matched);
        let total = matched.len();
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        tracing::debug!(query = raw_query, total, returned = matched.len(), "top documents");
        Ok(matched)
    }

    /// Relevance of every document that matches a plus word, passes the
    /// predicate and contains no minus word.
    pub fn find_all_documents<P>(&self, query: &Query, predicate: P) -> BTreeMap<DocId, f64>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(ids) = self.word_to_documents.get(word) else {
                continue;
            };
            let idf = self.inverse_document_freq(ids.len());
            for &id in ids {
                let Some(meta) = self.documents.get(&id) else {
                    continue;
                };
                if !predicate(id, meta.status, meta.rating) {
                    continue;
                }
                let tf = self.word_freqs.get(&id).and_then(|f| f.get(word)).copied().unwrap_or(0.0);
                *relevance.entry(id).or_insert(0.0) += tf * idf;
            }
        }

        for word in &query.minus_words {
            if let Some(ids) = self.word_to_documents.get(word) {
                for id in ids {
                    relevance.remove(id);
                }
            }
        }
        relevance
    }

    /// Plus words of `raw_query` present in the document, and its status.
    /// Any minus word present in the document empties the word list.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let meta = self
            .documents
            .get(&document_id)
            .ok_or(SearchError::DocumentNotFound(document_id))?;
        let freqs = self.word_frequencies(document_id);

        if query.minus_words.iter().any(|w| freqs.contains_key(w)) {
            return Ok((Vec::new(), meta.status));
        }
        let matched = query.plus_words.into_iter().filter(|w| freqs.contains_key(w)).collect();
        Ok((matched, meta.status))
    }

    // The word must be indexed, so `containing` is never zero.
    fn inverse_document_freq(&self, containing: usize) -> f64 {
        (self.document_count() as f64 / containing as f64).ln()
    }
}

pub type DocumentIds<'a> = std::iter::Copied<btree_map::Keys<'a, DocId, DocMeta>>;

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Integer mean truncated toward zero; zero for no ratings.
fn compute_average_rating(ratings: &[Rating]) -> Rating {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as Rating
}

/// Descending relevance; runs of near-equal relevance are ordered by
/// descending rating.
fn sort_by_relevance(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    for run in documents
        .chunk_by_mut(|a, b| (a.relevance - b.relevance).abs() < RELEVANCE_EPSILON)
    {
        run.sort_by(|a, b| b.rating.cmp(&a.rating));
    }
}
