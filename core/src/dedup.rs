//! Duplicate elimination by shared vocabulary.
//!
//! Two documents are duplicates when they contain exactly the same set of
//! distinct words, regardless of counts or order. The lowest id of each group
//! survives. This is only deterministic because [`SearchServer::iter`] yields
//! ids in ascending order.

use std::collections::HashSet;

use crate::server::SearchServer;
use crate::DocId;

/// Sorted distinct words of a document.
pub type Signature = Vec<String>;

/// Remove every document whose word set was already seen on a lower id.
/// Returns the removed ids, ascending.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocId> {
    let duplicates = find_duplicates(server);
    for &id in &duplicates {
        tracing::info!(document_id = id, "found duplicate document");
        server.remove_document(id);
    }
    duplicates
}

/// Ids that [`remove_duplicates`] would remove, without touching the server.
pub fn find_duplicates(server: &SearchServer) -> Vec<DocId> {
    let mut seen: HashSet<Signature> = HashSet::new();
    let mut duplicates = Vec::new();
    for id in server {
        // BTreeMap keys come out sorted, so this is already canonical.
        let signature: Signature = server.word_frequencies(id).keys().cloned().collect();
        if !seen.insert(signature) {
            duplicates.push(id);
        }
    }
    duplicates
}
