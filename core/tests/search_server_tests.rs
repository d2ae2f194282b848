use docrank_core::{
    paginate, remove_duplicates, DocumentStatus, RequestQueue, SearchError, SearchServer,
};
use std::num::NonZeroUsize;

fn canonical_server() -> SearchServer {
    let mut server = SearchServer::with_stop_words_text("and with").unwrap();
    let docs = [
        (1, "funny pet and nasty rat", vec![7, 2, 7]),
        (2, "funny pet with curly hair", vec![1, 2]),
        (3, "funny pet with curly hair", vec![1, 2]),
        (4, "funny pet and curly hair", vec![1, 2]),
        (5, "funny funny pet and nasty nasty rat", vec![1, 2]),
        (6, "funny pet and not very nasty rat", vec![1, 2]),
        (7, "very nasty rat and not very funny pet", vec![1, 2]),
        (8, "pet with rat and rat and rat", vec![1, 2]),
        (9, "nasty rat with curly hair", vec![1, 2]),
    ];
    for (id, text, ratings) in docs {
        server.add_document(id, text, DocumentStatus::Actual, &ratings).unwrap();
    }
    server
}

#[test]
fn canonical_duplicates_are_removed() {
    let mut server = canonical_server();
    assert_eq!(server.document_count(), 9);

    // 3 and 4 share {curly, funny, hair, pet} with 2, 5 shares 1's words and
    // 7 shares 6's words.
    let removed = remove_duplicates(&mut server);
    assert_eq!(removed, vec![3, 4, 5, 7]);
    assert_eq!(server.document_count(), 5);
    assert_eq!(server.iter().collect::<Vec<_>>(), vec![1, 2, 6, 8, 9]);

    assert!(remove_duplicates(&mut server).is_empty());
    assert_eq!(server.document_count(), 5);
}

#[test]
fn minus_word_hides_document_with_plus_word() {
    let server = canonical_server();
    let found = server.find_top_documents("pet -rat").unwrap();
    let ids: Vec<_> = found.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
    for id in [1, 5, 6, 7, 8] {
        assert!(!ids.contains(&id));
    }
}

#[test]
fn lone_minus_is_malformed() {
    let server = canonical_server();
    assert_eq!(
        server.find_top_documents("-"),
        Err(SearchError::MalformedQueryWord("-".to_string()))
    );
}

#[test]
fn negative_id_is_rejected_without_changes() {
    let mut server = canonical_server();
    let err = server.add_document(-1, "text", DocumentStatus::Actual, &[]).unwrap_err();
    assert_eq!(err, SearchError::NegativeDocumentId(-1));
    assert!(err.is_invalid_argument());
    assert_eq!(server.document_count(), 9);
    assert!(server.documents_with_word("text").is_none());
}

#[test]
fn match_on_unknown_document_is_a_hard_error() {
    let server = canonical_server();
    let err = server.match_document("rat", 999).unwrap_err();
    assert_eq!(err, SearchError::DocumentNotFound(999));
    assert!(!err.is_invalid_argument());
}

#[test]
fn removing_unknown_document_is_a_no_op() {
    let mut server = canonical_server();
    server.remove_document(999);
    assert_eq!(server.document_count(), 9);
    assert!(server.word_frequencies(999).is_empty());
}

#[test]
fn removed_document_disappears_everywhere() {
    let mut server = canonical_server();
    server.remove_document(8);
    assert!(server.word_frequencies(8).is_empty());
    assert!(!server.iter().any(|id| id == 8));
    assert!(server.inverted_index().all(|(_, ids)| !ids.contains(&8)));
    assert!(server.find_top_documents("rat").unwrap().iter().all(|d| d.id != 8));
}

#[test]
fn top_documents_pair_relevance_with_rating() {
    let server = canonical_server();
    let found = server.find_top_documents("curly nasty").unwrap();
    assert_eq!(found.len(), 5);
    assert_eq!(found[0].id, 9);
    assert_eq!(found[0].rating, 1);
    for pair in found.windows(2) {
        assert!(pair[0].relevance + 1e-6 >= pair[1].relevance);
    }
}

#[test]
fn paginated_history_flow() {
    let server = canonical_server();
    let mut queue = RequestQueue::new(&server);
    let found = queue.add_find_request("curly nasty").unwrap();
    queue.add_find_request("sparrow").unwrap();
    assert_eq!(queue.no_result_requests(), 1);

    let pages: Vec<_> = paginate(&found, NonZeroUsize::new(2).unwrap()).pages().collect();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].len(), 1);
}
