use std::collections::VecDeque;

use crate::error::Result;
use crate::server::SearchServer;
use crate::{DocId, Document, DocumentStatus, Rating, REQUEST_HISTORY_WINDOW};

/// Tracks whether recent queries found anything, over a sliding window of the
/// last [`REQUEST_HISTORY_WINDOW`] requests.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<bool>,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self { server, requests: VecDeque::with_capacity(REQUEST_HISTORY_WINDOW), no_result_requests: 0 }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let found = self.server.find_top_documents(raw_query)?;
        self.record(!found.is_empty());
        Ok(found)
    }

    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let found = self.server.find_top_documents_by_status(raw_query, status)?;
        self.record(!found.is_empty());
        Ok(found)
    }

    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let found = self.server.find_top_documents_by(raw_query, predicate)?;
        self.record(!found.is_empty());
        Ok(found)
    }

    /// Requests in the current window that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Requests currently remembered, at most [`REQUEST_HISTORY_WINDOW`].
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, found_any: bool) {
        if self.requests.len() >= REQUEST_HISTORY_WINDOW {
            if let Some(false) = self.requests.pop_front() {
                self.no_result_requests -= 1;
            }
        }
        if !found_any {
            self.no_result_requests += 1;
        }
        self.requests.push_back(found_any);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> SearchServer {
        let mut server = SearchServer::with_stop_words_text("and in at").unwrap();
        server.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
        server.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
        server.add_document(3, "big cat fancy collar ", DocumentStatus::Actual, &[1, 2, 8]).unwrap();
        server.add_document(4, "big dog sparrow Eugene", DocumentStatus::Actual, &[1, 3, 2]).unwrap();
        server.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Actual, &[1, 1, 1]).unwrap();
        server
    }

    #[test]
    fn window_evicts_oldest_requests() {
        let server = server();
        let mut queue = RequestQueue::new(&server);
        for _ in 0..REQUEST_HISTORY_WINDOW - 1 {
            queue.add_find_request("empty request").unwrap();
        }
        assert_eq!(queue.no_result_requests(), REQUEST_HISTORY_WINDOW - 1);

        queue.add_find_request("curly dog").unwrap();
        queue.add_find_request("big collar").unwrap();
        queue.add_find_request("sparrow").unwrap();
        assert_eq!(queue.len(), REQUEST_HISTORY_WINDOW);
        assert_eq!(queue.no_result_requests(), REQUEST_HISTORY_WINDOW - 3);
    }

    #[test]
    fn failed_parse_is_not_recorded() {
        let server = server();
        let mut queue = RequestQueue::new(&server);
        assert!(queue.add_find_request("cat --dog").is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn status_and_predicate_requests_are_recorded() {
        let server = server();
        let mut queue = RequestQueue::new(&server);
        assert!(queue.add_find_request_by_status("cat", DocumentStatus::Banned).unwrap().is_empty());
        assert_eq!(queue.add_find_request_by("dog", |_, _, rating| rating > 1).unwrap().len(), 2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.no_result_requests(), 1);
    }
}
