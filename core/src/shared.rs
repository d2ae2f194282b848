//! Lock-guarded handle for hosts that query from several threads.
//!
//! The server's three maps are only consistent between operations, so queries
//! take the read lock and every mutation takes the write lock.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::dedup;
use crate::error::Result;
use crate::server::SearchServer;
use crate::{DocId, Document, DocumentStatus, Rating};

#[derive(Debug, Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self {
        Self { inner: Arc::new(RwLock::new(server)) }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SearchServer> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, SearchServer> {
        self.inner.write()
    }

    pub fn add_document(
        &self,
        document_id: DocId,
        document: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        self.inner.write().add_document(document_id, document, status, ratings)
    }

    pub fn remove_document(&self, document_id: DocId) {
        self.inner.write().remove_document(document_id);
    }

    pub fn remove_duplicates(&self) -> Vec<DocId> {
        dedup::remove_duplicates(&mut self.inner.write())
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }
}

impl From<SearchServer> for SharedSearchServer {
    fn from(server: SearchServer) -> Self {
        Self::new(server)
    }
}
