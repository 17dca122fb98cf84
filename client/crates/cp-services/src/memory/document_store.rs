use crate::{Document, DocumentStore, ServiceError, ServiceResult, WriteMode};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

type DocumentKey = (String, String);

/// Document store backed by a map, with fault injection for writes and
/// optional artificial read and write latency.
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<DocumentKey, Document>>,
    failing_writes: AtomicUsize,
    read_delay: Mutex<Option<Duration>>,
    write_delay: Mutex<Option<Duration>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            failing_writes: AtomicUsize::new(0),
            read_delay: Mutex::new(None),
            write_delay: Mutex::new(None),
        }
    }

    /// Make the next `count` writes fail with an unavailable error.
    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    /// Delay every read by `delay` before it looks at the map.
    pub fn set_read_delay(&self, delay: Option<Duration>) {
        *self
            .read_delay
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = delay;
    }

    /// Delay every write by `delay` before it touches the map.
    pub fn set_write_delay(&self, delay: Option<Duration>) {
        *self
            .write_delay
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = delay;
    }

    pub fn len(&self) -> usize {
        self.lock_documents().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn wait(delay: &Mutex<Option<Duration>>) {
        let delay = *delay.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn take_write_fault(&self) -> bool {
        self.failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn lock_documents(&self) -> std::sync::MutexGuard<'_, HashMap<DocumentKey, Document>> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn write(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        mode: WriteMode,
    ) -> ServiceResult<()> {
        Self::wait(&self.write_delay).await;

        if self.take_write_fault() {
            return Err(ServiceError::unavailable("UNAVAILABLE: injected write failure"));
        }

        let key = (collection.to_string(), id.to_string());
        let mut documents = self.lock_documents();

        match mode {
            WriteMode::Create => {
                documents.insert(key, fields);
            }
            WriteMode::Merge if fields.is_empty() => return Ok(()),
            WriteMode::Merge => {
                let document = documents.entry(key).or_default();
                for (field, value) in fields {
                    document.insert(field, value);
                }
            }
        }

        debug!("Wrote {collection}/{id} ({mode:?})");
        Ok(())
    }

    async fn read(&self, collection: &str, id: &str) -> ServiceResult<Option<Document>> {
        Self::wait(&self.read_delay).await;

        let key = (collection.to_string(), id.to_string());
        Ok(self.lock_documents().get(&key).cloned())
    }
}
