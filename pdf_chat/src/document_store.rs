use crate::models::DocumentRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory documents keyed by upload filename.
///
/// Records are stored behind `Arc` and replaced whole, so a reader holding a
/// record never sees it change underneath it. Concurrent writers to the same
/// filename race and the last one wins.
#[derive(Debug, Default)]
pub struct DocumentStore {
    records: RwLock<HashMap<String, Arc<DocumentRecord>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, filename: impl Into<String>, record: DocumentRecord) {
        let filename = filename.into();
        let replaced = self
            .records
            .write()
            .await
            .insert(filename.clone(), Arc::new(record))
            .is_some();

        if replaced {
            log::info!("Replaced stored document: {}", filename);
        } else {
            log::info!("Stored new document: {}", filename);
        }
    }

    pub async fn get(&self, filename: &str) -> Option<Arc<DocumentRecord>> {
        self.records.read().await.get(filename).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, topic: &str) -> DocumentRecord {
        DocumentRecord {
            text: text.to_string(),
            topic: topic.to_string(),
            suggestions: vec![format!("{} sorusu", topic)],
        }
    }

    #[tokio::test]
    async fn missing_key_is_absent() {
        let store = DocumentStore::new();
        assert!(store.get("nope.pdf").await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn put_then_get_returns_record() {
        let store = DocumentStore::new();
        store.put("a.pdf", record("metin", "Konu A")).await;

        let stored = store.get("a.pdf").await.unwrap();
        assert_eq!(*stored, record("metin", "Konu A"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn reupload_replaces_whole_record() {
        let store = DocumentStore::new();
        store.put("a.pdf", record("eski", "Eski")).await;
        let before = store.get("a.pdf").await.unwrap();

        store.put("a.pdf", record("yeni", "Yeni")).await;
        let after = store.get("a.pdf").await.unwrap();

        assert_eq!(*after, record("yeni", "Yeni"));
        // a reader that fetched earlier keeps its consistent snapshot
        assert_eq!(*before, record("eski", "Eski"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_writers_leave_one_complete_record() {
        let store = Arc::new(DocumentStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let n = i.to_string();
                store.put("same.pdf", record(&n, &n)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = store.get("same.pdf").await.unwrap();
        assert_eq!(stored.text, stored.topic);
        assert_eq!(stored.suggestions, vec![format!("{} sorusu", stored.topic)]);
    }
}
