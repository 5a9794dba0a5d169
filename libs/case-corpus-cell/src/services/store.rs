use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::PastCase;

/// Owned handle to the loaded past-case corpus.
///
/// Clones share the same corpus. A load swaps the whole list under the write
/// lock; readers take an `Arc` snapshot, so one request always sees a single
/// complete corpus even while a new upload replaces it.
#[derive(Debug, Clone, Default)]
pub struct CaseCorpusStore {
    cases: Arc<RwLock<Arc<Vec<PastCase>>>>,
}

impl CaseCorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the corpus wholesale and returns the new size.
    pub async fn replace(&self, cases: Vec<PastCase>) -> usize {
        let count = cases.len();
        *self.cases.write().await = Arc::new(cases);
        count
    }

    pub async fn snapshot(&self) -> Arc<Vec<PastCase>> {
        self.cases.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.cases.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(date: &str, diagnosis: &str) -> PastCase {
        PastCase {
            date: date.to_string(),
            diagnosis: vec![diagnosis.to_string()],
            ..PastCase::default()
        }
    }

    #[tokio::test]
    async fn test_replace_is_wholesale() {
        let store = CaseCorpusStore::new();
        assert!(store.is_empty().await);

        store.replace(vec![case("03/01/2024", "Hypertension"), case("03/15/2024", "Diabetes")]).await;
        assert_eq!(store.len().await, 2);

        store.replace(vec![case("04/01/2024", "Asthma")]).await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].diagnosis, vec!["Asthma".to_string()]);
    }

    #[tokio::test]
    async fn test_snapshot_survives_replacement() {
        let store = CaseCorpusStore::new();
        store.replace(vec![case("03/01/2024", "Hypertension")]).await;

        let before = store.snapshot().await;
        store.replace(Vec::new()).await;

        assert_eq!(before.len(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_corpus() {
        let store = CaseCorpusStore::new();
        let reader = store.clone();
        store.replace(vec![case("03/01/2024", "Hypertension")]).await;
        assert_eq!(reader.len().await, 1);
    }
}
