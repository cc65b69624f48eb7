use crate::db::models::Trainer;
use crate::db::store::TrainerStore;
use crate::error::TrainerError;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Process-local trainer store. Insertion order is the listing order.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<(u64, Trainer)>>,
    next_id: std::sync::atomic::AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrainerStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Trainer>, TrainerError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().map(|(_, t)| t.clone()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Trainer>, TrainerError> {
        let rows = self.rows.read().await;
        let found = rows.iter().find(|(_, t)| t.name == name).map(|(_, t)| t.clone());
        debug!(name, found = found.is_some(), "memory lookup");
        Ok(found)
    }

    async fn insert(&self, trainer: &Trainer) -> Result<String, TrainerError> {
        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.rows.write().await.push((id, trainer.clone()));
        info!(id, "Inserted a single document");
        Ok(id.to_string())
    }

    async fn delete_all(&self) -> Result<u64, TrainerError> {
        let mut rows = self.rows.write().await;
        let deleted = rows.len() as u64;
        rows.clear();
        Ok(deleted)
    }
}
