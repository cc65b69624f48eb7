use crate::db::models::Trainer;
use crate::error::TrainerError;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository over the trainer collection. Handlers only ever see this
/// trait; the concrete backend is chosen at startup.
#[async_trait]
pub trait TrainerStore: Send + Sync {
    /// Every decodable trainer, in the backend's natural order.
    async fn list(&self) -> Result<Vec<Trainer>, TrainerError>;

    /// First trainer whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<Trainer>, TrainerError>;

    /// Insert a new trainer. Returns the backend-assigned id as text.
    async fn insert(&self, trainer: &Trainer) -> Result<String, TrainerError>;

    /// Remove every trainer. Returns how many were removed.
    async fn delete_all(&self) -> Result<u64, TrainerError>;
}

pub type SharedStore = Arc<dyn TrainerStore>;
