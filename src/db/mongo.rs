use crate::config::Config;
use crate::db::models::Trainer;
use crate::db::store::TrainerStore;
use crate::error::TrainerError;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{self, Document, doc},
};
use tracing::{debug, error, info, warn};

/// Trainer repository backed by a single MongoDB collection.
#[derive(Clone)]
pub struct MongoStore {
    docs: Collection<Document>,
    trainers: Collection<Trainer>,
}

impl MongoStore {
    /// Connect using the configured credentials and verify the server
    /// answers a ping before handing out the collection.
    pub async fn connect(cfg: &Config) -> Result<Self, TrainerError> {
        let client = Client::with_uri_str(cfg.connection_uri()).await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        info!(host = %cfg.credential.host, "Connected to MongoDB!");

        let docs = client
            .database(&cfg.settings.database)
            .collection::<Document>(&cfg.settings.collection);
        Ok(Self::new(docs))
    }

    pub fn new(docs: Collection<Document>) -> Self {
        let trainers = docs.clone_with_type::<Trainer>();
        Self { docs, trainers }
    }
}

#[async_trait]
impl TrainerStore for MongoStore {
    async fn list(&self) -> Result<Vec<Trainer>, TrainerError> {
        let mut cursor = self.docs.find(doc! {}).await.inspect_err(log_db_error)?;

        let mut raw = Vec::new();
        while let Some(doc) = cursor.try_next().await.inspect_err(log_db_error)? {
            raw.push(doc);
        }
        let results = decode_trainers(raw);

        debug!(count = results.len(), trainers = ?results, "Found multiple documents");
        Ok(results)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Trainer>, TrainerError> {
        let found = self
            .trainers
            .find_one(doc! { "name": name })
            .await
            .inspect_err(log_db_error)?;
        if let Some(trainer) = found.as_ref() {
            debug!(trainer = ?trainer, "Found a single document");
        }
        Ok(found)
    }

    async fn insert(&self, trainer: &Trainer) -> Result<String, TrainerError> {
        let res = self
            .trainers
            .insert_one(trainer)
            .await
            .inspect_err(log_db_error)?;
        let id = match res.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => res.inserted_id.to_string(),
        };
        info!(id = %id, "Inserted a single document");
        Ok(id)
    }

    async fn delete_all(&self) -> Result<u64, TrainerError> {
        let res = self
            .docs
            .delete_many(doc! {})
            .await
            .inspect_err(log_db_error)?;
        info!(
            deleted = res.deleted_count,
            "Deleted documents in the trainers collection"
        );
        Ok(res.deleted_count)
    }
}

/// Decode listed documents, skipping (and logging) any that are not
/// trainers so one bad document cannot sink the whole listing.
pub(crate) fn decode_trainers(docs: impl IntoIterator<Item = Document>) -> Vec<Trainer> {
    docs.into_iter()
        .filter_map(|raw| {
            let id = raw.get("_id").map(ToString::to_string);
            bson::from_document::<Trainer>(raw)
                .inspect_err(|e| {
                    warn!(
                        id = id.as_deref().unwrap_or("<none>"),
                        error = %e,
                        "[MongoDB] skipping undecodable trainer document"
                    );
                })
                .ok()
        })
        .collect()
}

fn log_db_error(e: &mongodb::error::Error) {
    error!(error = %e, "[MongoDB] Error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn undecodable_documents_are_skipped() {
        let docs = vec![
            doc! { "_id": ObjectId::new(), "name": "Ash", "age": 10_i32, "city": "Pallet Town" },
            doc! { "_id": ObjectId::new(), "name": "Brock", "age": "x", "city": "Pewter City" },
            doc! { "_id": ObjectId::new(), "name": "Misty", "city": "Cerulean City" },
        ];

        let trainers = decode_trainers(docs);
        let names: Vec<_> = trainers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Ash", "Misty"]);
        assert_eq!(trainers[1].age, 0);
    }

    #[test]
    fn empty_listing_decodes_to_nothing() {
        assert!(decode_trainers(Vec::new()).is_empty());
    }
}
