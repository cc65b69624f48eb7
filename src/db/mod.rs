//! Persistence for trainers.
//!
//! Layout:
//! - `models.rs`: `Trainer` and `Credential`
//! - `store.rs`: the `TrainerStore` repository trait
//! - `mongo.rs`: MongoDB connector and store
//! - `memory.rs`: in-process store used by tests

pub mod memory;
pub mod models;
pub mod mongo;
pub mod store;

pub use memory::MemoryStore;
pub use models::{Credential, Trainer};
pub use mongo::MongoStore;
pub use store::{SharedStore, TrainerStore};
