use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::{SharedStore, TrainerStore};
use crate::handlers::trainers::{create_trainer, delete_trainers, get_trainer, list_trainers};

/// Shared state handed to every handler: the injected trainer repository.
#[derive(Clone)]
pub struct TrainerState {
    pub store: SharedStore,
}

impl TrainerState {
    pub fn new(store: impl TrainerStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: SharedStore) -> Self {
        Self { store }
    }
}

pub fn trainer_router(state: TrainerState) -> Router {
    Router::new()
        .route("/trainers", get(list_trainers).delete(delete_trainers))
        .route("/trainer/{name}", get(get_trainer))
        .route("/trainer", post(create_trainer))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
