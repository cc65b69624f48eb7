use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::info;

use crate::db::models::Trainer;
use crate::middleware::JsonBody;
use crate::{TrainerError, router::TrainerState};

/// Success envelope for `GET /trainers`.
#[derive(Debug, Serialize)]
pub struct TrainersResponse {
    pub code: u16,
    pub trainers: Vec<Trainer>,
}

/// Success envelope carrying one trainer.
#[derive(Debug, Serialize)]
pub struct TrainerResponse {
    pub code: u16,
    pub trainer: Trainer,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub code: u16,
    pub message: String,
}

pub const ALL_DELETED: &str = "all trainers deleted";

/// GET /trainers
pub async fn list_trainers(
    State(state): State<TrainerState>,
) -> Result<Json<TrainersResponse>, TrainerError> {
    let trainers = state.store.list().await?;
    Ok(Json(TrainersResponse {
        code: StatusCode::OK.as_u16(),
        trainers,
    }))
}

/// GET /trainer/{name}
pub async fn get_trainer(
    State(state): State<TrainerState>,
    Path(name): Path<String>,
) -> Result<Json<TrainerResponse>, TrainerError> {
    let found = state.store.find_by_name(&name).await?;
    let trainer = found.ok_or(TrainerError::NotFound { name })?;
    Ok(Json(TrainerResponse {
        code: StatusCode::OK.as_u16(),
        trainer,
    }))
}

/// POST /trainer
pub async fn create_trainer(
    State(state): State<TrainerState>,
    JsonBody(trainer): JsonBody<Trainer>,
) -> Result<Json<TrainerResponse>, TrainerError> {
    state.store.insert(&trainer).await?;
    Ok(Json(TrainerResponse {
        code: StatusCode::OK.as_u16(),
        trainer,
    }))
}

/// DELETE /trainers
pub async fn delete_trainers(
    State(state): State<TrainerState>,
) -> Result<Json<MessageResponse>, TrainerError> {
    let deleted = state.store.delete_all().await?;
    info!(deleted, "trainers collection cleared");
    Ok(Json(MessageResponse {
        code: StatusCode::OK.as_u16(),
        message: ALL_DELETED.to_string(),
    }))
}
