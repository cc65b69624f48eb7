use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TrainerError;

/// JSON body extractor whose rejection is the generic `binding json error`
/// envelope, whatever went wrong (syntax, field types, unreadable body).
///
/// The `Content-Type` header is not consulted; only the bytes are decoded.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = TrainerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(reason = %rejection.body_text(), "failed to read request body");
            TrainerError::InvalidBody
        })?;
        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "rejecting request body");
                Err(TrainerError::InvalidBody)
            }
        }
    }
}
