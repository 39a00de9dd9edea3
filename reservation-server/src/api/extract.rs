//! Request body extraction
//!
//! Every write endpoint takes a body of the form `{"data": {...}}`. The
//! payload is handed to the validators as raw JSON so that type and format
//! problems are reported by them, in their order, rather than by serde.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde_json::Value;
use shared::error::ErrorCode;

use crate::utils::AppError;

/// The `data` object of a request body
#[derive(Debug, Clone)]
pub struct DataBody(pub Value);

impl<S> FromRequest<S> for DataBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::invalid_request(e.body_text()))?;

        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data @ Value::Object(_)) => Ok(DataBody(data)),
                _ => Err(missing_data()),
            },
            _ => Err(missing_data()),
        }
    }
}

fn missing_data() -> AppError {
    AppError::with_message(ErrorCode::RequiredField, "A 'data' property is required.")
        .with_detail("field", "data")
}

/// Numeric path id; anything else resolves to `None`
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
