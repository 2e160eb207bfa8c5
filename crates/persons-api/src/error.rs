//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The store is full; the client may retry later.
  #[error("unavailable: {0}")]
  Unavailable(String),

  #[error("too many requests")]
  TooManyRequests,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<persons_core::Error> for ApiError {
  fn from(e: persons_core::Error) -> Self {
    use persons_core::Error as E;
    match e {
      E::NotFound(_) => ApiError::NotFound(e.to_string()),
      E::InvalidInput(m) | E::InvalidRecord(m) => ApiError::BadRequest(m),
      E::CapacityReached { .. } => ApiError::Unavailable(e.to_string()),
      E::Internal(e) => ApiError::Store(e),
    }
  }
}

/// Convert any backend error through the core taxonomy.
pub fn store_error(e: impl Into<persons_core::Error>) -> ApiError { ApiError::from(e.into()) }

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Unavailable(m) => (StatusCode::SERVICE_UNAVAILABLE, m.clone()),
      ApiError::TooManyRequests => {
        (StatusCode::TOO_MANY_REQUESTS, "too many requests".to_owned())
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
