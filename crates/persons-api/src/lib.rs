//! JSON REST API for the persons service.
//!
//! Exposes an axum [`Router`] backed by any [`PersonRepository`].
//! TLS and process lifecycle are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = persons_api::app(Arc::new(store), config.rate_limit);
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod persons;
pub mod rate_limit;
pub mod validate;

use std::sync::Arc;

use axum::{
  Router, extract::DefaultBodyLimit, middleware, response::IntoResponse as _,
  routing::get,
};
use persons_core::PersonRepository;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use error::ApiError;
use rate_limit::RateLimiter;

/// Request bodies above this size are rejected.
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// Build the bare API router for `store`, without cross-cutting layers.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonRepository + 'static,
{
  Router::new()
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    .route("/persons/{id}", get(persons::get_one::<S>))
    .route("/persons/color/{color}", get(persons::by_color::<S>))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .with_state(store)
}

/// The full application: [`api_router`] plus rate limiting, request tracing
/// and panic recovery. A non-positive `requests_per_second` disables rate
/// limiting.
pub fn app<S>(store: Arc<S>, requests_per_second: f64) -> Router<()>
where
  S: PersonRepository + 'static,
{
  let mut router = api_router(store);
  if let Some(limiter) = RateLimiter::new(requests_per_second) {
    router = router.layer(middleware::from_fn_with_state(
      Arc::new(limiter),
      rate_limit::enforce,
    ));
  }
  router
    .layer(TraceLayer::new_for_http())
    .layer(CatchPanicLayer::custom(|_| {
      ApiError::Store("handler panicked".into()).into_response()
    }))
}
