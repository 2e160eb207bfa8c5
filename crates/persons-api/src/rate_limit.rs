//! Global token-bucket rate limiting.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
  extract::{Request, State},
  middleware::Next,
  response::{IntoResponse, Response},
};
use tokio::time::Instant;
use tracing::warn;

use crate::error::ApiError;

struct Bucket {
  tokens: f64,
  last:   Instant,
}

/// Allows `rate` requests per second on average, with bursts of up to
/// `max(rate, 1)` requests.
pub struct RateLimiter {
  rate:   f64,
  burst:  f64,
  bucket: Mutex<Bucket>,
}

impl RateLimiter {
  /// `None` for a non-positive or non-finite rate, i.e. no limiting.
  pub fn new(rate: f64) -> Option<Self> {
    if !rate.is_finite() || rate <= 0.0 {
      return None;
    }
    let burst = rate.max(1.0);
    Some(Self {
      rate,
      burst,
      bucket: Mutex::new(Bucket { tokens: burst, last: Instant::now() }),
    })
  }

  /// Take one token if available.
  pub fn try_acquire(&self) -> bool {
    let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
    let now = Instant::now();
    let elapsed = now.duration_since(bucket.last).as_secs_f64();
    bucket.tokens = (bucket.tokens + elapsed * self.rate).min(self.burst);
    bucket.last = now;

    if bucket.tokens >= 1.0 {
      bucket.tokens -= 1.0;
      true
    } else {
      false
    }
  }
}

/// Middleware for [`axum::middleware::from_fn_with_state`].
pub async fn enforce(
  State(limiter): State<Arc<RateLimiter>>,
  req: Request,
  next: Next,
) -> Response {
  if !limiter.try_acquire() {
    warn!(method = %req.method(), path = %req.uri().path(), "rate limit exceeded");
    return ApiError::TooManyRequests.into_response();
  }
  next.run(req).await
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  #[test]
  fn non_positive_rate_disables_limiting() {
    assert!(RateLimiter::new(0.0).is_none());
    assert!(RateLimiter::new(-3.0).is_none());
    assert!(RateLimiter::new(f64::NAN).is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn burst_then_refill() {
    let limiter = RateLimiter::new(2.0).unwrap();
    assert!(limiter.try_acquire());
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire());

    tokio::time::advance(Duration::from_millis(500)).await;
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire());
  }

  #[tokio::test(start_paused = true)]
  async fn fractional_rate_still_allows_one() {
    let limiter = RateLimiter::new(0.5).unwrap();
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire());

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(limiter.try_acquire());
  }
}
