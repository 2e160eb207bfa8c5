//! Error types for `persons-core`.
//!
//! This is the closed set of conditions callers of a
//! [`PersonRepository`](crate::store::PersonRepository) can match on. Backend
//! crates carry their own error enums and convert into this one.

use thiserror::Error;

use crate::person::PersonId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found: {0}")]
  NotFound(PersonId),

  #[error("capacity reached: at most {max} persons")]
  CapacityReached { max: usize },

  /// A source record that could not be turned into a [`Person`](crate::Person).
  #[error("invalid record: {0}")]
  InvalidRecord(String),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// Any other backend or I/O failure. Opaque by contract.
  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn internal(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Internal(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Whether a store holding `count` records may not accept another one.
/// A `max` of zero means unbounded.
pub fn at_capacity(max: usize, count: usize) -> bool { max > 0 && count >= max }
