//! Error type for `persons-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] persons_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A stored row that does not map back onto a person.
  #[error("corrupt row: {0}")]
  CorruptRow(String),
}

impl From<Error> for persons_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(e) => e,
      other => persons_core::Error::internal(other),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
