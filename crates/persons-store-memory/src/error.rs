//! Error type for `persons-store-memory`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] persons_core::Error),

  #[error("failed to read source file {path:?}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
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
