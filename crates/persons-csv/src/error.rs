//! Error types for the persons-csv codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("color code {0:?} is not an integer")]
  ColorCodeNotNumeric(String),

  #[error("unknown color code {0}")]
  UnknownColorCode(i64),

  #[error("field {field:?} cannot be encoded: {reason}")]
  UnencodableField { field: String, reason: &'static str },
}

impl From<Error> for persons_core::Error {
  fn from(e: Error) -> Self { persons_core::Error::InvalidRecord(e.to_string()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
