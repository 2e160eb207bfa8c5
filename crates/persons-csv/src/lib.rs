//! Codec for the person source file.
//!
//! The source is comma-separated but not standard CSV: a logical record of
//! four fields (lastname, name, "zipcode city", colour code) may be broken
//! across physical lines. Pure synchronous; no HTTP or database dependencies.
//!
//! # Quick start
//!
//! ```
//! let normalized = persons_csv::normalize("Bart, Bertram, \n12313 Wasweißich, 1\n");
//! let person = persons_csv::decode(1, &normalized.records[0]).unwrap();
//! assert_eq!(person.city, "Wasweißich");
//! ```

mod decode;
mod encode;
pub mod error;
mod normalize;

pub use decode::{decode, split_zipcode_city};
pub use encode::encode;
pub use error::{Error, Result};
pub use normalize::{
  DiscardReason, Discarded, FIELDS, Normalized, NormalizedRecord, normalize,
  normalize_bytes,
};
