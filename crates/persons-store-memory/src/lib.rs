//! In-memory backend for the persons service.
//!
//! Loaded once from a source file at startup (see [`persons_csv`]); never
//! written back to disk.

mod load;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
