//! Core types and trait definitions for the persons service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod color;
pub mod error;
pub mod page;
pub mod person;
pub mod store;

pub use color::Color;
pub use error::{Error, Result};
pub use page::Page;
pub use person::{NewPerson, Person, PersonId};
pub use store::PersonRepository;
