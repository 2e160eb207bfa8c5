//! The `PersonRepository` trait.
//!
//! The trait is implemented by storage backends (`persons-store-memory`,
//! `persons-store-sqlite`). Higher layers (`persons-api`, `persons-server`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  color::Color,
  page::Page,
  person::{NewPerson, Person, PersonId},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a person store backend.
///
/// Records are append-only: there is no update or delete. All list results
/// are ordered by ascending ID and then paginated with [`Page`].
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonRepository: Send + Sync {
  /// Backend error. Must convert into the core taxonomy so callers can tell
  /// `NotFound` and `CapacityReached` apart from internal failures.
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Return one page of all persons.
  fn get_all(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Exact match on ID. Fails with `NotFound` if absent.
  fn get_by_id(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Return one page of the persons whose favourite colour is `color`.
  /// Zero matches yield an empty list, never an error.
  fn get_by_color(
    &self,
    color: Color,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Persist a new person under the next sequential ID and return it.
  ///
  /// Fails with `CapacityReached` if the store is configured with a maximum
  /// that is already met. The capacity check and the insert are atomic with
  /// respect to concurrent calls.
  fn add(
    &self,
    person: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;
}
