//! [`MemoryStore`] — the in-memory implementation of [`PersonRepository`].

use std::{path::Path, sync::Arc};

use persons_core::{
  Color, NewPerson, Page, Person, PersonId, PersonRepository, error::at_capacity,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::{Error, Result, load::load};

// ─── Store ───────────────────────────────────────────────────────────────────

struct State {
  /// Ordered by ascending ID; append-only.
  persons: Vec<Person>,
  next_id: PersonId,
}

/// A person store held entirely in memory.
///
/// Reads share a read lock and return copies; [`add`](PersonRepository::add)
/// takes the write lock for the capacity check and the append together.
/// Cloning is cheap — clones share the same state.
#[derive(Clone)]
pub struct MemoryStore {
  state:       Arc<RwLock<State>>,
  max_persons: usize,
}

impl MemoryStore {
  /// An empty store. A `max_persons` of zero means unbounded.
  pub fn new(max_persons: usize) -> Self {
    Self::from_parts(Vec::new(), 1, max_persons)
  }

  /// Build a store from raw source-file content.
  pub fn from_source(source: &[u8], max_persons: usize) -> Self {
    let loaded = load(source);
    let next_id = loaded.next_id();
    Self::from_parts(loaded.persons, next_id, max_persons)
  }

  /// Read the source file at `path` and load it. Fails only if the file
  /// cannot be read; malformed records are skipped.
  pub async fn open(path: impl AsRef<Path>, max_persons: usize) -> Result<Self> {
    let path = path.as_ref();
    let source = tokio::fs::read(path).await.map_err(|source| Error::Read {
      path: path.to_path_buf(),
      source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "reading person source file");
    Ok(Self::from_source(&source, max_persons))
  }

  fn from_parts(persons: Vec<Person>, next_id: PersonId, max_persons: usize) -> Self {
    Self {
      state: Arc::new(RwLock::new(State { persons, next_id })),
      max_persons,
    }
  }

  /// Number of stored persons.
  pub async fn len(&self) -> usize { self.state.read().await.persons.len() }

  pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

// ─── PersonRepository impl ───────────────────────────────────────────────────

impl PersonRepository for MemoryStore {
  type Error = Error;

  async fn get_all(&self, page: Page) -> Result<Vec<Person>> {
    let state = self.state.read().await;
    Ok(page.apply(state.persons.iter().cloned()))
  }

  async fn get_by_id(&self, id: PersonId) -> Result<Person> {
    let state = self.state.read().await;
    state
      .persons
      .binary_search_by_key(&id, |p| p.id)
      .map(|index| state.persons[index].clone())
      .map_err(|_| Error::Core(persons_core::Error::NotFound(id)))
  }

  async fn get_by_color(&self, color: Color, page: Page) -> Result<Vec<Person>> {
    let state = self.state.read().await;
    Ok(page.apply(state.persons.iter().filter(|p| p.color == color).cloned()))
  }

  async fn add(&self, person: NewPerson) -> Result<Person> {
    let mut state = self.state.write().await;

    if at_capacity(self.max_persons, state.persons.len()) {
      return Err(Error::Core(persons_core::Error::CapacityReached {
        max: self.max_persons,
      }));
    }

    let person = person.with_id(state.next_id);
    state.next_id += 1;
    state.persons.push(person.clone());
    Ok(person)
  }
}
