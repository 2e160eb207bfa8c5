//! Source file → persons.

use persons_core::{Person, PersonId};
use tracing::{info, warn};

pub(crate) struct Loaded {
  pub persons: Vec<Person>,
  /// Every normalised record, including the ones that failed to decode.
  pub attempted: usize,
}

impl Loaded {
  /// IDs are positional, so skipped records still use up their ID.
  pub fn next_id(&self) -> PersonId { self.attempted as PersonId + 1 }
}

/// Normalise and decode `source`. Records that fail to decode are logged and
/// skipped; they never abort the load.
pub(crate) fn load(source: &[u8]) -> Loaded {
  let normalized = persons_csv::normalize_bytes(source);
  let attempted = normalized.records.len();

  let mut persons = Vec::with_capacity(attempted);
  for (index, record) in normalized.records.iter().enumerate() {
    let id = index as PersonId + 1;
    match persons_csv::decode(id, record) {
      Ok(person) => persons.push(person),
      Err(e) => warn!(record = id, error = %e, "skipping invalid record"),
    }
  }

  info!(
    loaded = persons.len(),
    skipped = attempted - persons.len(),
    discarded_fragments = normalized.discarded.len(),
    "persons loaded from source"
  );

  Loaded { persons, attempted }
}
