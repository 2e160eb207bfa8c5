//! The person record and its creation input.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Repository-assigned identifier. Positive, unique and strictly increasing
/// in assignment order within one store.
pub type PersonId = u64;

/// A stored person. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:       PersonId,
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  pub color:    Color,
}

/// Input to [`PersonRepository::add`](crate::store::PersonRepository::add).
/// The ID is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  pub name:     String,
  pub lastname: String,
  #[serde(default)]
  pub zipcode:  String,
  #[serde(default)]
  pub city:     String,
  pub color:    Color,
}

impl NewPerson {
  /// Attach a store-assigned ID.
  pub fn with_id(self, id: PersonId) -> Person {
    Person {
      id,
      name: self.name,
      lastname: self.lastname,
      zipcode: self.zipcode,
      city: self.city,
      color: self.color,
    }
  }
}

impl From<Person> for NewPerson {
  fn from(p: Person) -> Self {
    NewPerson {
      name:     p.name,
      lastname: p.lastname,
      zipcode:  p.zipcode,
      city:     p.city,
      color:    p.color,
    }
  }
}
