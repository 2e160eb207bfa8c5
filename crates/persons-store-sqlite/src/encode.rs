//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Colours are stored by canonical name; IDs are SQLite `INTEGER`s (`i64`).

use persons_core::{Color, Page, Person, PersonId};
use rusqlite::types::Value;

use crate::{Error, Result};

pub const SELECT_PERSON: &str = "SELECT id, name, lastname, zipcode, city, color FROM persons";

// ─── Ids ─────────────────────────────────────────────────────────────────────

/// `None` if `id` is beyond what SQLite can store, i.e. cannot exist.
pub fn encode_id(id: PersonId) -> Option<i64> { i64::try_from(id).ok() }

pub fn decode_id(raw: i64) -> Result<PersonId> {
  PersonId::try_from(raw).map_err(|_| Error::CorruptRow(format!("negative id {raw}")))
}

// ─── Color ───────────────────────────────────────────────────────────────────

pub fn encode_color(c: Color) -> &'static str { c.name() }

pub fn decode_color(s: &str) -> Result<Color> {
  s.parse()
    .map_err(|_| Error::CorruptRow(format!("unknown color {s:?}")))
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Render `page` as a trailing SQL clause plus its bound parameters.
///
/// - positive limit: `LIMIT ? OFFSET ?`
/// - no limit, positive offset: `LIMIT -1 OFFSET ?` (SQLite: no cap)
/// - neither: empty
pub fn page_clause(page: Page) -> (&'static str, Vec<Value>) {
  let offset = i64::try_from(page.offset).unwrap_or(i64::MAX);
  match page.limit {
    Some(limit) => {
      let limit = i64::try_from(limit).unwrap_or(i64::MAX);
      (" LIMIT ? OFFSET ?", vec![Value::Integer(limit), Value::Integer(offset)])
    }
    None if offset > 0 => (" LIMIT -1 OFFSET ?", vec![Value::Integer(offset)]),
    None => ("", Vec::new()),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// A `persons` row as read from SQLite, before validation.
pub struct RawPerson {
  pub id:       i64,
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  pub color:    String,
}

impl RawPerson {
  /// Column order matches [`SELECT_PERSON`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawPerson {
      id:       row.get(0)?,
      name:     row.get(1)?,
      lastname: row.get(2)?,
      zipcode:  row.get(3)?,
      city:     row.get(4)?,
      color:    row.get(5)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:       decode_id(self.id)?,
      name:     self.name,
      lastname: self.lastname,
      zipcode:  self.zipcode,
      city:     self.city,
      color:    decode_color(&self.color)?,
    })
  }
}
