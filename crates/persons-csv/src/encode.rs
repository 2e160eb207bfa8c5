//! Record encoder: [`Person`] → one source-file line.
//!
//! Output is accepted by [`normalize`](crate::normalize) and
//! [`decode`](crate::decode), which reproduce every field except the ID.

use persons_core::Person;

use crate::error::{Error, Result};

/// Render `person` as `lastname, name, zipcode city, code\n`.
///
/// Only values that read back unchanged are accepted. Rejected are fields
/// with a comma or line break, fields with surrounding whitespace (the
/// normaliser trims tokens), an empty name, lastname or zipcode, and a
/// zipcode containing whitespace (the first whitespace ends it).
pub fn encode(person: &Person) -> Result<String> {
  let reject = |field: &String, reason: &'static str| -> Result<String> {
    Err(Error::UnencodableField { field: field.clone(), reason })
  };

  for field in [&person.lastname, &person.name, &person.zipcode, &person.city] {
    if field.contains([',', '\n', '\r']) {
      return reject(field, "contains a comma or line break");
    }
    if field.trim() != field.as_str() {
      return reject(field, "has leading or trailing whitespace");
    }
  }
  for field in [&person.lastname, &person.name, &person.zipcode] {
    if field.is_empty() {
      return reject(field, "must not be empty");
    }
  }
  if person.zipcode.contains(char::is_whitespace) {
    return reject(&person.zipcode, "zipcode contains whitespace");
  }

  let zip_city = if person.city.is_empty() {
    person.zipcode.clone()
  } else {
    format!("{} {}", person.zipcode, person.city)
  };

  Ok(format!(
    "{}, {}, {}, {}\n",
    person.lastname,
    person.name,
    zip_city,
    person.color.code()
  ))
}
