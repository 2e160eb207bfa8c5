//! Record decoder: [`NormalizedRecord`] → [`Person`].

use persons_core::{Color, Person, PersonId};

use crate::{
  error::{Error, Result},
  normalize::NormalizedRecord,
};

/// Turn one normalised record into a person carrying `id`.
///
/// Fails if the colour code is not an integer or not one of the known codes;
/// the caller skips such records.
pub fn decode(id: PersonId, record: &NormalizedRecord) -> Result<Person> {
  let raw_code = record.color_code.trim();
  let code: i64 = raw_code
    .parse()
    .map_err(|_| Error::ColorCodeNotNumeric(record.color_code.clone()))?;
  let color = Color::from_code(code).ok_or(Error::UnknownColorCode(code))?;

  let (zipcode, city) = split_zipcode_city(&record.zip_city);

  Ok(Person {
    id,
    name: record.name.clone(),
    lastname: record.lastname.clone(),
    zipcode: zipcode.to_owned(),
    city: city.to_owned(),
    color,
  })
}

/// Split "zipcode city" on the first whitespace run. Without whitespace the
/// whole string is the zipcode and the city is empty.
pub fn split_zipcode_city(s: &str) -> (&str, &str) {
  let s = s.trim();
  match s.split_once(char::is_whitespace) {
    Some((zip, city)) => (zip, city.trim()),
    None => (s, ""),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rec(zip_city: &str, color: &str) -> NormalizedRecord {
    NormalizedRecord {
      lastname:   "Müller".into(),
      name:       "Hans".into(),
      zip_city:   zip_city.into(),
      color_code: color.into(),
    }
  }

  #[test]
  fn decodes_valid_record() {
    let p = decode(1, &rec("67742 Lauterecken", "1")).unwrap();
    assert_eq!(p, Person {
      id:       1,
      name:     "Hans".into(),
      lastname: "Müller".into(),
      zipcode:  "67742".into(),
      city:     "Lauterecken".into(),
      color:    Color::Blue,
    });
  }

  #[test]
  fn non_numeric_color_is_rejected() {
    let err = decode(1, &rec("11111 Z", "abc")).unwrap_err();
    assert!(matches!(err, Error::ColorCodeNotNumeric(ref s) if s == "abc"));
  }

  #[test]
  fn out_of_range_color_is_rejected() {
    assert!(matches!(decode(1, &rec("11111 Z", "99")), Err(Error::UnknownColorCode(99))));
    assert!(matches!(decode(1, &rec("11111 Z", "0")), Err(Error::UnknownColorCode(0))));
  }

  #[test]
  fn decode_error_maps_to_invalid_record() {
    let err: persons_core::Error = decode(1, &rec("1 X", "8")).unwrap_err().into();
    assert!(matches!(err, persons_core::Error::InvalidRecord(_)));
  }

  #[test]
  fn zipcode_city_split() {
    assert_eq!(split_zipcode_city("67742 Lauterecken"), ("67742", "Lauterecken"));
    assert_eq!(split_zipcode_city("88888 made up"), ("88888", "made up"));
    assert_eq!(split_zipcode_city("77777 made up too"), ("77777", "made up too"));
    assert_eq!(split_zipcode_city("12345  \t Doppel Leer"), ("12345", "Doppel Leer"));
    assert_eq!(split_zipcode_city("12345"), ("12345", ""));
    assert_eq!(split_zipcode_city(""), ("", ""));
  }
}
