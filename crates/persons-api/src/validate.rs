//! Input rules for creating a person.
//!
//! Lengths count Unicode scalar values, not bytes.

use persons_core::{Color, Error, NewPerson, Result};
use serde::Deserialize;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 255;
const ZIPCODE_MAX_LEN: usize = 5;
const CITY_MIN_LEN: usize = 2;
const CITY_MAX_LEN: usize = 255;

/// JSON body accepted by `POST /persons`. An `id` field, if sent, is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewPersonBody {
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  /// Colour name, any case.
  pub color:    String,
}

/// Trim every field, check lengths and resolve the colour name.
pub fn new_person(body: NewPersonBody) -> Result<NewPerson> {
  let name = body.name.trim().to_owned();
  let lastname = body.lastname.trim().to_owned();
  let zipcode = body.zipcode.trim().to_owned();
  let city = body.city.trim().to_owned();

  check_length("name", &name, NAME_MIN_LEN, NAME_MAX_LEN)?;
  check_length("lastname", &lastname, NAME_MIN_LEN, NAME_MAX_LEN)?;
  if zipcode.is_empty() {
    return Err(Error::InvalidInput("zipcode is required".into()));
  }
  if zipcode.chars().count() > ZIPCODE_MAX_LEN {
    return Err(Error::InvalidInput(format!(
      "zipcode must be at most {ZIPCODE_MAX_LEN} characters"
    )));
  }
  check_length("city", &city, CITY_MIN_LEN, CITY_MAX_LEN)?;

  let color: Color = body.color.parse()?;

  Ok(NewPerson { name, lastname, zipcode, city, color })
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
  let n = value.chars().count();
  if n < min {
    return Err(Error::InvalidInput(format!(
      "{field} must be at least {min} characters"
    )));
  }
  if n > max {
    return Err(Error::InvalidInput(format!(
      "{field} must be at most {max} characters"
    )));
  }
  Ok(())
}
