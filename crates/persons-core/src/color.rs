//! The closed set of favourite colours.
//!
//! Source files carry a numeric code (1–7); everything past the decoder deals
//! only in [`Color`], which serialises as its canonical lowercase name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
  #[serde(rename = "blau")]
  Blue,
  #[serde(rename = "grün")]
  Green,
  #[serde(rename = "violett")]
  Violet,
  #[serde(rename = "rot")]
  Red,
  #[serde(rename = "gelb")]
  Yellow,
  #[serde(rename = "türkis")]
  Turquoise,
  #[serde(rename = "weiß")]
  White,
}

impl Color {
  pub const ALL: [Color; 7] = [
    Color::Blue,
    Color::Green,
    Color::Violet,
    Color::Red,
    Color::Yellow,
    Color::Turquoise,
    Color::White,
  ];

  /// Look up a colour by its source-file code.
  pub fn from_code(code: i64) -> Option<Self> {
    match code {
      1 => Some(Self::Blue),
      2 => Some(Self::Green),
      3 => Some(Self::Violet),
      4 => Some(Self::Red),
      5 => Some(Self::Yellow),
      6 => Some(Self::Turquoise),
      7 => Some(Self::White),
      _ => None,
    }
  }

  pub fn code(self) -> u8 {
    match self {
      Self::Blue => 1,
      Self::Green => 2,
      Self::Violet => 3,
      Self::Red => 4,
      Self::Yellow => 5,
      Self::Turquoise => 6,
      Self::White => 7,
    }
  }

  /// The canonical lowercase name, as stored and served.
  pub fn name(self) -> &'static str {
    match self {
      Self::Blue => "blau",
      Self::Green => "grün",
      Self::Violet => "violett",
      Self::Red => "rot",
      Self::Yellow => "gelb",
      Self::Turquoise => "türkis",
      Self::White => "weiß",
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Accepts a colour name in any case, with surrounding whitespace.
impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    Self::ALL
      .into_iter()
      .find(|c| c.name() == wanted)
      .ok_or_else(|| Error::InvalidInput(format!("unknown color {s:?}")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_map_to_names() {
    assert_eq!(Color::from_code(1), Some(Color::Blue));
    assert_eq!(Color::from_code(7).map(Color::name), Some("weiß"));
    assert_eq!(Color::from_code(0), None);
    assert_eq!(Color::from_code(8), None);
    assert_eq!(Color::from_code(-1), None);
  }

  #[test]
  fn code_is_inverse_of_from_code() {
    for c in Color::ALL {
      assert_eq!(Color::from_code(i64::from(c.code())), Some(c));
    }
  }

  #[test]
  fn parse_is_case_insensitive_and_trims() {
    assert_eq!("Grün".parse::<Color>().unwrap(), Color::Green);
    assert_eq!("  WEISS ".parse::<Color>().ok(), None);
    assert_eq!(" weiß ".parse::<Color>().unwrap(), Color::White);
    assert!(matches!("pink".parse::<Color>(), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn serialises_as_name() {
    let json = serde_json::to_string(&Color::Turquoise).unwrap();
    assert_eq!(json, "\"türkis\"");
    let back: Color = serde_json::from_str("\"violett\"").unwrap();
    assert_eq!(back, Color::Violet);
  }
}
