//! Record normaliser.
//!
//! Pipeline:
//!   raw &str
//!     └─ split into physical lines (CRLF folded to LF)
//!          └─ line_tokens()            → trimmed, non-empty fields
//!               └─ Accumulator::feed() → NormalizedRecord once 4+ tokens
//!                    └─ Accumulator::finish() → leftover tokens discarded
//!
//! Never fails. Malformed fragments are dropped, logged and returned in
//! [`Normalized::discarded`].

use tracing::warn;

/// Number of logical fields in one record.
pub const FIELDS: usize = 4;

// ─── Output types ────────────────────────────────────────────────────────────

/// One logical record with exactly four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
  pub lastname:   String,
  pub name:       String,
  /// Combined "zipcode city" field; the decoder splits it.
  pub zip_city:   String,
  pub color_code: String,
}

impl NormalizedRecord {
  /// First token, second token, the middle tokens joined by a single space,
  /// last token. Requires at least [`FIELDS`] tokens.
  fn from_tokens(mut tokens: Vec<String>) -> Self {
    debug_assert!(tokens.len() >= FIELDS);
    let color_code = tokens.pop().unwrap_or_default();
    let mut rest = tokens.into_iter();
    let lastname = rest.next().unwrap_or_default();
    let name = rest.next().unwrap_or_default();
    let zip_city = rest.collect::<Vec<_>>().join(" ");
    Self { lastname, name, zip_city, color_code }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
  /// A partial record was pending when a line arrived that holds a full
  /// record on its own.
  MalformedPredecessor,
  /// Input ended with a partial record pending.
  IncompleteTrailing,
}

/// A fragment the normaliser dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
  pub reason: DiscardReason,
  /// 1-based physical line at which the fragment was dropped.
  pub line:   usize,
  pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
  /// Records in input order.
  pub records:   Vec<NormalizedRecord>,
  pub discarded: Vec<Discarded>,
}

// ─── State machine ───────────────────────────────────────────────────────────

#[derive(Default)]
struct Accumulator {
  tokens: Vec<String>,
  out:    Normalized,
}

impl Accumulator {
  fn feed(&mut self, line_no: usize, tokens: Vec<&str>) {
    // A line that is a whole record by itself starts fresh, so a stray
    // fragment cannot bleed into it.
    if !self.tokens.is_empty() && tokens.len() >= FIELDS {
      self.discard(DiscardReason::MalformedPredecessor, line_no);
    }

    self.tokens.extend(tokens.into_iter().map(str::to_owned));

    if self.tokens.len() >= FIELDS {
      let tokens = std::mem::take(&mut self.tokens);
      self.out.records.push(NormalizedRecord::from_tokens(tokens));
    }
  }

  fn finish(mut self, line_no: usize) -> Normalized {
    if !self.tokens.is_empty() {
      self.discard(DiscardReason::IncompleteTrailing, line_no);
    }
    self.out
  }

  fn discard(&mut self, reason: DiscardReason, line: usize) {
    let fields = std::mem::take(&mut self.tokens);
    match reason {
      DiscardReason::MalformedPredecessor => {
        warn!(line, ?fields, "discarding malformed record before a complete line")
      }
      DiscardReason::IncompleteTrailing => {
        warn!(line, ?fields, "discarding incomplete record at end of input")
      }
    }
    self.out.discarded.push(Discarded { reason, line, fields });
  }
}

fn line_tokens(line: &str) -> Vec<&str> {
  line
    .split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .collect()
}

// ─── Public entry points ─────────────────────────────────────────────────────

/// Normalise raw source text into four-field records.
pub fn normalize(input: &str) -> Normalized {
  let text = input.replace("\r\n", "\n");
  let mut acc = Accumulator::default();
  let mut line_no = 0;

  for line in text.split('\n') {
    line_no += 1;
    acc.feed(line_no, line_tokens(line));
  }

  acc.finish(line_no)
}

/// Like [`normalize`], for raw bytes. Invalid UTF-8 is replaced, not rejected.
pub fn normalize_bytes(input: &[u8]) -> Normalized {
  normalize(&String::from_utf8_lossy(input))
}
