//! Pagination shared by every list operation.

/// A normalised `limit`/`offset` pair.
///
/// Results are always ordered by ascending ID before a page is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
  /// `None` means unbounded.
  pub limit:  Option<usize>,
  pub offset: usize,
}

impl Page {
  /// Every record, no offset.
  pub const ALL: Page = Page { limit: None, offset: 0 };

  /// Build a page from raw caller input. A limit of zero or below is
  /// unbounded; a negative offset is clamped to zero.
  pub fn new(limit: i64, offset: i64) -> Self {
    let limit = (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX));
    let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    Self { limit, offset }
  }

  /// Take this page out of an already-ordered sequence.
  pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
    items
      .into_iter()
      .skip(self.offset)
      .take(self.limit.unwrap_or(usize::MAX))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn non_positive_limit_is_unbounded() {
    assert_eq!(Page::new(0, 0).limit, None);
    assert_eq!(Page::new(-5, 0).limit, None);
    assert_eq!(Page::new(3, 0).limit, Some(3));
  }

  #[test]
  fn negative_offset_is_clamped() {
    assert_eq!(Page::new(0, -10).offset, 0);
    assert_eq!(Page::new(0, 4).offset, 4);
  }

  #[test]
  fn apply_matches_min_of_remaining_and_limit() {
    let items: Vec<u32> = (1..=10).collect();
    for limit in 0..12_i64 {
      for offset in 0..12_i64 {
        let page = Page::new(limit, offset).apply(items.iter().copied());
        let remaining = 10usize.saturating_sub(offset as usize);
        let expected_len = if limit == 0 { remaining } else { remaining.min(limit as usize) };
        assert_eq!(page.len(), expected_len, "limit={limit} offset={offset}");
        if let Some(first) = page.first() {
          assert_eq!(*first, offset as u32 + 1);
        }
        assert!(page.windows(2).all(|w| w[0] < w[1]));
      }
    }
  }

  #[test]
  fn offset_past_end_is_empty() {
    assert!(Page::new(5, 100).apply(1..=3).is_empty());
  }
}
