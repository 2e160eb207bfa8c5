//! Integration tests for `SqliteStore` against an in-memory database.

use persons_core::{Color, NewPerson, Page, PersonRepository};

use crate::{Error, IN_MEMORY, SqliteStore};

async fn store(max_persons: usize) -> SqliteStore {
  SqliteStore::open_in_memory(max_persons)
    .await
    .expect("in-memory store")
}

fn new_person(name: &str, color: Color) -> NewPerson {
  NewPerson {
    name:     name.into(),
    lastname: "Müller".into(),
    zipcode:  "67742".into(),
    city:     "Lauterecken".into(),
    color,
  }
}

/// Seed with ten persons, cycling through the first three colours.
async fn seeded() -> SqliteStore {
  let s = store(0).await;
  let colors = [Color::Blue, Color::Green, Color::Violet];
  for i in 0..10 {
    s.add(new_person(&format!("P{}", i + 1), colors[i % 3]))
      .await
      .unwrap();
  }
  s
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn open_memory_dsn() {
  let s = SqliteStore::open(IN_MEMORY, 0).await.unwrap();
  assert!(s.get_all(Page::ALL).await.unwrap().is_empty());
}

#[tokio::test]
async fn schema_init_is_idempotent() {
  let s = store(0).await;
  s.init_schema().await.unwrap();
  s.add(new_person("Hans", Color::Blue)).await.unwrap();
  s.init_schema().await.unwrap();
  assert_eq!(s.get_all(Page::ALL).await.unwrap().len(), 1);
}

#[tokio::test]
async fn file_database_persists_across_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("persons.db");

  let s = SqliteStore::open(&path, 0).await.unwrap();
  s.add(new_person("Hans", Color::Red)).await.unwrap();
  s.close().await.unwrap();

  let s = SqliteStore::open(&path, 0).await.unwrap();
  let all = s.get_all(Page::ALL).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].color, Color::Red);
  s.close().await.unwrap();
}

// ─── Add and read back ───────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_by_id() {
  let s = store(0).await;
  let added = s.add(new_person("Hans", Color::Turquoise)).await.unwrap();
  assert_eq!(added.id, 1);

  let fetched = s.get_by_id(added.id).await.unwrap();
  assert_eq!(fetched, added);
  assert_eq!(fetched.color.name(), "türkis");
}

#[tokio::test]
async fn ids_increase() {
  let s = store(0).await;
  let a = s.add(new_person("A", Color::Blue)).await.unwrap();
  let b = s.add(new_person("B", Color::Blue)).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn empty_zipcode_and_city_are_stored() {
  let s = store(0).await;
  let mut input = new_person("Ohne", Color::Yellow);
  input.zipcode = String::new();
  input.city = String::new();
  let added = s.add(input).await.unwrap();
  let fetched = s.get_by_id(added.id).await.unwrap();
  assert_eq!(fetched.zipcode, "");
  assert_eq!(fetched.city, "");
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
  let s = seeded().await;
  let err: persons_core::Error = s.get_by_id(999).await.unwrap_err().into();
  assert!(matches!(err, persons_core::Error::NotFound(999)));

  let err: persons_core::Error = s.get_by_id(u64::MAX).await.unwrap_err().into();
  assert!(matches!(err, persons_core::Error::NotFound(_)));
}

// ─── Listing and pagination ──────────────────────────────────────────────────

#[tokio::test]
async fn get_all_is_ordered_and_paginated() {
  let s = seeded().await;

  let all = s.get_all(Page::ALL).await.unwrap();
  let ids: Vec<_> = all.iter().map(|p| p.id).collect();
  assert_eq!(ids, (1..=10).collect::<Vec<_>>());

  let ids: Vec<_> = s
    .get_all(Page::new(3, 2))
    .await
    .unwrap()
    .iter()
    .map(|p| p.id)
    .collect();
  assert_eq!(ids, vec![3, 4, 5]);

  assert_eq!(s.get_all(Page::new(0, 7)).await.unwrap().len(), 3);
  assert_eq!(s.get_all(Page::new(4, -3)).await.unwrap().len(), 4);
  assert!(s.get_all(Page::new(2, 10)).await.unwrap().is_empty());
  assert!(s.get_all(Page::new(0, 50)).await.unwrap().is_empty());
}

#[tokio::test]
async fn pagination_matches_in_memory_slicing() {
  let s = seeded().await;
  let all = s.get_all(Page::ALL).await.unwrap();
  for limit in 0..12 {
    for offset in 0..12 {
      let page = Page::new(limit, offset);
      let got = s.get_all(page).await.unwrap();
      assert_eq!(got, page.apply(all.iter().cloned()), "limit={limit} offset={offset}");
    }
  }
}

#[tokio::test]
async fn get_by_color_filters_and_paginates() {
  let s = seeded().await;

  let blue = s.get_by_color(Color::Blue, Page::ALL).await.unwrap();
  let ids: Vec<_> = blue.iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![1, 4, 7, 10]);

  let page = s.get_by_color(Color::Blue, Page::new(2, 1)).await.unwrap();
  let ids: Vec<_> = page.iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![4, 7]);

  let page = s.get_by_color(Color::Blue, Page::new(0, 3)).await.unwrap();
  assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn get_by_color_without_matches_is_empty() {
  let s = seeded().await;
  let white = s.get_by_color(Color::White, Page::ALL).await.unwrap();
  assert!(white.is_empty());
}

// ─── Capacity ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_fails_at_capacity() {
  let s = store(2).await;
  s.add(new_person("A", Color::Red)).await.unwrap();
  s.add(new_person("B", Color::Red)).await.unwrap();

  let err = s.add(new_person("C", Color::Red)).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(persons_core::Error::CapacityReached { max: 2 })
  ));
  assert_eq!(s.get_all(Page::ALL).await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_respect_capacity() {
  const MAX: usize = 4;
  let s = store(MAX).await;

  let handles: Vec<_> = (0..16)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move { s.add(new_person(&format!("P{i}"), Color::Green)).await })
    })
    .collect();

  let mut ok = 0;
  let mut full = 0;
  for h in handles {
    match h.await.unwrap() {
      Ok(_) => ok += 1,
      Err(Error::Core(persons_core::Error::CapacityReached { .. })) => full += 1,
      Err(e) => panic!("unexpected error: {e}"),
    }
  }

  assert_eq!(ok, MAX);
  assert_eq!(full, 16 - MAX);
  assert_eq!(s.get_all(Page::ALL).await.unwrap().len(), MAX);
}

// ─── Close ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn operations_after_close_fail_as_internal() {
  let s = store(0).await;
  let other = s.clone();
  s.close().await.unwrap();

  let err: persons_core::Error = other.get_all(Page::ALL).await.unwrap_err().into();
  assert!(matches!(err, persons_core::Error::Internal(_)));
}
