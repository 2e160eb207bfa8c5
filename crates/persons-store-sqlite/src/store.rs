//! [`SqliteStore`] — the SQLite implementation of [`PersonRepository`].

use std::path::Path;

use persons_core::{
  Color, NewPerson, Page, Person, PersonId, PersonRepository, error::at_capacity,
};
use rusqlite::{OptionalExtension as _, TransactionBehavior, types::Value};
use tracing::info;

use crate::{
  Error, Result,
  encode::{RawPerson, SELECT_PERSON, encode_color, encode_id, page_clause},
  schema::SCHEMA,
};

/// Data source name that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Outcome of the capacity-checked insert transaction.
enum Insert {
  Stored(i64),
  Full,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite database.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:        tokio_rusqlite::Connection,
  max_persons: usize,
}

impl SqliteStore {
  /// Open (or create) a store at `dsn` and run schema initialisation.
  /// [`IN_MEMORY`] opens a private in-memory database. A `max_persons` of
  /// zero means unbounded.
  pub async fn open(dsn: impl AsRef<Path>, max_persons: usize) -> Result<Self> {
    let dsn = dsn.as_ref();
    if dsn == Path::new(IN_MEMORY) {
      return Self::open_in_memory(max_persons).await;
    }
    let conn = tokio_rusqlite::Connection::open(dsn).await?;
    let store = Self { conn, max_persons };
    store.init_schema().await?;
    info!(dsn = %dsn.display(), "sqlite store opened");
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory(max_persons: usize) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, max_persons };
    store.init_schema().await?;
    info!("in-memory sqlite store opened");
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Close the underlying connection. Safe to call during shutdown; other
  /// clones of this store fail with a database error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    info!("sqlite store closed");
    Ok(())
  }

  /// Run `SELECT_PERSON` + `filter` + ascending-ID order + `page`.
  async fn query_persons(
    &self,
    filter: &'static str,
    mut args: Vec<Value>,
    page: Page,
  ) -> Result<Vec<Person>> {
    let (page_sql, page_args) = page_clause(page);
    let sql = format!("{SELECT_PERSON}{filter} ORDER BY id{page_sql}");
    args.extend(page_args);

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(args), RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }
}

// ─── PersonRepository impl ───────────────────────────────────────────────────

impl PersonRepository for SqliteStore {
  type Error = Error;

  async fn get_all(&self, page: Page) -> Result<Vec<Person>> {
    self.query_persons("", Vec::new(), page).await
  }

  async fn get_by_id(&self, id: PersonId) -> Result<Person> {
    let not_found = || Error::Core(persons_core::Error::NotFound(id));
    let Some(raw_id) = encode_id(id) else {
      return Err(not_found());
    };

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_PERSON} WHERE id = ?1"),
              rusqlite::params![raw_id],
              RawPerson::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.ok_or_else(not_found)?.into_person()
  }

  async fn get_by_color(&self, color: Color, page: Page) -> Result<Vec<Person>> {
    let args = vec![Value::Text(encode_color(color).to_owned())];
    self.query_persons(" WHERE color = ?", args, page).await
  }

  async fn add(&self, person: NewPerson) -> Result<Person> {
    let max = self.max_persons;
    let name = person.name.clone();
    let lastname = person.lastname.clone();
    let zipcode = person.zipcode.clone();
    let city = person.city.clone();
    let color = encode_color(person.color);

    let outcome = self
      .conn
      .call(move |conn| {
        // IMMEDIATE takes the write lock up front, so the count cannot go
        // stale before the insert. Dropping `tx` without commit rolls back.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if max > 0 {
          let count: i64 = tx.query_row("SELECT COUNT(*) FROM persons", [], |r| r.get(0))?;
          if at_capacity(max, usize::try_from(count).unwrap_or(usize::MAX)) {
            return Ok(Insert::Full);
          }
        }

        tx.execute(
          "INSERT INTO persons (name, lastname, zipcode, city, color)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![name, lastname, zipcode, city, color],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Insert::Stored(id))
      })
      .await?;

    match outcome {
      Insert::Stored(id) => Ok(person.with_id(crate::encode::decode_id(id)?)),
      Insert::Full => Err(Error::Core(persons_core::Error::CapacityReached { max })),
    }
  }
}
