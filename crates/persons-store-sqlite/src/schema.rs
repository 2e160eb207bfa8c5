//! SQL schema for the persons SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are append-only: no UPDATE or DELETE is ever issued.
CREATE TABLE IF NOT EXISTS persons (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    lastname TEXT NOT NULL,
    zipcode  TEXT NOT NULL DEFAULT '',
    city     TEXT NOT NULL DEFAULT '',
    color    TEXT NOT NULL    -- canonical colour name, e.g. 'blau'
);

CREATE INDEX IF NOT EXISTS persons_color_idx ON persons(color);
";
