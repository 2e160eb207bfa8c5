//! Runtime configuration: optional TOML file, overridden by `PERSONS_*`
//! environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Which backend serves the persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
  /// In-memory store loaded from `csv_file_path`.
  Csv,
  /// SQLite store at `sqlite_dsn`.
  Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub server_addr:   String,
  pub data_source:   DataSource,
  pub csv_file_path: PathBuf,
  pub sqlite_dsn:    String,
  /// Requests per second; zero or below disables rate limiting.
  pub rate_limit:    f64,
  /// Zero means unbounded.
  pub max_persons:   usize,
}

impl ServerConfig {
  /// Load from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::builder(path)?
      .add_source(config::Environment::with_prefix("PERSONS"))
      .build()?
      .try_deserialize()
  }

  fn builder(
    path: &Path,
  ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    Ok(
      config::Config::builder()
        .set_default("server_addr", "0.0.0.0:8081")?
        .set_default("data_source", "csv")?
        .set_default("csv_file_path", "sample-input.csv")?
        .set_default("sqlite_dsn", ":memory:")?
        .set_default("rate_limit", 100.0)?
        .set_default("max_persons", 10_000_i64)?
        .add_source(config::File::from(path).required(false)),
    )
  }
}
