//! persons-server binary.
//!
//! Reads `persons.toml` (or the path specified with `--config`) plus
//! `PERSONS_*` environment variables, builds the configured store and serves
//! the JSON API over HTTP until Ctrl-C or SIGTERM.

mod config;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use persons_core::PersonRepository;
use persons_store_memory::MemoryStore;
use persons_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{DataSource, ServerConfig};

#[derive(Parser)]
#[command(author, version, about = "Persons HTTP service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "persons.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = ServerConfig::load(&cli.config).context("failed to load configuration")?;
  tracing::info!(
    data_source = ?cfg.data_source,
    csv_file_path = %cfg.csv_file_path.display(),
    sqlite_dsn = %cfg.sqlite_dsn,
    server_addr = %cfg.server_addr,
    rate_limit = cfg.rate_limit,
    max_persons = cfg.max_persons,
    "configuration loaded"
  );

  match cfg.data_source {
    DataSource::Csv => {
      let store = MemoryStore::open(&cfg.csv_file_path, cfg.max_persons)
        .await
        .with_context(|| format!("failed to load {:?}", cfg.csv_file_path))?;
      serve(Arc::new(store), &cfg).await
    }
    DataSource::Sqlite => {
      let store = SqliteStore::open(&cfg.sqlite_dsn, cfg.max_persons)
        .await
        .with_context(|| format!("failed to open sqlite store at {:?}", cfg.sqlite_dsn))?;
      let result = serve(Arc::new(store.clone()), &cfg).await;
      // Closing one clone closes the shared connection.
      if let Err(e) = store.close().await {
        tracing::warn!(error = %e, "failed to close sqlite store");
      }
      result
    }
  }
}

/// Bind, serve the API for `store`, and return once shut down gracefully.
async fn serve<S>(store: Arc<S>, cfg: &ServerConfig) -> anyhow::Result<()>
where
  S: PersonRepository + 'static,
{
  let app = persons_api::app(store, cfg.rate_limit);

  let listener = TcpListener::bind(&cfg.server_addr)
    .await
    .with_context(|| format!("failed to bind {}", cfg.server_addr))?;
  tracing::info!("Listening on http://{}", cfg.server_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
  tracing::info!("shutting down");
}
