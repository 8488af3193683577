//! frontdesk server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! configured record store, and serves the JSON API over HTTP.
//!
//! With no `store_path` configured, records are held in process memory and
//! are lost on restart; point `store_path` at a SQLite file for durability.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use frontdesk_api::{AppState, api_router};
use frontdesk_core::{catalog::Catalog, store::RecordStore};
use frontdesk_notify::{RelayConfig, RelayNotifier};
use frontdesk_store_memory::MemoryStore;
use frontdesk_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "frontdesk HTTP backend")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime configuration, deserialised from `config.toml` plus
/// `FRONTDESK_`-prefixed environment overrides.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host: String,
  #[serde(default = "default_port")]
  port: u16,
  /// SQLite database path. Absent: records live in process memory only.
  store_path: Option<PathBuf>,
  /// Mail relay settings. Absent: notifications report `not_configured`.
  notifier: Option<RelayConfig>,
  #[serde(default)]
  catalog: Catalog,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8700
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

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FRONTDESK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let notifier = RelayNotifier::new(server_cfg.notifier.clone())
    .context("failed to build mail relay client")?;
  if !notifier.is_configured() {
    tracing::info!("mail relay not configured; notifications disabled");
  }

  match server_cfg.store_path.clone() {
    Some(path) => {
      let store = SqliteStore::open(&path)
        .await
        .with_context(|| format!("failed to open store at {path:?}"))?;
      serve(store, notifier, server_cfg).await
    }
    None => {
      tracing::info!("no store_path configured; records are volatile");
      serve(MemoryStore::new(), notifier, server_cfg).await
    }
  }
}

async fn serve<S>(
  store: S,
  notifier: RelayNotifier,
  config: ServerConfig,
) -> anyhow::Result<()>
where
  S: RecordStore + Send + Sync + 'static,
{
  let state = AppState {
    store:    Arc::new(store),
    notifier: Arc::new(notifier),
    catalog:  Arc::new(config.catalog),
  };

  let app = api_router(state).layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", config.host, config.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
