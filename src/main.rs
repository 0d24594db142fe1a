use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use newsearch::app::{self, AppState};
use newsearch::config::{load_root_words, AppConfig, Backend};
use newsearch::db::repository::{DocumentStore, MongoDocumentStore};
use newsearch::db::snapshot::SnapshotDocumentStore;

/// TF-IDF news search API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (toml, yaml or json). Defaults to `newsearch.*` in
    /// the working directory when present.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsearch=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Failed to start application: {e:#}");
        return Err(e);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::info!("Starting newsearch server...");

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let store: Box<dyn DocumentStore> = match config.backend {
        Backend::Snapshot => {
            let paths = config.snapshot.paths();
            tracing::info!(?paths, "Using snapshot backend");
            Box::new(
                SnapshotDocumentStore::open(&paths)
                    .await
                    .context("reading snapshot files")?,
            )
        }
        Backend::Mongo => {
            tracing::info!(
                uri = %config.mongo.uri,
                database = %config.mongo.database,
                "Using MongoDB backend"
            );
            Box::new(
                MongoDocumentStore::connect(
                    &config.mongo.uri,
                    &config.mongo.database,
                    config.mongo.collection_names(),
                )
                .await
                .context("connecting to MongoDB")?,
            )
        }
    };

    let extra_roots = match &config.stemmer.dictionary_path {
        Some(path) => load_root_words(path)
            .await
            .context("reading stemmer dictionary")?,
        None => Vec::new(),
    };

    let state = AppState::initialize(store, extra_roots)
        .await
        .context("initializing search index")?;

    let router = app::router(state);

    tracing::info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    axum::serve(listener, router.into_make_service())
        .await
        .context("serving HTTP")?;

    Ok(())
}
