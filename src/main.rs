use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use casting_agency_api::{
    app,
    auth::{RemoteJwks, TokenValidator},
    config::AppConfig,
    database::{seed_sample_data, PgStore, Store},
    AppState,
};

#[derive(Parser)]
#[command(name = "casting-agency", version, about = "Casting agency REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Create the database tables")]
    InitDb {
        #[arg(long, help = "Drop existing tables and their data first")]
        drop: bool,
    },

    #[command(about = "Insert a sample actor, movie and performance")]
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, AUTH0_DOMAIN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    tracing::info!("Starting casting agency API in {:?} mode", config.environment);

    let store = PgStore::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config, store.clone()).await,
        Commands::InitDb { drop } => init_db(&store, drop).await,
        Commands::Seed => seed(&store).await,
    };

    store.close().await;
    result
}

async fn serve(config: &AppConfig, store: PgStore) -> anyhow::Result<()> {
    store.create_schema().await.context("failed to create schema")?;

    let jwks_url = config
        .auth
        .jwks_url()
        .context("invalid signing key set URL")?;
    tracing::info!("Verifying bearer tokens against {}", jwks_url);

    let validator = TokenValidator::new(&config.auth, Arc::new(RemoteJwks::new(jwks_url)));
    let state = AppState::new(Arc::new(store), Arc::new(validator), config.api.rows_per_page);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Casting agency API listening on http://{}", bind_addr);
    axum::serve(listener, app(state)).await.context("server error")
}

async fn init_db(store: &PgStore, drop: bool) -> anyhow::Result<()> {
    if drop {
        store.drop_schema().await.context("failed to drop schema")?;
    }
    store.create_schema().await.context("failed to create schema")?;
    Ok(())
}

async fn seed(store: &PgStore) -> anyhow::Result<()> {
    store.create_schema().await.context("failed to create schema")?;
    let (actor, movie) = seed_sample_data(store)
        .await
        .context("failed to seed sample data")?;
    println!("Seeded actor {} and movie {}", actor.id, movie.id);
    Ok(())
}
