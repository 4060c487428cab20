use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::ConfigLoader;
use roster_engine::store::InMemoryStore;

#[derive(Parser, Debug)]
#[command(name = "roster-engine", version, about = "Employee roster service")]
struct Cli {
    /// Configuration directory containing service.yaml and seed.yaml
    #[arg(long, env = "ROSTER_CONFIG", default_value = "./config/roster")]
    config: PathBuf,

    /// Address to listen on, overriding service.bind
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    let seed = config.seed_employees()?;
    let seeded = seed.len();
    let store = InMemoryStore::seeded(seed).await?;

    let bind = cli.bind.unwrap_or_else(|| config.service().bind.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address {bind}"))?;

    let app = create_router(AppState::new(store));
    let listener = TcpListener::bind(addr).await?;
    info!(
        service = %config.service().name,
        seeded,
        "listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
