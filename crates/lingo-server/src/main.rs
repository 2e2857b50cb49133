use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lingo_server::{ServerConfig, build_app, http};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "Item store with a read-through translation cache")]
struct Args {
    /// Config file (TOML). Defaults to ./lingo.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `http_bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref()).context("loading config")?;
    if let Some(bind) = args.bind {
        config.http_bind = bind;
    }

    let app = build_app(&config).context("building app")?;

    let listener = tokio::net::TcpListener::bind(config.http_bind)
        .await
        .with_context(|| format!("binding {}", config.http_bind))?;
    info!(addr = %config.http_bind, "lingo listening");

    axum::serve(listener, http::router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("lingo stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
