//! Fakturownia MCP gateway entry point.

use anyhow::Result;
use clap::Parser;
use fakturownia_core::Config;
use fakturownia_mcp::{app, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fakturownia-server",
    about = "JSON-RPC / MCP gateway for the Fakturownia.pl invoicing API",
    version
)]
struct Cli {
    /// Host and port to bind
    #[arg(long, env = "FAKTUROWNIA_HTTP_ADDR", default_value = "127.0.0.1:8080")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    if config.domain.is_empty() || config.api_token.is_empty() {
        info!("no default credentials configured; callers must pass domain/api_token arguments");
    }

    let router = app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&cli.addr).await?;
    info!("listening on {}", cli.addr);
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
