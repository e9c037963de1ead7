//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use usersvc_server::http::{run_server, ServerConfig};
use usersvc_server::PgUserStore;

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERSVC_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = args.database.connect_and_migrate().await?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    tracing::info!("Starting usersvc on http://{}", config.bind_addr);

    // Blocks until shutdown
    run_server(PgUserStore::new(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}
