//! usersvc CLI - runs the users HTTP service
//!
//! Subcommands:
//! - `serve`: connect (with retries), ensure the schema, serve HTTP
//! - `migrate`: connect (with retries), ensure the schema, exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "usersvc",
    author,
    version,
    about = "Users CRUD service over PostgreSQL",
    long_about = "Serves list/get/create/update/delete for a single users table. \
                  DATABASE_URL may be given in the environment or a .env file."
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect, ensure the users table, and serve HTTP until shutdown
    Serve(commands::serve::ServeArgs),

    /// Connect and ensure the users table, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}
