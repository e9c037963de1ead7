//! Schema-only command, for running ahead of a deploy

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect_and_migrate().await?;
    pool.close().await;

    tracing::info!("users table is ready");
    Ok(())
}
