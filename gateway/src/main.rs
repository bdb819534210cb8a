use clap::Parser;
use config::{Config, ConfigError, DatabaseConfig};
use songbook_core::metadata::error::DatabaseError;
use songbook_core::metadata::pool::DbPool;
use thiserror::Error;

mod cli;
mod config;
mod http;
mod seed;
mod tracing;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    ServerError(#[from] http::ServerError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    DatabaseError(#[from] DatabaseError),
    #[error(transparent)]
    SeedError(#[from] seed::SeedError),
}

pub const LOGO: &str = r#"
  ___                  _                _
 / __| ___ _ _  __ _  | |__  ___  ___ | |__
 \__ \/ _ \ ' \/ _` | | '_ \/ _ \/ _ \| / /
 |___/\___/_||_\__, | |_.__/\___/\___/|_\_\
               |___/
"#;

#[actix_web::main]
async fn main() -> Result<(), CliError> {
    dotenv::dotenv().ok();

    let cli = cli::Cli::parse();

    tracing::init_tracing();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Some(cli::Commands::Seed(seed_args)) => {
            cli::commands::seed::handle_seed(config, seed_args)
        }
        Some(cli::Commands::Serve(subcommand_args)) => {
            println!("{LOGO}");
            cli::commands::serve::handle_serve(config, subcommand_args).await
        }
        None => {
            // No command specified, use flattened serve args
            println!("{LOGO}");
            cli::commands::serve::handle_serve(config, cli.serve_args).await
        }
    }
}

/// Opens the catalog pool and brings its schema up to date.
pub fn get_db_pool(database: &DatabaseConfig) -> Result<DbPool, CliError> {
    let db_pool = songbook_core::metadata::pool::establish_connection(
        database.url.clone(),
        database.max_connections,
    )?;

    songbook_core::metadata::utils::init_db(&db_pool)?;

    Ok(db_pool)
}
