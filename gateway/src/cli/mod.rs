use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve_args: ServeArgs,
}

#[derive(Debug, Clone, Parser, Default)]
pub struct ServeArgs {
    /// Host address to bind to (e.g., 127.0.0.1 for local or 0.0.0.0 for all interfaces)
    #[arg(long, value_name = "ADDRESS")]
    pub host: Option<String>,

    /// Port to listen on (e.g., 3000)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Comma-separated list of allowed CORS origins (e.g., http://localhost:3000,https://example.com)
    #[arg(long, value_name = "ORIGINS")]
    pub cors_origins: Option<String>,

    /// SQLite database file (e.g., songs.db)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Load this CSV into the catalog before serving if the catalog is empty
    #[arg(long, value_name = "CSV")]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
pub struct SeedArgs {
    /// CSV file with Song, Artist, Writer, Album, Year and monthly play columns
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Load the file even if the catalog already has songs
    #[arg(long)]
    pub force: bool,

    /// SQLite database file (e.g., songs.db)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server (default if no command specified)
    Serve(ServeArgs),
    /// Load songs from a CSV file into the catalog
    Seed(SeedArgs),
}
