use crate::cli::SeedArgs;
use crate::config::Config;
use crate::seed;
use crate::CliError;
use ::tracing::info;

pub fn handle_seed(mut config: Config, args: SeedArgs) -> Result<(), CliError> {
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let db_pool = crate::get_db_pool(&config.database)?;
    let inserted = seed::seed_database(&db_pool, &args.path, args.force)?;

    info!(
        "Seeded {} songs from {} into {}",
        inserted,
        args.path.display(),
        config.database.url
    );

    Ok(())
}
