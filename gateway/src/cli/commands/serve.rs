use crate::cli::ServeArgs;
use crate::config::Config;
use crate::http::ApiServer;
use crate::seed;
use crate::CliError;

pub async fn handle_serve(config: Config, serve_args: ServeArgs) -> Result<(), CliError> {
    let config = config.apply_cli_overrides(&serve_args);

    let db_pool = crate::get_db_pool(&config.database)?;

    if let Some(csv_path) = &serve_args.seed {
        seed::seed_database(&db_pool, csv_path, false)?;
    }

    let server = ApiServer::new(config, db_pool);
    server.start()?.await?;

    Ok(())
}
