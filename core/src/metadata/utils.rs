use crate::metadata::error::DatabaseError;
use crate::metadata::pool::DbPool;
use crate::metadata::DB;
use ::tracing::info;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./sqlite_migrations");

pub fn init_db(db_pool: &DbPool) -> Result<(), DatabaseError> {
    let mut db_connection = db_pool.get()?;
    run_migrations(&mut db_connection)
}

fn run_migrations(connection: &mut impl MigrationHarness<DB>) -> Result<(), DatabaseError> {
    info!("Running migrations");
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations complete");
    Ok(())
}
