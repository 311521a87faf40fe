pub mod application;
pub mod domain;
pub mod infrastructure;
mod schema;
pub mod shared;

pub use shared::errors::{AppError, AppResult};

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Bring the catalog schema up to date. The host process calls this once
/// at startup, before any repository is constructed.
pub fn run_migrations(conn: &mut diesel::pg::PgConnection) -> AppResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?;
    Ok(())
}
