//! PostgreSQL access for the wiki directory.
//!
//! - [`repositories`] -- zero-sized repos over `wiki_list` and `wiki_settings`.
//! - [`directory::PgWikiDirectory`] -- the [`WikiDirectory`] implementation
//!   the API hands to the listing engine.
//!
//! [`WikiDirectory`]: wikifarm_core::directory::WikiDirectory

use sqlx::postgres::PgPoolOptions;

pub mod directory;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Check that the directory tables are readable. Returns the number of live
/// (not deleted) wikis.
pub async fn directory_health(pool: &DbPool) -> Result<i64, sqlx::Error> {
    sqlx::query("SELECT 1 FROM wiki_settings LIMIT 1")
        .fetch_optional(pool)
        .await?;
    repositories::WikiListRepo::count_live(pool).await
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
