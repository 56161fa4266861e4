use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// Bounded pool shared by every request. Callers beyond `db_max_connections` wait in
/// line for a free connection, up to `db_acquire_timeout`.
pub async fn connection_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
	PgPoolOptions::new()
		.max_connections(config.db_max_connections)
		.acquire_timeout(config.db_acquire_timeout)
		.connect(&config.database_url)
		.await
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
	sqlx::migrate!("./migrations").run(pool).await
}
