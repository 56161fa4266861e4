use std::sync::Arc;

use crate::{
	adapters::{
		repositories::{PostRepository, TPostRepository},
		uploader::{CloudinaryUploader, TImageUploader},
	},
	config::Config,
	database,
};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
	#[error("database connection failed: {0}")]
	Database(#[from] sqlx::Error),
	#[error("migration failed: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),
	#[error("image uploader setup failed: {0}")]
	Uploader(#[from] crate::adapters::uploader::UploadError),
	#[error("server io error: {0}")]
	Io(#[from] std::io::Error),
}

/// Process-lifetime handles passed into every handler as router state.
#[derive(Clone)]
pub struct Dependency {
	pub repository: Arc<dyn TPostRepository>,
	pub uploader: Arc<dyn TImageUploader>,
}

impl Dependency {
	pub fn new(
		repository: Arc<dyn TPostRepository>,
		uploader: Arc<dyn TImageUploader>,
	) -> Self {
		Self { repository, uploader }
	}

	/// Connects the pool, applies pending migrations and builds the image uploader.
	pub async fn init(config: &Config) -> Result<Self, BootstrapError> {
		let pool = database::connection_pool(config).await?;
		database::migrate(&pool).await?;
		tracing::info!(max_connections = config.db_max_connections, "Connection pool ready");

		let uploader = CloudinaryUploader::from_config(&config.cloudinary)?;

		Ok(Self::new(Arc::new(PostRepository::new(pool)), Arc::new(uploader)))
	}
}
