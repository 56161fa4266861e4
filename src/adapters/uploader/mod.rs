pub mod cloudinary;

use async_trait::async_trait;
use bytes::Bytes;

pub use cloudinary::CloudinaryUploader;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
	#[error("image host unreachable: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("image host rejected upload with status {status}: {body}")]
	Rejected { status: u16, body: String },
	#[error("image host response carried no secure_url")]
	MissingUrl,
}

/// Turns raw image bytes into a durable, publicly retrievable URL.
///
/// Implementations make a single attempt; retries are the caller's business and
/// no caller currently retries.
#[async_trait]
pub trait TImageUploader: Send + Sync {
	async fn upload(
		&self,
		image: Bytes,
	) -> Result<String, UploadError>;
}
