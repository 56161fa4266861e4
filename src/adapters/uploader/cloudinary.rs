//! Signed uploads against the Cloudinary upload API.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use reqwest::{multipart, Client};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::config::CloudinaryConfig;

use super::{TImageUploader, UploadError};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Deserialize)]
struct UploadResponse {
	secure_url: Option<String>,
}

pub struct CloudinaryUploader {
	cloud_name: String,
	api_key: String,
	api_secret: String,
	http_client: Client,
}

impl CloudinaryUploader {
	pub fn from_config(config: &CloudinaryConfig) -> Result<Self, UploadError> {
		let http_client = Client::builder().timeout(config.upload_timeout).build()?;

		tracing::info!(cloud_name = %config.cloud_name, "Cloudinary uploader initialized");

		Ok(Self {
			cloud_name: config.cloud_name.clone(),
			api_key: config.api_key.clone(),
			api_secret: config.api_secret.clone(),
			http_client,
		})
	}

	fn endpoint(&self) -> String {
		format!("{API_BASE}/{}/image/upload", self.cloud_name)
	}
}

/// Signature over the signed parameters (only `timestamp` here), as hex SHA-1
/// of `timestamp=<ts><api_secret>`.
pub(crate) fn sign(
	timestamp: i64,
	api_secret: &str,
) -> String {
	let mut hasher = Sha1::new();
	hasher.update(format!("timestamp={timestamp}{api_secret}").as_bytes());
	hex::encode(hasher.finalize())
}

#[async_trait]
impl TImageUploader for CloudinaryUploader {
	async fn upload(
		&self,
		image: Bytes,
	) -> Result<String, UploadError> {
		let timestamp = Utc::now().timestamp();
		let size = image.len();

		let form = multipart::Form::new()
			.part("file", multipart::Part::bytes(image.to_vec()).file_name("upload"))
			.text("api_key", self.api_key.clone())
			.text("timestamp", timestamp.to_string())
			.text("signature", sign(timestamp, &self.api_secret));

		tracing::debug!(bytes = size, "Uploading image to Cloudinary");

		let response = self.http_client.post(self.endpoint()).multipart(form).send().await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(UploadError::Rejected {
				status: status.as_u16(),
				body,
			});
		}

		response.json::<UploadResponse>().await?.secure_url.ok_or(UploadError::MissingUrl)
	}
}

#[cfg(test)]
mod test {
	use std::time::Duration;

	use super::*;

	#[test]
	fn test_signature_is_sha1_of_timestamp_and_secret() {
		assert_eq!(sign(1315060510, "abcd"), "a21ad0f63beb4de2e5575204b79ab90bffb02c10");
		assert_ne!(sign(1315060510, "abcd"), sign(1315060511, "abcd"));
	}

	#[test]
	fn test_endpoint_uses_cloud_name() {
		let uploader = CloudinaryUploader::from_config(&CloudinaryConfig {
			cloud_name: "demo".into(),
			api_key: "key".into(),
			api_secret: "secret".into(),
			upload_timeout: Duration::from_secs(5),
		})
		.unwrap();

		assert_eq!(uploader.endpoint(), "https://api.cloudinary.com/v1_1/demo/image/upload");
	}
}
