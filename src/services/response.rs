use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use serde_json::json;

use crate::{
	adapters::uploader::UploadError,
	domain::post::{commands::MissingFields, query::QueryError},
};

/// Acknowledgement returned by `POST /posts`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ServiceResponse {
	pub success: bool,
	pub message: String,
}

impl ServiceResponse {
	pub fn created() -> Self {
		Self {
			success: true,
			message: "Post created successfully".to_string(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Please provide title, description, tag, and image")]
	MissingFields,
	#[error(transparent)]
	InvalidQuery(#[from] QueryError),
	#[error("Malformed query string: {0}")]
	MalformedQuery(String),
	#[error("Malformed form data: {0}")]
	MalformedForm(String),
	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("Upload error: {0}")]
	Upload(#[from] UploadError),
}

impl From<MissingFields> for ServiceError {
	fn from(_: MissingFields) -> Self {
		ServiceError::MissingFields
	}
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::MissingFields | Self::InvalidQuery(_) | Self::MalformedQuery(_) | Self::MalformedForm(_) => {
				StatusCode::BAD_REQUEST
			}
			Self::Database(_) | Self::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status();
		let message = if status.is_server_error() {
			// Details stay in the log.
			tracing::error!("{}", self);
			"Server Error".to_string()
		} else {
			self.to_string()
		};

		(status, Json(json!({ "error": message }))).into_response()
	}
}

#[cfg(test)]
mod test {
	use axum::{body::to_bytes, response::IntoResponse};

	use super::*;

	async fn body_of(err: ServiceError) -> (StatusCode, serde_json::Value) {
		let response = err.into_response();
		let status = response.status();
		let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&bytes).unwrap())
	}

	#[tokio::test]
	async fn test_server_errors_do_not_leak_details() {
		let (status, body) = body_of(ServiceError::Database(sqlx::Error::PoolTimedOut)).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, json!({ "error": "Server Error" }));

		let (status, body) = body_of(ServiceError::Upload(UploadError::MissingUrl)).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, json!({ "error": "Server Error" }));
	}

	#[tokio::test]
	async fn test_client_errors_carry_their_message() {
		let (status, body) = body_of(ServiceError::MissingFields).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, json!({ "error": "Please provide title, description, tag, and image" }));

		let (status, body) = body_of(QueryError::InvalidSortOrder("sideways".into()).into()).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error"], "Invalid order value 'sideways', expected ASC or DESC");
	}
}
