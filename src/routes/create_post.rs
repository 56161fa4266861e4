use axum::{
	extract::{
		multipart::{MultipartError, MultipartRejection},
		Multipart, State,
	},
	Json,
};
use axum_macros::debug_handler;

use crate::{
	dependencies::Dependency,
	domain::post::CreatePostForm,
	services::{
		handlers::PostHandler,
		response::{ServiceError, ServiceResponse},
	},
};

fn malformed(err: MultipartError) -> ServiceError {
	ServiceError::MalformedForm(err.to_string())
}

/// Collects the known fields of the multipart body. Unknown fields are drained and ignored.
async fn read_form(multipart: &mut Multipart) -> Result<CreatePostForm, ServiceError> {
	let mut form = CreatePostForm::default();

	while let Some(field) = multipart.next_field().await.map_err(malformed)? {
		let name = field.name().map(str::to_owned);
		match name.as_deref() {
			Some("title") => form.title = Some(field.text().await.map_err(malformed)?),
			Some("description") => form.description = Some(field.text().await.map_err(malformed)?),
			Some("tag") => form.tag = Some(field.text().await.map_err(malformed)?),
			Some("image") => form.image = Some(field.bytes().await.map_err(malformed)?),
			_ => {
				field.bytes().await.map_err(malformed)?;
			}
		}
	}

	Ok(form)
}

#[debug_handler]
pub async fn create_post(
	State(dependency): State<Dependency>,
	multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ServiceResponse>, ServiceError> {
	// A body that is not multipart at all carries none of the required fields.
	let form = match multipart {
		Ok(mut multipart) => read_form(&mut multipart).await?,
		Err(rejection) => {
			tracing::debug!("Create request without multipart body: {}", rejection);
			CreatePostForm::default()
		}
	};

	PostHandler::create_post(form, &dependency).await.map(Json)
}
