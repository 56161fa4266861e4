use crate::{
	dependencies::Dependency,
	domain::post::{CreatePost, CreatePostForm, ListPosts, Post},
};

use super::response::{ServiceError, ServiceResponse};

pub struct PostHandler;
impl PostHandler {
	/// Runs the filtered, sorted, paginated read. Invalid sort identifiers are
	/// rejected before the store is touched.
	pub async fn list_posts(
		params: ListPosts,
		dependency: &Dependency,
	) -> Result<Vec<Post>, ServiceError> {
		let query = params.build_query()?;
		tracing::debug!(sql = %query.text, binds = query.binds.len(), "Listing posts");

		Ok(dependency.repository.list(&query).await?)
	}

	/// Validates the form, uploads the image, then stores one row pointing at it.
	///
	/// Upload and insert are not atomic: if the insert fails the uploaded asset
	/// stays on the image host without any row referencing it.
	pub async fn create_post(
		form: CreatePostForm,
		dependency: &Dependency,
	) -> Result<ServiceResponse, ServiceError> {
		let command = CreatePost::try_from(form)?;

		let image_url = dependency.uploader.upload(command.image.clone()).await?;

		let id = dependency.repository.insert(command.into_new_post(image_url.clone())).await.map_err(|err| {
			tracing::warn!(image_url = %image_url, "Insert failed after upload, image is orphaned");
			err
		})?;

		tracing::info!(post_id = id, "Post created");
		Ok(ServiceResponse::created())
	}
}
