pub(crate) mod post_repository;

use async_trait::async_trait;

use crate::domain::post::{NewPost, Post, PostQuery};

pub use post_repository::PostRepository;

/// Storage seam for posts. Handlers only ever see this trait, so tests can swap in fakes.
#[async_trait]
pub trait TPostRepository: Send + Sync {
	async fn list(
		&self,
		query: &PostQuery,
	) -> Result<Vec<Post>, sqlx::Error>;

	async fn insert(
		&self,
		post: NewPost,
	) -> Result<i64, sqlx::Error>;
}
