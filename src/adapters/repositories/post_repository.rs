use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::post::{query::Bind, NewPost, Post, PostQuery};

use super::TPostRepository;

/// Postgres-backed repository. Every call checks a connection out of the pool and
/// returns it when the call's future completes or is dropped.
#[derive(Clone)]
pub struct PostRepository {
	pool: PgPool,
}

impl PostRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl TPostRepository for PostRepository {
	async fn list(
		&self,
		query: &PostQuery,
	) -> Result<Vec<Post>, sqlx::Error> {
		let mut statement = sqlx::query_as::<_, Post>(&query.text);
		for bind in query.binds.iter().cloned() {
			statement = match bind {
				Bind::Text(value) => statement.bind(value),
				Bind::Int(value) => statement.bind(value),
			};
		}
		statement.fetch_all(&self.pool).await
	}

	async fn insert(
		&self,
		post: NewPost,
	) -> Result<i64, sqlx::Error> {
		let (id,): (i64,) = sqlx::query_as(
			r#"
			INSERT INTO posts (title, description, tag, image)
			VALUES ($1, $2, $3, $4)
			RETURNING id
			"#,
		)
		.bind(post.title)
		.bind(post.description)
		.bind(post.tag)
		.bind(post.image)
		.fetch_one(&self.pool)
		.await?;

		Ok(id)
	}
}
