mod create_post;
mod list_posts;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::dependencies::Dependency;

pub use create_post::create_post;
pub use list_posts::list_posts;

async fn health() -> &'static str {
	"ok"
}

pub fn create_routes(
	dependency: Dependency,
	max_upload_bytes: usize,
) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/posts", get(list_posts).post(create_post))
		.layer(DefaultBodyLimit::max(max_upload_bytes))
		.with_state(dependency)
}
