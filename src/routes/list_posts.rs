use axum::{
	extract::{rejection::QueryRejection, Query, State},
	Json,
};
use axum_macros::debug_handler;

use crate::{
	dependencies::Dependency,
	domain::post::{ListPosts, Post},
	services::{handlers::PostHandler, response::ServiceError},
};

#[debug_handler]
pub async fn list_posts(
	State(dependency): State<Dependency>,
	params: Result<Query<ListPosts>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ServiceError> {
	let Query(params) = params.map_err(|rejection| ServiceError::MalformedQuery(rejection.to_string()))?;
	PostHandler::list_posts(params, &dependency).await.map(Json)
}
