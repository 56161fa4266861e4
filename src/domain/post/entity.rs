use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub tag: String,
	/// Public URL handed back by the image host.
	pub image: String,
}

/// Row about to be inserted. `id` is assigned by the store.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NewPost {
	pub title: String,
	pub description: String,
	pub tag: String,
	pub image: String,
}
