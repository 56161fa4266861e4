//! In-memory stand-ins for the store and the image host.

use std::sync::{
	atomic::{AtomicUsize, Ordering},
	Arc, Mutex,
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
	adapters::{
		repositories::TPostRepository,
		uploader::{TImageUploader, UploadError},
	},
	dependencies::Dependency,
	domain::post::{NewPost, Post, PostQuery},
};

#[derive(Default)]
pub struct FakeRepository {
	pub rows: Mutex<Vec<Post>>,
	pub queries: Mutex<Vec<PostQuery>>,
	pub fail: bool,
}

impl FakeRepository {
	pub fn failing() -> Self {
		Self {
			fail: true,
			..Default::default()
		}
	}

	pub fn inserted(&self) -> Vec<Post> {
		self.rows.lock().unwrap().clone()
	}
}

#[async_trait]
impl TPostRepository for FakeRepository {
	async fn list(
		&self,
		query: &PostQuery,
	) -> Result<Vec<Post>, sqlx::Error> {
		self.queries.lock().unwrap().push(query.clone());
		if self.fail {
			return Err(sqlx::Error::PoolTimedOut);
		}
		Ok(self.rows.lock().unwrap().clone())
	}

	async fn insert(
		&self,
		post: NewPost,
	) -> Result<i64, sqlx::Error> {
		if self.fail {
			return Err(sqlx::Error::PoolTimedOut);
		}
		let mut rows = self.rows.lock().unwrap();
		let id = rows.len() as i64 + 1;
		rows.push(Post {
			id,
			title: post.title,
			description: post.description,
			tag: post.tag,
			image: post.image,
		});
		Ok(id)
	}
}

#[derive(Default)]
pub struct FakeUploader {
	pub calls: AtomicUsize,
	pub fail: bool,
}

impl FakeUploader {
	pub fn failing() -> Self {
		Self {
			fail: true,
			..Default::default()
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl TImageUploader for FakeUploader {
	async fn upload(
		&self,
		image: Bytes,
	) -> Result<String, UploadError> {
		let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
		if self.fail {
			return Err(UploadError::MissingUrl);
		}
		Ok(format!("https://res.cloudinary.test/image/{n}-{}.png", image.len()))
	}
}

pub fn dependency(
	repository: &Arc<FakeRepository>,
	uploader: &Arc<FakeUploader>,
) -> Dependency {
	Dependency::new(repository.clone(), uploader.clone())
}
