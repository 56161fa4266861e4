pub mod commands;
pub mod entity;
pub mod query;

pub use commands::{CreatePost, CreatePostForm};
pub use entity::{NewPost, Post};
pub use query::{ListPosts, PostQuery};
