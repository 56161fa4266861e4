use bytes::Bytes;

use super::entity::NewPost;

/// Raw create request as collected from the multipart body. Every field may be missing.
#[derive(Debug, Default)]
pub struct CreatePostForm {
	pub title: Option<String>,
	pub description: Option<String>,
	pub tag: Option<String>,
	pub image: Option<Bytes>,
}

/// Create command whose four inputs are guaranteed to be present and non-empty.
#[derive(Debug, Clone)]
pub struct CreatePost {
	pub title: String,
	pub description: String,
	pub tag: String,
	pub image: Bytes,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MissingFields;

impl TryFrom<CreatePostForm> for CreatePost {
	type Error = MissingFields;

	fn try_from(form: CreatePostForm) -> Result<Self, Self::Error> {
		fn present(value: Option<String>) -> Option<String> {
			value.filter(|v| !v.is_empty())
		}

		match (
			present(form.title),
			present(form.description),
			present(form.tag),
			form.image.filter(|bytes| !bytes.is_empty()),
		) {
			(Some(title), Some(description), Some(tag), Some(image)) => Ok(CreatePost {
				title,
				description,
				tag,
				image,
			}),
			_ => Err(MissingFields),
		}
	}
}

impl CreatePost {
	/// Consumes the command, swapping the raw image for the URL it was stored under.
	pub fn into_new_post(
		self,
		image_url: String,
	) -> NewPost {
		NewPost {
			title: self.title,
			description: self.description,
			tag: self.tag,
			image: image_url,
		}
	}
}

#[cfg(test)]
mod test {
	use bytes::Bytes;

	use super::{CreatePost, CreatePostForm, MissingFields};

	fn full_form() -> CreatePostForm {
		CreatePostForm {
			title: Some("Hello".into()),
			description: Some("World".into()),
			tag: Some("news".into()),
			image: Some(Bytes::from_static(b"\x89PNG")),
		}
	}

	#[test]
	fn test_complete_form_is_accepted() {
		let command = CreatePost::try_from(full_form()).unwrap();
		assert_eq!(command.title, "Hello");
		assert_eq!(command.tag, "news");

		let new_post = command.into_new_post("https://cdn.example/1.png".into());
		assert_eq!(new_post.image, "https://cdn.example/1.png");
		assert_eq!(new_post.description, "World");
	}

	fn assert_rejected(strip: impl FnOnce(&mut CreatePostForm)) {
		let mut form = full_form();
		strip(&mut form);
		assert_eq!(CreatePost::try_from(form).unwrap_err(), MissingFields);
	}

	#[test]
	fn test_any_missing_field_is_rejected() {
		assert_rejected(|f| f.title = None);
		assert_rejected(|f| f.description = None);
		assert_rejected(|f| f.tag = None);
		assert_rejected(|f| f.image = None);
	}

	#[test]
	fn test_empty_values_count_as_missing() {
		assert_rejected(|f| f.title = Some(String::new()));
		assert_rejected(|f| f.tag = Some(String::new()));
		assert_rejected(|f| f.image = Some(Bytes::new()));
	}
}
