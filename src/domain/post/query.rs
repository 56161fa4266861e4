//! Translates untrusted list parameters into one parameterized read over `posts`.
//!
//! Values (keyword, tag, limit, offset) always travel as bound parameters.
//! Identifiers (sort column, direction) come from closed enumerations, so nothing
//! the caller sends is ever spliced into the statement text.

use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

const SELECT_POSTS: &str = "SELECT id, title, description, tag, image FROM posts";

/// Query-string parameters of `GET /posts`, kept as the raw strings received.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPosts {
	pub sort_by: Option<String>,
	pub order: Option<String>,
	pub keyword: Option<String>,
	pub tag: Option<String>,
	pub page: Option<String>,
	pub limit: Option<String>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
	#[error("Invalid sortBy value '{0}', expected one of id, title, description, tag, image")]
	InvalidSortField(String),
	#[error("Invalid order value '{0}', expected ASC or DESC")]
	InvalidSortOrder(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
	#[default]
	Id,
	Title,
	Description,
	Tag,
	Image,
}

impl SortField {
	pub fn column(&self) -> &'static str {
		match self {
			Self::Id => "id",
			Self::Title => "title",
			Self::Description => "description",
			Self::Tag => "tag",
			Self::Image => "image",
		}
	}
}

impl FromStr for SortField {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"id" => Ok(Self::Id),
			"title" => Ok(Self::Title),
			"description" => Ok(Self::Description),
			"tag" => Ok(Self::Tag),
			"image" => Ok(Self::Image),
			other => Err(QueryError::InvalidSortField(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
	#[default]
	Asc,
	Desc,
}

impl SortOrder {
	pub fn keyword(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

impl FromStr for SortOrder {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("asc") {
			Ok(Self::Asc)
		} else if s.eq_ignore_ascii_case("desc") {
			Ok(Self::Desc)
		} else {
			Err(QueryError::InvalidSortOrder(s.to_string()))
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	pub page: i64,
	pub limit: i64,
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			page: DEFAULT_PAGE,
			limit: DEFAULT_LIMIT,
		}
	}
}

impl Pagination {
	/// Never fails: input without a leading integer, or a non-positive one,
	/// falls back to the defaults.
	pub fn parse(
		page: Option<&str>,
		limit: Option<&str>,
	) -> Self {
		fn positive(raw: Option<&str>) -> Option<i64> {
			raw.and_then(leading_integer).filter(|v| *v >= 1)
		}

		Self {
			page: positive(page).unwrap_or(DEFAULT_PAGE),
			limit: positive(limit).unwrap_or(DEFAULT_LIMIT),
		}
	}

	pub fn offset(&self) -> i64 {
		(self.page - 1).saturating_mul(self.limit)
	}
}

/// Value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
	Text(String),
	Int(i64),
}

/// Statement text with `$n` placeholders plus the values bound to them, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
	pub text: String,
	pub binds: Vec<Bind>,
}

impl PostQuery {
	fn bind(
		&mut self,
		value: Bind,
	) -> usize {
		self.binds.push(value);
		self.binds.len()
	}
}

/// Reads the integer at the start of `raw` like JavaScript's `parseInt`: leading
/// whitespace, an optional sign, then digits up to the first non-digit ("2.5" is 2).
fn leading_integer(raw: &str) -> Option<i64> {
	let trimmed = raw.trim_start();
	let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
	let sign_len = trimmed.len() - unsigned.len();
	let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return None;
	}
	trimmed[..sign_len + digits].parse().ok()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}

/// Escapes `LIKE` metacharacters so the keyword matches as a literal substring.
fn escape_like(raw: &str) -> String {
	let mut escaped = String::with_capacity(raw.len());
	for c in raw.chars() {
		if matches!(c, '\\' | '%' | '_') {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}

impl ListPosts {
	pub fn sort_field(&self) -> Result<SortField, QueryError> {
		non_empty(&self.sort_by).map_or(Ok(SortField::default()), str::parse)
	}

	pub fn sort_order(&self) -> Result<SortOrder, QueryError> {
		non_empty(&self.order).map_or(Ok(SortOrder::default()), str::parse)
	}

	pub fn pagination(&self) -> Pagination {
		Pagination::parse(self.page.as_deref(), self.limit.as_deref())
	}

	pub fn build_query(&self) -> Result<PostQuery, QueryError> {
		let sort_field = self.sort_field()?;
		let sort_order = self.sort_order()?;
		let pagination = self.pagination();

		let mut query = PostQuery {
			text: String::from(SELECT_POSTS),
			binds: Vec::new(),
		};

		let mut conditions = Vec::with_capacity(2);
		if let Some(keyword) = non_empty(&self.keyword) {
			let n = query.bind(Bind::Text(format!("%{}%", escape_like(keyword))));
			conditions.push(format!("(title LIKE ${n} OR description LIKE ${n})"));
		}
		if let Some(tag) = non_empty(&self.tag) {
			let n = query.bind(Bind::Text(tag.to_string()));
			conditions.push(format!("tag = ${n}"));
		}
		if !conditions.is_empty() {
			query.text.push_str(" WHERE ");
			query.text.push_str(&conditions.join(" AND "));
		}

		let limit = query.bind(Bind::Int(pagination.limit));
		let offset = query.bind(Bind::Int(pagination.offset()));
		query.text.push_str(&format!(
			" ORDER BY {} {} LIMIT ${limit} OFFSET ${offset}",
			sort_field.column(),
			sort_order.keyword()
		));

		Ok(query)
	}
}
