use std::{str::FromStr, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} has an invalid value: {value}")]
	Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
	pub cloud_name: String,
	pub api_key: String,
	pub api_secret: String,
	pub upload_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub db_max_connections: u32,
	pub db_acquire_timeout: Duration,
	pub allow_origins: String,
	pub request_timeout: Duration,
	pub max_upload_bytes: usize,
	pub cloudinary: CloudinaryConfig,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
	std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(
	name: &'static str,
	default: &str,
) -> String {
	std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(
	name: &'static str,
	default: T,
) -> Result<T, ConfigError> {
	match std::env::var(name) {
		Err(_) => Ok(default),
		Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
	}
}

impl Config {
	pub fn new() -> Result<Config, ConfigError> {
		dotenv::dotenv().ok();

		let log_level = optional("LOG_LEVEL", "info");
		let server_ip_port = optional("SERVER_IP_PORT", "0.0.0.0:3000");
		let database_url = required("DATABASE_URL")?;
		let allow_origins = optional("ALLOW_ORIGINS", "http://localhost:3000");

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			db_max_connections: parsed("DB_MAX_CONNECTIONS", 10)?,
			db_acquire_timeout: Duration::from_secs(parsed("DB_ACQUIRE_TIMEOUT_SECS", 30)?),
			allow_origins,
			request_timeout: Duration::from_secs(parsed("REQUEST_TIMEOUT_SECS", 60)?),
			max_upload_bytes: parsed("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
			cloudinary: CloudinaryConfig {
				cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
				api_key: required("CLOUDINARY_API_KEY")?,
				api_secret: required("CLOUDINARY_API_SECRET")?,
				upload_timeout: Duration::from_secs(parsed("UPLOAD_TIMEOUT_SECS", 30)?),
			},
		})
	}

	pub fn allowed_origins(&self) -> Vec<String> {
		self.allow_origins
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(String::from)
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_allowed_origins_are_split_and_trimmed() {
		let config = Config {
			log_level: "info".into(),
			server_ip_port: "0.0.0.0:3000".into(),
			database_url: "postgres://localhost/posts".into(),
			db_max_connections: 10,
			db_acquire_timeout: Duration::from_secs(30),
			allow_origins: "http://localhost:3000, http://localhost:3001,".into(),
			request_timeout: Duration::from_secs(60),
			max_upload_bytes: 1024,
			cloudinary: CloudinaryConfig {
				cloud_name: "demo".into(),
				api_key: "key".into(),
				api_secret: "secret".into(),
				upload_timeout: Duration::from_secs(30),
			},
		};

		assert_eq!(
			config.allowed_origins(),
			vec!["http://localhost:3000".to_string(), "http://localhost:3001".to_string()]
		);
	}

	#[test]
	fn test_parsed_rejects_garbage() {
		std::env::set_var("KRUST_POSTS_TEST_NUMBER", "ten");
		let err = parsed::<u32>("KRUST_POSTS_TEST_NUMBER", 10).unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { name: "KRUST_POSTS_TEST_NUMBER", .. }));

		assert_eq!(parsed::<u32>("KRUST_POSTS_TEST_UNSET", 7).unwrap(), 7);
	}
}
