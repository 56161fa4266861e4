use krust_posts::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
	println!("Environment Variable Is Being Set...");
	let config = match Config::new() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Invalid configuration: {err}");
			std::process::exit(1);
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("krust_posts={},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	if let Err(err) = krust_posts::run(config).await {
		tracing::error!("Server exited with error: {}", err);
		std::process::exit(1);
	}
}
