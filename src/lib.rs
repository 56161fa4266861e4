pub mod adapters;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use axum::{
	http::{HeaderValue, Method},
	Router,
};
use tokio::net::TcpListener;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	timeout::TimeoutLayer,
	trace::TraceLayer,
};

use crate::{
	config::Config,
	dependencies::{BootstrapError, Dependency},
	routes::create_routes,
};

/// Full application: post routes plus the CORS, tracing and timeout layers.
pub fn app(
	config: &Config,
	dependency: Dependency,
) -> Router {
	let origins = config.allowed_origins().into_iter().filter_map(|origin| match origin.parse::<HeaderValue>() {
		Ok(value) => Some(value),
		Err(_) => {
			tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
			None
		}
	});

	create_routes(dependency, config.max_upload_bytes)
		.layer(TimeoutLayer::new(config.request_timeout))
		.layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST]),
		)
		.layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<(), BootstrapError> {
	tracing::info!("Connections Are Being Pooled...");
	let dependency = Dependency::init(&config).await?;

	let app = app(&config, dependency);

	let listener = TcpListener::bind(&config.server_ip_port).await?;
	tracing::info!("Start Web Server on {}", config.server_ip_port);

	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	tracing::info!("Server shutdown complete");
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			tracing::error!("Failed to listen for Ctrl+C: {}", err);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(err) => {
				tracing::error!("Failed to install SIGTERM handler: {}", err);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
		_ = terminate => tracing::warn!("Received SIGTERM, shutting down"),
	}
}
