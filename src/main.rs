use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use threadview_core::{
    config::{max_depth_from_env_value, show_connector_from_env_value},
    CoreConfig, RenderOptions, ThreadService, DEFAULT_REST_ADDR, DEFAULT_THREAD_DATA_PATH,
};

/// Main entry point for the threadview application
///
/// Resolves configuration from the environment once, then serves the REST API (page
/// routes, render API, Swagger UI).
///
/// # Environment Variables
/// - `THREADVIEW_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `THREAD_DATA_PATH`: Thread JSON file served by the index page (default: "thread_data/thread.json")
/// - `THREADVIEW_SHOW_CONNECTOR`: Draw elbow connectors on nested comments (default: true)
/// - `THREADVIEW_MAX_DEPTH`: Maximum accepted comment nesting depth (default: 48)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("threadview=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("THREADVIEW_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let thread_data_path = std::env::var("THREAD_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_THREAD_DATA_PATH));
    if !thread_data_path.is_file() {
        tracing::warn!(
            "Thread data file does not exist yet: {}",
            thread_data_path.display()
        );
    }

    let render_options = RenderOptions {
        show_connector: show_connector_from_env_value(
            std::env::var("THREADVIEW_SHOW_CONNECTOR").ok(),
        )?,
    };
    let max_depth = max_depth_from_env_value(std::env::var("THREADVIEW_MAX_DEPTH").ok())?;

    let cfg = Arc::new(CoreConfig::new(
        thread_data_path,
        render_options,
        max_depth,
    )?);
    let app = api_rest::app(AppState::new(ThreadService::new(cfg)));

    tracing::info!("++ Starting threadview REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
