mod api_handlers;
mod config;
mod errors;
mod intake;
mod logging;
mod models;
mod processing;
mod state;

use std::sync::Arc;

use api_handlers::document_handlers::process_document;
use config::AppConfig;
use state::AppState;

use poem::{
    listener::TcpListener, middleware::Tracing, post, Endpoint, EndpointExt, Route, Server,
};

// The single route of the service, with request tracing and the shared state attached.
pub fn build_app(state: Arc<AppState>) -> impl Endpoint {
    Route::new()
        .at("/process-document", post(process_document))
        .with(Tracing)
        .data(state)
}

// The main entry point for the application.
//
// # Steps
// 1. Sets up logging to stderr.
// 2. Uses the fixed bind address (0.0.0.0:5000) and scratch directory (/tmp).
// 3. Builds the shared HTTP client and serves the route table.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    logging::init_logging();

    let config = AppConfig::default();
    let state = AppState::from_config(&config).map_err(std::io::Error::other)?;

    tracing::info!(
        bind = %config.bind_addr,
        scratch_dir = %config.scratch_dir.display(),
        "starting document intake service"
    );

    Server::new(TcpListener::bind(config.bind_addr.clone()))
        .run(build_app(Arc::new(state)))
        .await
}
