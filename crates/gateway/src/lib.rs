//! API Gateway Library
//!
//! This crate provides the HTTP API that maps each request method onto a
//! user service operation.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the gateway on the given address, storage settings from the environment.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;

    run_server_with_config(config).await
}

/// Run the same router as a Lambda function behind API Gateway.
///
/// Storage is set up once per cold start; every invocation reuses it.
pub async fn run_lambda() -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env();
    let app = build_app(&config).await;

    info!(service = %config.service.service_name, "Gateway handling Lambda invocations");

    lambda_http::run(app)
        .await
        .map_err(|err| err as Box<dyn std::error::Error>)
}

/// Build the traced router over the configured storage.
async fn build_app(config: &GatewayConfig) -> Router {
    // Storage client is built once and shared by every request
    let user_repository = user_service_lib::build_repository(&config.storage).await;
    let user_service = user_service_lib::build_service(user_repository.clone(), &config.storage);

    let state = AppState::new(user_service, user_repository);
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.server_addr().parse()?;
    let app = build_app(&config).await;

    info!(service = %config.service.service_name, "Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
