//! # unitconv HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! Builds the axum router for the JSON API and runs it until Ctrl+C or
//! SIGTERM. If the requested port is taken, the next few ports are tried.
//!
//! ## Architecture
//!
//! 1. Find an available port starting from the configured one
//! 2. Build the router with tracing and (optional) CORS middleware
//! 3. Bind, print the URLs, serve with graceful shutdown
//!
use super::config::ServerConfig;
use super::routes::{self, AppState};
use crate::core::error::Result;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the API to the first free port at or after `config.port` and serves
/// until a shutdown signal arrives.
///
/// ## Errors
///
/// - No free port within `MAX_PORT_ATTEMPTS` tries.
/// - Binding the listener fails.
/// - The server itself fails while running.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let app = create_app(&config);

    println!("\n=================================================================");
    println!("📏 unitconv API:      http://{}", addr);
    println!("🔎 Units:             http://{}/api/units", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port` and up to `max_attempts - 1` following ports, returning
/// the first address that can be bound.
async fn find_available_port(
    req_host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Routes plus tracing and CORS middleware.
pub fn create_app(config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let state = AppState {
        precision: config.precision,
        max_history: config.max_history,
    };

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/units", get(routes::list_units))
        .route("/api/convert", post(routes::convert_units))
        .route("/api/chat", post(routes::chat))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}
