//! # unitconv HTTP API
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! Serves both converters over HTTP with JSON bodies, so a browser page or
//! another program can drive them:
//!
//! - `GET  /health`       liveness check
//! - `GET  /api/units`    the unit table
//! - `POST /api/convert`  manual conversion
//! - `POST /api/chat`     chatbot reply; the client sends its history and
//!   gets the updated history back, the server keeps no session state
//!
//! ## Architecture
//!
//! - `config.rs`: merges CLI flags with the `[server]` config section
//! - `routes.rs`: request/response types and the route handlers
//! - `server_logic.rs`: router assembly, port selection, graceful shutdown
//!
//! ## Examples
//!
//! ```bash
//! unitconv serve --port 9000
//! curl -s localhost:9000/api/chat -H 'content-type: application/json' \
//!      -d '{"message": "5 m to km", "history": []}'
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

/// Merges command-line flags with the loaded configuration.
pub mod config;

/// Route handlers and JSON body types.
pub mod routes;

/// Axum server setup and lifecycle.
pub mod server_logic;

/// Handles `unitconv serve`.
pub async fn handle_serve(args: ServeArgs, config: &Config) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let server_config = config::resolve(args, config)?;
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config).await?;
    Ok(())
}
