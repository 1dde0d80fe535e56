//! # unitconv HTTP Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Combines settings from:
//! 1. Command-line arguments (highest priority)
//! 2. The `[server]`, `[display]` and `[chat]` sections of the loaded config
//! 3. Default values (lowest priority, already applied by the config loader)
//!
use crate::core::config::Config;
use crate::core::error::{Result, UnitconvError};
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Every flag is optional; anything left out falls back to the `[server]`
/// section of the configuration.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Network port to listen on. Defaults to `server.port` (8000).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// IP address to bind to. Use `0.0.0.0` to listen on all interfaces.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    /// Decimal places used in `/api/convert` messages.
    pub precision: usize,
    /// History cap applied to `/api/chat`.
    pub max_history: Option<usize>,
}

/// Produces the effective server settings; CLI flags win over the config file.
pub fn resolve(args: ServeArgs, config: &Config) -> Result<ServerConfig> {
    let host = match args.host {
        Some(host) => host,
        None => config.server.host.parse().map_err(|_| {
            UnitconvError::Config(format!(
                "server.host '{}' is not a valid IP address.",
                config.server.host
            ))
        })?,
    };
    let resolved = ServerConfig {
        port: args.port.unwrap_or(config.server.port),
        host,
        enable_cors: config.server.enable_cors && !args.no_cors,
        precision: config.display.precision,
        max_history: config.chat.max_history,
    };
    debug!("Resolved server configuration: {:?}", resolved);
    Ok(resolved)
}
