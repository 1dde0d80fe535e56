//! # unitconv Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the unitconv CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Manual converter
//! unitconv convert 1 mi km
//!
//! # Chatbot, one question or a whole session
//! unitconv ask convert 10 ft to m
//! unitconv chat --transcript
//!
//! # HTTP API with debug logging
//! unitconv -vv serve --port 9000
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use unitconv::commands;
use unitconv::core::config;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "unitconv",
    about = "📏 unitconv: convert lengths between units",
    long_about = "Convert lengths between m, ft, mi, in, km, cm, mm, µm, nm and yd.\n\
                  Use `convert` for exact values, or `ask` / `chat` for queries like '5 m to km'.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration from this file instead of the user/project config files.
    #[arg(long, global = true, env = "UNITCONV_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a value between two exact unit symbols.
    #[command(alias = "c")]
    Convert(commands::convert::ConvertArgs),
    /// Answer a free-text query such as "5 m to km".
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Start an interactive chatbot session.
    Chat(commands::chat::ChatArgs),
    /// List the supported units.
    #[command(alias = "u")]
    Units(commands::units::UnitsArgs),
    /// Serve the converters as a JSON HTTP API.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => match cli.command {
            Commands::Convert(args) => commands::convert::handle_convert(args, &cfg),
            Commands::Ask(args) => commands::ask::handle_ask(args),
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
            Commands::Units(args) => commands::units::handle_units(args),
            Commands::Serve(args) => commands::serve::handle_serve(args, &cfg).await,
        },
        Err(e) => Err(e.context("Failed to load unitconv configuration")),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
