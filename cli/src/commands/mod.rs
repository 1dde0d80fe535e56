//! # unitconv Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Every top-level `unitconv` subcommand lives in its own module here. Each
//! module defines its Clap arguments struct and a `handle_*` function that
//! `main.rs` dispatches to.
//!
//! ## Command Groups
//!
//! - `convert`: manual converter (value + two exact unit symbols)
//! - `ask`: one-shot free-text query
//! - `chat`: interactive chatbot session
//! - `units`: list of supported units
//! - `serve`: JSON HTTP API over both converters
//!

/// `unitconv ask <text>`: answers one free-text query.
pub mod ask;
/// `unitconv chat`: interactive chatbot REPL.
pub mod chat;
/// `unitconv convert <value> <from> <to>`: the manual converter.
pub mod convert;
/// `unitconv serve`: HTTP API. Includes configuration, routes, and server logic.
pub mod serve;
/// `unitconv units`: prints the unit table.
pub mod units;
