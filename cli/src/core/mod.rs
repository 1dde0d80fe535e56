//! # unitconv Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The conversion core plus the infrastructure shared by every front end.
//!
//! ## Architecture
//!
//! - `units`: the fixed table of length units and their size in meters
//! - `convert`: pivot-through-meters conversion and the manual result line
//! - `query`: free-text query parsing and chatbot replies
//! - `conversation`: caller-owned chat history
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use unitconv::core::convert::convert;
//! use unitconv::core::query::handle_query;
//!
//! assert_eq!(convert(1.0, "km", "m"), Some(1000.0));
//! println!("{}", handle_query("convert 10 ft to m"));
//! ```
//!
pub mod config;
pub mod conversation;
pub mod convert;
pub mod error;
pub mod query;
pub mod units;
