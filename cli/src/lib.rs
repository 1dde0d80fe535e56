//! # unitconv
//!
//! File: cli/src/lib.rs
//!
//! Length unit conversion with two front ends: a manual converter and a
//! natural-language chatbot that understands queries like `5 m to km`.
//!
//! The library exposes the conversion core (`core`) and the command
//! implementations (`commands`) used by the `unitconv` binary.
//!
//! ```rust
//! use unitconv::core::convert::convert;
//! use unitconv::core::query::handle_query;
//!
//! assert_eq!(convert(1.0, "km", "m"), Some(1000.0));
//! assert_eq!(convert(5.0, "m", "parsec"), None);
//! assert_eq!(handle_query("convert 10 ft to m"), "10 ft is equal to 3.0480 m");
//! ```
//!
pub mod commands;
pub mod core;
