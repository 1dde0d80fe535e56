//! # unitconv Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout unitconv. The core
//! conversion API reports failures as values (`Option` from `convert`, fixed
//! messages from `handle_query`); the variants below exist for the callers
//! that want a typed error instead, and for the application plumbing.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `UnitconvError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Unknown unit symbols
//! - Conversions whose result overflows `f64`
//! - Free-text queries that do not match the expected shape
//! - Unit tables that violate the positive/unique invariant
//! - Configuration errors
//!
//! ## Examples
//!
//! ```rust,ignore
//! match convert::try_convert(5.0, "m", "parsec") {
//!     Ok(v) => println!("{v}"),
//!     Err(UnitconvError::UnitNotFound { unit }) => println!("unknown unit {unit}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the unitconv application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitconvError {
    #[error("Unit '{unit}' is not supported.")]
    UnitNotFound { unit: String },

    #[error("Converting {value} {from_unit} to {to_unit} does not give a finite result.")]
    ResultOutOfRange {
        value: f64,
        from_unit: String,
        to_unit: String,
    },

    #[error("Query does not match the '<value> <from_unit> to <to_unit>' format.")]
    QueryUnparseable,

    #[error("Invalid unit table: {0}")]
    InvalidUnitTable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let not_found = UnitconvError::UnitNotFound {
            unit: "parsec".into(),
        };
        assert_eq!(not_found.to_string(), "Unit 'parsec' is not supported.");

        let config_err = UnitconvError::Config("precision must be at most 12".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: precision must be at most 12"
        );

        let overflow = UnitconvError::ResultOutOfRange {
            value: 1e308,
            from_unit: "mi".into(),
            to_unit: "nm".into(),
        };
        assert_eq!(
            overflow.to_string(),
            format!("Converting {} mi to nm does not give a finite result.", 1e308)
        );

        let table_err = UnitconvError::InvalidUnitTable("duplicate symbol 'm'".into());
        assert_eq!(
            table_err.to_string(),
            "Invalid unit table: duplicate symbol 'm'"
        );
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let err: anyhow::Error = UnitconvError::QueryUnparseable.into();
        assert!(matches!(
            err.downcast_ref::<UnitconvError>(),
            Some(UnitconvError::QueryUnparseable)
        ));
    }
}
