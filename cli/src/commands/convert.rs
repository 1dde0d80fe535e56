//! # unitconv Convert Command
//!
//! File: cli/src/commands/convert.rs
//!
//! ## Overview
//!
//! The manual converter: the user names a value and two exact unit symbols
//! and gets a single result line back.
//!
//! ```bash
//! unitconv convert 1 mi km        # 1 mi = 1.6093 km
//! unitconv convert -3 ft in -p 1  # -3 ft = -36.0 in
//! ```
//!
//! Symbols are matched case-sensitively (`km`, not `KM`), just like picking
//! an entry from a fixed list. An unknown symbol is an error and the process
//! exits with status 1.
//!
use crate::core::config::{Config, MAX_PRECISION};
use crate::core::convert;
use crate::core::error::{Result, UnitconvError};
use clap::Parser;
use tracing::info;

/// Message shown when either unit is missing from the table.
pub const INVALID_UNIT_MESSAGE: &str = "Conversion error: Invalid unit.";

/// Arguments for `unitconv convert`.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// The value to convert (any finite number, negatives allowed).
    #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
    pub value: f64,
    /// Unit to convert from (see `unitconv units`).
    pub from_unit: String,
    /// Unit to convert to.
    pub to_unit: String,
    /// Decimal places in the result. Defaults to `display.precision` from the config.
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    pub precision: Option<u8>,
}

fn parse_finite(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", raw))
    }
}

/// Renders the result line for `args`, honouring the configured precision.
pub fn render(args: &ConvertArgs, config: &Config) -> Result<String> {
    let precision = args
        .precision
        .map(usize::from)
        .unwrap_or(config.display.precision);
    match convert::manual_message(args.value, &args.from_unit, &args.to_unit, precision) {
        Ok(line) => Ok(line),
        Err(UnitconvError::UnitNotFound { unit }) => anyhow::bail!(
            "{} Unknown unit '{}'; run 'unitconv units' to list the supported symbols.",
            INVALID_UNIT_MESSAGE,
            unit
        ),
        Err(other) => Err(other.into()),
    }
}

/// Handles `unitconv convert`.
pub fn handle_convert(args: ConvertArgs, config: &Config) -> Result<()> {
    info!(
        "Handling convert command: {} {} -> {}",
        args.value, args.from_unit, args.to_unit
    );
    let line = render(&args, config)?;
    println!("{}", line);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ConvertArgs {
        let mut argv = vec!["convert"];
        argv.extend_from_slice(args);
        ConvertArgs::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_parses_negative_value() {
        let args = parse(&["-3", "ft", "in"]);
        assert_eq!(args.value, -3.0);
        assert_eq!(args.from_unit, "ft");
        assert_eq!(args.to_unit, "in");
        assert_eq!(args.precision, None);
    }

    #[test]
    fn test_rejects_non_finite_and_bad_precision() {
        assert!(ConvertArgs::try_parse_from(["convert", "nan", "m", "km"]).is_err());
        assert!(ConvertArgs::try_parse_from(["convert", "inf", "m", "km"]).is_err());
        assert!(ConvertArgs::try_parse_from(["convert", "abc", "m", "km"]).is_err());
        assert!(ConvertArgs::try_parse_from(["convert", "1", "m", "km", "-p", "13"]).is_err());
    }

    #[test]
    fn test_render_uses_config_precision() {
        let mut config = Config::default();
        assert_eq!(render(&parse(&["1", "mi", "km"]), &config).unwrap(), "1 mi = 1.6093 km");

        config.display.precision = 2;
        assert_eq!(render(&parse(&["1", "mi", "km"]), &config).unwrap(), "1 mi = 1.61 km");
    }

    #[test]
    fn test_render_flag_overrides_config() {
        let config = Config::default();
        let line = render(&parse(&["-3", "ft", "in", "--precision", "1"]), &config).unwrap();
        assert_eq!(line, "-3 ft = -36.0 in");
    }

    #[test]
    fn test_render_unknown_unit() {
        let err = render(&parse(&["5", "m", "parsec"]), &Config::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with(INVALID_UNIT_MESSAGE));
        assert!(message.contains("'parsec'"));
    }

    #[test]
    fn test_render_rejects_overflowing_result() {
        let err = render(&parse(&["1e308", "mi", "nm"]), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("does not give a finite result"));
    }

    #[test]
    fn test_render_is_case_sensitive() {
        assert!(render(&parse(&["5", "M", "km"]), &Config::default()).is_err());
    }
}
