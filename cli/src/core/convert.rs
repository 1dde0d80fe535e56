//! # unitconv Conversion Function
//!
//! File: cli/src/core/convert.rs
//!
//! ## Overview
//!
//! Converts a length from one unit to another by pivoting through meters:
//! `value * factor_from` gives meters, dividing by `factor_to` gives the
//! target unit. Converting a unit to itself returns the value untouched, so
//! the identity holds exactly in floating point. No rounding is applied here;
//! formatting to a fixed number of decimals is left to the callers.
//!
//! ## Architecture
//!
//! - `convert`: the sentinel form. An unknown symbol yields `None`.
//! - `try_convert`: same arithmetic, but reports the missing symbol as
//!   `UnitconvError::UnitNotFound`, and a result that overflows to infinity
//!   as `UnitconvError::ResultOutOfRange`.
//! - `manual_message`: the one-line result of the manual converter,
//!   `"<value> <from> = <result> <to>"`.
//!
//! The `*_in` variants take an explicit `UnitTable`; the plain ones use
//! `UnitTable::standard()`.
//!
use crate::core::error::UnitconvError;
use crate::core::units::UnitTable;
use tracing::debug;

/// Decimal places used when a caller does not choose its own precision.
pub const DEFAULT_PRECISION: usize = 4;

/// A single conversion, as typed in by a user or extracted from a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Runs the request against the built-in table, matching symbols
    /// case-insensitively as typed free text needs.
    pub fn evaluate(&self) -> Option<f64> {
        let table = UnitTable::standard();
        let factor_from = table.factor_ignore_case(&self.from_unit)?;
        let factor_to = table.factor_ignore_case(&self.to_unit)?;
        if factor_from == factor_to {
            return Some(self.value);
        }
        Some(self.value * factor_from / factor_to)
    }
}

/// Converts `value` from `from_unit` to `to_unit` using the built-in table.
///
/// Returns `None` if either symbol is unknown.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    convert_in(UnitTable::standard(), value, from_unit, to_unit)
}

/// Converts using an explicit table.
pub fn convert_in(table: &UnitTable, value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    let factor_from = table.factor(from_unit)?;
    let factor_to = table.factor(to_unit)?;
    if from_unit == to_unit {
        return Some(value);
    }
    let meters = value * factor_from;
    let converted = meters / factor_to;
    debug!(
        "Converted {} {} -> {} m -> {} {}",
        value, from_unit, meters, converted, to_unit
    );
    Some(converted)
}

/// Like `convert`, but names the first unknown symbol in the error and
/// rejects results that are not finite.
pub fn try_convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitconvError> {
    try_convert_in(UnitTable::standard(), value, from_unit, to_unit)
}

pub fn try_convert_in(
    table: &UnitTable,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, UnitconvError> {
    for unit in [from_unit, to_unit] {
        if !table.contains(unit) {
            return Err(UnitconvError::UnitNotFound {
                unit: unit.to_string(),
            });
        }
    }
    let result = convert_in(table, value, from_unit, to_unit).ok_or_else(|| {
        UnitconvError::UnitNotFound {
            unit: from_unit.to_string(),
        }
    })?;
    if !result.is_finite() {
        return Err(UnitconvError::ResultOutOfRange {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        });
    }
    Ok(result)
}

/// Formats the manual converter's result line, e.g. `"1 km = 0.6214 mi"`.
///
/// Lookups are case-sensitive, as the manual path only offers exact symbols.
pub fn manual_message(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    precision: usize,
) -> Result<String, UnitconvError> {
    let result = try_convert(value, from_unit, to_unit)?;
    Ok(format_manual(value, from_unit, result, to_unit, precision))
}

/// `"<value> <from> = <result> <to>"` with `precision` decimals on the result.
pub fn format_manual(
    value: f64,
    from_unit: &str,
    result: f64,
    to_unit: &str,
    precision: usize,
) -> String {
    format!(
        "{} {} = {:.*} {}",
        value, from_unit, precision, result, to_unit
    )
}
