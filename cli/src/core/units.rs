//! # unitconv Unit Table
//!
//! File: cli/src/core/units.rs
//!
//! ## Overview
//!
//! The canonical mapping from a length unit symbol to the number of meters
//! one unit equals. Every conversion pivots through meters, so the table only
//! needs one factor per unit instead of one per pair of units.
//!
//! ## Architecture
//!
//! - `UnitEntry`: one row (symbol, display name, meters per unit).
//! - `UnitTable`: an ordered, immutable list of entries. Built through
//!   `UnitTable::new`, which rejects duplicate symbols and factors that are
//!   not strictly positive and finite.
//! - `UnitTable::standard()`: the built-in ten-unit table, constructed once.
//!
//! Lookups return `Option<f64>`; a missing symbol is never an implicit default.
//!
use crate::core::error::UnitconvError;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// A single supported length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitEntry {
    /// Short symbol used for lookups, e.g. `km`.
    pub symbol: &'static str,
    /// Human-readable name, used only for listings.
    pub name: &'static str,
    /// How many meters one of this unit equals.
    pub meters: f64,
}

impl UnitEntry {
    pub const fn new(symbol: &'static str, name: &'static str, meters: f64) -> Self {
        Self {
            symbol,
            name,
            meters,
        }
    }
}

/// Built-in units, in display order.
pub const STANDARD_UNITS: [UnitEntry; 10] = [
    UnitEntry::new("m", "Meter", 1.0),
    UnitEntry::new("ft", "Foot", 0.3048),
    UnitEntry::new("mi", "Mile", 1609.344),
    UnitEntry::new("in", "Inch", 0.0254),
    UnitEntry::new("km", "Kilometer", 1000.0),
    UnitEntry::new("cm", "Centimeter", 0.01),
    UnitEntry::new("mm", "Millimeter", 0.001),
    UnitEntry::new("µm", "Micrometer", 1e-6),
    UnitEntry::new("nm", "Nanometer", 1e-9),
    UnitEntry::new("yd", "Yard", 0.9144),
];

static STANDARD_TABLE: LazyLock<UnitTable> = LazyLock::new(|| UnitTable {
    entries: STANDARD_UNITS.to_vec(),
});

/// Immutable lookup table from unit symbol to meters-per-unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    entries: Vec<UnitEntry>,
}

impl UnitTable {
    /// Builds a table, enforcing unique symbols and strictly positive, finite factors.
    pub fn new(entries: Vec<UnitEntry>) -> Result<Self, UnitconvError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.symbol) {
                return Err(UnitconvError::InvalidUnitTable(format!(
                    "duplicate symbol '{}'",
                    entry.symbol
                )));
            }
            if !(entry.meters.is_finite() && entry.meters > 0.0) {
                return Err(UnitconvError::InvalidUnitTable(format!(
                    "scale factor for '{}' must be positive and finite, got {}",
                    entry.symbol, entry.meters
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in table of ten length units.
    pub fn standard() -> &'static UnitTable {
        &STANDARD_TABLE
    }

    /// Exact, case-sensitive lookup.
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        let found = self
            .entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.meters);
        debug!("Lookup '{}' -> {:?}", symbol, found);
        found
    }

    /// Case-insensitive lookup, used for symbols extracted from free text.
    pub fn factor_ignore_case(&self, symbol: &str) -> Option<f64> {
        let lowered = symbol.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.symbol.to_lowercase() == lowered)
            .map(|entry| entry.meters)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.factor(symbol).is_some()
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
