//! # unitconv Units Command
//!
//! File: cli/src/commands/units.rs
//!
//! ## Overview
//!
//! Lists the supported units in table order, the same list the manual
//! converter accepts.
//!
//! Example output:
//!
//! ```text
//! Symbol | Name       | Meters
//! -------+------------+-------------
//! m      | Meter      | 1
//! ft     | Foot       | 0.3048
//! ...
//!
//! 10 unit(s) supported.
//! ```
//!
use crate::core::error::Result;
use crate::core::units::{UnitEntry, UnitTable};
use clap::Parser;
use tracing::info;

/// Arguments for `unitconv units`. Takes no options.
#[derive(Parser, Debug)]
pub struct UnitsArgs {}

/// Handles `unitconv units`.
pub fn handle_units(_args: UnitsArgs) -> Result<()> {
    info!("Handling units command...");
    println!("{}", render_table(UnitTable::standard().entries()));
    Ok(())
}

/// Formats the entries as an aligned text table followed by a count line.
fn render_table(entries: &[UnitEntry]) -> String {
    // Width in chars, not bytes, so "µm" lines up.
    let width = |s: &str| s.chars().count();
    let meters: Vec<String> = entries.iter().map(|e| e.meters.to_string()).collect();

    let symbol_w = entries
        .iter()
        .map(|e| width(e.symbol))
        .chain([width("Symbol")])
        .max()
        .unwrap_or(0);
    let name_w = entries
        .iter()
        .map(|e| width(e.name))
        .chain([width("Name")])
        .max()
        .unwrap_or(0);
    let meters_w = meters
        .iter()
        .map(|m| width(m.as_str()))
        .chain([width("Meters")])
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(entries.len() + 4);
    lines.push(format!(
        "{:<symbol_w$} | {:<name_w$} | Meters",
        "Symbol", "Name"
    ));
    lines.push(format!(
        "{}-+-{}-+-{}",
        "-".repeat(symbol_w),
        "-".repeat(name_w),
        "-".repeat(meters_w)
    ));
    for (entry, meters) in entries.iter().zip(&meters) {
        lines.push(format!(
            "{:<symbol_w$} | {:<name_w$} | {}",
            entry.symbol, entry.name, meters
        ));
    }
    lines.push(String::new());
    lines.push(format!("{} unit(s) supported.", entries.len()));
    lines.join("\n")
}
