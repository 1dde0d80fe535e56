//! # unitconv Query Parser
//!
//! File: cli/src/core/query.rs
//!
//! ## Overview
//!
//! Turns free text such as `"convert 5 m to km"` into a conversion and a
//! human-readable reply. This is the logic behind the chatbot front ends
//! (`unitconv ask`, `unitconv chat`, and `POST /api/chat`).
//!
//! ## Architecture
//!
//! 1. The input is lower-cased, then searched (not anchored) for
//!    `<number> <unit> to <unit>`. Only the first match is used.
//! 2. `parse_query` returns the extracted `ConversionRequest`, or
//!    `UnitconvError::QueryUnparseable` when nothing matches.
//! 3. `handle_query` runs the request through the converter and always
//!    returns a message: the result sentence, the "not supported" message,
//!    or the format guidance.
//!
//! The number pattern is plain decimal digits with an optional fractional
//! part. A leading minus sign or exponent notation is not part of a match.
//!
//! ## Examples
//!
//! ```rust,ignore
//! assert_eq!(handle_query("5 m to km"), "5 m is equal to 0.0050 km");
//! assert_eq!(handle_query("5 xx to km"), UNSUPPORTED_UNITS_MESSAGE);
//! ```
//!
use crate::core::convert::ConversionRequest;
use crate::core::error::UnitconvError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Reply when the text does not contain `<value> <unit> to <unit>`.
pub const FORMAT_GUIDANCE_MESSAGE: &str =
    "Please provide your query in the format: <value> <from_unit> to <to_unit>.";

/// Reply when either extracted unit is not in the table.
pub const UNSUPPORTED_UNITS_MESSAGE: &str = "Sorry, one or both units are not supported.";

/// Decimal places of the converted value in a chatbot reply.
const REPLY_PRECISION: usize = 4;

/// Stored as Option so a pattern compilation failure degrades to "unparseable"
/// instead of panicking.
static QUERY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 m to km, 2.5ft to in, convert 10 mi to µm
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*([a-zA-Zµnm]+)\s*to\s*([a-zA-Zµnm]+)").ok()
});

/// Extracts the first `<value> <unit> to <unit>` request from `text`.
///
/// Units are returned lower-cased.
pub fn parse_query(text: &str) -> Result<ConversionRequest, UnitconvError> {
    let pattern = QUERY_PATTERN
        .as_ref()
        .ok_or(UnitconvError::QueryUnparseable)?;
    let lowered = text.to_lowercase();
    let captures = pattern
        .captures(&lowered)
        .ok_or(UnitconvError::QueryUnparseable)?;

    let value = captures[1]
        .parse::<f64>()
        .map_err(|_| UnitconvError::QueryUnparseable)?;
    let request = ConversionRequest::new(value, &captures[2], &captures[3]);
    debug!("Parsed query {:?} into {:?}", text, request);
    Ok(request)
}

/// Renders the reply for an already-parsed request. Unit symbols are matched
/// case-insensitively.
pub fn respond_to(request: &ConversionRequest) -> String {
    match request.evaluate() {
        Some(result) => format!(
            "{} {} is equal to {:.*} {}",
            request.value, request.from_unit, REPLY_PRECISION, result, request.to_unit
        ),
        None => UNSUPPORTED_UNITS_MESSAGE.to_string(),
    }
}

/// Answers a free-text conversion query. Never fails; every problem becomes a message.
pub fn handle_query(text: &str) -> String {
    match parse_query(text) {
        Ok(request) => respond_to(&request),
        Err(_) => FORMAT_GUIDANCE_MESSAGE.to_string(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_query() {
        assert_eq!(handle_query("5 m to km"), "5 m is equal to 0.0050 km");
    }

    #[test]
    fn test_query_with_prefix() {
        let reply = handle_query("convert 10 ft to m");
        assert_eq!(reply, "10 ft is equal to 3.0480 m");

        let request = parse_query("convert 10 ft to m").unwrap();
        assert_eq!(request, ConversionRequest::new(10.0, "ft", "m"));
    }

    #[test]
    fn test_unparseable_query() {
        assert_eq!(handle_query("hello world"), FORMAT_GUIDANCE_MESSAGE);
        assert_eq!(handle_query(""), FORMAT_GUIDANCE_MESSAGE);
        assert_eq!(handle_query("m to km"), FORMAT_GUIDANCE_MESSAGE);
        assert_eq!(
            parse_query("hello world"),
            Err(UnitconvError::QueryUnparseable)
        );
    }

    #[test]
    fn test_unsupported_units() {
        assert_eq!(handle_query("5 xx to km"), UNSUPPORTED_UNITS_MESSAGE);
        assert_eq!(handle_query("5 banana to parsec"), UNSUPPORTED_UNITS_MESSAGE);
        assert_eq!(handle_query("5 m to furlongs"), UNSUPPORTED_UNITS_MESSAGE);
    }

    #[test]
    fn test_units_are_case_insensitive() {
        assert_eq!(handle_query("5 M to KM"), handle_query("5 m to km"));
        assert_eq!(handle_query("CONVERT 3 FT TO YD"), "3 ft is equal to 1.0000 yd");
    }

    #[test]
    fn test_respond_to_matches_symbols_ignoring_case() {
        let request = ConversionRequest::new(1.0, "KM", "M");
        assert_eq!(respond_to(&request), "1 KM is equal to 1000.0000 M");
        assert_eq!(
            respond_to(&ConversionRequest::new(1.0, "Km", "parsec")),
            UNSUPPORTED_UNITS_MESSAGE
        );
    }

    #[test]
    fn test_fractional_value_and_no_spaces() {
        assert_eq!(handle_query("2.5ft to in"), "2.5 ft is equal to 30.0000 in");
        assert_eq!(handle_query("1kmtom"), "1 km is equal to 1000.0000 m");
    }

    #[test]
    fn test_micrometer_symbol() {
        assert_eq!(handle_query("1 mm to µm"), "1 mm is equal to 1000.0000 µm");
    }

    #[test]
    fn test_first_match_wins() {
        let request = parse_query("1 km to m and also 2 mi to ft").unwrap();
        assert_eq!(request, ConversionRequest::new(1.0, "km", "m"));
    }

    #[test]
    fn test_sign_and_exponent_are_not_matched() {
        // The minus sign is not part of the pattern, so only the digits are used.
        assert_eq!(
            parse_query("-5 m to km").unwrap(),
            ConversionRequest::new(5.0, "m", "km")
        );
        // "1e3 m to km": the first match starts at "3", with "1e" ignored.
        assert_eq!(
            parse_query("1e3 m to km").unwrap(),
            ConversionRequest::new(3.0, "m", "km")
        );
    }
}
