//! # unitconv Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! One-shot version of the chatbot: the words after `ask` are joined into a
//! single query and the reply is printed.
//!
//! ```bash
//! unitconv ask convert 10 ft to m   # 10 ft is equal to 3.0480 m
//! unitconv ask "hello"              # format guidance
//! ```
//!
//! Unparseable text and unsupported units are answered with a message, not an
//! error, so this command always exits successfully.
//!
use crate::core::error::Result;
use crate::core::query;
use clap::Parser;
use tracing::info;

/// Arguments for `unitconv ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The query, e.g. `5 m to km`. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl AskArgs {
    pub fn query(&self) -> String {
        self.text.join(" ")
    }
}

/// Handles `unitconv ask`.
pub fn handle_ask(args: AskArgs) -> Result<()> {
    let text = args.query();
    info!("Handling ask command: {:?}", text);
    println!("{}", query::handle_query(&text));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_words() {
        let args = AskArgs::try_parse_from(["ask", "convert", "10", "ft", "to", "m"]).unwrap();
        assert_eq!(args.query(), "convert 10 ft to m");
    }

    #[test]
    fn test_accepts_single_quoted_query() {
        let args = AskArgs::try_parse_from(["ask", "5 m to km"]).unwrap();
        assert_eq!(args.query(), "5 m to km");
    }

    #[test]
    fn test_accepts_leading_hyphen() {
        let args = AskArgs::try_parse_from(["ask", "-5", "m", "to", "km"]).unwrap();
        assert_eq!(args.query(), "-5 m to km");
    }

    #[test]
    fn test_requires_text() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }
}
