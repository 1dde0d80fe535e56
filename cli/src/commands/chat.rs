//! # unitconv Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! An interactive chatbot session on the terminal. Each line typed is sent
//! through the query parser and answered immediately; the exchange is kept in
//! a `Conversation` owned by this loop.
//!
//! ```text
//! Type your conversion query (e.g. 5 m to km or convert 5 m to km). Type 'bye' to quit.
//! You: 5 m to km
//! Bot: 5 m is equal to 0.0050 km
//! You: bye
//! Bot: Goodbye!
//! ```
//!
//! The session ends on `bye`, `exit`, `quit` (any case) or end of input.
//! With `--transcript` the full history is printed when the session ends.
//!
use crate::core::config::{ChatConfig, Config};
use crate::core::conversation::Conversation;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

/// Arguments for `unitconv chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Print the whole conversation when the session ends.
    #[arg(long)]
    pub transcript: bool,
}

/// Handles `unitconv chat` on stdin/stdout.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Starting chat session...");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let conversation = run_session(stdin.lock(), stdout.lock(), &config.chat, args.transcript)?;
    info!("Chat session ended after {} message(s).", conversation.len());
    Ok(())
}

/// Runs the read-reply loop until an exit word or end of input, returning the history.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    chat: &ChatConfig,
    print_transcript: bool,
) -> Result<Conversation> {
    let mut conversation = Conversation::with_limit(chat.max_history);

    writeln!(
        output,
        "Type your conversion query (e.g. 5 m to km or convert 5 m to km). Type 'bye' to quit."
    )
    .context("Failed to write to output")?;

    loop {
        write!(output, "{}: ", chat.user_label).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        // Raw bytes, so one badly encoded line cannot end the session.
        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("End of input reached");
            writeln!(output).context("Failed to write to output")?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim();
        if EXIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
            writeln!(output, "{}: Goodbye!", chat.bot_label).context("Failed to write to output")?;
            break;
        }

        if let Some(reply) = conversation.submit(trimmed) {
            writeln!(output, "{}: {}", chat.bot_label, reply)
                .context("Failed to write reply")?;
        }
    }

    if print_transcript && !conversation.is_empty() {
        writeln!(
            output,
            "\n--- Conversation ---\n{}",
            conversation.transcript(&chat.user_label, &chat.bot_label)
        )
        .context("Failed to write transcript")?;
    }

    Ok(conversation)
}
