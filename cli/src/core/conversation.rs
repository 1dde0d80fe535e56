//! # unitconv Conversation History
//!
//! File: cli/src/core/conversation.rs
//!
//! ## Overview
//!
//! The chatbot keeps an ordered log of who said what. The log is a plain
//! value owned by whichever front end runs the chat: the REPL keeps one on
//! its stack, and the HTTP API receives it in each request and sends the
//! updated copy back. Nothing here is global.
//!
//! ## Architecture
//!
//! - `Speaker`: `You` or `Bot`.
//! - `ChatEntry`: one `(speaker, message)` pair.
//! - `Conversation`: append-only list of entries, optionally capped to the
//!   most recent `max_history` entries. `submit` answers one message through
//!   the query parser and records both sides.
//!
use crate::core::query;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    You,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub message: String,
}

impl ChatEntry {
    pub fn new(speaker: Speaker, message: impl Into<String>) -> Self {
        Self {
            speaker,
            message: message.into(),
        }
    }
}

/// Caller-owned chat history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    entries: Vec<ChatEntry>,
    max_history: Option<usize>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A conversation that keeps only the `max_history` most recent entries.
    pub fn with_limit(max_history: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            max_history,
        }
    }

    /// Resumes a conversation from previously returned entries.
    pub fn from_entries(entries: Vec<ChatEntry>, max_history: Option<usize>) -> Self {
        let mut conversation = Self {
            entries,
            max_history,
        };
        conversation.enforce_limit();
        conversation
    }

    /// Answers `input` and records the exchange.
    ///
    /// Blank input is ignored: nothing is recorded and `None` is returned.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty chat message");
            return None;
        }
        let reply = query::handle_query(trimmed);
        self.entries.push(ChatEntry::new(Speaker::You, trimmed));
        self.entries.push(ChatEntry::new(Speaker::Bot, reply.clone()));
        self.enforce_limit();
        Some(reply)
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ChatEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the history as `"<label>: <message>"` lines using the given speaker labels.
    pub fn transcript(&self, user_label: &str, bot_label: &str) -> String {
        self.entries
            .iter()
            .map(|entry| {
                let label = match entry.speaker {
                    Speaker::You => user_label,
                    Speaker::Bot => bot_label,
                };
                format!("{}: {}", label, entry.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.max_history {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
    }
}
