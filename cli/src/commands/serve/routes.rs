//! # unitconv HTTP Route Handlers
//!
//! File: cli/src/commands/serve/routes.rs
//!
//! ## Overview
//!
//! Thin JSON adapters over the core. Each handler runs one synchronous core
//! call; no state is shared between requests apart from the read-only
//! `AppState` settings.
//!
use crate::commands::convert::INVALID_UNIT_MESSAGE;
use crate::core::conversation::{ChatEntry, Conversation};
use crate::core::convert;
use crate::core::error::UnitconvError;
use crate::core::units::{UnitEntry, UnitTable};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Read-only settings shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub precision: usize,
    pub max_history: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertBody {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ConvertReply {
    pub result: f64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorReply {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatEntry>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    /// `None` when the message was blank and nothing was recorded.
    pub reply: Option<String>,
    pub history: Vec<ChatEntry>,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_units() -> Json<Vec<UnitEntry>> {
    Json(UnitTable::standard().entries().to_vec())
}

pub async fn convert_units(
    State(state): State<AppState>,
    Json(body): Json<ConvertBody>,
) -> Result<Json<ConvertReply>, (StatusCode, Json<ErrorReply>)> {
    debug!("POST /api/convert {:?}", body);
    let not_found = |unit: String| {
        info!("Rejecting conversion with unknown unit '{}'", unit);
        (
            StatusCode::NOT_FOUND,
            Json(ErrorReply {
                error: INVALID_UNIT_MESSAGE.to_string(),
            }),
        )
    };

    let result = match convert::try_convert(body.value, &body.from_unit, &body.to_unit) {
        Ok(result) => result,
        Err(UnitconvError::UnitNotFound { unit }) => return Err(not_found(unit)),
        Err(out_of_range @ UnitconvError::ResultOutOfRange { .. }) => {
            info!("Rejecting conversion: {}", out_of_range);
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorReply {
                    error: out_of_range.to_string(),
                }),
            ));
        }
        Err(other) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorReply {
                    error: other.to_string(),
                }),
            ))
        }
    };
    let message = convert::format_manual(
        body.value,
        &body.from_unit,
        result,
        &body.to_unit,
        state.precision,
    );
    Ok(Json(ConvertReply { result, message }))
}

pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatBody>) -> Json<ChatReply> {
    debug!(
        "POST /api/chat {:?} with {} history entries",
        body.message,
        body.history.len()
    );
    let mut conversation = Conversation::from_entries(body.history, state.max_history);
    let reply = conversation.submit(&body.message);
    Json(ChatReply {
        reply,
        history: conversation.into_entries(),
    })
}
