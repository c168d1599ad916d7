use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::validation::validate_player_key,
    state::comparison::{Comparison, Verdict},
};

/// Payload of a name guess for the clue-driven game mode.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    /// Identifier of the target game being guessed.
    pub game_id: Uuid,
    /// Title the player typed.
    #[validate(length(min = 1, max = 200, message = "guess must be 1-200 characters"))]
    pub guess: String,
    /// Optional player/session key scoping the clue progression. Clients that
    /// omit it share a single progression per game.
    #[serde(default)]
    #[validate(custom(function = validate_player_key))]
    pub player_key: Option<String>,
}

/// Outcome of a submitted guess.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    /// Whether the guessed title matched the target.
    pub correct: bool,
    /// Confirmation message, present on a correct guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Next clue (or the no-more-clues sentinel), present on a wrong guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl GuessResponse {
    /// Response for a correct guess.
    pub fn correct(message: impl Into<String>) -> Self {
        Self {
            correct: true,
            message: Some(message.into()),
            hint: None,
        }
    }

    /// Response for a wrong guess carrying the next clue.
    pub fn wrong(hint: impl Into<String>) -> Self {
        Self {
            correct: false,
            message: None,
            hint: Some(hint.into()),
        }
    }
}

/// Payload of the attribute comparison mode.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Identifier of the target game.
    pub game_id: Uuid,
    /// Title of the guessed game, resolved case-insensitively.
    #[validate(length(min = 1, max = 200, message = "guess name must be 1-200 characters"))]
    pub guess_name: String,
    /// Release year supplied by the client; takes priority over the resolved
    /// guessed game's year.
    #[serde(default)]
    pub guessed_release_year: Option<i32>,
}

/// Per-attribute verdict map returned by the comparison mode.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    /// Whether the guessed title matched the target.
    pub correct: bool,
    /// Verdict per attribute, keyed by the attribute's wire name.
    pub matches: IndexMap<String, Verdict>,
}

impl From<Comparison> for ComparisonResponse {
    fn from(comparison: Comparison) -> Self {
        Self {
            correct: comparison.correct,
            matches: comparison
                .fields
                .into_iter()
                .map(|(field, verdict)| (field.to_owned(), verdict))
                .collect(),
        }
    }
}
