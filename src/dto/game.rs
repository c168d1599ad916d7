use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dao::models::{GameEntity, GameSummaryEntity};

/// Full game record exposed to clients (encyclopedia and compare modes).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Game identifier.
    pub id: Uuid,
    /// Canonical title.
    pub name: String,
    /// Main genre label.
    pub genre: String,
    /// Release platforms.
    pub platforms: Vec<String>,
    /// First release year.
    pub release_year: i32,
    /// Developing studio.
    pub developer: String,
    /// Publishing company.
    pub publisher: String,
    /// Budget class label.
    pub budget: String,
    /// Saga / franchise.
    pub saga: String,
    /// Point of view.
    pub pov: String,
    /// Short description.
    pub description: String,
    /// Keyword list for the keyword mode.
    pub keywords: Vec<String>,
    /// Progressive clues, in reveal order.
    pub clues: Vec<String>,
    /// Cover art location, when available.
    pub cover_image_url: Option<String>,
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            genre: entity.genre,
            platforms: entity.platforms,
            release_year: entity.release_year,
            developer: entity.developer,
            publisher: entity.publisher,
            budget: entity.budget,
            saga: entity.saga,
            pov: entity.pov,
            description: entity.description,
            keywords: entity.keywords,
            clues: entity.clues,
            cover_image_url: entity.cover_image_url,
        }
    }
}

/// Payload of the random-game endpoint: enough to start a round without
/// leaking the attributes the player is supposed to guess.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomGameResponse {
    /// Game identifier, passed back with guesses.
    pub id: Uuid,
    /// Canonical title.
    pub name: String,
    /// Cover art location, when available.
    pub cover_image_url: Option<String>,
    /// Keyword list for the keyword mode.
    pub keywords: Vec<String>,
}

impl From<GameSummaryEntity> for RandomGameResponse {
    fn from(entity: GameSummaryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cover_image_url: entity.cover_image_url,
            keywords: entity.keywords,
        }
    }
}
