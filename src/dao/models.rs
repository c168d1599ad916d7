use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable game reference record shared across layers.
///
/// Created by content ingestion (or catalog seeding) and never mutated by
/// gameplay requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key of the game.
    pub id: Uuid,
    /// Canonical game title; guesses are matched against it case-insensitively.
    pub name: String,
    /// Main genre label.
    pub genre: String,
    /// Platforms the game was released on.
    pub platforms: Vec<String>,
    /// First release year.
    pub release_year: i32,
    /// Studio that developed the game.
    pub developer: String,
    /// Company that published the game.
    pub publisher: String,
    /// Budget class (free-form label, e.g. "AAA" or "indie").
    pub budget: String,
    /// Saga / franchise the game belongs to.
    pub saga: String,
    /// Point of view (e.g. "first-person").
    pub pov: String,
    /// Short description shown in the encyclopedia views.
    pub description: String,
    /// Keywords used by the keyword guessing mode.
    pub keywords: Vec<String>,
    /// Progressively revealed hints, in reveal order.
    pub clues: Vec<String>,
    /// Cover art location, when available.
    pub cover_image_url: Option<String>,
}

/// Reduced projection of a game handed to clients that must not see the
/// attributes they are supposed to guess.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummaryEntity {
    /// Primary key of the game.
    pub id: Uuid,
    /// Canonical game title.
    pub name: String,
    /// Cover art location, when available.
    pub cover_image_url: Option<String>,
    /// Keywords used by the keyword guessing mode.
    pub keywords: Vec<String>,
}

impl From<GameEntity> for GameSummaryEntity {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cover_image_url: entity.cover_image_url,
            keywords: entity.keywords,
        }
    }
}
