use mongodb::bson::{Binary, Document, doc, spec::BinarySubtype};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::GameEntity;

/// Persisted shape of a game record inside the `games` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    genre: String,
    platforms: Vec<String>,
    release_year: i32,
    developer: String,
    publisher: String,
    budget: String,
    saga: String,
    pov: String,
    description: String,
    keywords: Vec<String>,
    clues: Vec<String>,
    #[serde(default)]
    cover_image_url: Option<String>,
}

impl From<GameEntity> for MongoGameDocument {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            genre: value.genre,
            platforms: value.platforms,
            release_year: value.release_year,
            developer: value.developer,
            publisher: value.publisher,
            budget: value.budget,
            saga: value.saga,
            pov: value.pov,
            description: value.description,
            keywords: value.keywords,
            clues: value.clues,
            cover_image_url: value.cover_image_url,
        }
    }
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            genre: value.genre,
            platforms: value.platforms,
            release_year: value.release_year,
            developer: value.developer,
            publisher: value.publisher,
            budget: value.budget,
            saga: value.saga,
            pov: value.pov,
            description: value.description,
            keywords: value.keywords,
            clues: value.clues,
            cover_image_url: value.cover_image_url,
        }
    }
}

/// Name-only projection used when listing titles, so the autocomplete path
/// does not pull clue and description payloads.
#[derive(Debug, Deserialize)]
pub struct GameNameProjection {
    /// Canonical game title.
    pub name: String,
}

fn uuid_as_binary(id: Uuid) -> Binary {
    Binary {
        subtype: BinarySubtype::Uuid,
        bytes: id.into_bytes().to_vec(),
    }
}

/// Filter document matching a game by primary key.
pub fn doc_id(id: Uuid) -> Document {
    doc! {"_id": uuid_as_binary(id)}
}
