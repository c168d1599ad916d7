//! Application-level configuration loading, including the seed game catalog.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dao::models::GameEntity;

/// Default location on disk where the server looks for the JSON catalog.
const DEFAULT_CONFIG_PATH: &str = "config/catalog.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_GUESSER_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    catalog: Vec<GameEntity>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to a baked-in catalog.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        count = config.catalog.len(),
                        "loaded seed catalog from config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse catalog config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "catalog config not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read catalog config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Games used to seed an empty catalog store.
    pub fn catalog(&self) -> &[GameEntity] {
        &self.catalog
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    games: Vec<RawGame>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let catalog = value.games.into_iter().map(Into::into).collect::<Vec<_>>();
        Self { catalog }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of a single game inside the configuration file.
struct RawGame {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    genre: String,
    platforms: Vec<String>,
    release_year: i32,
    developer: String,
    publisher: String,
    budget: String,
    saga: String,
    pov: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    clues: Vec<String>,
    #[serde(default)]
    cover_image_url: Option<String>,
}

impl From<RawGame> for GameEntity {
    fn from(value: RawGame) -> Self {
        Self {
            id: value.id.unwrap_or_else(Uuid::new_v4),
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

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in catalog shipped with the binary so a fresh deployment has
/// something to guess against before real content is ingested.
fn default_catalog() -> Vec<GameEntity> {
    vec![
        GameEntity {
            id: Uuid::from_u128(0x1),
            name: "Hollow Knight".into(),
            genre: "Metroidvania".into(),
            platforms: vec!["PC".into(), "Switch".into(), "PS4".into(), "Xbox One".into()],
            release_year: 2017,
            developer: "Team Cherry".into(),
            publisher: "Team Cherry".into(),
            budget: "indie".into(),
            saga: "Hollow Knight".into(),
            pov: "side-scrolling".into(),
            description: "A nail-wielding knight explores the ruined kingdom of Hallownest.".into(),
            keywords: vec!["bugs".into(), "nail".into(), "hand-drawn".into()],
            clues: vec![
                "The protagonist never speaks.".into(),
                "Most characters are insects.".into(),
                "It was funded on Kickstarter.".into(),
            ],
            cover_image_url: None,
        },
        GameEntity {
            id: Uuid::from_u128(0x2),
            name: "Celeste".into(),
            genre: "Platformer".into(),
            platforms: vec!["PC".into(), "Switch".into(), "PS4".into()],
            release_year: 2018,
            developer: "Maddy Makes Games".into(),
            publisher: "Maddy Makes Games".into(),
            budget: "indie".into(),
            saga: "Celeste".into(),
            pov: "side-scrolling".into(),
            description: "Madeline climbs a mountain while wrestling with her own doubts.".into(),
            keywords: vec!["mountain".into(), "dash".into(), "strawberries".into()],
            clues: vec![
                "It grew out of a PICO-8 prototype.".into(),
                "Collecting berries is optional and famously hard.".into(),
            ],
            cover_image_url: None,
        },
        GameEntity {
            id: Uuid::from_u128(0x3),
            name: "Doom".into(),
            genre: "Shooter".into(),
            platforms: vec!["PC".into()],
            release_year: 1993,
            developer: "id Software".into(),
            publisher: "id Software".into(),
            budget: "AA".into(),
            saga: "Doom".into(),
            pov: "first-person".into(),
            description: "A space marine fights demons on the moons of Mars.".into(),
            keywords: vec!["demons".into(), "shotgun".into(), "mars".into()],
            clues: vec![
                "It popularized an entire genre in 1993.".into(),
                "People port it to pregnancy tests for fun.".into(),
            ],
            cover_image_url: None,
        },
        GameEntity {
            id: Uuid::from_u128(0x4),
            name: "Stardew Valley".into(),
            genre: "Farming sim".into(),
            platforms: vec!["PC".into(), "Switch".into(), "PS4".into(), "Xbox One".into()],
            release_year: 2016,
            developer: "ConcernedApe".into(),
            publisher: "ConcernedApe".into(),
            budget: "indie".into(),
            saga: "Stardew Valley".into(),
            pov: "top-down".into(),
            description: "You inherit a run-down farm and rebuild a life in Pelican Town.".into(),
            keywords: vec!["farm".into(), "fishing".into(), "pixel art".into()],
            clues: vec![
                "It was made almost entirely by one person.".into(),
                "The community center wants your parsnips.".into(),
            ],
            cover_image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_distinct_ids() {
        let catalog = default_catalog();
        let mut ids: Vec<Uuid> = catalog.iter().map(|game| game.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn default_catalog_entries_have_clues() {
        for game in default_catalog() {
            assert!(!game.clues.is_empty(), "game {} has no clues", game.name);
        }
    }

    #[test]
    fn raw_config_parses_camel_case_games() {
        let json = r#"{
            "games": [{
                "name": "Outer Wilds",
                "genre": "Adventure",
                "platforms": ["PC", "PS4"],
                "releaseYear": 2019,
                "developer": "Mobius Digital",
                "publisher": "Annapurna Interactive",
                "budget": "indie",
                "saga": "Outer Wilds",
                "pov": "first-person",
                "clues": ["The sun keeps exploding."]
            }]
        }"#;

        let raw: RawConfig = serde_json::from_str(json).unwrap();
        let config: AppConfig = raw.into();

        assert_eq!(config.catalog().len(), 1);
        let game = &config.catalog()[0];
        assert_eq!(game.name, "Outer Wilds");
        assert_eq!(game.release_year, 2019);
        assert!(game.keywords.is_empty());
        assert!(game.cover_image_url.is_none());
    }
}
