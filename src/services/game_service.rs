use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::{
        game_store::{GameStore, StorageResult},
        models::{GameEntity, GameSummaryEntity},
    },
    dto::game::{GameResponse, RandomGameResponse},
    error::ServiceError,
    state::SharedState,
};

/// List the titles of every game in the catalog.
pub async fn list_game_names(state: &SharedState) -> Result<Vec<String>, ServiceError> {
    let store = state.require_game_store().await?;
    Ok(store.list_game_names().await?)
}

/// List every full game record, for the encyclopedia view and client caching.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let store = state.require_game_store().await?;
    let games = store.list_games().await?;
    Ok(games.into_iter().map(Into::into).collect())
}

/// Fetch a single game by id.
pub async fn get_game(state: &SharedState, id: Uuid) -> Result<GameResponse, ServiceError> {
    let store = state.require_game_store().await?;
    let Some(game) = store.find_game(id).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };
    Ok(game.into())
}

/// Pick a random game summary to start a round with.
pub async fn random_game(state: &SharedState) -> Result<RandomGameResponse, ServiceError> {
    let store = state.require_game_store().await?;
    let Some(game) = store.random_game().await? else {
        return Err(ServiceError::NotFound("no games available".into()));
    };
    let summary: GameSummaryEntity = game.into();
    Ok(summary.into())
}

/// Seed the configured catalog into a freshly connected store when it holds
/// no games yet. Re-runs are no-ops so restarts never duplicate content.
pub async fn seed_catalog_if_empty(
    store: &Arc<dyn GameStore>,
    catalog: Vec<GameEntity>,
) -> StorageResult<()> {
    let count = store.count_games().await?;
    if count > 0 {
        return Ok(());
    }

    let seeded = catalog.len();
    store.seed_games(catalog).await?;
    info!(count = seeded, "seeded empty game catalog from config");
    Ok(())
}
