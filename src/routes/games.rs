use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        game::{GameResponse, RandomGameResponse},
        guess::{CompareRequest, ComparisonResponse, GuessRequest, GuessResponse},
    },
    error::AppError,
    services::{game_service, guess_service},
    state::SharedState,
};

/// Routes serving the game catalog and the two guessing modes.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(get_game_names))
        .route("/games/full", get(get_games_full))
        .route("/games/random", get(get_random_game))
        .route("/games/{id}", get(get_game_by_id))
        .route("/games/guess", post(submit_guess))
        .route("/games/compare", post(compare_game))
}

#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses((status = 200, description = "Titles of every game", body = [String]))
)]
/// Return the titles of every game, used for guess autocompletion.
pub async fn get_game_names(
    State(state): State<SharedState>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = game_service::list_game_names(&state).await?;
    Ok(Json(names))
}

#[utoipa::path(
    get,
    path = "/games/full",
    tag = "games",
    responses((status = 200, description = "Every full game record", body = [GameResponse]))
)]
/// Return every full game record, used by clients to build a local cache.
pub async fn get_games_full(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let games = game_service::list_games(&state).await?;
    Ok(Json(games))
}

#[utoipa::path(
    get,
    path = "/games/random",
    tag = "games",
    responses(
        (status = 200, description = "Random game summary", body = RandomGameResponse),
        (status = 404, description = "The catalog is empty")
    )
)]
/// Pick a random game to start a round with.
pub async fn get_random_game(
    State(state): State<SharedState>,
) -> Result<Json<RandomGameResponse>, AppError> {
    let summary = game_service::random_game(&state).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Full game record", body = GameResponse),
        (status = 404, description = "Unknown game id")
    )
)]
/// Return the full record of a single game.
pub async fn get_game_by_id(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameResponse>, AppError> {
    let game = game_service::get_game(&state, id).await?;
    Ok(Json(game))
}

#[utoipa::path(
    post,
    path = "/games/guess",
    tag = "games",
    request_body = GuessRequest,
    responses(
        (status = 200, description = "Guess scored; wrong guesses carry the next clue", body = GuessResponse),
        (status = 404, description = "Unknown game id")
    )
)]
/// Score a title guess and dispense the next clue when it is wrong.
pub async fn submit_guess(
    State(state): State<SharedState>,
    Json(payload): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, AppError> {
    payload.validate()?;
    let response = guess_service::submit_guess(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/games/compare",
    tag = "games",
    request_body = CompareRequest,
    responses(
        (status = 200, description = "Per-attribute verdicts", body = ComparisonResponse),
        (status = 404, description = "Unknown target game id")
    )
)]
/// Compare a guessed game's attributes against the target game's.
pub async fn compare_game(
    State(state): State<SharedState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<ComparisonResponse>, AppError> {
    payload.validate()?;
    let response = guess_service::compare_guess(&state, payload).await?;
    Ok(Json(response))
}
