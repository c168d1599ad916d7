use crate::{
    dto::guess::{CompareRequest, ComparisonResponse, GuessRequest, GuessResponse},
    error::ServiceError,
    state::{
        SharedState,
        comparison::{compare_games, eq_ignore_case},
    },
};

/// Message returned when a guess matches the target title.
const CORRECT_GUESS_MESSAGE: &str = "Correct guess!";
/// Sentinel hint returned once every clue has been dispensed.
const NO_MORE_CLUES: &str = "No more clues available.";
/// Progression scope for clients that do not send a player key.
const SHARED_PLAYER_KEY: &str = "shared";

/// Score a title guess against the target game.
///
/// A correct guess resets the caller's clue cursor for that game; a wrong
/// guess dispenses the next unseen clue (or the no-more-clues sentinel once
/// the list is exhausted) and advances the cursor.
pub async fn submit_guess(
    state: &SharedState,
    request: GuessRequest,
) -> Result<GuessResponse, ServiceError> {
    let store = state.require_game_store().await?;
    let Some(game) = store.find_game(request.game_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "game `{}` not found",
            request.game_id
        )));
    };

    let player_key = request
        .player_key
        .unwrap_or_else(|| SHARED_PLAYER_KEY.to_owned());

    if eq_ignore_case(&request.guess, &game.name) {
        state.clues().reset(game.id, &player_key);
        return Ok(GuessResponse::correct(CORRECT_GUESS_MESSAGE));
    }

    let cursor = state.clues().advance(game.id, &player_key);
    let hint = game
        .clues
        .get(cursor)
        .cloned()
        .unwrap_or_else(|| NO_MORE_CLUES.to_owned());

    Ok(GuessResponse::wrong(hint))
}

/// Compare a guessed game's attributes against the target game's.
///
/// An unknown target id is a not-found error. An unknown guessed title is
/// not: the verdict map then reports `none` for every attribute the guessed
/// game would have supplied.
pub async fn compare_guess(
    state: &SharedState,
    request: CompareRequest,
) -> Result<ComparisonResponse, ServiceError> {
    let store = state.require_game_store().await?;
    let Some(target) = store.find_game(request.game_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "game `{}` not found",
            request.game_id
        )));
    };

    let guessed = store.find_game_by_name(request.guess_name).await?;
    let comparison = compare_games(&target, guessed.as_ref(), request.guessed_release_year);

    Ok(comparison.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;
    use uuid::Uuid;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::{
            game_store::{GameStore, StorageResult},
            models::GameEntity,
        },
        state::{AppState, comparison::Verdict},
    };

    /// In-memory catalog standing in for the database in service tests.
    struct MemoryGameStore {
        games: Vec<GameEntity>,
    }

    impl GameStore for MemoryGameStore {
        fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
            let found = self.games.iter().find(|game| game.id == id).cloned();
            Box::pin(async move { Ok(found) })
        }

        fn find_game_by_name(
            &self,
            name: String,
        ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
            let found = self
                .games
                .iter()
                .find(|game| eq_ignore_case(&game.name, &name))
                .cloned();
            Box::pin(async move { Ok(found) })
        }

        fn random_game(&self) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
            let first = self.games.first().cloned();
            Box::pin(async move { Ok(first) })
        }

        fn list_game_names(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
            let names = self.games.iter().map(|game| game.name.clone()).collect();
            Box::pin(async move { Ok(names) })
        }

        fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
            let games = self.games.clone();
            Box::pin(async move { Ok(games) })
        }

        fn count_games(&self) -> BoxFuture<'static, StorageResult<u64>> {
            let count = self.games.len() as u64;
            Box::pin(async move { Ok(count) })
        }

        fn seed_games(&self, _games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async move { Ok(()) })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async move { Ok(()) })
        }

        fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async move { Ok(()) })
        }
    }

    fn sample_game() -> GameEntity {
        GameEntity {
            id: Uuid::from_u128(0x10),
            name: "Hollow Knight".into(),
            genre: "Metroidvania".into(),
            platforms: vec!["PC".into(), "Switch".into()],
            release_year: 2017,
            developer: "Team Cherry".into(),
            publisher: "Team Cherry".into(),
            budget: "indie".into(),
            saga: "Hollow Knight".into(),
            pov: "side-scrolling".into(),
            description: String::new(),
            keywords: vec![],
            clues: vec!["First clue".into(), "Second clue".into()],
            cover_image_url: None,
        }
    }

    async fn state_with(games: Vec<GameEntity>) -> crate::state::SharedState {
        let state = AppState::new(AppConfig::default());
        state
            .set_game_store(Arc::new(MemoryGameStore { games }))
            .await;
        state
    }

    fn guess(game_id: Uuid, guess: &str, player_key: Option<&str>) -> GuessRequest {
        GuessRequest {
            game_id,
            guess: guess.into(),
            player_key: player_key.map(Into::into),
        }
    }

    #[tokio::test]
    async fn wrong_guesses_walk_clues_then_sentinel() {
        let game = sample_game();
        let state = state_with(vec![game.clone()]).await;

        let first = submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();
        assert!(!first.correct);
        assert_eq!(first.hint.as_deref(), Some("First clue"));

        let second = submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();
        assert_eq!(second.hint.as_deref(), Some("Second clue"));

        let exhausted = submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();
        assert_eq!(exhausted.hint.as_deref(), Some("No more clues available."));
    }

    #[tokio::test]
    async fn correct_guess_resets_clue_cursor() {
        let game = sample_game();
        let state = state_with(vec![game.clone()]).await;

        submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();

        let correct = submit_guess(&state, guess(game.id, "hollow knight", Some("alice")))
            .await
            .unwrap();
        assert!(correct.correct);
        assert_eq!(correct.message.as_deref(), Some("Correct guess!"));
        assert!(correct.hint.is_none());

        // Next round starts back at the first clue.
        let next = submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();
        assert_eq!(next.hint.as_deref(), Some("First clue"));
    }

    #[tokio::test]
    async fn player_keys_have_independent_progression() {
        let game = sample_game();
        let state = state_with(vec![game.clone()]).await;

        submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();

        let bob = submit_guess(&state, guess(game.id, "Celeste", Some("bob")))
            .await
            .unwrap();
        assert_eq!(bob.hint.as_deref(), Some("First clue"));
    }

    #[tokio::test]
    async fn keyless_requests_share_one_clue_scope() {
        let game = sample_game();
        let state = state_with(vec![game.clone()]).await;

        let first = submit_guess(&state, guess(game.id, "Celeste", None))
            .await
            .unwrap();
        assert_eq!(first.hint.as_deref(), Some("First clue"));

        let second = submit_guess(&state, guess(game.id, "Celeste", None))
            .await
            .unwrap();
        assert_eq!(second.hint.as_deref(), Some("Second clue"));

        // Keyed players are unaffected by the shared scope.
        let keyed = submit_guess(&state, guess(game.id, "Celeste", Some("alice")))
            .await
            .unwrap();
        assert_eq!(keyed.hint.as_deref(), Some("First clue"));
    }

    #[tokio::test]
    async fn unknown_game_id_is_not_found() {
        let state = state_with(vec![sample_game()]).await;

        let err = submit_guess(&state, guess(Uuid::from_u128(0xdead), "Celeste", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn compare_resolves_guess_case_insensitively() {
        let game = sample_game();
        let state = state_with(vec![game.clone()]).await;

        let response = compare_guess(
            &state,
            CompareRequest {
                game_id: game.id,
                guess_name: "HOLLOW KNIGHT".into(),
                guessed_release_year: None,
            },
        )
        .await
        .unwrap();

        assert!(response.correct);
        assert_eq!(response.matches["Platforms"], Verdict::Exact);
        assert_eq!(response.matches["ReleaseYear"], Verdict::Exact);
    }

    #[tokio::test]
    async fn compare_with_unknown_guess_name_reports_none() {
        let game = sample_game();
        let state = state_with(vec![game.clone()]).await;

        let response = compare_guess(
            &state,
            CompareRequest {
                game_id: game.id,
                guess_name: "Not A Real Game".into(),
                guessed_release_year: None,
            },
        )
        .await
        .unwrap();

        assert!(!response.correct);
        assert!(
            response
                .matches
                .values()
                .all(|verdict| *verdict == Verdict::None)
        );
    }

    #[tokio::test]
    async fn compare_unknown_target_is_not_found() {
        let state = state_with(vec![sample_game()]).await;

        let err = compare_guess(
            &state,
            CompareRequest {
                game_id: Uuid::from_u128(0xdead),
                guess_name: "Hollow Knight".into(),
                guessed_release_year: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
