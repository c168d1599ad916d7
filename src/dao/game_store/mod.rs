#[cfg(feature = "mongo-store")]
pub mod mongodb;

use std::error::Error;

use futures::future::BoxFuture;
use thiserror::Error;
use uuid::Uuid;

use crate::dao::models::GameEntity;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not serve the request.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human readable description of the failed operation.
        message: String,
        /// Backend-specific cause.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}

/// Abstraction over the persistence layer holding the game catalog.
///
/// Lookups by name are case-insensitive so that guessed titles typed by
/// players resolve regardless of capitalization.
pub trait GameStore: Send + Sync {
    /// Fetch a single game by its identifier.
    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Fetch a single game by title, ignoring case.
    fn find_game_by_name(
        &self,
        name: String,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Pick one game uniformly at random, or `None` when the catalog is empty.
    fn random_game(&self) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// List the titles of every game in the catalog.
    fn list_game_names(&self) -> BoxFuture<'static, StorageResult<Vec<String>>>;
    /// List every full game record.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Number of games currently stored.
    fn count_games(&self) -> BoxFuture<'static, StorageResult<u64>>;
    /// Insert a batch of games, used to seed an empty catalog.
    fn seed_games(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>>;
    /// Verify the backend is reachable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Re-establish the backend connection after a failed health check.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
