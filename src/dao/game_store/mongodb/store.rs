use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{
    Client, Collection, Database,
    bson::doc,
    options::{Collation, CollationStrength, IndexOptions},
};
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{GameNameProjection, MongoGameDocument, doc_id},
};
use crate::dao::{
    game_store::{GameStore, StorageResult},
    models::GameEntity,
};

const GAME_COLLECTION_NAME: &str = "games";

/// MongoDB-backed [`GameStore`] implementation.
#[derive(Clone)]
pub struct MongoGameStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

/// Collation that makes title lookups case-insensitive.
fn name_collation() -> Collation {
    Collation::builder()
        .locale("en")
        .strength(CollationStrength::Secondary)
        .build()
}

impl MongoGameStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let collection = self.collection().await;
        let index = mongodb::IndexModel::builder()
            .keys(doc! {"name": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("game_name_idx".to_owned()))
                    .collation(Some(name_collation()))
                    .build(),
            )
            .build();

        collection
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: GAME_COLLECTION_NAME,
                index: "name",
                source,
            })?;

        Ok(())
    }

    async fn collection(&self) -> Collection<MongoGameDocument> {
        let guard = self.inner.state.read().await;
        guard
            .database
            .collection::<MongoGameDocument>(GAME_COLLECTION_NAME)
    }

    async fn find_game(&self, id: Uuid) -> MongoResult<Option<GameEntity>> {
        let collection = self.collection().await;

        let document = collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::LoadGame { id, source })?;

        Ok(document.map(Into::into))
    }

    async fn find_game_by_name(&self, name: String) -> MongoResult<Option<GameEntity>> {
        let collection = self.collection().await;

        let document = collection
            .find_one(doc! {"name": &name})
            .collation(name_collation())
            .await
            .map_err(|source| MongoDaoError::FindByName { name, source })?;

        Ok(document.map(Into::into))
    }

    async fn random_game(&self) -> MongoResult<Option<GameEntity>> {
        let collection = self.collection().await;

        let count = collection
            .count_documents(doc! {})
            .await
            .map_err(|source| MongoDaoError::CountGames { source })?;
        if count == 0 {
            return Ok(None);
        }

        let skip = rand::rng().random_range(0..count);
        let document = collection
            .find(doc! {})
            .skip(skip)
            .limit(1)
            .await
            .map_err(|source| MongoDaoError::RandomGame { source })?
            .try_next()
            .await
            .map_err(|source| MongoDaoError::RandomGame { source })?;

        Ok(document.map(Into::into))
    }

    async fn list_game_names(&self) -> MongoResult<Vec<String>> {
        let collection = self.collection().await.clone_with_type::<GameNameProjection>();

        let documents: Vec<GameNameProjection> = collection
            .find(doc! {})
            .projection(doc! {"name": 1, "_id": 0})
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        Ok(documents.into_iter().map(|doc| doc.name).collect())
    }

    async fn list_games(&self) -> MongoResult<Vec<GameEntity>> {
        let collection = self.collection().await;

        let documents: Vec<MongoGameDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn count_games(&self) -> MongoResult<u64> {
        let collection = self.collection().await;

        collection
            .count_documents(doc! {})
            .await
            .map_err(|source| MongoDaoError::CountGames { source })
    }

    async fn seed_games(&self, games: Vec<GameEntity>) -> MongoResult<()> {
        if games.is_empty() {
            return Ok(());
        }

        let collection = self.collection().await;
        let documents: Vec<MongoGameDocument> = games.into_iter().map(Into::into).collect();

        collection
            .insert_many(documents)
            .await
            .map_err(|source| MongoDaoError::SeedGames { source })?;

        Ok(())
    }
}

impl GameStore for MongoGameStore {
    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await.map_err(Into::into) })
    }

    fn find_game_by_name(
        &self,
        name: String,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game_by_name(name).await.map_err(Into::into) })
    }

    fn random_game(&self) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.random_game().await.map_err(Into::into) })
    }

    fn list_game_names(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let store = self.clone();
        Box::pin(async move { store.list_game_names().await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn count_games(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.count_games().await.map_err(Into::into) })
    }

    fn seed_games(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.seed_games(games).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
