//! GameGuesser backend binary entrypoint wiring REST routes and the MongoDB catalog store.

use std::{env, net::SocketAddr};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dao;
mod dto;
mod error;
mod routes;
mod services;
mod state;

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app_config = AppConfig::load();
    let app_state = AppState::new(app_config);

    spawn_storage_supervisor(&app_state);

    // Build the HTTP router once the shared state is ready.
    let app = build_router(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Launch the background task that connects the MongoDB catalog store, seeds
/// it when empty, and keeps the shared state out of degraded mode.
#[cfg(feature = "mongo-store")]
fn spawn_storage_supervisor(app_state: &state::SharedState) {
    use std::sync::Arc;

    use crate::dao::game_store::{
        GameStore,
        mongodb::{MongoConfig, MongoGameStore},
    };

    let uri = env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let db_name = env::var("MONGO_DB").ok();
    let catalog = app_state.config().catalog().to_vec();

    tokio::spawn(services::storage_supervisor::run(
        app_state.clone(),
        move || {
            let uri = uri.clone();
            let db_name = db_name.clone();
            let catalog = catalog.clone();
            async move {
                let mongo_config = MongoConfig::from_uri(&uri, db_name.as_deref()).await?;
                let store: Arc<dyn GameStore> = Arc::new(MongoGameStore::connect(mongo_config).await?);
                services::game_service::seed_catalog_if_empty(&store, catalog).await?;
                Ok(store)
            }
        },
    ));
}

#[cfg(not(feature = "mongo-store"))]
fn spawn_storage_supervisor(_app_state: &state::SharedState) {
    tracing::warn!("built without a storage backend; serving in degraded mode");
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: state::SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
