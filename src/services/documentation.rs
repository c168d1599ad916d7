use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the GameGuesser backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::games::get_game_names,
        crate::routes::games::get_games_full,
        crate::routes::games::get_random_game,
        crate::routes::games::get_game_by_id,
        crate::routes::games::submit_guess,
        crate::routes::games::compare_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::game::GameResponse,
            crate::dto::game::RandomGameResponse,
            crate::dto::guess::GuessRequest,
            crate::dto::guess::GuessResponse,
            crate::dto::guess::CompareRequest,
            crate::dto::guess::ComparisonResponse,
            crate::state::comparison::Verdict,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "Game catalog, guess scoring, and attribute comparison"),
    )
)]
pub struct ApiDoc;
