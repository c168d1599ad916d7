/// OpenAPI document aggregation.
pub mod documentation;
/// Catalog queries and seeding.
pub mod game_service;
/// Guess scoring, clue dispensing, and attribute comparison.
pub mod guess_service;
/// Health status reporting.
pub mod health_service;
/// Background storage connection supervision.
pub mod storage_supervisor;
