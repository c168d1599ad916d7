/// Game catalog storage and retrieval operations.
pub mod game_store;
/// Database model definitions.
pub mod models;
