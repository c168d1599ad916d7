pub mod game;
pub mod guess;
pub mod health;
pub mod validation;
