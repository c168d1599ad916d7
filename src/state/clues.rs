use dashmap::DashMap;
use uuid::Uuid;

/// Cursor key: which player is guessing which game.
type ClueKey = (Uuid, String);

/// Tracks how many clues each player has consumed per game.
///
/// Cursors are scoped to `(game id, player key)` so concurrent players of the
/// same game do not interfere with each other's clue progression. The map is
/// process-lifetime state; a restart simply starts every player back at the
/// first clue.
#[derive(Debug, Default)]
pub struct ClueProgress {
    cursors: DashMap<ClueKey, usize>,
}

impl ClueProgress {
    /// Create an empty progression table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current cursor for the key and advance it by one.
    ///
    /// The entry guard keeps read-and-increment atomic under concurrent
    /// requests for the same key.
    pub fn advance(&self, game_id: Uuid, player_key: &str) -> usize {
        let mut entry = self
            .cursors
            .entry((game_id, player_key.to_owned()))
            .or_insert(0);
        let cursor = *entry;
        *entry += 1;
        cursor
    }

    /// Reset the cursor for the key, called after a correct guess.
    pub fn reset(&self, game_id: Uuid, player_key: &str) {
        self.cursors.remove(&(game_id, player_key.to_owned()));
    }

    /// Current cursor position without advancing it.
    pub fn position(&self, game_id: Uuid, player_key: &str) -> usize {
        self.cursors
            .get(&(game_id, player_key.to_owned()))
            .map(|entry| *entry)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_returns_sequential_cursors() {
        let progress = ClueProgress::new();
        let game = Uuid::new_v4();

        assert_eq!(progress.advance(game, "alice"), 0);
        assert_eq!(progress.advance(game, "alice"), 1);
        assert_eq!(progress.advance(game, "alice"), 2);
        assert_eq!(progress.position(game, "alice"), 3);
    }

    #[test]
    fn reset_starts_over() {
        let progress = ClueProgress::new();
        let game = Uuid::new_v4();

        progress.advance(game, "alice");
        progress.advance(game, "alice");
        progress.reset(game, "alice");

        assert_eq!(progress.position(game, "alice"), 0);
        assert_eq!(progress.advance(game, "alice"), 0);
    }

    #[test]
    fn players_do_not_interfere() {
        let progress = ClueProgress::new();
        let game = Uuid::new_v4();

        progress.advance(game, "alice");
        progress.advance(game, "alice");
        assert_eq!(progress.advance(game, "bob"), 0);

        progress.reset(game, "bob");
        assert_eq!(progress.position(game, "alice"), 2);
    }

    #[test]
    fn games_do_not_interfere() {
        let progress = ClueProgress::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        progress.advance(first, "alice");
        assert_eq!(progress.advance(second, "alice"), 0);
    }
}
