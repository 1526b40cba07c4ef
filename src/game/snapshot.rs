//! Read-only view of a game for rendering.

use serde::Serialize;

use super::log::LogEntry;
use super::state::{Game, GameStatus};
use crate::board::Square;
use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// Everything a presentation layer needs to draw the current state.
///
/// Borrows from the game, so it cannot outlive the next mutation.
#[derive(Clone, Debug, Serialize)]
pub struct GameSnapshot<'a> {
    pub status: GameStatus,
    pub turn_number: u32,
    pub active_player: PlayerId,
    pub winner: Option<PlayerId>,
    pub last_card: Option<Card>,
    pub players: &'a [Player],
    pub squares: &'a [Square],
    /// Trailing log entries, oldest first.
    pub recent_log: Vec<&'a LogEntry>,
    pub draw_pile: usize,
    pub discard_pile: usize,
}

impl<S> Game<S> {
    /// Snapshot with the configured number of log entries.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            status: self.status,
            turn_number: self.turn_number,
            active_player: self.active_player(),
            winner: self.winner,
            last_card: self.last_card,
            players: &self.players,
            squares: self.board.squares(),
            recent_log: self.recent_log(self.log_tail),
            draw_pile: self.deck.draw_pile_len(),
            discard_pile: self.deck.discard_pile_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::DEFAULT_LOG_TAIL;
    use crate::game::{Game, GameStatus};
    use crate::core::PlayerId;

    #[test]
    fn test_snapshot_reflects_game() {
        let mut game = Game::new_game(2, ["Ann", "Bo"], 5).unwrap();
        for _ in 0..10 {
            if game.is_finished() {
                break;
            }
            game.play_turn().unwrap();
        }

        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, game.status());
        assert_eq!(snapshot.turn_number, game.turn_number());
        assert_eq!(snapshot.active_player, game.active_player());
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.squares.len(), 135);
        assert_eq!(snapshot.recent_log.len(), DEFAULT_LOG_TAIL);
        assert_eq!(snapshot.draw_pile + snapshot.discard_pile, 54);
        assert_eq!(snapshot.last_card, game.last_card());
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Game::new_game(3, Vec::<String>::new(), 1).unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(game.snapshot().status, GameStatus::InProgress);
        assert_eq!(game.snapshot().active_player, PlayerId::new(0));
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["players"][1]["name"], "Player 2");
        assert_eq!(json["squares"].as_array().unwrap().len(), 135);
        assert_eq!(json["recent_log"][0]["message"], "New game with 3 players");
    }
}
