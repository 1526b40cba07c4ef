//! The game: authoritative match state, turn play and move resolution.
//!
//! ## Turn flow
//!
//! `play_turn` draws a card for the active player, resolves the move
//! against the board, applies square effects, checks for a winner and
//! hands the turn to the next player who is not sitting out.
//!
//! ## Move resolution
//!
//! - Color cards scan forward for the 1st (single) or 2nd (double) square
//!   of their color. The finish square never matches; running out of
//!   matches lands on the finish.
//! - Picture cards jump to their picture square, which may be behind.
//! - A color card that lands on the shortcut origin jumps to its target.
//! - Landing on the lose-turn square (after any shortcut) sets the skip flag.
//! - Reaching the finish ends the game.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::log::{GameEvent, LogEntry};
use crate::board::{Board, Picture, Square};
use crate::cards::{Card, Deck};
use crate::core::{GameError, GameRng, Player, PlayerId, ShuffleSource};

/// Match lifecycle. Transitions only go forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Being assembled; never observable on a constructed game.
    Setup,
    InProgress,
    Finished,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::Setup => "setup",
            GameStatus::InProgress => "in progress",
            GameStatus::Finished => "finished",
        })
    }
}

/// One effect applied while resolving a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStep {
    /// Color card advance.
    Advanced { from: usize, to: usize },
    /// Picture card jump.
    Jumped { picture: Picture, from: usize, to: usize },
    /// Shortcut taken after a color card.
    Shortcut { from: usize, to: usize },
    /// Skip flag set by the lose-turn square.
    LoseTurn { square: usize },
}

/// Result of `Game::resolve_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub card: Card,
    pub from: usize,
    pub to: usize,
    /// Applied effects in order. At most a move, a shortcut and a lose-turn.
    pub steps: SmallVec<[MoveStep; 3]>,
    pub won: bool,
}

impl MoveOutcome {
    #[must_use]
    pub fn took_shortcut(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, MoveStep::Shortcut { .. }))
    }

    #[must_use]
    pub fn lost_turn(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, MoveStep::LoseTurn { .. }))
    }
}

/// A single match.
///
/// Owns the board, the deck, the shuffle source and every player. Calls
/// must be serialized by the caller; independent matches are independent
/// `Game` values.
///
/// Create one with `GameBuilder` or `Game::new_game`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game<S = GameRng> {
    pub(crate) status: GameStatus,
    pub(crate) board: Board,
    pub(crate) deck: Deck,
    pub(crate) source: S,
    pub(crate) players: Vec<Player>,
    pub(crate) active: usize,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) log: Vector<LogEntry>,
    pub(crate) last_card: Option<Card>,
    pub(crate) turn_number: u32,
    pub(crate) log_tail: usize,
}

impl<S: ShuffleSource> Game<S> {
    /// Assemble a game in `Setup` and start it.
    pub(crate) fn start(board: Board, deck: Deck, source: S, players: Vec<Player>, log_tail: usize) -> Self {
        let mut game = Self {
            status: GameStatus::Setup,
            board,
            deck,
            source,
            players,
            active: 0,
            winner: None,
            log: Vector::new(),
            last_card: None,
            turn_number: 0,
            log_tail,
        };

        game.status = GameStatus::InProgress;
        game.record(GameEvent::GameStarted {
            players: game.players.len(),
        });
        game
    }

    /// Play one turn for the active player.
    ///
    /// Returns the drawn card, or `None` when the player sat the turn out.
    /// A finished game is left untouched and reports `GameFinished`.
    pub fn play_turn(&mut self) -> Result<Option<Card>, GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }

        self.turn_number += 1;
        self.last_card = None;

        let player = self.active_player();
        if self.players[self.active].skip_next_turn {
            self.players[self.active].skip_next_turn = false;
            self.record(GameEvent::TurnSkipped { player });
            self.advance();
            return Ok(None);
        }

        if self.deck.needs_refill() {
            self.record(GameEvent::DeckReshuffled {
                cards: self.deck.discard_pile_len(),
            });
        }
        let card = self.deck.draw(&mut self.source).ok_or(GameError::EmptyDeck)?;
        self.last_card = Some(card);
        self.record(GameEvent::CardDrawn { player, card });

        self.resolve_move(player, card);

        if self.status != GameStatus::Finished {
            self.advance();
        }

        Ok(Some(card))
    }

    /// Move `player` according to `card` and apply square effects.
    ///
    /// Does not touch the deck or the turn order.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not seated in this game.
    pub fn resolve_move(&mut self, player: PlayerId, card: Card) -> MoveOutcome {
        let idx = player.index();
        let from = self.players[idx].position;
        let finish = self.board.finish_index();
        let mut steps = SmallVec::new();

        let mut to = match card {
            Card::Single(color) | Card::Double(color) => {
                let to = self
                    .board
                    .nth_color_ahead(from, color, card.steps())
                    .unwrap_or(finish);
                steps.push(MoveStep::Advanced { from, to });
                self.record(GameEvent::Moved { player, from, to });
                to
            }
            Card::Picture(picture) => match self.board.picture_square(picture) {
                Some(to) => {
                    steps.push(MoveStep::Jumped { picture, from, to });
                    self.record(GameEvent::PictureJump { player, picture, from, to });
                    to
                }
                None => {
                    tracing::warn!(%player, %picture, "picture square missing from board");
                    from
                }
            },
        };

        if !card.is_picture() && !self.board.is_finish(to) {
            if let Some(target) = self.board.square(to).and_then(Square::shortcut_target) {
                steps.push(MoveStep::Shortcut { from: to, to: target });
                self.record(GameEvent::Shortcut { player, from: to, to: target });
                to = target;
            }
        }

        if !self.board.is_finish(to) && self.board.square(to).is_some_and(Square::is_lose_turn) {
            self.players[idx].skip_next_turn = true;
            steps.push(MoveStep::LoseTurn { square: to });
            self.record(GameEvent::LoseTurn { player, square: to });
        }

        self.players[idx].position = to;

        let won = to >= finish;
        if won {
            self.status = GameStatus::Finished;
            self.winner = Some(player);
            self.record(GameEvent::Won { player });
        }

        MoveOutcome {
            player,
            card,
            from,
            to,
            steps,
            won,
        }
    }

    /// Hand the turn to the next player who is not sitting out.
    ///
    /// Flagged players are passed over and their flag cleared. The walk is
    /// bounded: it stops after coming back around to the player it started
    /// from, clearing that player's flag if set. Returns the new active player.
    pub fn advance(&mut self) -> PlayerId {
        let count = self.players.len();
        let start = self.active;
        let mut next = start;

        loop {
            next = (next + 1) % count;
            self.active = next;

            let player = &mut self.players[next];
            if !player.skip_next_turn {
                break;
            }
            player.skip_next_turn = false;
            let id = player.id;
            self.record(GameEvent::SkipConsumed { player: id });

            if next == start {
                tracing::warn!(player = %id, "turn order wrapped around to the starting player");
                break;
            }
        }

        self.active_player()
    }
}

impl<S> Game<S> {
    fn record(&mut self, event: GameEvent) {
        let message = event.describe(&self.players);
        match event {
            GameEvent::GameStarted { .. } | GameEvent::Won { .. } => {
                tracing::info!(turn = self.turn_number, "{message}");
            }
            _ => tracing::debug!(turn = self.turn_number, ?event, "{message}"),
        }
        self.log.push_back(LogEntry {
            turn: self.turn_number,
            event,
            message,
        });
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.players[self.active].id
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Card drawn by the latest turn attempt, if it drew one.
    #[must_use]
    pub fn last_card(&self) -> Option<Card> {
        self.last_card
    }

    /// Turn attempts so far, skipped turns included.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The full log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// The last `n` log entries, oldest first.
    #[must_use]
    pub fn recent_log(&self, n: usize) -> Vec<&LogEntry> {
        let skip = self.log.len().saturating_sub(n);
        self.log.iter().skip(skip).collect()
    }

    /// Messages of the last `n` log entries, oldest first.
    #[must_use]
    pub fn recent_messages(&self, n: usize) -> Vec<&str> {
        self.recent_log(n)
            .into_iter()
            .map(|entry| entry.message.as_str())
            .collect()
    }

    /// The shuffle source driving the deck.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Picture};
    use crate::core::{GameConfig, Unshuffled};
    use crate::game::GameBuilder;
    use proptest::prelude::*;

    fn scripted(player_count: usize, cards: Vec<Card>) -> Game<Unshuffled> {
        GameBuilder::new()
            .player_count(player_count)
            .deck(cards)
            .build_with_source(Unshuffled)
            .unwrap()
    }

    fn place<S>(game: &mut Game<S>, player: usize, position: usize) {
        game.players[player].position = position;
    }

    #[test]
    fn test_new_game_in_progress() {
        let game = scripted(3, vec![Card::Single(Color::Red)]);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.active_player(), PlayerId::new(0));
        assert!(game.players().iter().all(|p| p.position() == 0));
        assert_eq!(game.turn_number(), 0);
        assert_eq!(game.recent_messages(1), vec!["New game with 3 players"]);
    }

    #[test]
    fn test_single_color_moves_to_first_match() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Single(Color::Purple));

        assert_eq!(outcome.to, 2);
        assert_eq!(game.players[0].position(), 2);
        assert_eq!(outcome.steps.as_slice(), &[MoveStep::Advanced { from: 0, to: 2 }]);
    }

    #[test]
    fn test_double_color_moves_to_second_match() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);
        place(&mut game, 0, 2);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Double(Color::Yellow));

        // Yellows ahead of 2: 3, 9, ...
        assert_eq!(outcome.to, 9);
    }

    #[test]
    fn test_shortcut_after_color_card() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Single(Color::Orange));

        assert_eq!(outcome.to, 59);
        assert!(outcome.took_shortcut());
        assert_eq!(
            outcome.steps.as_slice(),
            &[
                MoveStep::Advanced { from: 0, to: 5 },
                MoveStep::Shortcut { from: 5, to: 59 },
            ]
        );
    }

    #[test]
    fn test_double_passes_over_shortcut() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Double(Color::Orange));

        assert_eq!(outcome.to, 11);
        assert!(!outcome.took_shortcut());
    }

    #[test]
    fn test_picture_jump_backward() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);
        place(&mut game, 0, 100);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Picture(Picture::PeppermintForest));

        assert_eq!(outcome.to, 9);
        assert_eq!(game.players[0].position(), 9);
        assert!(!outcome.took_shortcut());
    }

    #[test]
    fn test_picture_card_lands_on_lose_turn() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Picture(Picture::LicoriceLagoon));

        assert_eq!(outcome.to, 120);
        assert!(outcome.lost_turn());
        assert!(game.players[0].skip_next_turn());
    }

    #[test]
    fn test_lose_turn_scenario() {
        let mut game = scripted(2, vec![Card::Single(Color::Green), Card::Single(Color::Red)]);
        place(&mut game, 0, 119);

        // Player 1 lands on the lose-turn square.
        assert_eq!(game.play_turn().unwrap(), Some(Card::Single(Color::Green)));
        assert_eq!(game.players[0].position(), 120);
        assert!(game.players[0].skip_next_turn());
        assert_eq!(game.active_player(), PlayerId::new(1));

        // Player 2 plays; advancing reaches player 1, who is passed over.
        game.play_turn().unwrap();
        assert!(!game.players[0].skip_next_turn());
        assert_eq!(game.active_player(), PlayerId::new(1));
        assert_eq!(game.players[0].position(), 120);
        assert!(game
            .log()
            .iter()
            .any(|e| e.event == GameEvent::SkipConsumed { player: PlayerId::new(0) }));
    }

    #[test]
    fn test_overshoot_to_finish_wins() {
        let mut game = scripted(2, vec![Card::Single(Color::Blue)]);
        place(&mut game, 0, 130);

        game.play_turn().unwrap();

        assert_eq!(game.players[0].position(), 134);
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner().map(Player::id), Some(PlayerId::new(0)));
        // The winner keeps the turn marker.
        assert_eq!(game.active_player(), PlayerId::new(0));
    }

    #[test]
    fn test_finish_color_does_not_match() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);
        place(&mut game, 0, 133);

        let outcome = game.resolve_move(PlayerId::new(0), Card::Single(Color::Red));

        assert_eq!(outcome.to, 134);
        assert!(outcome.won);
    }

    #[test]
    fn test_finished_game_rejects_turns() {
        let mut game = scripted(2, vec![Card::Single(Color::Blue), Card::Single(Color::Red)]);
        place(&mut game, 0, 130);
        game.play_turn().unwrap();

        let positions: Vec<_> = game.players().iter().map(Player::position).collect();
        let log_len = game.log().len();

        assert_eq!(game.play_turn(), Err(GameError::GameFinished));
        assert_eq!(
            game.players().iter().map(Player::position).collect::<Vec<_>>(),
            positions
        );
        assert_eq!(game.log().len(), log_len);
        assert_eq!(game.deck().draw_pile_len(), 1);
    }

    #[test]
    fn test_skip_flag_on_active_player() {
        let mut game = scripted(2, vec![Card::Single(Color::Red)]);
        game.players[0].skip_next_turn = true;

        assert_eq!(game.play_turn().unwrap(), None);
        assert_eq!(game.last_card(), None);
        assert!(!game.players[0].skip_next_turn());
        assert_eq!(game.active_player(), PlayerId::new(1));
        assert_eq!(game.deck().draw_pile_len(), 1);
    }

    #[test]
    fn test_advance_skips_multiple_players() {
        let mut game = scripted(4, vec![Card::Single(Color::Red)]);
        game.players[1].skip_next_turn = true;
        game.players[2].skip_next_turn = true;

        assert_eq!(game.advance(), PlayerId::new(3));
        assert!(game.players.iter().all(|p| !p.skip_next_turn()));
    }

    #[test]
    fn test_advance_terminates_when_everyone_skips() {
        let mut game = scripted(3, vec![Card::Single(Color::Red)]);
        for player in &mut game.players {
            player.skip_next_turn = true;
        }

        assert_eq!(game.advance(), PlayerId::new(0));
        assert!(game.players.iter().all(|p| !p.skip_next_turn()));
    }

    #[test]
    fn test_advance_wraps() {
        let mut game = scripted(3, vec![Card::Single(Color::Red)]);
        assert_eq!(game.advance(), PlayerId::new(1));
        assert_eq!(game.advance(), PlayerId::new(2));
        assert_eq!(game.advance(), PlayerId::new(0));
    }

    #[test]
    fn test_last_card_reset_each_turn() {
        let mut game = scripted(2, vec![Card::Single(Color::Purple)]);
        game.play_turn().unwrap();
        assert_eq!(game.last_card(), Some(Card::Single(Color::Purple)));

        game.players[1].skip_next_turn = true;
        game.active = 1;
        game.play_turn().unwrap();
        assert_eq!(game.last_card(), None);
    }

    #[test]
    fn test_reshuffle_is_logged() {
        let mut game = scripted(2, vec![Card::Single(Color::Purple)]);
        game.play_turn().unwrap();
        game.play_turn().unwrap();

        assert!(game
            .log()
            .iter()
            .any(|e| e.event == GameEvent::DeckReshuffled { cards: 1 }));
        assert_eq!(game.deck().total_len(), 1);
    }

    #[test]
    fn test_recent_log_tail() {
        let mut game = scripted(2, vec![Card::Single(Color::Purple)]);
        for _ in 0..5 {
            game.play_turn().unwrap();
        }

        let tail = game.recent_log(3);
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[2], game.log().last().unwrap());
        assert_eq!(game.recent_log(1000).len(), game.log().len());
    }

    #[test]
    fn test_default_config_game() {
        let game: Game = GameBuilder::from_config(GameConfig::new(2)).build().unwrap();
        assert_eq!(game.deck().total_len(), 54);
    }

    proptest! {
        #[test]
        fn prop_color_card_lands_on_nth_match(
            from in 0usize..134,
            color_idx in 0usize..6,
            double in any::<bool>(),
        ) {
            let color = Color::PALETTE[color_idx];
            let card = if double { Card::Double(color) } else { Card::Single(color) };
            let mut game = scripted(2, vec![card]);
            place(&mut game, 0, from);

            let expected = game.board().nth_color_ahead(from, color, card.steps());
            let outcome = game.resolve_move(PlayerId::new(0), card);

            match expected {
                Some(index) => {
                    let after_shortcut = game
                        .board()
                        .square(index)
                        .and_then(Square::shortcut_target)
                        .unwrap_or(index);
                    prop_assert_eq!(outcome.to, after_shortcut);
                    prop_assert!(outcome.to > from);
                }
                None => {
                    prop_assert_eq!(outcome.to, game.board().finish_index());
                    prop_assert!(game.is_finished());
                }
            }
        }
    }
}
