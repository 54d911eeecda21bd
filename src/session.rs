//! Game session: board/state store and move resolver.

use crate::action::UserAction;
use crate::game::{
    Board, COMPUTER_MARK, Cell, GameState, Mark, PlayMode, Position, check_victory, is_full,
};
use crate::opponent;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Read-only view of the session after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The 9-cell board.
    pub board: Board,
    /// The aggregate game state.
    pub state: GameState,
    /// The current play mode.
    pub mode: PlayMode,
}

/// A single game session: the board, the aggregate state, the mode
/// flag, and the opponent's RNG.
///
/// Synchronous and single-threaded; wrap it in
/// [`SharedSession`](crate::SharedSession) to get the delayed computer
/// reply and thread safety.
pub struct GameSession {
    board: Board,
    state: GameState,
    mode: PlayMode,
    rng: SmallRng,
    epoch: u64,
}

impl GameSession {
    /// Creates a new session with an entropy-seeded opponent RNG.
    pub fn new(mode: PlayMode) -> Self {
        Self::with_rng(mode, SmallRng::seed_from_u64(rand::rng().random()))
    }

    /// Creates a session with a fixed opponent seed, for deterministic
    /// tests of the random fallback move.
    pub fn with_seed(mode: PlayMode, seed: u64) -> Self {
        Self::with_rng(mode, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(mode: PlayMode, rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            state: GameState::new(mode),
            mode,
            rng,
            epoch: 0,
        }
    }

    /// Handles one incoming user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: UserAction) {
        match action {
            UserAction::BoardTapped(pos) => {
                if self.mode == PlayMode::Computer
                    && self.state.current_turn == Some(COMPUTER_MARK)
                {
                    debug!(?pos, "tap ignored: computer's turn");
                    return;
                }
                self.apply_move(pos);
            }
            UserAction::PlayAgainButtonClicked => {
                if self.state.has_won || is_full(&self.board) {
                    self.reset();
                } else {
                    debug!("play-again ignored: game still in progress");
                }
            }
            UserAction::SwitchPlayMode => {
                self.mode = self.mode.toggled();
                info!(mode = ?self.mode, "play mode switched");
                self.clear_scores();
                self.reset();
            }
        }
    }

    /// Writes the active mark at `pos` and resolves the consequences:
    /// victory, then draw, then turn toggle.
    ///
    /// A no-op when the game is won or the cell is occupied.
    #[instrument(skip(self), fields(mark = ?self.state.current_turn))]
    pub fn apply_move(&mut self, pos: Position) {
        if self.state.has_won {
            debug!(?pos, "move ignored: game already won");
            return;
        }
        let Some(mark) = self.state.current_turn else {
            return;
        };
        if !self.board.is_empty(pos) {
            debug!(?pos, "move ignored: cell occupied");
            return;
        }

        self.board.set(pos, Cell::Taken(mark));
        debug!(board = %self.board.display(), "mark placed");

        // Victory strictly before draw: a full board with a line is a win.
        self.state = if let Some(line) = check_victory(&self.board, mark) {
            info!(%mark, %line, "game won");
            GameState {
                hint_text: format!("Player '{mark}' Won"),
                current_turn: None,
                victory_line: Some(line),
                has_won: true,
                circle_wins: self.state.circle_wins + u32::from(mark == Mark::Circle),
                cross_wins: self.state.cross_wins + u32::from(mark == Mark::Cross),
                draws: self.state.draws,
            }
        } else if is_full(&self.board) {
            info!("game drawn");
            // Turn stays on the last mover; the next reset alternates
            // away from it, handing the first move to the other mark.
            GameState {
                hint_text: "Game Draw".to_string(),
                draws: self.state.draws + 1,
                ..self.state.clone()
            }
        } else {
            let next = mark.opponent();
            GameState {
                hint_text: GameState::turn_hint(next, self.mode),
                current_turn: Some(next),
                ..self.state.clone()
            }
        };
    }

    /// Clears the board and starts the next game.
    ///
    /// The first move alternates away from the stored turn: `Circle`
    /// hands off to `Cross`, anything else (including the post-win
    /// `None`) yields `Circle`. Score counters survive; a pending
    /// delayed computer reply does not (the epoch moves on).
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.epoch += 1;
        let next = match self.state.current_turn {
            Some(Mark::Circle) => Mark::Cross,
            _ => Mark::Circle,
        };
        self.state = GameState {
            hint_text: GameState::turn_hint(next, self.mode),
            current_turn: Some(next),
            victory_line: None,
            has_won: false,
            ..self.state.clone()
        };
        info!(next_turn = %next, epoch = self.epoch, "board reset");
    }

    /// Zeroes both win counters and the draw counter.
    ///
    /// Independent of [`reset`](Self::reset); invoked only on mode switch.
    pub fn clear_scores(&mut self) {
        self.state = GameState {
            circle_wins: 0,
            cross_wins: 0,
            draws: 0,
            ..self.state.clone()
        };
    }

    /// Whether the scripted opponent owes a move.
    pub fn computer_move_due(&self) -> bool {
        self.mode == PlayMode::Computer
            && !self.state.has_won
            && self.state.current_turn == Some(COMPUTER_MARK)
    }

    /// Computes and applies the computer's move, if one is due.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) {
        if !self.computer_move_due() {
            debug!("no computer move due");
            return;
        }
        if let Some(pos) = opponent::choose_move(&mut self.board, &mut self.rng) {
            debug!(?pos, "computer chose position");
            self.apply_move(pos);
        }
    }

    /// Takes a read-only snapshot for the UI collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            state: self.state.clone(),
            mode: self.mode,
        }
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The aggregate state as it stands.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current play mode.
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Bumped on every reset/mode switch; stale delayed replies
    /// compare against it before firing.
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(PlayMode::Friend)
    }
}
