//! Game module - the per-session state machine
//!
//! Composes [`BoardState`] operations the way a front end drives them:
//! spawn two tiles on start, merge on every slide, spawn only when the slide
//! changed the grid, and re-check the terminal states after every move.
//!
//! ```text
//! Active --slide (changed)--> Active + spawn
//! Active --slide (no change)--> Active
//! Active --win tile present--> Won        (slides rejected)
//! Active --no move left-----> GameOver   (slides rejected)
//! Won | GameOver --restart--> Active with two fresh tiles
//! ```
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tui_2048_core::{BoardState, Game};
//! use tui_2048_core::types::{Direction, GameAction, Status};
//!
//! let mut game = Game::new(BoardState::default(), StdRng::seed_from_u64(7));
//! game.start();
//! assert_eq!(game.board().empty_positions().len(), 14);
//!
//! game.apply_action(GameAction::Slide(Direction::Left));
//! assert_eq!(game.status(), Status::Active);
//! ```

use log::{debug, info, warn};
use rand::Rng;

use crate::board::BoardState;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Position, Status, STARTING_TILES};

/// What an action did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The slide changed the grid; `spawned` is the new tile, if one fit
    Moved { spawned: Option<(Position, u32)> },
    /// Nothing changed (slide into a wall, or undo with nothing to restore)
    Unchanged,
    /// The session is terminal; slides are ignored until restart
    Rejected,
    Undone,
    Restarted,
}

pub struct Game<R: Rng> {
    board: BoardState,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(board: BoardState, rng: R) -> Self {
        Self { board, rng }
    }

    /// Seed an empty board with its starting tiles
    ///
    /// A restored board that already has tiles is left alone.
    pub fn start(&mut self) {
        if self.board.empty_positions().len() == self.board.size() * self.board.size() {
            self.spawn_starting_tiles();
        }
        self.refresh_flags();
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn status(&self) -> Status {
        if self.board.win() {
            Status::Won
        } else if self.board.game_over() {
            Status::GameOver
        } else {
            Status::Active
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let grid = self.board.grid();
        GameSnapshot {
            size: grid.size(),
            board: grid.to_rows(),
            win_tile: self.board.win_tile(),
            status: self.status(),
            can_undo: self.board.previous().is_some(),
            max_tile: grid.max_tile(),
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Slide(direction) => {
                if self.is_finished() {
                    return ActionOutcome::Rejected;
                }
                if !self.board.merge_direction(direction) {
                    return ActionOutcome::Unchanged;
                }
                let spawned = match self.board.spawn_tile(&mut self.rng) {
                    Ok(tile) => Some(tile),
                    Err(e) => {
                        warn!("no tile spawned after {}: {}", direction.as_str(), e);
                        None
                    }
                };
                self.refresh_flags();
                ActionOutcome::Moved { spawned }
            }
            GameAction::Undo => {
                if self.board.undo() {
                    debug!("undo");
                    ActionOutcome::Undone
                } else {
                    ActionOutcome::Unchanged
                }
            }
            GameAction::Restart => {
                self.restart();
                ActionOutcome::Restarted
            }
        }
    }

    /// Clear the board and place two fresh tiles
    pub fn restart(&mut self) {
        self.board.clear();
        self.board.discard_undo();
        self.spawn_starting_tiles();
        // clear() leaves `win` alone; recompute so the status is not stale.
        self.refresh_flags();
        info!("new game");
    }

    /// Terminal check run before every slide
    fn is_finished(&mut self) -> bool {
        self.board.game_over() || self.board.check_win() || self.board.check_game_over()
    }

    fn refresh_flags(&mut self) {
        self.board.check_win();
        self.board.check_game_over();
    }

    fn spawn_starting_tiles(&mut self) {
        for _ in 0..STARTING_TILES {
            if let Err(e) = self.board.spawn_tile(&mut self.rng) {
                warn!("starting tile not placed: {}", e);
            }
        }
    }
}
