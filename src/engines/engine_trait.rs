//! Engine abstraction layer used by the scheduler and session wiring.
//!
//! Every difficulty tier implements the same mandatory interface; there is
//! no runtime capability probing anywhere in the crate.

use crate::board::piece::Color;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

/// Difficulty tier selected by the caller's UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Novice,
    Knight,
    Grandmaster,
}

pub trait Engine: Send {
    /// Re-tune the engine for a difficulty tier. Callable at any time,
    /// including mid-game.
    fn configure(&mut self, difficulty: Difficulty);

    /// Pick one of `legal_moves` for the side `color` on the current board.
    /// Must return `None` exactly when the input is empty, and otherwise a
    /// move present in the input list.
    fn select_move(&mut self, game: &GameState, color: Color, legal_moves: &[Move])
        -> Option<Move>;
}
