//! Errors used throughout the game core.
//!
//! `MoveError` is the single error type returned by the command surface.
//! Every variant is a recoverable rejection: the board is left untouched and
//! the caller is expected to retry with a different move or stop issuing
//! commands.

use std::error::Error;
use std::fmt;

use crate::board::piece::PieceKind;
use crate::board::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A move command was issued while the game is already in a terminal
    /// state (checkmate or stalemate).
    GameFinished,
    /// The origin square holds no piece.
    EmptyOrigin(Square),
    /// The origin square holds a piece, but not one of the side to move.
    NotSideToMove(Square),
    /// The destination is not reachable by the piece's movement pattern, or
    /// is occupied by a friendly piece.
    IllegalDestination { from: Square, to: Square },
    /// The move is reachable but would leave the mover's own king attacked.
    KingLeftInCheck { from: Square, to: Square },
    /// A pawn promotion requested an invalid target kind.
    InvalidPromotion(PieceKind),
    /// Undo was requested with fewer than two recorded plies.
    NothingToUndo,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameFinished => write!(f, "the game is already over"),
            MoveError::EmptyOrigin(sq) => write!(f, "no piece on {sq}"),
            MoveError::NotSideToMove(sq) => {
                write!(f, "the piece on {sq} does not belong to the side to move")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "the piece on {from} cannot reach {to}")
            }
            MoveError::KingLeftInCheck { from, to } => {
                write!(f, "{from} to {to} would leave the king in check")
            }
            MoveError::InvalidPromotion(kind) => {
                write!(f, "a pawn cannot promote to {kind:?}")
            }
            MoveError::NothingToUndo => write!(f, "not enough history to undo a move pair"),
        }
    }
}

impl Error for MoveError {}
