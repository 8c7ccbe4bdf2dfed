//! King-safety filtering on top of pseudo-legal movement.
//!
//! A move is legal iff it is pseudo-legal and, after relocating the piece on
//! a scratch copy of the board, the mover's own king is not attacked. The
//! live board is never touched by these queries.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;
use crate::errors::MoveError;
use crate::game::chess_move::Move;
use crate::moves::movement::{piece_destinations, pseudo_legal_destinations};
use crate::rules::attacks::is_in_check;

/// Check a single move request for the given side. `Ok(())` means legal;
/// the error names the first failed requirement.
pub fn check_move(board: &Board, mover: Color, from: Square, to: Square) -> Result<(), MoveError> {
    let piece = board.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
    if piece.color != mover {
        return Err(MoveError::NotSideToMove(from));
    }
    if !pseudo_legal_destinations(board, from).contains(&to) {
        return Err(MoveError::IllegalDestination { from, to });
    }
    if leaves_king_in_check(board, mover, from, to) {
        return Err(MoveError::KingLeftInCheck { from, to });
    }
    Ok(())
}

#[inline]
pub fn is_valid_move(board: &Board, mover: Color, from: Square, to: Square) -> bool {
    check_move(board, mover, from, to).is_ok()
}

/// Simulate the relocation on a scratch clone and test for self-check.
pub fn leaves_king_in_check(board: &Board, mover: Color, from: Square, to: Square) -> bool {
    let mut scratch = board.clone();
    scratch.relocate(from, to);
    is_in_check(&scratch, mover)
}

/// Every legal move for `color`, scanning origins row-major with each
/// piece's destinations in generation order. Iteration order is part of the
/// contract: the evaluator's strict-greater selection uses it as a de facto
/// tie-break.
pub fn all_valid_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut destinations = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        destinations.clear();
        piece_destinations(board, from, piece, &mut destinations);
        for &to in &destinations {
            if !leaves_king_in_check(board, color, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}
