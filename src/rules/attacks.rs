//! Attack scanning and check detection.
//!
//! These queries consult raw pseudo-legal movement only. Routing them
//! through the legality filter would recurse, since the filter itself calls
//! `is_in_check` on every candidate.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;
use crate::moves::movement::piece_destinations;

/// True iff any piece of `attacker_color` has `square` as a pseudo-legal
/// destination.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut scratch = Vec::new();
    for (from, piece) in board.pieces_of(attacker_color) {
        scratch.clear();
        piece_destinations(board, from, piece, &mut scratch);
        if scratch.contains(&square) {
            return true;
        }
    }
    false
}

/// True iff `color`'s king is currently attacked. A board without that king
/// is outside normal game flow and reports no check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
