//! King movement: the eight adjacent squares, occupancy rule only.
//! Castling is not modeled; walking into check is rejected later by the
//! legality filter, not here.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(target) = from.offset(d_row, d_col) {
            match board.piece_at(target) {
                Some(occupant) if occupant.color == color => {}
                _ => out.push(target),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::king_destinations;
    use crate::board::board::Board;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::square::Square;

    #[test]
    fn king_in_the_center_has_eight_targets() {
        let mut board = Board::empty();
        board.set(Square::at(4, 4), Some(Piece::new(PieceKind::King, Color::White)));
        let mut out = Vec::new();
        king_destinations(&board, Square::at(4, 4), Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn king_is_fully_blocked_at_start() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        king_destinations(&board, Square::at(7, 4), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn corner_king_has_three_targets() {
        let mut board = Board::empty();
        board.set(Square::at(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        let mut out = Vec::new();
        king_destinations(&board, Square::at(0, 0), Color::Black, &mut out);
        assert_eq!(out.len(), 3);
    }
}
