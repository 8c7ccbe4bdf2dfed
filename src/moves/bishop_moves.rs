//! Bishop movement: diagonal slides.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;
use crate::moves::sliding::slide;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(board, from, color, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::bishop_destinations;
    use crate::board::board::Board;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::square::Square;

    #[test]
    fn bishop_on_open_board_covers_both_diagonals() {
        let mut board = Board::empty();
        board.set(Square::at(4, 4), Some(Piece::new(PieceKind::Bishop, Color::White)));
        let mut out = Vec::new();
        bishop_destinations(&board, Square::at(4, 4), Color::White, &mut out);
        assert_eq!(out.len(), 13);
        assert!(out.contains(&Square::at(0, 0)));
        assert!(out.contains(&Square::at(7, 7)));
        assert!(!out.contains(&Square::at(4, 0)), "no orthogonal moves");
    }

    #[test]
    fn bishop_is_blocked_at_start() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        bishop_destinations(&board, Square::at(7, 2), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
