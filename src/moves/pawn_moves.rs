//! Pawn movement: single push, double push from the start row, and diagonal
//! captures. En passant is not modeled.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;

pub fn pawn_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    // Diagonal captures only onto enemy-occupied squares.
    for d_col in [-1i8, 1i8] {
        if let Some(target) = from.offset(dir, d_col) {
            if board.has_enemy_piece(target, color) {
                out.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_destinations;
    use crate::board::board::Board;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::square::Square;

    fn destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        pawn_destinations(board, from, color, &mut out);
        out
    }

    #[test]
    fn start_row_pawn_has_single_and_double_push() {
        let board = Board::starting_position();
        let out = destinations(&board, Square::at(6, 4), Color::White);
        assert_eq!(out, vec![Square::at(5, 4), Square::at(4, 4)]);
    }

    #[test]
    fn double_push_requires_both_squares_empty() {
        let mut board = Board::starting_position();
        board.set(Square::at(4, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        let out = destinations(&board, Square::at(6, 4), Color::White);
        assert_eq!(out, vec![Square::at(5, 4)]);

        board.set(Square::at(5, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(destinations(&board, Square::at(6, 4), Color::White).is_empty());
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let mut board = Board::empty();
        board.set(Square::at(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::at(3, 4), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(destinations(&board, Square::at(4, 4), Color::White).is_empty());
    }

    #[test]
    fn diagonal_capture_needs_an_enemy_occupant() {
        let mut board = Board::empty();
        board.set(Square::at(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::at(3, 3), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set(Square::at(3, 5), Some(Piece::new(PieceKind::Rook, Color::White)));

        let out = destinations(&board, Square::at(4, 4), Color::White);
        assert!(out.contains(&Square::at(3, 3)), "enemy diagonal capturable");
        assert!(!out.contains(&Square::at(3, 5)), "friendly diagonal blocked");
        assert!(out.contains(&Square::at(3, 4)), "empty push square");
    }

    #[test]
    fn black_pawns_move_toward_higher_rows() {
        let board = Board::starting_position();
        let out = destinations(&board, Square::at(1, 0), Color::Black);
        assert_eq!(out, vec![Square::at(2, 0), Square::at(3, 0)]);
    }
}
