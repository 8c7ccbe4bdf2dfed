//! The 8x8 board model.
//!
//! `Board` is a plain grid of `Option<Piece>`. It knows the standard
//! starting setup and how to locate pieces, but contains no movement rules;
//! those live in `moves` and `rules`. Cloning is cheap (a fixed array copy),
//! which the legality filter and evaluator rely on for scratch simulations.

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
        }
    }

    /// Standard initial position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for col in 0..8 {
                board.set(
                    Square::at(color.home_row(), col),
                    Some(Piece::new(BACK_RANK[col as usize], color)),
                );
                board.set(
                    Square::at(color.pawn_start_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True when `square` holds a piece of `color.opposite()`.
    #[inline]
    pub fn has_enemy_piece(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(p) if p.color != color)
    }

    /// Row-major scan of all occupied squares of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Locate the unique king of `color`. A legal position always has one;
    /// `None` signals a board constructed outside normal game flow.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Relocate the piece at `from` to `to`, returning any captured occupant.
    /// Used by the state machine and by scratch-board simulations.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set(to, moving);
        self.set(from, None);
        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::board::piece::{Color, PieceKind};
    use crate::board::square::Square;

    #[test]
    fn starting_position_has_standard_layout() {
        let board = Board::starting_position();

        let e2 = board.piece_at(Square::at(6, 4)).expect("e2 occupied");
        assert_eq!(e2.kind, PieceKind::Pawn);
        assert_eq!(e2.color, Color::White);

        let d8 = board.piece_at(Square::at(0, 3)).expect("d8 occupied");
        assert_eq!(d8.kind, PieceKind::Queen);
        assert_eq!(d8.color, Color::Black);

        let e1 = board.piece_at(Square::at(7, 4)).expect("e1 occupied");
        assert_eq!(e1.kind, PieceKind::King);

        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(Square::at(row, col)));
            }
        }
    }

    #[test]
    fn find_king_locates_both_kings_at_start() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White), Some(Square::at(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square::at(0, 4)));
    }

    #[test]
    fn relocate_returns_captured_occupant() {
        let mut board = Board::starting_position();
        let from = Square::at(6, 4);
        let to = Square::at(1, 4);

        let captured = board.relocate(from, to).expect("black pawn captured");
        assert_eq!(captured.kind, PieceKind::Pawn);
        assert_eq!(captured.color, Color::Black);
        assert!(board.is_empty(from));
        assert_eq!(board.piece_at(to).map(|p| p.color), Some(Color::White));
    }
}
