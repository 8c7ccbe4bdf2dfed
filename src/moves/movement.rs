//! Per-piece pseudo-legal dispatch.
//!
//! A destination is pseudo-legal iff it is on the board, reachable by the
//! piece's movement pattern respecting blocking, and not occupied by a
//! friendly piece. King safety is deliberately not considered here; the
//! attack detector depends on that to avoid recursing into the legality
//! filter.

use crate::board::board::Board;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Append the pseudo-legal destinations of `piece` standing on `from`.
pub fn piece_destinations(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.color, out),
        PieceKind::Knight => knight_destinations(board, from, piece.color, out),
        PieceKind::Bishop => bishop_destinations(board, from, piece.color, out),
        PieceKind::Rook => rook_destinations(board, from, piece.color, out),
        PieceKind::Queen => queen_destinations(board, from, piece.color, out),
        PieceKind::King => king_destinations(board, from, piece.color, out),
    }
}

/// Convenience wrapper returning a fresh vector for the piece on `from`,
/// empty when the square is empty.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    if let Some(piece) = board.piece_at(from) {
        piece_destinations(board, from, piece, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_destinations;
    use crate::board::board::Board;
    use crate::board::square::Square;

    #[test]
    fn empty_origin_yields_no_destinations() {
        let board = Board::starting_position();
        assert!(pseudo_legal_destinations(&board, Square::at(4, 4)).is_empty());
    }

    #[test]
    fn dispatch_reaches_every_piece_kind_at_start() {
        let board = Board::starting_position();
        // Pawn and knight can move, the rest are boxed in.
        assert_eq!(pseudo_legal_destinations(&board, Square::at(6, 0)).len(), 2);
        assert_eq!(pseudo_legal_destinations(&board, Square::at(7, 1)).len(), 2);
        assert!(pseudo_legal_destinations(&board, Square::at(7, 0)).is_empty());
        assert!(pseudo_legal_destinations(&board, Square::at(7, 2)).is_empty());
        assert!(pseudo_legal_destinations(&board, Square::at(7, 3)).is_empty());
        assert!(pseudo_legal_destinations(&board, Square::at(7, 4)).is_empty());
    }
}
