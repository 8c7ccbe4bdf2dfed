//! Queen movement: the union of rook and bishop slides. Orthogonal rays are
//! generated first so destination ordering stays fixed for tie-breaking.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::rook_moves::rook_destinations;

pub fn queen_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    rook_destinations(board, from, color, out);
    bishop_destinations(board, from, color, out);
}
