//! Rook movement: slides along files and ranks.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;
use crate::moves::sliding::slide;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn rook_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(board, from, color, &ROOK_DIRECTIONS, out);
}
