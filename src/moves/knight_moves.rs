//! Knight movement: the eight L-shaped offsets. Knights jump, so only the
//! destination's occupancy matters.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(target) = from.offset(d_row, d_col) {
            match board.piece_at(target) {
                Some(occupant) if occupant.color == color => {}
                _ => out.push(target),
            }
        }
    }
}
