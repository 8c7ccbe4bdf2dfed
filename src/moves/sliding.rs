//! Shared ray-walk helper for sliding pieces.

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::square::Square;

/// Walk each direction until the board edge or the first occupied square.
/// The blocking square itself is a destination only when it holds an enemy
/// piece (a capture).
pub fn slide(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => {
                    out.push(next);
                    current = next;
                }
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
        }
    }
}
