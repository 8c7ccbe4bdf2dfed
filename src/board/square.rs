//! Board coordinates.
//!
//! A `Square` is a (row, col) pair with both components in `0..8`. Row 0 is
//! Black's home rank, row 7 is White's, so the algebraic rank is `8 - row`.

use std::fmt;

/// A single board coordinate. Construction is checked; a `Square` that
/// exists is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const BOARD_SIZE: u8 = 8;

    /// Build a square from row/col indices, `None` when off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::BOARD_SIZE && col < Self::BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Unchecked-by-construction variant for literals known to be in range.
    /// Panics on out-of-range input, so only use with constant indices.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        match Self::new(row, col) {
            Some(sq) => sq,
            None => panic!("square literal out of range"),
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Apply a signed (row, col) delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..Self::BOARD_SIZE as i8).contains(&row) && (0..Self::BOARD_SIZE as i8).contains(&col)
        {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row-major iteration over every square, a8 first. Scan order matters
    /// for evaluator tie-breaking, so it is fixed here once.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::BOARD_SIZE).flat_map(|row| (0..Self::BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    /// Algebraic coordinates, e.g. `e4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn new_rejects_out_of_range_coordinates() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(7, 7).is_some());
    }

    #[test]
    fn offset_stays_on_board_or_returns_none() {
        let corner = Square::at(0, 0);
        assert!(corner.offset(-1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
        assert_eq!(corner.offset(1, 2), Some(Square::at(1, 2)));
    }

    #[test]
    fn algebraic_rendering_flips_rank() {
        assert_eq!(Square::at(0, 0).to_string(), "a8");
        assert_eq!(Square::at(7, 7).to_string(), "h1");
        assert_eq!(Square::at(6, 4).to_string(), "e2");
        assert_eq!(Square::at(4, 4).to_string(), "e4");
    }

    #[test]
    fn all_scans_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[8], Square::at(1, 0));
        assert_eq!(squares[63], Square::at(7, 7));
    }
}
