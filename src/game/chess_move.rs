//! Move requests and history records.
//!
//! A `Move` is only a request; it has no validity until it passes the
//! legality filter. A `MoveRecord` is the append-only history entry written
//! by a successful move, and it carries everything needed to both render the
//! move and replay its inverse for undo.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Requested promotion target for a pawn reaching the last row. `None`
    /// means the default policy (queen) applies.
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, target: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(target),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(target) = self.promotion {
            write!(f, "={}", target.symbol())?;
        }
        Ok(())
    }
}

/// One applied ply. The inverse replay contract: putting `piece` back on
/// `from` and `captured` back on `to` restores the exact prior board, even
/// across promotion (`piece` is the pre-move pawn).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Color,
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Promotion target actually applied, if any.
    pub promoted: Option<PieceKind>,
    /// Whether the move left the opponent in check.
    pub gives_check: bool,
    pub played_at: DateTime<Utc>,
}

impl MoveRecord {
    /// Stable per-move text encoding, derivable from the record alone:
    /// color, piece symbol, origin, `x` on capture (`-` otherwise),
    /// destination, promotion target, and a trailing `+` when the move gave
    /// check. Examples: `White Pe2-e4`, `Black Qd8xh4+`.
    pub fn notation(&self) -> String {
        let separator = if self.captured.is_some() { 'x' } else { '-' };
        let mut text = format!(
            "{} {}{}{}{}",
            self.player,
            self.piece.kind.symbol(),
            self.from,
            separator,
            self.to
        );
        if let Some(target) = self.promoted {
            text.push('=');
            text.push(target.symbol());
        }
        if self.gives_check {
            text.push('+');
        }
        text
    }
}
