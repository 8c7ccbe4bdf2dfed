//! The game state machine.
//!
//! `GameState` is the sole owner of the board. Every mutation flows through
//! `make_move` / `undo_last_pair` / `reset`; everything else on the surface
//! is a read-only query. Status is reclassified exactly once per applied
//! ply, for the side that is next to move.

use chrono::Utc;

use crate::board::board::Board;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;
use crate::errors::MoveError;
use crate::game::chess_move::{Move, MoveRecord};
use crate::rules::attacks::is_in_check;
use crate::rules::legality::{all_valid_moves, check_move, is_valid_move};

/// Reportable game status. `Check` is a sub-status of an in-progress game;
/// only `Checkmate` and `Stalemate` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// What a successful `make_move` did, for collaborators that trigger
/// capture/move effects without re-deriving them from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: Option<PieceKind>,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Color,
    move_history: Vec<MoveRecord>,
    status: GameStatus,
    last_engine_move: Option<Move>,
    /// Transient selection used only by interactive callers; never consulted
    /// by the rules engine.
    pub selected_square: Option<Square>,
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        Self::from_position(Board::starting_position(), Color::White)
    }

    /// Arbitrary constructed position. The status is classified immediately
    /// for `to_move`. The caller is responsible for handing in a board with
    /// one king per side.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let status = classify(&board, to_move);
        Self {
            board,
            current_player: to_move,
            move_history: Vec::new(),
            status,
            last_engine_move: None,
            selected_square: None,
        }
    }

    /// Wholesale reset to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // --- Query surface ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn last_engine_move(&self) -> Option<Move> {
        self.last_engine_move
    }

    #[inline]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.board.find_king(color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && all_valid_moves(&self.board, color).is_empty()
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && all_valid_moves(&self.board, color).is_empty()
    }

    #[inline]
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        is_valid_move(&self.board, self.current_player, from, to)
    }

    #[inline]
    pub fn all_valid_moves(&self, color: Color) -> Vec<Move> {
        all_valid_moves(&self.board, color)
    }

    // --- Command surface ---

    /// Apply a plain move request. Promotion, when reached, follows the
    /// default policy (queen).
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.apply_request(Move::new(from, to))
    }

    /// Apply a move request, honoring an explicit promotion target.
    pub fn apply_request(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameFinished);
        }
        if let Some(target) = mv.promotion {
            if !target.is_promotion_target() {
                return Err(MoveError::InvalidPromotion(target));
            }
        }

        let mover = self.current_player;
        check_move(&self.board, mover, mv.from, mv.to)?;
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptyOrigin(mv.from))?;

        let captured = self.board.relocate(mv.from, mv.to);

        let promoted = if piece.kind == PieceKind::Pawn && mv.to.row() == mover.promotion_row() {
            let target = mv.promotion.unwrap_or(PieceKind::Queen);
            self.board.set(mv.to, Some(Piece::new(target, mover)));
            Some(target)
        } else {
            None
        };

        let gives_check = is_in_check(&self.board, mover.opposite());
        self.move_history.push(MoveRecord {
            player: mover,
            from: mv.from,
            to: mv.to,
            piece,
            captured,
            promoted,
            gives_check,
            played_at: Utc::now(),
        });

        self.current_player = mover.opposite();
        self.status = classify(&self.board, self.current_player);
        self.selected_square = None;

        Ok(MoveOutcome {
            mv,
            piece,
            captured,
            promoted,
            status: self.status,
        })
    }

    /// Apply an engine reply and remember it for UI highlighting.
    pub fn make_engine_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let outcome = self.apply_request(mv)?;
        self.last_engine_move = Some(mv);
        Ok(outcome)
    }

    /// Undo the two most recent plies (human move plus automated reply)
    /// atomically. Restores board contents from the records in reverse
    /// order, hands the turn back, and clears any terminal status.
    pub fn undo_last_pair(&mut self) -> Result<(), MoveError> {
        if self.move_history.len() < 2 {
            return Err(MoveError::NothingToUndo);
        }

        for _ in 0..2 {
            // Length was checked above; pop cannot fail here.
            if let Some(record) = self.move_history.pop() {
                self.board.set(record.from, Some(record.piece));
                self.board.set(record.to, record.captured);
                self.current_player = record.player;
            }
        }

        self.last_engine_move = None;
        self.selected_square = None;
        self.status = classify(&self.board, self.current_player);
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Status for the side about to move: no legal moves means checkmate or
/// stalemate depending on check; otherwise check is reported as a sub-status.
fn classify(board: &Board, to_move: Color) -> GameStatus {
    let checked = is_in_check(board, to_move);
    if all_valid_moves(board, to_move).is_empty() {
        if checked {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else if checked {
        GameStatus::Check
    } else {
        GameStatus::InProgress
    }
}
