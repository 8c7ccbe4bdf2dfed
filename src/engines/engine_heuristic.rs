//! Single-ply heuristic move evaluator.
//!
//! Each candidate gets a score built from a random jitter plus fixed
//! positional terms; the strictly greatest score wins, so on ties the first
//! candidate in iteration order keeps the top slot. Both the "would give
//! check" probe and the "is the destination attacked" probe read one fixed
//! base board captured when the scan begins; they are not updated per
//! candidate. That snapshot semantics is deliberate: it affects which moves
//! win close scans, so changing it would change play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::engines::engine_trait::{Difficulty, Engine};
use crate::game::chess_move::{Move, MoveRecord};
use crate::game::game_state::GameState;
use crate::rules::attacks::{is_in_check, is_square_attacked};

/// Scoring weights. Difficulty tiers share every positional term and differ
/// only in how much randomness is mixed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Jitter is drawn uniformly from `[0, jitter_span)`.
    pub jitter_span: f64,
    pub center_bonus: f64,
    pub development_bonus: f64,
    pub pawn_advance_per_row: f64,
    pub shuffle_penalty: f64,
    pub check_bonus: f64,
    /// The hazard term subtracts `piece value / hazard_divisor` when the
    /// destination is already attacked on the pre-move board.
    pub hazard_divisor: f64,
}

impl ScoreWeights {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let jitter_span = match difficulty {
            Difficulty::Novice => 10.0,
            Difficulty::Knight => 5.0,
            Difficulty::Grandmaster => 1.0,
        };
        Self {
            jitter_span,
            center_bonus: 10.0,
            development_bonus: 15.0,
            pawn_advance_per_row: 2.0,
            shuffle_penalty: 5.0,
            check_bonus: 20.0,
            hazard_divisor: 2.0,
        }
    }
}

pub struct HeuristicEngine {
    rng: StdRng,
    weights: ScoreWeights,
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Fixed-seed constructor so tests can assert exact selections.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            weights: ScoreWeights::for_difficulty(Difficulty::default()),
        }
    }

    /// Override the weight set directly (tests disable jitter this way).
    pub fn with_weights(seed: u64, weights: ScoreWeights) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            weights,
        }
    }

    /// Deterministic part of a candidate's score, evaluated against the
    /// fixed base board.
    fn evaluate_move(&self, base: &Board, history: &[MoveRecord], color: Color, mv: &Move) -> f64 {
        let mut score = 0.0;
        let w = &self.weights;
        let Some(moving) = base.piece_at(mv.from) else {
            return score;
        };

        // Captures, weighted by the fixed value table.
        if let Some(target) = base.piece_at(mv.to) {
            score += target.kind.value() as f64;
        }

        // Central 2x2 control.
        if (3..=4).contains(&mv.to.row()) && (3..=4).contains(&mv.to.col()) {
            score += w.center_bonus;
        }

        // Developing a minor piece off its starting rank.
        if mv.from.row() == color.home_row()
            && matches!(moving.kind, PieceKind::Knight | PieceKind::Bishop)
        {
            score += w.development_bonus;
        }

        // Pawn moves score by distance to the promotion row.
        if moving.kind == PieceKind::Pawn {
            let distance = (color.promotion_row() as i8 - mv.to.row() as i8).abs();
            score += w.pawn_advance_per_row * distance as f64;
        }

        // Discourage shuffling the piece this side moved on its previous ply.
        if let Some(own_last) = history.iter().rev().find(|rec| rec.player == color) {
            if own_last.to == mv.from {
                score -= w.shuffle_penalty;
            }
        }

        // Checks, probed on a scratch copy of the base board.
        if would_give_check(base, color, mv) {
            score += w.check_bonus;
        }

        // Landing on a square the opponent already attacks on the pre-move
        // board risks the moving piece.
        if is_square_attacked(base, mv.to, color.opposite()) {
            score -= moving.kind.value() as f64 / w.hazard_divisor;
        }

        score
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HeuristicEngine {
    fn configure(&mut self, difficulty: Difficulty) {
        self.weights = ScoreWeights::for_difficulty(difficulty);
    }

    fn select_move(
        &mut self,
        game: &GameState,
        color: Color,
        legal_moves: &[Move],
    ) -> Option<Move> {
        let base = game.board().clone();
        let history = game.move_history();

        let mut best_move: Option<Move> = None;
        let mut best_score = f64::NEG_INFINITY;
        for mv in legal_moves {
            let jitter = if self.weights.jitter_span > 0.0 {
                self.rng.random_range(0.0..self.weights.jitter_span)
            } else {
                0.0
            };
            let score = jitter + self.evaluate_move(&base, history, color, mv);
            // Strict comparison: the earliest candidate keeps the top slot
            // on ties.
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
        }
        best_move
    }
}

fn would_give_check(base: &Board, color: Color, mv: &Move) -> bool {
    let mut scratch = base.clone();
    scratch.relocate(mv.from, mv.to);
    is_in_check(&scratch, color.opposite())
}
