//! Uniform random engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics
//! and integration testing of the scheduling path.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::piece::Color;
use crate::engines::engine_trait::{Difficulty, Engine};
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn configure(&mut self, _difficulty: Difficulty) {
        // Uniform choice has nothing to tune.
    }

    fn select_move(
        &mut self,
        _game: &GameState,
        _color: Color,
        legal_moves: &[Move],
    ) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }
}
