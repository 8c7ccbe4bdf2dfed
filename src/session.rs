//! Session wiring.
//!
//! `GameSession` is the explicit context object that owns the game state,
//! the engine, and the scheduler, replacing any ambient global registry.
//! Presentation collaborators hold one session and drive it: submit human
//! moves, tick the run loop, and read the query surface. The human side is
//! White; the engine replies as Black.

use std::time::Instant;

use crate::board::piece::Color;
use crate::board::square::Square;
use crate::engines::engine_heuristic::HeuristicEngine;
use crate::engines::engine_trait::{Difficulty, Engine};
use crate::engines::scheduler::{MoveScheduler, SchedulerEvent};
use crate::errors::MoveError;
use crate::game::game_state::{GameState, MoveOutcome};

pub const HUMAN_COLOR: Color = Color::White;
pub const ENGINE_COLOR: Color = Color::Black;

pub struct GameSession {
    game: GameState,
    engine: Box<dyn Engine>,
    scheduler: MoveScheduler,
    difficulty: Difficulty,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        let mut engine = HeuristicEngine::new();
        engine.configure(difficulty);
        Self {
            game: GameState::new(),
            engine: Box::new(engine),
            scheduler: MoveScheduler::new(ENGINE_COLOR),
            difficulty,
        }
    }

    /// Wire in a custom engine (tests, diagnostics tiers).
    pub fn with_engine(difficulty: Difficulty, mut engine: Box<dyn Engine>) -> Self {
        engine.configure(difficulty);
        Self {
            game: GameState::new(),
            engine,
            scheduler: MoveScheduler::new(ENGINE_COLOR),
            difficulty,
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn is_engine_thinking(&self) -> bool {
        self.scheduler.is_thinking()
    }

    /// Submit the human ply. Rejected whenever it is not White's turn, so a
    /// pending engine reply can never be raced.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.game.current_player() != HUMAN_COLOR {
            return Err(MoveError::NotSideToMove(from));
        }
        self.game.make_move(from, to)
    }

    /// Record or clear the transient selection for interactive callers.
    pub fn select_square(&mut self, square: Option<Square>) {
        self.game.selected_square = square;
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.game.selected_square
    }

    /// Drive the scheduler; call from the run loop with the current time.
    pub fn tick(&mut self, now: Instant) -> Result<SchedulerEvent, MoveError> {
        self.scheduler
            .tick(&mut self.game, self.engine.as_mut(), now)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.engine.configure(difficulty);
    }

    /// Undo the last human ply and engine reply atomically. Bumps the
    /// scheduler generation so a still-pending reply cannot replay into the
    /// rewound position.
    pub fn undo_last_pair(&mut self) -> Result<(), MoveError> {
        self.game.undo_last_pair()?;
        self.scheduler.reset();
        Ok(())
    }

    /// Start a new game. The difficulty setting survives the reset.
    pub fn reset(&mut self) {
        self.game.reset();
        self.scheduler.reset();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
