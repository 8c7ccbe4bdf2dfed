//! Scheduling of the automated side's replies.
//!
//! The scheduler is a cooperative component: the caller's run loop drives it
//! by calling `tick` with the current time, and the artificial "thinking"
//! suspension is just a stored deadline. At most one computation is pending
//! at a time, and a pending computation is tagged with the generation
//! current when it was scheduled. `reset` bumps the generation instead of
//! cancelling; a stale computation still fires, notices the mismatch, and
//! discards itself without touching the game.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::piece::Color;
use crate::engines::engine_trait::Engine;
use crate::errors::MoveError;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

/// Thinking delay bounds in milliseconds, drawn uniformly per reply.
pub const MIN_THINK_MS: u64 = 800;
pub const MAX_THINK_MS: u64 = 2300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Not the automated side's turn; nothing to do.
    Idle,
    /// The game is over; the scheduler refuses to act.
    GameOver,
    /// A reply computation was scheduled; it fires at `deadline`.
    ThinkingStarted { deadline: Instant },
    /// A computation is pending and its deadline has not passed.
    Thinking,
    /// The pending computation fired and this move was applied.
    Played(Move),
    /// The pending computation fired after a reset and was discarded.
    StaleDropped,
}

#[derive(Debug, Clone, Copy)]
struct PendingReply {
    generation: u64,
    ready_at: Instant,
}

pub struct MoveScheduler {
    engine_color: Color,
    generation: u64,
    pending: Option<PendingReply>,
    rng: StdRng,
}

impl MoveScheduler {
    pub fn new(engine_color: Color) -> Self {
        Self::seeded(engine_color, rand::rng().random())
    }

    /// Fixed-seed constructor so tests can pin the thinking delay.
    pub fn seeded(engine_color: Color, seed: u64) -> Self {
        Self {
            engine_color,
            generation: 0,
            pending: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn engine_color(&self) -> Color {
        self.engine_color
    }

    /// True while a reply computation is outstanding.
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Invalidate any outstanding computation. The pending entry is left in
    /// place on purpose: it fires later, observes the generation mismatch,
    /// and drops itself.
    pub fn reset(&mut self) {
        self.generation += 1;
    }

    /// Advance the scheduler. Call this from the run loop after every state
    /// change and periodically while waiting.
    pub fn tick(
        &mut self,
        game: &mut GameState,
        engine: &mut dyn Engine,
        now: Instant,
    ) -> Result<SchedulerEvent, MoveError> {
        if let Some(pending) = self.pending {
            if now < pending.ready_at {
                return Ok(SchedulerEvent::Thinking);
            }
            self.pending = None;

            if pending.generation != self.generation {
                return Ok(SchedulerEvent::StaleDropped);
            }

            let moves = game.all_valid_moves(self.engine_color);
            if moves.is_empty() {
                return Ok(SchedulerEvent::GameOver);
            }
            // The engine contract returns a member of a non-empty list; fall
            // back to the first candidate rather than panic if it does not.
            let choice = engine
                .select_move(game, self.engine_color, &moves)
                .unwrap_or(moves[0]);
            game.make_engine_move(choice)?;
            return Ok(SchedulerEvent::Played(choice));
        }

        // Eligibility guards, checked in order: terminal game, wrong turn.
        if game.status().is_terminal() {
            return Ok(SchedulerEvent::GameOver);
        }
        if game.current_player() != self.engine_color {
            return Ok(SchedulerEvent::Idle);
        }
        if game.all_valid_moves(self.engine_color).is_empty() {
            // Classification already marked this terminal on the last ply.
            return Ok(SchedulerEvent::GameOver);
        }

        let delay = Duration::from_millis(self.rng.random_range(MIN_THINK_MS..MAX_THINK_MS));
        let deadline = now + delay;
        self.pending = Some(PendingReply {
            generation: self.generation,
            ready_at: deadline,
        });
        Ok(SchedulerEvent::ThinkingStarted { deadline })
    }
}
