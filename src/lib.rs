//! Crate root module declarations for the Parlor Chess game core.
//!
//! This file exposes all top-level subsystems (board model, per-piece
//! movement rules, attack/legality rules, the game state machine, engines,
//! and session wiring) so presentation layers, tests, and benches can import
//! stable module paths.

pub mod board {
    pub mod board;
    pub mod piece;
    pub mod square;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod rules {
    pub mod attacks;
    pub mod legality;
}

pub mod game {
    pub mod chess_move;
    pub mod game_state;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod scheduler;
}

pub mod errors;
pub mod session;
