#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A cooperative, tick-driven engine for a two player snakes and ladders game.
//!
//! Everything runs on one execution context: the [scheduler::Engine] reads the
//! clock once per tick and polls each subsystem (input, movement animation,
//! tone synthesis, status display) against its own timer. Hardware is reached
//! only through the traits in [types], so the same engine drives a real board
//! or a test harness.
//!
//! ```
//! use snakes_ladders_engine::board::{Board, BoardNumber};
//! use snakes_ladders_engine::types::Position;
//!
//! let board = Board::standard(BoardNumber::One);
//! let ladder = board.cell_at(1, 1);
//! assert_eq!(board.paired_cell(ladder), Some(Position::new(1, 3)));
//! ```

pub mod audio;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod move_queue;
pub mod scheduler;
pub mod types;

pub use config::GameConfig;
pub use scheduler::Engine;
