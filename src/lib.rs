//! # Connect Four Minimax
//!
//! A Connect Four move-recommendation engine: minimax search with
//! alpha-beta pruning over a window-scanning board heuristic. Given a
//! position and the side to move, it returns the best column and the
//! backed-up value of that line.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`search`] — Heuristic evaluation and the alpha-beta engine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod search;
