//! # Connect Four Stand
//!
//! A Connect Four playing stand: a 7-column, 6-row grid that takes alternating
//! Red and Black drops, rejects illegal ones, and reports the winner along with
//! the exact winning line.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: chips, board, playing stand
//! - [`config`] — TOML configuration loading
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use error::{DropError, QueryError};
pub use game::{Cell, Chip, Direction, GameOutcome, PlayingStand, WinningPlacement};
