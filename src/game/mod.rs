//! Core Connect Four game logic: chips, the 7x6 board, and the playing stand
//! that enforces turns and detects four-in-a-row.

mod board;
mod chip;
mod direction;
mod stand;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use chip::Chip;
pub use direction::Direction;
pub use stand::{GameOutcome, PlayingStand, WinningPlacement};
