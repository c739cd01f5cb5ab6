//! Errors returned at the session boundary.

use derive_more::{Display, Error};

use crate::types::Coord;

/// A move request the session refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("coordinate ({x}, {y}) is off the board")]
    OutOfRange { x: u8, y: u8 },

    #[display("illegal move at {_0}")]
    IllegalMove(#[error(not(source))] Coord),

    #[display("game is already over")]
    GameOver,
}
