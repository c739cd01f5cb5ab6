pub mod board;
pub mod error;
pub mod game;
pub mod resolver;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::GameError;
pub use game::{Continuation, GameSession, Input, MoveSource, Outcome, Phase, run_game, run_match};
pub use types::{Cell, Color, Coord, Direction, GameResult, GameSnapshot, Score};
