use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// Content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Light,
    Dark,
}

impl Cell {
    /// Tile code used on the wire: 0=empty, 1=light, 2=dark.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Light => 1,
            Cell::Dark => 2,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Light => Cell::Light,
            Color::Dark => Cell::Dark,
        }
    }
}

/// Disk color of a player. Dark moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// One of the 8 unit steps a capture ray can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
    ];

    /// `(dx, dy)` with `y` growing downwards.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
        }
    }
}

/// A board coordinate: `x` is the column, `y` the row.
///
/// Only [`Coord::new`] and in-crate index conversion build one, so every
/// value is on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Returns `None` when either component falls outside the board.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major square index in `0..64`.
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_SIZE * BOARD_SIZE);
        Self {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        }
    }

    /// The neighbouring square one step along `dir`, if it is on the board.
    pub fn offset(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as u8, y as u8)
    }
}

/// Disk tally for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub light: u8,
    pub dark: u8,
}

impl Score {
    pub fn total(self) -> u8 {
        self.light + self.dark
    }

    /// The color holding more disks, or `None` on a tie.
    pub fn leader(self) -> Option<Color> {
        match self.light.cmp(&self.dark) {
            std::cmp::Ordering::Greater => Some(Color::Light),
            std::cmp::Ordering::Less => Some(Color::Dark),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Read-only view handed to the rendering front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major tile codes, see [`Cell::code`].
    pub board: Vec<u8>,
    /// `None` once the game is over.
    pub current: Option<Color>,
    pub legal_moves: Vec<Coord>,
    pub light_count: u8,
    pub dark_count: u8,
    pub is_game_over: bool,
    /// Colors auto-skipped since the latest placement, oldest first.
    pub passes: Vec<Color>,
    /// Disks flipped by the latest placement. Empty before the first move.
    pub flipped: Vec<Coord>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub score: Score,
}

impl From<Score> for GameResult {
    fn from(score: Score) -> Self {
        Self {
            winner: score.leader(),
            score,
        }
    }
}
