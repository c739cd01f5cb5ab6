use std::fmt;

use crate::types::{Cell, Color, Coord, Score};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Othello board state represented by two bitboards, bit `y * 8 + x` per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    light: u64,
    dark: u64,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=light, (4,3)=dark, (3,4)=dark, (4,4)=light.
    pub fn new() -> Self {
        Self {
            light: bit(27) | bit(36),
            dark: bit(28) | bit(35),
        }
    }

    /// Builds a board from a row-major `[y][x]` grid.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self { light: 0, dark: 0 };
        for (y, row) in cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let square = bit(y * BOARD_SIZE + x);
                match cell {
                    Cell::Empty => {}
                    Cell::Light => board.light |= square,
                    Cell::Dark => board.dark |= square,
                }
            }
        }
        board
    }

    pub fn cell(&self, at: Coord) -> Cell {
        let square = bit(at.index());
        if (self.light & square) != 0 {
            Cell::Light
        } else if (self.dark & square) != 0 {
            Cell::Dark
        } else {
            Cell::Empty
        }
    }

    /// Places a disk at `at` and recolors every square in `captures`.
    ///
    /// Panics if `at` is occupied or a capture square does not hold the opponent's color.
    pub fn place_and_flip(&mut self, at: Coord, color: Color, captures: &[Coord]) {
        assert_eq!(self.cell(at), Cell::Empty, "placement on occupied square {at}");

        let opponent = Cell::from(color.opponent());
        let mut flips = 0u64;
        for &square in captures {
            assert_eq!(
                self.cell(square),
                opponent,
                "capture of {square} which does not hold {}",
                color.opponent()
            );
            flips |= bit(square.index());
        }

        let (me, opp) = self.sides_mut(color);
        *me |= bit(at.index()) | flips;
        *opp &= !flips;
    }

    /// Returns the disk count of each color.
    pub fn tally(&self) -> Score {
        Score {
            light: self.light.count_ones() as u8,
            dark: self.dark.count_ones() as u8,
        }
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.tally().total()
    }

    /// Converts board to `[u8; 64]` using [`Cell::code`].
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cell(Coord::from_index(pos)).code();
        }
        board
    }

    fn sides_mut(&mut self, color: Color) -> (&mut u64, &mut u64) {
        match color {
            Color::Light => (&mut self.light, &mut self.dark),
            Color::Dark => (&mut self.dark, &mut self.light),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..NUM_SQUARES {
            let glyph = match self.cell(Coord::from_index(pos)) {
                Cell::Empty => '.',
                Cell::Light => 'O',
                Cell::Dark => 'X',
            };
            write!(f, "{glyph}")?;
            if pos % BOARD_SIZE == BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn bit(pos: usize) -> u64 {
    assert!(pos < NUM_SQUARES, "square index {pos} is off the board");
    1u64 << pos
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parses an 8-line grid of `.`, `O` (light) and `X` (dark).
    pub(crate) fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                cells[y][x] = match glyph {
                    'O' => Cell::Light,
                    'X' => Cell::Dark,
                    _ => Cell::Empty,
                };
            }
        }
        Board::from_cells(cells)
    }

    fn at(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn initial_board_matches_fixed_layout() {
        let board = Board::new();

        assert_eq!(board.cell(at(3, 3)), Cell::Light);
        assert_eq!(board.cell(at(4, 3)), Cell::Dark);
        assert_eq!(board.cell(at(3, 4)), Cell::Dark);
        assert_eq!(board.cell(at(4, 4)), Cell::Light);
        assert_eq!(board.tally(), Score { light: 2, dark: 2 });
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn place_and_flip_recolors_placement_and_captures_only() {
        let mut board = Board::new();
        let before = board.to_array();

        board.place_and_flip(at(3, 2), Color::Dark, &[at(3, 3)]);

        let after = board.to_array();
        let changed: Vec<usize> = (0..NUM_SQUARES).filter(|&i| before[i] != after[i]).collect();
        assert_eq!(changed, vec![at(3, 2).index(), at(3, 3).index()]);
        assert_eq!(board.tally(), Score { light: 1, dark: 4 });
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn place_on_occupied_square_panics() {
        let mut board = Board::new();
        board.place_and_flip(at(3, 3), Color::Dark, &[]);
    }

    #[test]
    #[should_panic(expected = "does not hold")]
    fn capturing_own_disk_panics() {
        let mut board = Board::new();
        board.place_and_flip(at(3, 2), Color::Dark, &[at(4, 3)]);
    }

    #[test]
    fn every_constructible_coord_maps_to_its_own_square() {
        let board = Board::from_cells([[Cell::Light; BOARD_SIZE]; BOARD_SIZE]);
        for y in 0..=u8::MAX {
            for x in 0..=u8::MAX {
                match Coord::new(x, y) {
                    Some(at) => {
                        assert!(at.index() < NUM_SQUARES);
                        assert_eq!(board.cell(at), Cell::Light);
                    }
                    None => assert!(x as usize >= BOARD_SIZE || y as usize >= BOARD_SIZE),
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn off_board_square_index_panics() {
        bit(91);
    }

    #[test]
    fn from_cells_and_display_agree() {
        let rows = [
            "X.......",
            "........",
            "........",
            "...OX...",
            "...XO...",
            "........",
            "........",
            ".......O",
        ];
        let board = board_from_rows(rows);

        assert_eq!(board.to_string(), rows.join("\n") + "\n");
        assert_eq!(board.tally(), Score { light: 3, dark: 3 });
        assert_eq!(board.to_array()[0], 2);
        assert_eq!(board.to_array()[63], 1);
    }
}
