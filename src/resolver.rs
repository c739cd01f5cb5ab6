//! Capture-set computation and legal-move enumeration.
//!
//! Everything here is a pure query over a board snapshot; the only mutation
//! entry point is [`Board::place_and_flip`].

use crate::board::{Board, NUM_SQUARES};
use crate::types::{Cell, Color, Coord, Direction};

/// Opponent disks flipped if `color` were placed at `at`.
///
/// Does not check that `at` is empty; callers do.
pub fn capture_set(board: &Board, at: Coord, color: Color) -> Vec<Coord> {
    let mut captures = Vec::new();
    for dir in Direction::ALL {
        captures.extend(capture_ray(board, at, color, dir));
    }
    captures
}

/// Opponent disks bracketed along one ray, or an empty list when the ray
/// leaves the board, meets an empty square, or crosses no opponent disk.
fn capture_ray(board: &Board, at: Coord, color: Color, dir: Direction) -> Vec<Coord> {
    let own = Cell::from(color);
    let opp = Cell::from(color.opponent());
    let mut line = Vec::new();
    let mut next = at.offset(dir);

    while let Some(square) = next {
        match board.cell(square) {
            cell if cell == opp => line.push(square),
            cell if cell == own => return line,
            _ => break,
        }
        next = square.offset(dir);
    }

    Vec::new()
}

/// Empty squares where `color` captures at least one disk, in row-major order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Coord> {
    (0..NUM_SQUARES)
        .map(Coord::from_index)
        .filter(|&at| is_legal(board, at, color))
        .collect()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    (0..NUM_SQUARES)
        .map(Coord::from_index)
        .any(|at| is_legal(board, at, color))
}

fn is_legal(board: &Board, at: Coord, color: Color) -> bool {
    board.cell(at) == Cell::Empty
        && Direction::ALL
            .iter()
            .any(|&dir| !capture_ray(board, at, color, dir).is_empty())
}
