// Board state for the Caro engine
//
// The board is pure state plus derived queries. The only mutations are
// placing a mark into an empty cell and clearing a cell again; search code
// must pair the two, which the `Speculative` guard enforces.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Coord, Mark};

/// The game grid: a row-major square of optionally occupied cells
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Creates an empty board of the given side length
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether signed row/col offsets land on the board
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Returns the mark at a cell, or None if empty
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[coord.row * self.size + coord.col]
    }

    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Places a mark. Callers must only place into empty cells; game-level
    /// validation happens in the controller, search places via `Speculative`.
    pub fn place(&mut self, coord: Coord, mark: Mark) {
        debug_assert!(self.is_empty_cell(coord), "placing onto occupied cell");
        self.cells[coord.row * self.size + coord.col] = Some(mark);
    }

    /// Clears a cell back to empty (undo of a speculative placement)
    pub fn clear_cell(&mut self, coord: Coord) {
        self.cells[coord.row * self.size + coord.col] = None;
    }

    /// Resets the whole board to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut empty = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let coord = Coord::new(row, col);
                if self.is_empty_cell(coord) {
                    empty.push(coord);
                }
            }
        }
        empty
    }

    /// Empty cells within Chebyshev distance 1 of any cell holding `mark`,
    /// deduplicated, in row-major discovery order
    pub fn empty_cells_adjacent_to(&self, mark: Mark) -> Vec<Coord> {
        let mut adjacent: Vec<Coord> = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(Coord::new(row, col)) != Some(mark) {
                    continue;
                }
                for dr in -1i32..=1 {
                    for dc in -1i32..=1 {
                        let nr = row as i32 + dr;
                        let nc = col as i32 + dc;
                        if !self.in_bounds(nr, nc) {
                            continue;
                        }
                        let coord = Coord::new(nr as usize, nc as usize);
                        if self.is_empty_cell(coord) && !adjacent.contains(&coord) {
                            adjacent.push(coord);
                        }
                    }
                }
            }
        }
        adjacent
    }
}

/// Scoped speculative placement used during search and threat analysis.
///
/// Places the mark on construction and clears the cell again when dropped,
/// so every exit path (early return, pruning break, panic unwind) restores
/// the board to committed state.
pub struct Speculative<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> Speculative<'a> {
    pub fn place(board: &'a mut Board, coord: Coord, mark: Mark) -> Self {
        board.place(coord, mark);
        Speculative { board, coord }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculative<'_> {
    fn drop(&mut self) {
        self.board.clear_cell(self.coord);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:2}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:2} ", row)?;
            for col in 0..self.size {
                let glyph = match self.get(Coord::new(row, col)) {
                    Some(mark) => mark.as_str(),
                    None => ".",
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
