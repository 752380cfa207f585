// Win detection for the Caro engine

use crate::board::Board;
use crate::types::{Axis, Coord, GameStatus, Mark};

/// Finds a completed winning line for `mark`, if any.
///
/// Scans every cell in row-major order and, per axis, the fixed-size window
/// starting there. The first full window found is returned, so an overlong
/// run is reported via its first qualifying window.
pub fn winning_line(board: &Board, mark: Mark, win_length: usize) -> Option<Vec<Coord>> {
    for row in 0..board.size() {
        for col in 0..board.size() {
            for &axis in &Axis::ALL {
                let mut line = Vec::with_capacity(win_length);
                for k in 0..win_length {
                    let r = row as i32 + axis.dr * k as i32;
                    let c = col as i32 + axis.dc * k as i32;
                    if !board.in_bounds(r, c) {
                        break;
                    }
                    let coord = Coord::new(r as usize, c as usize);
                    if board.get(coord) == Some(mark) {
                        line.push(coord);
                    } else {
                        break;
                    }
                }
                if line.len() == win_length {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Whether `mark` has a completed winning line
pub fn has_win(board: &Board, mark: Mark, win_length: usize) -> bool {
    winning_line(board, mark, win_length).is_some()
}

/// Resolves the status after a move by `mover`. Win is checked before the
/// full-board draw.
pub fn status_after_move(board: &Board, mover: Mark, win_length: usize) -> GameStatus {
    if let Some(cells) = winning_line(board, mover, win_length) {
        return GameStatus::Won { mark: mover, cells };
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
