// Threat analysis: where the next mark creates, or must deny, a dangerous run
//
// One routine serves both directions of play. In creation mode it asks
// "where does placing my mark build the strongest unblocked run"; in block
// mode it asks the same question for the opponent's mark, and the returned
// cell is exactly the square to occupy first.

use log::debug;

use crate::board::{Board, Speculative};
use crate::scan;
use crate::types::{Coord, Mark};

/// Finds the best threat cell for `mark`'s point of view.
///
/// Scans all empty cells in row-major order, speculatively places the target
/// mark (`mark` when `for_creation`, otherwise the opponent's), takes the
/// strongest tier across the four axes through that cell and keeps the
/// single best cell under strict `>` comparison, so the first-found cell
/// wins ties. The board is restored before returning.
///
/// Returns `(None, 0)` when no placement reaches tier 1.
pub fn find_best_threat(board: &mut Board, mark: Mark, for_creation: bool) -> (Option<Coord>, u8) {
    let target = if for_creation { mark } else { mark.opponent() };

    let mut best_cell: Option<Coord> = None;
    let mut highest_tier = 0u8;

    for row in 0..board.size() {
        for col in 0..board.size() {
            let coord = Coord::new(row, col);
            if !board.is_empty_cell(coord) {
                continue;
            }

            let guard = Speculative::place(board, coord, target);
            let tier = scan::max_tier_at(guard.board(), coord, target);
            drop(guard);

            if tier > highest_tier {
                highest_tier = tier;
                best_cell = Some(coord);
            }
        }
    }

    if let Some(cell) = best_cell {
        debug!(
            "Threat analysis for {} ({}): tier {} at ({}, {})",
            mark.as_str(),
            if for_creation { "create" } else { "block" },
            highest_tier,
            cell.row,
            cell.col
        );
    }

    (best_cell, highest_tier)
}
