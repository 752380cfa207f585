// Line scanner: the shared primitive behind win detection, threat analysis
// and static evaluation

use crate::board::Board;
use crate::types::{Axis, Coord, Mark, RunInfo};

/// Scans one axis outward from `origin` and reports the contiguous run of
/// `mark` through it.
///
/// Walks in `+axis` while cells match, then in `-axis`; the origin is
/// counted once. Each end contributes a blocked flag when the first
/// non-matching cell is off-board or occupied by the opposing mark; an
/// empty cell leaves that end open. Pure query, no mutation.
pub fn scan_axis(board: &Board, origin: Coord, axis: Axis, mark: Mark) -> RunInfo {
    let mut length = 1usize;
    let mut blocked_ends = 0u8;

    for sign in [1i32, -1i32] {
        let mut row = origin.row as i32 + axis.dr * sign;
        let mut col = origin.col as i32 + axis.dc * sign;
        while board.in_bounds(row, col)
            && board.get(Coord::new(row as usize, col as usize)) == Some(mark)
        {
            length += 1;
            row += axis.dr * sign;
            col += axis.dc * sign;
        }
        let open = board.in_bounds(row, col)
            && board.is_empty_cell(Coord::new(row as usize, col as usize));
        if !open {
            blocked_ends += 1;
        }
    }

    RunInfo {
        length,
        blocked_ends,
    }
}

/// The highest threat tier `mark` holds through `origin` across all four axes
pub fn max_tier_at(board: &Board, origin: Coord, mark: Mark) -> u8 {
    Axis::ALL
        .iter()
        .map(|&axis| scan_axis(board, origin, axis, mark).threat_tier())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> Axis {
        Axis { dr: 0, dc: 1 }
    }

    fn place_row(board: &mut Board, row: usize, cols: std::ops::Range<usize>, mark: Mark) {
        for col in cols {
            board.place(Coord::new(row, col), mark);
        }
    }

    #[test]
    fn test_single_mark_open_both_ends() {
        let mut board = Board::new(10);
        board.place(Coord::new(5, 5), Mark::X);
        let run = scan_axis(&board, Coord::new(5, 5), horizontal(), Mark::X);
        assert_eq!(run, RunInfo { length: 1, blocked_ends: 0 });
    }

    #[test]
    fn test_run_counts_both_directions_once() {
        let mut board = Board::new(10);
        place_row(&mut board, 5, 3..7, Mark::X);
        // Scanning from an interior cell sums both sides, origin once
        let run = scan_axis(&board, Coord::new(5, 5), horizontal(), Mark::X);
        assert_eq!(run.length, 4);
        assert_eq!(run.blocked_ends, 0);
    }

    #[test]
    fn test_end_blocked_by_opponent() {
        let mut board = Board::new(10);
        place_row(&mut board, 5, 3..6, Mark::X);
        board.place(Coord::new(5, 6), Mark::O);
        let run = scan_axis(&board, Coord::new(5, 4), horizontal(), Mark::X);
        assert_eq!(run, RunInfo { length: 3, blocked_ends: 1 });
    }

    #[test]
    fn test_end_blocked_by_board_edge() {
        let mut board = Board::new(10);
        place_row(&mut board, 0, 0..3, Mark::O);
        let run = scan_axis(&board, Coord::new(0, 1), horizontal(), Mark::O);
        assert_eq!(run, RunInfo { length: 3, blocked_ends: 1 });
    }

    #[test]
    fn test_both_ends_blocked() {
        let mut board = Board::new(10);
        board.place(Coord::new(5, 2), Mark::O);
        place_row(&mut board, 5, 3..6, Mark::X);
        board.place(Coord::new(5, 6), Mark::O);
        let run = scan_axis(&board, Coord::new(5, 4), horizontal(), Mark::X);
        assert_eq!(run, RunInfo { length: 3, blocked_ends: 2 });
    }

    #[test]
    fn test_diagonal_axis() {
        let mut board = Board::new(10);
        for i in 0..4 {
            board.place(Coord::new(2 + i, 2 + i), Mark::X);
        }
        let run = scan_axis(&board, Coord::new(3, 3), Axis { dr: 1, dc: 1 }, Mark::X);
        assert_eq!(run.length, 4);
        assert_eq!(run.blocked_ends, 0);
    }

    #[test]
    fn test_anti_diagonal_at_edge() {
        let mut board = Board::new(10);
        // Anti-diagonal run ending on the top edge
        board.place(Coord::new(0, 5), Mark::O);
        board.place(Coord::new(1, 4), Mark::O);
        board.place(Coord::new(2, 3), Mark::O);
        let run = scan_axis(&board, Coord::new(1, 4), Axis { dr: 1, dc: -1 }, Mark::O);
        assert_eq!(run.length, 3);
        assert_eq!(run.blocked_ends, 1);
    }

    #[test]
    fn test_max_tier_picks_strongest_axis() {
        let mut board = Board::new(10);
        // Open three horizontally, open two vertically, through (5,5)
        place_row(&mut board, 5, 4..7, Mark::X);
        board.place(Coord::new(4, 5), Mark::X);
        assert_eq!(max_tier_at(&board, Coord::new(5, 5), Mark::X), 1);
    }
}
