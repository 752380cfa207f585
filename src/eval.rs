// Static evaluation: the minimax leaf heuristic
//
// Two passes. The first scores raw runs per player plus a small bonus for
// central stones; the second adds threat pressure so that positions with a
// live four read as dangerous even when raw run totals look balanced.

use crate::board::Board;
use crate::config::Config;
use crate::scan;
use crate::types::{Axis, Coord, Mark};

/// Evaluates the board from `max_mark`'s perspective.
///
/// Positive favours the maximiser. Combines the two players' run totals as
/// `score(max) - score(min)`, then penalises the maximiser for the
/// opponent's threat pressure more heavily than it rewards its own.
pub fn evaluate(board: &Board, max_mark: Mark, cfg: &Config) -> i32 {
    let min_mark = max_mark.opponent();

    let run_score = score_runs(board, max_mark, cfg) - score_runs(board, min_mark, cfg);

    let own_pressure = threat_pressure(board, max_mark, cfg);
    let opponent_pressure = threat_pressure(board, min_mark, cfg);

    run_score - opponent_pressure * cfg.scores.opponent_pressure_weight
        + own_pressure * cfg.scores.own_pressure_weight
}

/// Raw run scoring for one player: every occupied cell contributes its
/// four axis runs at tiered weights, plus the centre-distance bonus.
fn score_runs(board: &Board, mark: Mark, cfg: &Config) -> i32 {
    let weights = &cfg.scores;
    let center = cfg.board.center();
    let mut score = 0;

    for row in 0..board.size() {
        for col in 0..board.size() {
            let coord = Coord::new(row, col);
            if board.get(coord) != Some(mark) {
                continue;
            }

            for &axis in &Axis::ALL {
                let run = scan::scan_axis(board, coord, axis, mark);
                score += match (run.length, run.blocked_ends) {
                    (l, _) if l >= 5 => weights.five,
                    (4, 0) => weights.open_four,
                    (3, 0) => weights.open_three,
                    (3, 1) => weights.half_open_three,
                    (2, b) if b <= 1 => weights.pair,
                    _ => 0,
                };
            }

            score += center_bonus(coord, center, weights.center_bonus_base, weights.center_bonus_cap);
        }
    }

    score
}

/// Threat pressure for one player: half-open fours, open threes and open
/// twos accumulate pressure points across every occupied cell's axis runs
fn threat_pressure(board: &Board, mark: Mark, cfg: &Config) -> i32 {
    let weights = &cfg.scores;
    let mut pressure = 0;

    for row in 0..board.size() {
        for col in 0..board.size() {
            let coord = Coord::new(row, col);
            if board.get(coord) != Some(mark) {
                continue;
            }

            for &axis in &Axis::ALL {
                let run = scan::scan_axis(board, coord, axis, mark);
                pressure += match (run.length, run.blocked_ends) {
                    (4, 1) => weights.half_open_four_pressure,
                    (3, 0) => weights.open_three_pressure,
                    (2, 0) => weights.open_two_pressure,
                    _ => 0,
                };
            }
        }
    }

    pressure
}

/// Bonus rewarding stones near the centre, clamped so corners bottom out
fn center_bonus(coord: Coord, center: Coord, base: i32, cap: i32) -> i32 {
    let dr = (coord.row as i32 - center.row as i32).abs().min(cap);
    let dc = (coord.col as i32 - center.col as i32).abs().min(cap);
    base - dr - dc
}
