// Minimax engine: forced-response checks, candidate pruning, then
// depth-limited adversarial search with alpha-beta cutoffs

use log::{debug, info};

use crate::board::{Board, Speculative};
use crate::config::Config;
use crate::eval;
use crate::rules;
use crate::threat;
use crate::types::{Coord, Mark};

/// Depth-limited minimax with alpha-beta pruning over a candidate set
pub struct MinimaxEngine {
    config: Config,
}

impl MinimaxEngine {
    pub fn new(config: Config) -> Self {
        MinimaxEngine { config }
    }

    /// Computes the best move for `mark`.
    ///
    /// Strict priority order: block an opponent move that wins outright,
    /// pre-empt the opponent's strongest developing threat, then search the
    /// candidate set. The board is left bit-identical to how it arrived.
    ///
    /// Returns `None` only when the board has no empty cell.
    pub fn best_move(&self, board: &mut Board, mark: Mark) -> Option<Coord> {
        let win_length = self.config.board.win_length;
        let opponent = mark.opponent();

        // Forced block: any cell where the opponent would complete a line
        for coord in board.empty_cells() {
            let guard = Speculative::place(board, coord, opponent);
            let wins = rules::has_win(guard.board(), opponent, win_length);
            drop(guard);
            if wins {
                info!(
                    "{}: blocking imminent win at ({}, {})",
                    mark.as_str(),
                    coord.row,
                    coord.col
                );
                return Some(coord);
            }
        }

        // Pre-empt the opponent's best developing threat (open three or any
        // four) by taking the cell ourselves
        let (threat_cell, threat_tier) = threat::find_best_threat(board, opponent, true);
        if threat_tier >= 1 {
            if let Some(coord) = threat_cell {
                info!(
                    "{}: denying tier-{} threat at ({}, {})",
                    mark.as_str(),
                    threat_tier,
                    coord.row,
                    coord.col
                );
                return Some(coord);
            }
        }

        let chosen = self.search_candidates(board, mark);
        match chosen {
            Some((coord, score)) => {
                info!(
                    "{}: minimax chose ({}, {}) with score {}",
                    mark.as_str(),
                    coord.row,
                    coord.col,
                    score
                );
                Some(coord)
            }
            None => None,
        }
    }

    /// Runs the search phase alone: generates candidates and evaluates each
    /// root move to the configured depth. Exposed so search behaviour can be
    /// exercised without the forced-response shortcuts.
    pub fn search_candidates(&self, board: &mut Board, mark: Mark) -> Option<(Coord, i32)> {
        let candidates = self.candidate_moves(board, mark);
        if candidates.is_empty() {
            return None;
        }
        debug!(
            "{}: searching {} candidate moves",
            mark.as_str(),
            candidates.len()
        );

        let mut best: Option<(Coord, i32)> = None;
        for coord in candidates {
            let mut guard = Speculative::place(board, coord, mark);
            // Each root move gets a fresh window; the reply is a
            // minimising node for the opponent
            let score = self.minimax(
                guard.board_mut(),
                mark,
                mark.opponent(),
                0,
                false,
                i32::MIN,
                i32::MAX,
            );
            drop(guard);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((coord, score)),
            }
        }
        best
    }

    /// Candidate generation: empty cells adjacent to the searcher's own
    /// marks, falling back to every empty cell when none exist
    fn candidate_moves(&self, board: &Board, mark: Mark) -> Vec<Coord> {
        let adjacent = board.empty_cells_adjacent_to(mark);
        if adjacent.is_empty() {
            board.empty_cells()
        } else {
            adjacent
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &mut Board,
        searcher: Mark,
        to_move: Mark,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let win_length = self.config.board.win_length;
        let win_score = self.config.search.win_score;

        // Terminal checks: wins decay with depth so faster wins (and slower
        // losses) are preferred
        if rules::has_win(board, searcher, win_length) {
            return win_score - depth as i32;
        }
        if rules::has_win(board, searcher.opponent(), win_length) {
            return -win_score + depth as i32;
        }
        if board.is_full() {
            return 0;
        }
        if depth >= self.config.search.max_depth {
            return eval::evaluate(board, searcher, &self.config);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        'outer: for row in 0..board.size() {
            for col in 0..board.size() {
                let coord = Coord::new(row, col);
                if !board.is_empty_cell(coord) {
                    continue;
                }

                let mut guard = Speculative::place(board, coord, to_move);
                let score = self.minimax(
                    guard.board_mut(),
                    searcher,
                    to_move.opponent(),
                    depth + 1,
                    !maximizing,
                    alpha,
                    beta,
                );
                drop(guard);

                if maximizing {
                    best = best.max(score);
                    alpha = alpha.max(best);
                } else {
                    best = best.min(score);
                    beta = beta.min(best);
                }

                if self.config.search.enable_alpha_beta && beta <= alpha {
                    break 'outer;
                }
            }
        }

        best
    }
}
