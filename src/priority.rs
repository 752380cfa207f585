// Priority engine: an ordered rule cascade that never looks deeper than
// one ply. Deliberately simpler than the minimax engine so machine-vs-
// machine matches pit two different styles against each other.

use log::info;
use rand::prelude::IndexedRandom;

use crate::board::{Board, Speculative};
use crate::config::Config;
use crate::rules;
use crate::threat;
use crate::types::{Coord, Mark};

pub struct PriorityEngine {
    config: Config,
}

impl PriorityEngine {
    pub fn new(config: Config) -> Self {
        PriorityEngine { config }
    }

    /// Picks a move by walking the rule cascade; the first rule that
    /// matches wins. Returns `None` only when the board is full.
    ///
    /// 1. block the opponent's immediate win
    /// 2. take our own immediate win
    /// 3. block the opponent's strongest developing threat
    /// 4. create our own strongest threat
    /// 5. take the centre cell
    /// 6. random empty cell adjacent to one of our marks
    /// 7. random empty cell anywhere
    pub fn best_move(&self, board: &mut Board, mark: Mark) -> Option<Coord> {
        let win_length = self.config.board.win_length;
        let opponent = mark.opponent();

        if let Some(coord) = self.winning_cell(board, opponent, win_length) {
            info!(
                "{}: blocking win at ({}, {})",
                mark.as_str(),
                coord.row,
                coord.col
            );
            return Some(coord);
        }

        if let Some(coord) = self.winning_cell(board, mark, win_length) {
            info!(
                "{}: taking win at ({}, {})",
                mark.as_str(),
                coord.row,
                coord.col
            );
            return Some(coord);
        }

        let (block_cell, block_tier) = threat::find_best_threat(board, mark, false);
        if block_tier >= 1 {
            if let Some(coord) = block_cell {
                info!(
                    "{}: blocking tier-{} threat at ({}, {})",
                    mark.as_str(),
                    block_tier,
                    coord.row,
                    coord.col
                );
                return Some(coord);
            }
        }

        let (create_cell, create_tier) = threat::find_best_threat(board, mark, true);
        if create_tier >= 1 {
            if let Some(coord) = create_cell {
                info!(
                    "{}: creating tier-{} threat at ({}, {})",
                    mark.as_str(),
                    create_tier,
                    coord.row,
                    coord.col
                );
                return Some(coord);
            }
        }

        let center = self.config.board.center();
        if board.is_empty_cell(center) {
            info!("{}: taking centre", mark.as_str());
            return Some(center);
        }

        let mut rng = rand::rng();

        let near_own = board.empty_cells_adjacent_to(mark);
        if let Some(&coord) = near_own.choose(&mut rng) {
            info!(
                "{}: playing adjacent at ({}, {})",
                mark.as_str(),
                coord.row,
                coord.col
            );
            return Some(coord);
        }

        let empty = board.empty_cells();
        let chosen = empty.choose(&mut rng).copied();
        match chosen {
            Some(coord) => info!(
                "{}: playing random at ({}, {})",
                mark.as_str(),
                coord.row,
                coord.col
            ),
            None => info!("{}: no empty cell remains", mark.as_str()),
        }
        chosen
    }

    /// First empty cell (row-major) where placing `mark` completes a line
    fn winning_cell(&self, board: &mut Board, mark: Mark, win_length: usize) -> Option<Coord> {
        for coord in board.empty_cells() {
            let guard = Speculative::place(board, coord, mark);
            let wins = rules::has_win(guard.board(), mark, win_length);
            drop(guard);
            if wins {
                return Some(coord);
            }
        }
        None
    }
}
