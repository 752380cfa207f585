// Replay of recorded games
//
// Re-applies a JSONL move record against a fresh board to verify that the
// recorded game was legal, and can re-run an engine on each historical
// position to compare its decision with the recorded one.

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::board::Board;
use crate::config::Config;
use crate::priority::PriorityEngine;
use crate::recorder::MoveRecord;
use crate::rules;
use crate::search::MinimaxEngine;
use crate::types::{EngineKind, GameStatus, Mark};

/// Statistics for an engine-comparison replay
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_moves: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

pub struct ReplayEngine {
    config: Config,
}

impl ReplayEngine {
    pub fn new(config: Config) -> Self {
        ReplayEngine { config }
    }

    /// Loads all move records from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<MoveRecord>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open record file: {}", e))?;

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let record: MoveRecord = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;
            records.push(record);
        }

        info!("Loaded {} move records", records.len());
        Ok(records)
    }

    /// Re-applies the recorded moves on a fresh board, checking that every
    /// move was legal and that the recorded board and status match the
    /// reconstruction. Returns the final status.
    pub fn verify(&self, records: &[MoveRecord]) -> Result<GameStatus, String> {
        let mut board = Board::new(self.config.board.size);
        let mut status = GameStatus::InProgress;

        for record in records {
            if status.is_over() {
                return Err(format!(
                    "Turn {}: move recorded after the game ended",
                    record.turn
                ));
            }
            if !board.in_bounds(record.cell.row as i32, record.cell.col as i32) {
                return Err(format!(
                    "Turn {}: cell ({}, {}) out of bounds",
                    record.turn, record.cell.row, record.cell.col
                ));
            }
            if !board.is_empty_cell(record.cell) {
                return Err(format!(
                    "Turn {}: cell ({}, {}) already occupied",
                    record.turn, record.cell.row, record.cell.col
                ));
            }

            board.place(record.cell, record.mark);
            status = rules::status_after_move(&board, record.mark, self.config.board.win_length);

            if board != record.board {
                return Err(format!(
                    "Turn {}: reconstructed board diverges from the record",
                    record.turn
                ));
            }
            if status != record.status {
                return Err(format!(
                    "Turn {}: recorded status {:?} but reconstruction says {:?}",
                    record.turn, record.status, status
                ));
            }
        }

        Ok(status)
    }

    /// Re-runs an engine on every historical position where `mark` moved
    /// and reports how often it reproduces the recorded decision. Useful
    /// for regression-checking the deterministic minimax seat; the
    /// priority engine's random fallbacks make mismatches expected there.
    pub fn compare_engine(
        &self,
        records: &[MoveRecord],
        mark: Mark,
        kind: EngineKind,
    ) -> Result<ReplayStats, String> {
        let minimax = MinimaxEngine::new(self.config.clone());
        let priority = PriorityEngine::new(self.config.clone());

        let mut board = Board::new(self.config.board.size);
        let mut stats = ReplayStats::default();

        for record in records {
            if !board.in_bounds(record.cell.row as i32, record.cell.col as i32) {
                return Err(format!(
                    "Turn {}: cell ({}, {}) out of bounds",
                    record.turn, record.cell.row, record.cell.col
                ));
            }

            if record.mark == mark {
                let replayed = match kind {
                    EngineKind::Minimax => minimax.best_move(&mut board, mark),
                    EngineKind::Priority => priority.best_move(&mut board, mark),
                };

                stats.total_moves += 1;
                if replayed == Some(record.cell) {
                    stats.matches += 1;
                } else {
                    stats.mismatches += 1;
                    warn!(
                        "Turn {}: recorded ({}, {}) but {} replays {:?}",
                        record.turn,
                        record.cell.row,
                        record.cell.col,
                        kind.as_str(),
                        replayed
                    );
                }
            }

            if !board.is_empty_cell(record.cell) {
                return Err(format!("Turn {}: illegal recorded move", record.turn));
            }
            board.place(record.cell, record.mark);
        }

        stats.match_rate = if stats.total_moves > 0 {
            stats.matches as f64 / stats.total_moves as f64 * 100.0
        } else {
            0.0
        };
        Ok(stats)
    }
}
