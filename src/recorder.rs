// Game recording: one JSONL line per applied move
//
// Recording is best-effort. A failed write is logged and play continues;
// the record exists for post-game analysis, not for correctness.

use log::error;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::board::Board;
use crate::types::{Coord, GameStatus, Mark};

/// A single applied move with the board state after it
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MoveRecord {
    pub turn: u32,
    pub mark: Mark,
    pub cell: Coord,
    pub board: Board,
    pub status: GameStatus,
    pub timestamp: String,
}

/// Writes move records to a JSONL file as the game progresses
pub struct GameRecorder {
    file: File,
}

impl GameRecorder {
    /// Creates a recorder, truncating any existing file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())
            .map_err(|e| {
                format!(
                    "Failed to create record file '{}': {}",
                    path.as_ref().display(),
                    e
                )
            })?;
        log::info!("Recording moves to {}", path.as_ref().display());
        Ok(GameRecorder { file })
    }

    /// Appends one move record; failures are logged, never fatal
    pub fn log_move(
        &mut self,
        turn: u32,
        mark: Mark,
        cell: Coord,
        board: &Board,
        status: &GameStatus,
    ) {
        let record = MoveRecord {
            turn,
            mark,
            cell,
            board: board.clone(),
            status: status.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match serde_json::to_string(&record) {
            Ok(json_line) => {
                if let Err(e) = writeln!(self.file, "{}", json_line) {
                    error!("Failed to write move record: {}", e);
                } else if let Err(e) = self.file.flush() {
                    error!("Failed to flush move record: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize move record: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_records_are_valid_jsonl() {
        let path = std::env::temp_dir().join("caro_recorder_unit_test.jsonl");
        {
            let mut recorder = GameRecorder::new(&path).expect("recorder");
            let mut board = Board::new(10);
            board.place(Coord::new(5, 5), Mark::X);
            recorder.log_move(
                0,
                Mark::X,
                Coord::new(5, 5),
                &board,
                &GameStatus::InProgress,
            );
            board.place(Coord::new(4, 4), Mark::O);
            recorder.log_move(
                1,
                Mark::O,
                Coord::new(4, 4),
                &board,
                &GameStatus::InProgress,
            );
        }

        let contents = fs::read_to_string(&path).expect("read back");
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: MoveRecord = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(first.turn, 0);
        assert_eq!(first.mark, Mark::X);
        assert_eq!(first.cell, Coord::new(5, 5));
        assert_eq!(first.status, GameStatus::InProgress);

        let _ = fs::remove_file(&path);
    }
}
