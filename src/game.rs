// Game controller: turn state machine over the board and the engines
//
// The controller owns the committed board. Engines receive a mutable view
// for their speculative work but must hand the board back bit-identical;
// only the controller applies moves.

use log::{info, warn};

use crate::board::Board;
use crate::config::Config;
use crate::priority::PriorityEngine;
use crate::recorder::GameRecorder;
use crate::rules;
use crate::search::MinimaxEngine;
use crate::types::{Coord, EngineKind, GameMode, GameStatus, Mark};

/// Who controls a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Machine(EngineKind),
}

pub struct Game {
    config: Config,
    mode: GameMode,
    board: Board,
    current: Mark,
    status: GameStatus,
    turn: u32,
    x_seat: Seat,
    o_seat: Seat,
    minimax: MinimaxEngine,
    priority: PriorityEngine,
    recorder: Option<GameRecorder>,
}

impl Game {
    /// Creates a game in the given mode. Seat assignment follows the
    /// original layout: the human always sits on X in human-vs-machine,
    /// and machine-vs-machine pairs the configured per-seat engines.
    pub fn new(mode: GameMode, config: Config) -> Self {
        let (x_seat, o_seat) = match mode {
            GameMode::HumanVsHuman => (Seat::Human, Seat::Human),
            GameMode::HumanVsMachine => (Seat::Human, Seat::Machine(config.engines.o_engine)),
            GameMode::MachineVsMachine => (
                Seat::Machine(config.engines.x_engine),
                Seat::Machine(config.engines.o_engine),
            ),
        };

        let mut game = Game {
            mode,
            board: Board::new(config.board.size),
            current: Mark::X,
            status: GameStatus::InProgress,
            turn: 0,
            x_seat,
            o_seat,
            minimax: MinimaxEngine::new(config.clone()),
            priority: PriorityEngine::new(config.clone()),
            recorder: None,
            config,
        };
        game.restart();
        game
    }

    /// Clears the board and starts over. The record file is truncated and
    /// re-opened so each game produces a standalone, verifiable log.
    /// Machine-vs-machine opens with X taking the centre, as the original
    /// did, so the first search has a mark to play around.
    pub fn restart(&mut self) {
        self.board.clear();
        self.current = Mark::X;
        self.status = GameStatus::InProgress;
        self.turn = 0;

        self.recorder = if self.config.record.enabled {
            match GameRecorder::new(&self.config.record.log_file_path) {
                Ok(recorder) => Some(recorder),
                Err(e) => {
                    warn!("Recording disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        info!("Game restarted ({:?})", self.mode);

        if self.mode == GameMode::MachineVsMachine {
            let center = self.config.board.center();
            if self.board.is_empty_cell(center) {
                self.apply_move(center);
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    fn seat(&self, mark: Mark) -> Seat {
        match mark {
            Mark::X => self.x_seat,
            Mark::O => self.o_seat,
        }
    }

    /// Whether the seat to move is machine-controlled
    pub fn is_machine_turn(&self) -> bool {
        !self.status.is_over() && matches!(self.seat(self.current), Seat::Machine(_))
    }

    /// Applies a human move for the seat to move. Occupied or out-of-range
    /// targets are rejected silently with no state change; returns whether
    /// the move was applied.
    pub fn play(&mut self, coord: Coord) -> bool {
        if self.status.is_over() {
            return false;
        }
        if self.seat(self.current) != Seat::Human {
            return false;
        }
        if !self.board.in_bounds(coord.row as i32, coord.col as i32)
            || !self.board.is_empty_cell(coord)
        {
            return false;
        }
        self.apply_move(coord);
        true
    }

    /// Runs one machine turn: asks the configured engine for a move and
    /// applies it. An engine finding no move means the board is full, which
    /// resolves as a draw. Returns the applied cell.
    pub fn step_machine(&mut self) -> Option<Coord> {
        if self.status.is_over() {
            return None;
        }
        let kind = match self.seat(self.current) {
            Seat::Machine(kind) => kind,
            Seat::Human => return None,
        };

        let mark = self.current;
        let chosen = match kind {
            EngineKind::Minimax => self.minimax.best_move(&mut self.board, mark),
            EngineKind::Priority => self.priority.best_move(&mut self.board, mark),
        };

        match chosen {
            Some(coord) => {
                debug_assert!(self.board.is_empty_cell(coord));
                self.apply_move(coord);
                Some(coord)
            }
            None => {
                self.status = GameStatus::Draw;
                None
            }
        }
    }

    /// Commits a validated move: place, record, resolve status, flip seats
    fn apply_move(&mut self, coord: Coord) {
        let mark = self.current;
        self.board.place(coord, mark);
        self.status = rules::status_after_move(&self.board, mark, self.config.board.win_length);

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.log_move(self.turn, mark, coord, &self.board, &self.status);
        }

        match &self.status {
            GameStatus::Won { mark, cells } => {
                info!(
                    "{} wins with {:?} after {} moves",
                    mark.as_str(),
                    cells,
                    self.turn + 1
                );
            }
            GameStatus::Draw => info!("Draw after {} moves", self.turn + 1),
            GameStatus::InProgress => {
                self.current = mark.opponent();
            }
        }
        self.turn += 1;
    }

    /// Human-readable status line for the renderer
    pub fn status_text(&self) -> String {
        match &self.status {
            GameStatus::Won { mark, .. } => match self.seat(*mark) {
                Seat::Human => format!("Player {} wins!", mark.as_str()),
                Seat::Machine(kind) => {
                    format!("Machine {} ({}) wins!", mark.as_str(), kind.as_str())
                }
            },
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => match self.seat(self.current) {
                Seat::Human => format!("Player {}'s turn", self.current.as_str()),
                Seat::Machine(kind) => format!(
                    "Machine {} ({}) is thinking...",
                    self.current.as_str(),
                    kind.as_str()
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> Config {
        let mut config = Config::default_hardcoded();
        config.record.enabled = false;
        config.pacing.machine_delay_ms = 0;
        config
    }

    #[test]
    fn test_human_vs_human_alternates() {
        let mut game = Game::new(GameMode::HumanVsHuman, quiet_config());
        assert_eq!(game.current_mark(), Mark::X);
        assert!(game.play(Coord::new(0, 0)));
        assert_eq!(game.current_mark(), Mark::O);
        assert!(game.play(Coord::new(0, 1)));
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_invalid_human_moves_are_ignored() {
        let mut game = Game::new(GameMode::HumanVsHuman, quiet_config());
        assert!(game.play(Coord::new(3, 3)));
        // Occupied cell: rejected, no seat flip
        assert!(!game.play(Coord::new(3, 3)));
        assert_eq!(game.current_mark(), Mark::O);
        // Out of range: rejected
        assert!(!game.play(Coord::new(10, 0)));
        assert_eq!(game.current_mark(), Mark::O);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut game = Game::new(GameMode::HumanVsHuman, quiet_config());
        // X builds a row at 0; O answers far away
        for col in 0..4 {
            assert!(game.play(Coord::new(0, col)));
            assert!(game.play(Coord::new(9, col)));
        }
        assert!(game.play(Coord::new(0, 4)));
        match game.status() {
            GameStatus::Won { mark, cells } => {
                assert_eq!(*mark, Mark::X);
                assert_eq!(cells.len(), 5);
            }
            other => panic!("expected X to win, got {:?}", other),
        }
        // Further input is ignored once finished
        assert!(!game.play(Coord::new(5, 5)));
    }

    #[test]
    fn test_machine_mode_seeds_center_opening() {
        let game = Game::new(GameMode::MachineVsMachine, quiet_config());
        assert_eq!(game.board().get(Coord::new(5, 5)), Some(Mark::X));
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_machine_turn_applies_a_legal_move() {
        let mut game = Game::new(GameMode::MachineVsMachine, quiet_config());
        let before_empty = game.board().empty_cells().len();
        let coord = game.step_machine().expect("machine move");
        assert_eq!(game.board().get(coord), Some(Mark::O));
        assert_eq!(game.board().empty_cells().len(), before_empty - 1);
    }

    #[test]
    fn test_human_vs_machine_seats() {
        let mut game = Game::new(GameMode::HumanVsMachine, quiet_config());
        assert!(!game.is_machine_turn());
        // step_machine on a human seat is a no-op
        assert_eq!(game.step_machine(), None);
        assert!(game.play(Coord::new(4, 4)));
        assert!(game.is_machine_turn());
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut game = Game::new(GameMode::HumanVsHuman, quiet_config());
        game.play(Coord::new(2, 2));
        game.play(Coord::new(3, 3));
        game.restart();
        assert_eq!(game.board().empty_cells().len(), 100);
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(*game.status(), GameStatus::InProgress);
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_restart_rotates_the_record_file() {
        use crate::replay::ReplayEngine;

        let path = std::env::temp_dir().join("caro_game_restart_test.jsonl");
        let mut config = quiet_config();
        config.record.enabled = true;
        config.record.log_file_path = path.to_string_lossy().into_owned();

        // Play a finished game, restart, then play on; the log must hold
        // only the new game and still verify cleanly
        let mut game = Game::new(GameMode::HumanVsHuman, config.clone());
        for col in 0..4 {
            assert!(game.play(Coord::new(0, col)));
            assert!(game.play(Coord::new(9, col)));
        }
        assert!(game.play(Coord::new(0, 4)));
        assert!(game.status().is_over());

        game.restart();
        assert!(game.play(Coord::new(5, 5)));
        assert!(game.play(Coord::new(6, 6)));

        let replay = ReplayEngine::new(config);
        let records = replay.load_log_file(&path).expect("log file loads");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].turn, 0);
        assert_eq!(records[0].cell, Coord::new(5, 5));
        assert_eq!(
            replay.verify(&records).expect("log verifies"),
            GameStatus::InProgress
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_status_text_tracks_state() {
        let mut game = Game::new(GameMode::HumanVsMachine, quiet_config());
        assert_eq!(game.status_text(), "Player X's turn");
        game.play(Coord::new(4, 4));
        assert!(game.status_text().contains("thinking"));
    }
}
