// Core types for the Caro (connected-five) engine

use serde::{Deserialize, Serialize};

/// A player's mark on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the opposing mark
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Converts mark to string representation for logs and rendering
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// A cell coordinate on the board (row-major addressing)
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

/// One of the four line axes. A run spans both directions along an axis,
/// so four axes cover all eight rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub dr: i32,
    pub dc: i32,
}

impl Axis {
    /// All four axes: horizontal, vertical, both diagonals
    pub const ALL: [Axis; 4] = [
        Axis { dr: 1, dc: 0 },
        Axis { dr: 0, dc: 1 },
        Axis { dr: 1, dc: 1 },
        Axis { dr: 1, dc: -1 },
    ];
}

/// Result of scanning one axis from an origin cell: the contiguous run
/// length (origin included once) and how many of its two ends are blocked
/// by the opposing mark or the board edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunInfo {
    pub length: usize,
    pub blocked_ends: u8,
}

impl RunInfo {
    /// Maps a run to its threat severity tier.
    ///
    /// Tier 3: four or more with both ends open (wins next move unless blocked)
    /// Tier 2: four or more with one end blocked
    /// Tier 1: open three
    /// Tier 0: everything else
    pub fn threat_tier(&self) -> u8 {
        if self.length >= 4 && self.blocked_ends == 0 {
            3
        } else if self.length >= 4 && self.blocked_ends == 1 {
            2
        } else if self.length == 3 && self.blocked_ends == 0 {
            1
        } else {
            0
        }
    }
}

/// Terminal state of a game
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
pub enum GameStatus {
    InProgress,
    /// A mark completed a winning line; the cells are kept for highlighting
    Won { mark: Mark, cells: Vec<Coord> },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Game mode selecting who controls each seat
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsMachine,
    MachineVsMachine,
}

/// Which decision algorithm drives a machine seat
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Minimax,
    Priority,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Minimax => "minimax",
            EngineKind::Priority => "priority",
        }
    }
}
