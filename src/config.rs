// Configuration module for reading Caro.toml
//
// Board geometry, evaluation weights, search settings and engine seat
// assignment are all tunable here rather than hardcoded in the algorithms.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::{Coord, EngineKind};

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub board: BoardConfig,
    pub scores: ScoresConfig,
    pub search: SearchConfig,
    pub engines: EnginesConfig,
    pub pacing: PacingConfig,
    pub record: RecordConfig,
}

/// Board geometry constants
#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    pub size: usize,
    pub win_length: usize,
}

impl BoardConfig {
    /// The centre cell, preferred as an opening move
    pub fn center(&self) -> Coord {
        Coord::new(self.size / 2, self.size / 2)
    }
}

/// Static evaluation weights
///
/// Run weights follow the original hand-tuned scale: a completed five
/// dwarfs an open four, which dwarfs an open three, and so on down to
/// loose pairs. The pressure weights feed the second, threat-aware pass.
#[derive(Debug, Deserialize, Clone)]
pub struct ScoresConfig {
    pub five: i32,
    pub open_four: i32,
    pub open_three: i32,
    pub half_open_three: i32,
    pub pair: i32,

    // Positional bonus for central play
    pub center_bonus_base: i32,
    pub center_bonus_cap: i32,

    // Threat-pressure pass: per-run pressure points
    pub half_open_four_pressure: i32,
    pub open_three_pressure: i32,
    pub open_two_pressure: i32,

    // How pressure converts to score: opponent pressure penalises the
    // maximiser harder than own pressure rewards it
    pub opponent_pressure_weight: i32,
    pub own_pressure_weight: i32,
}

/// Minimax search constants
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Ply limit beyond the root candidate move
    pub max_depth: u8,
    /// Score assigned to a completed win at the root, decayed per ply
    pub win_score: i32,
    /// Alpha-beta pruning toggle, kept switchable to verify search
    /// equivalence with plain minimax
    pub enable_alpha_beta: bool,
}

/// Which algorithm drives each machine seat
#[derive(Debug, Deserialize, Clone)]
pub struct EnginesConfig {
    pub x_engine: EngineKind,
    pub o_engine: EngineKind,
}

/// Cosmetic pacing of machine moves
#[derive(Debug, Deserialize, Clone)]
pub struct PacingConfig {
    pub machine_delay_ms: u64,
}

/// Game recording configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RecordConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Caro.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Caro.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Caro.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Caro.toml
    pub fn default_hardcoded() -> Self {
        Config {
            board: BoardConfig {
                size: 10,
                win_length: 5,
            },
            scores: ScoresConfig {
                five: 100_000,
                open_four: 10_000,
                open_three: 5_000,
                half_open_three: 1_000,
                pair: 100,
                center_bonus_base: 10,
                center_bonus_cap: 5,
                half_open_four_pressure: 3,
                open_three_pressure: 2,
                open_two_pressure: 1,
                opponent_pressure_weight: 10,
                own_pressure_weight: 5,
            },
            search: SearchConfig {
                max_depth: 2,
                win_score: 1_000_000,
                enable_alpha_beta: true,
            },
            engines: EnginesConfig {
                x_engine: EngineKind::Minimax,
                o_engine: EngineKind::Priority,
            },
            pacing: PacingConfig {
                machine_delay_ms: 500,
            },
            record: RecordConfig {
                enabled: false,
                log_file_path: "caro_games.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Caro.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
