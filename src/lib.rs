// Library exports for the Caro engine
// The board model and both decision engines are usable without the CLI

pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod priority;
pub mod recorder;
pub mod replay;
pub mod rules;
pub mod scan;
pub mod search;
pub mod threat;
pub mod types;
