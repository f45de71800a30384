//! # dl_core - Deterministic Baseball Game Simulation Engine
//!
//! Pitch-by-pitch simulation of a nine-plus-inning game between two rosters,
//! with live state, manager decision points, bullpen management and a final
//! box score.
//!
//! ## Features
//! - Deterministic simulation (same seed, rosters and choices = same game)
//! - Step-by-step live sessions with cooperative auto-play
//! - Win / loss / save attribution and career archival
//! - JSON API for headless integration

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Large enum variants - boxing would require API changes
#![allow(clippy::large_enum_variant)]

pub mod api;
pub mod calibration;
pub mod career;
pub mod engine;
pub mod error;
pub mod models;
pub mod roster;

// Re-export main API functions
pub use api::{simulate_game_json, GameRequest, GameResponse};
pub use career::apply_game_result;
pub use engine::{
    AutoPlayMode, DecisionPoint, EngineConfig, GameEngine, GameObserver, GameOptions, GamePlan,
    LiveGameSession, ManagerOption, StepResult, StopReason, Tick,
};
pub use error::{GameError, Result};
pub use models::{GameResult, PlayEvent, Side, Team};
