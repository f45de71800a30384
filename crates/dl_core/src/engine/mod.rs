pub mod bases;
pub mod bullpen;
pub mod config;
pub mod decisions;
pub mod game_engine;
pub mod game_state;
pub mod inning;
pub mod live_game;
pub mod outcome;
pub mod pitch;
pub mod probability;
pub mod scoring;
pub mod stats;
pub mod tactics;

#[cfg(test)]
pub mod test_fixtures;

pub use bases::{Advance, Bases};
pub use bullpen::{choose_reliever, fatigue_for};
pub use config::EngineConfig;
pub use decisions::attribute_decisions;
pub use game_engine::{GameEngine, GameObserver, GameOptions, GamePlan};
pub use game_state::{GamePhase, GameState, ScoringEntry};
pub use live_game::{AutoPlayMode, LiveGameSession, SessionState, StepResult, StopReason, Tick};
pub use outcome::Outcome;
pub use probability::{compute_outcome_probabilities, OutcomeDistribution};
pub use tactics::{DecisionPoint, ManagerOption};
