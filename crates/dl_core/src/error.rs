use thiserror::Error;

/// Errors surfaced before or around a simulation.
///
/// The per-pitch hot path never fails: unmatched draws fall back to a ground
/// out and calls after game end are no-ops. Everything here is either a
/// configuration problem caught before `play_ball`, or a caller misusing the
/// decision-point API.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Team '{team}' has too few batters: need 9, found {found}")]
    TooFewBatters { team: String, found: usize },

    #[error("Team '{team}' has no pitchers")]
    NoPitchers { team: String },

    #[error("The same team cannot play both sides: '{0}'")]
    SameTeam(String),

    #[error("Team '{team}' rotation index {index} is out of range ({starters} starters)")]
    InvalidRotation { team: String, index: usize, starters: usize },

    #[error("Invalid rating for {player}: {field} = {value}")]
    InvalidRating { player: String, field: &'static str, value: f64 },

    #[error("Invalid decision: {0}")]
    InvalidDecision(String),

    #[error("No manager decision is pending")]
    NoPendingDecision,

    #[error("Game result is for team {found}, not team {expected}")]
    ResultMismatch { expected: u32, found: u32 },

    #[error("Invalid engine configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    /// True for problems in the rosters themselves (as opposed to engine usage).
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            GameError::TooFewBatters { .. }
                | GameError::NoPitchers { .. }
                | GameError::SameTeam(_)
                | GameError::InvalidRotation { .. }
                | GameError::InvalidRating { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
