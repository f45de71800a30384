//! Game length and termination rules.

use serde::{Deserialize, Serialize};

/// Ends the game early when a team leads by `run_margin` after a completed
/// inning at or past `after_inning`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MercyRule {
    pub run_margin: u32,
    pub after_inning: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameRulesConfig {
    /// Innings in a regulation game (default: 9)
    pub regulation_innings: u32,
    /// Last inning played before a tie is declared. `None` plays until decided.
    pub max_innings: Option<u32>,
    pub mercy_rule: Option<MercyRule>,
    /// Runaway-game guard for `run_to_completion` (default: 2000 pitches,
    /// roughly 60 innings). Not a rule: extra innings stay uncapped unless
    /// `max_innings` is set. Must be non-zero.
    pub pitch_safety_cap: u32,
}

impl Default for GameRulesConfig {
    fn default() -> Self {
        Self {
            regulation_innings: 9,
            max_innings: None,
            mercy_rule: None,
            pitch_safety_cap: 2000,
        }
    }
}
