//! Auto-play pacing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutoPlayConfig {
    /// Delay between pitches (default: 0 ms)
    pub pitch_delay_ms: u64,
    /// Hold after a home run (default: 2600 ms)
    pub home_run_hold_ms: u64,
    /// Hold after a strikeout (default: 1500 ms)
    pub strikeout_hold_ms: u64,
    /// Hold after other PA-ending hits and outs (default: 1200 ms)
    pub play_hold_ms: u64,
    /// Hold after a double play or sacrifice fly (default: 1800 ms)
    pub big_play_hold_ms: u64,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            pitch_delay_ms: 0,
            home_run_hold_ms: 2600,
            strikeout_hold_ms: 1500,
            play_hold_ms: 1200,
            big_play_hold_ms: 1800,
        }
    }
}

impl AutoPlayConfig {
    /// No delays anywhere; used by headless simulation.
    pub fn instant() -> Self {
        Self {
            pitch_delay_ms: 0,
            home_run_hold_ms: 0,
            strikeout_hold_ms: 0,
            play_hold_ms: 0,
            big_play_hold_ms: 0,
        }
    }
}
