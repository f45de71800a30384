//! Pitch-level constants: everything decided before the outcome model is
//! sampled.

use serde::{Deserialize, Serialize};

/// Per-pitch interception parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PitchConfig {
    /// Chance of a foul when strikes < 2 (default: 0.11)
    pub foul_rate: f64,

    // === Called ball ===
    /// Base called-ball chance at league-average walk rates (default: 0.20)
    pub called_ball_base: f64,
    /// Batter share of the blended walk rate (default: 0.6)
    pub called_ball_batter_weight: f64,
    /// Pitcher share of the blended walk rate (default: 0.4)
    pub called_ball_pitcher_weight: f64,
    /// League walk rate used to normalize the blend (default: 0.081)
    pub league_walk_rate: f64,
    pub called_ball_min: f64,
    /// Upper clamp (default: 0.35)
    pub called_ball_max: f64,

    /// Flat called-strike chance (default: 0.10)
    pub called_strike_rate: f64,

    // === Swinging strike ===
    pub swing_miss_pitcher_weight: f64,
    pub swing_miss_batter_weight: f64,
    pub swing_miss_min: f64,
    pub swing_miss_max: f64,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            foul_rate: 0.11,

            called_ball_base: 0.20,
            called_ball_batter_weight: 0.6,
            called_ball_pitcher_weight: 0.4,
            league_walk_rate: 0.081,
            called_ball_min: 0.08,
            called_ball_max: 0.35,

            called_strike_rate: 0.10,

            swing_miss_pitcher_weight: 0.45,
            swing_miss_batter_weight: 0.3,
            swing_miss_min: 0.05,
            swing_miss_max: 0.20,
        }
    }
}

impl PitchConfig {
    /// Called-ball chance for a batter/pitcher walk-rate pair.
    pub fn called_ball_chance(&self, batter_walk: f64, pitcher_walk: f64) -> f64 {
        let blended = batter_walk * self.called_ball_batter_weight
            + pitcher_walk * self.called_ball_pitcher_weight;
        (self.called_ball_base * blended / self.league_walk_rate)
            .clamp(self.called_ball_min, self.called_ball_max)
    }

    /// Swing-and-miss chance for a pitcher/batter strikeout-rate pair.
    pub fn swing_miss_chance(&self, pitcher_k: f64, batter_k: f64) -> f64 {
        (pitcher_k * self.swing_miss_pitcher_weight + batter_k * self.swing_miss_batter_weight)
            .clamp(self.swing_miss_min, self.swing_miss_max)
    }
}
