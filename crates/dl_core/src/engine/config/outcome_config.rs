//! Outcome model weights and league-average constants.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutcomeConfig {
    /// Batter share in the K/BB blends (default: 0.6)
    pub batter_weight: f64,
    /// Pitcher share in the K/BB blends (default: 0.4)
    pub pitcher_weight: f64,

    // === Strikeout ===
    /// Fraction of the pitcher's K rate lost at full fatigue (default: 0.4)
    pub strikeout_fatigue_penalty: f64,
    pub strikeout_min: f64,
    pub strikeout_max: f64,

    // === Walk ===
    /// Fractional walk-rate increase at full fatigue (default: 0.6)
    pub walk_fatigue_penalty: f64,
    pub walk_min: f64,
    pub walk_max: f64,

    // === Ground ball ===
    /// Scale applied to the pitcher's groundball delta (default: 0.4)
    pub groundball_weight: f64,
    /// Fraction of the groundball delta lost at full fatigue (default: 0.5)
    pub groundball_fatigue_penalty: f64,
    pub ground_out_min: f64,
    pub ground_out_max: f64,

    // === League constants ===
    pub league_fly_out_rate: f64,
    pub league_line_out_rate: f64,
    pub league_hit_by_pitch_rate: f64,

    /// Scale on batter hit rates, offsetting balls/strikes intercepted before
    /// the outcome draw (default: 0.75)
    pub hit_dampening: f64,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            batter_weight: 0.6,
            pitcher_weight: 0.4,

            strikeout_fatigue_penalty: 0.4,
            strikeout_min: 0.10,
            strikeout_max: 0.38,

            walk_fatigue_penalty: 0.6,
            walk_min: 0.04,
            walk_max: 0.18,

            groundball_weight: 0.4,
            groundball_fatigue_penalty: 0.5,
            ground_out_min: 0.12,
            ground_out_max: 0.32,

            league_fly_out_rate: 0.165,
            league_line_out_rate: 0.056,
            league_hit_by_pitch_rate: 0.018,

            hit_dampening: 0.75,
        }
    }
}
