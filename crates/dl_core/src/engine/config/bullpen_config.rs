//! Pitcher fatigue and bullpen management.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BullpenConfig {
    /// Pitches at which the game's starter reaches full fatigue (default: 95)
    pub starter_pitch_limit: u32,
    /// Pitches at which a reliever reaches full fatigue (default: 50)
    pub reliever_pitch_limit: u32,
    /// Fatigue above which the pitcher is replaced (default: 0.90)
    pub substitution_threshold: f64,

    // === Save situation ===
    /// First inning in which the closer is considered (default: 9)
    pub save_situation_inning: u32,
    pub save_lead_min: u32,
    pub save_lead_max: u32,

    /// Outs a starter must record to qualify for the win (default: 15)
    pub starter_win_outs: u32,
}

impl Default for BullpenConfig {
    fn default() -> Self {
        Self {
            starter_pitch_limit: 95,
            reliever_pitch_limit: 50,
            substitution_threshold: 0.90,

            save_situation_inning: 9,
            save_lead_min: 1,
            save_lead_max: 3,

            starter_win_outs: 15,
        }
    }
}

impl BullpenConfig {
    pub fn is_save_lead(&self, lead: i64) -> bool {
        lead >= self.save_lead_min as i64 && lead <= self.save_lead_max as i64
    }
}
