//! Manager decision success rates and the auto-manage heuristic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TacticsConfig {
    pub steal_second_success: f64,
    /// Applied independently to each runner (default: 0.64)
    pub double_steal_success: f64,
    pub steal_third_success: f64,
    pub sacrifice_bunt_success: f64,
    pub squeeze_success: f64,
    pub hit_and_run_success: f64,

    /// Sac bunt is offered only below this home-run rate (default: 0.04)
    pub bunt_max_home_run_rate: f64,

    /// Auto-manage steals 2nd when the runner's speed grade reaches this
    /// (default: 85)
    pub auto_steal_speed: u32,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            steal_second_success: 0.68,
            double_steal_success: 0.64,
            steal_third_success: 0.64,
            sacrifice_bunt_success: 0.87,
            squeeze_success: 0.70,
            hit_and_run_success: 0.72,

            bunt_max_home_run_rate: 0.04,

            auto_steal_speed: 85,
        }
    }
}
