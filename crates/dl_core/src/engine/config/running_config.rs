//! Fielding error and base-running parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunningConfig {
    // === Fielding errors ===
    pub ground_out_error_rate: f64,
    pub fly_out_error_rate: f64,
    pub line_out_error_rate: f64,

    /// Ground ball with a runner on 1st and < 2 outs (default: 0.28)
    pub double_play_rate: f64,
    /// Fly ball with a runner on 3rd and < 2 outs (default: 0.72)
    pub sacrifice_fly_rate: f64,

    // === Speed-dependent advancement ===
    /// Speed grade at which the elite chances apply (default: 90)
    pub elite_speed: u32,

    /// Two-out single, runner from 2nd
    pub single_two_out_elite: f64,
    pub single_two_out_base: f64,
    pub single_two_out_slope: f64,

    /// Two-out double, runner from 1st
    pub double_two_out_elite: f64,
    pub double_two_out_base: f64,
    pub double_two_out_slope: f64,

    /// Double with fewer than two outs, runner from 1st
    pub double_elite: f64,
    pub double_base: f64,
    pub double_slope: f64,
}

impl Default for RunningConfig {
    fn default() -> Self {
        Self {
            ground_out_error_rate: 0.07,
            fly_out_error_rate: 0.04,
            line_out_error_rate: 0.05,

            double_play_rate: 0.28,
            sacrifice_fly_rate: 0.72,

            elite_speed: 90,

            single_two_out_elite: 0.90,
            single_two_out_base: 0.25,
            single_two_out_slope: 0.65,

            double_two_out_elite: 0.85,
            double_two_out_base: 0.25,
            double_two_out_slope: 0.60,

            double_elite: 0.60,
            double_base: 0.10,
            double_slope: 0.40,
        }
    }
}

impl RunningConfig {
    fn speed_curve(&self, speed: u32, elite: f64, base: f64, slope: f64) -> f64 {
        if speed >= self.elite_speed {
            elite
        } else {
            base + (speed as f64 / 100.0) * slope
        }
    }

    /// Chance a runner on 2nd scores on a two-out single.
    pub fn single_score_chance(&self, speed: u32) -> f64 {
        self.speed_curve(
            speed,
            self.single_two_out_elite,
            self.single_two_out_base,
            self.single_two_out_slope,
        )
    }

    /// Chance a runner on 1st scores on a double.
    pub fn double_score_chance(&self, speed: u32, outs: u8) -> f64 {
        if outs == 2 {
            self.speed_curve(
                speed,
                self.double_two_out_elite,
                self.double_two_out_base,
                self.double_two_out_slope,
            )
        } else {
            self.speed_curve(speed, self.double_elite, self.double_base, self.double_slope)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_curves() {
        let cfg = RunningConfig::default();
        assert!((cfg.single_score_chance(95) - 0.90).abs() < 1e-12);
        assert!((cfg.single_score_chance(0) - 0.25).abs() < 1e-12);
        assert!((cfg.single_score_chance(50) - 0.575).abs() < 1e-12);
        assert!((cfg.double_score_chance(100, 2) - 0.85).abs() < 1e-12);
        assert!((cfg.double_score_chance(50, 0) - 0.30).abs() < 1e-12);
        assert!((cfg.double_score_chance(50, 2) - 0.55).abs() < 1e-12);
    }
}
