//! # Engine Configuration
//!
//! Every tuning constant the simulation reads lives here, grouped by concern.
//!
//! ## Presets
//! - `classic()` (default): league-average run environment
//! - `high_offense()`: fewer strikeouts, more hits, sloppier defense
//! - `pitchers_duel()`: more strikeouts, tighter defense
//! - `deterministic_test()`: no fielding errors, no fouls, no delays
//!
//! ```rust
//! use dl_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let duel = EngineConfig::pitchers_duel();
//! assert!(duel.pitch.swing_miss_max > config.pitch.swing_miss_max);
//! ```

mod autoplay_config;
mod bullpen_config;
mod outcome_config;
mod pitch_config;
mod rules_config;
mod running_config;
mod tactics_config;

pub use autoplay_config::AutoPlayConfig;
pub use bullpen_config::BullpenConfig;
pub use outcome_config::OutcomeConfig;
pub use pitch_config::PitchConfig;
pub use rules_config::{GameRulesConfig, MercyRule};
pub use running_config::RunningConfig;
pub use tactics_config::TacticsConfig;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Full engine configuration. Missing sections fall back to their defaults
/// when deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub pitch: PitchConfig,
    pub outcome: OutcomeConfig,
    pub running: RunningConfig,
    pub bullpen: BullpenConfig,
    pub tactics: TacticsConfig,
    pub rules: GameRulesConfig,
    pub autoplay: AutoPlayConfig,
}

impl EngineConfig {
    pub fn classic() -> Self {
        Self::default()
    }

    pub fn high_offense() -> Self {
        let mut cfg = Self::default();
        cfg.outcome.hit_dampening = 0.85;
        cfg.outcome.strikeout_max = 0.32;
        cfg.pitch.swing_miss_max = 0.17;
        cfg.running.ground_out_error_rate = 0.09;
        cfg.running.double_play_rate = 0.22;
        cfg
    }

    pub fn pitchers_duel() -> Self {
        let mut cfg = Self::default();
        cfg.outcome.hit_dampening = 0.68;
        cfg.outcome.strikeout_max = 0.40;
        cfg.pitch.swing_miss_max = 0.23;
        cfg.running.ground_out_error_rate = 0.05;
        cfg.running.fly_out_error_rate = 0.03;
        cfg.running.line_out_error_rate = 0.03;
        cfg
    }

    /// Removes noise sources tests don't care about.
    pub fn deterministic_test() -> Self {
        let mut cfg = Self::default();
        cfg.pitch.foul_rate = 0.0;
        cfg.running.ground_out_error_rate = 0.0;
        cfg.running.fly_out_error_rate = 0.0;
        cfg.running.line_out_error_rate = 0.0;
        cfg.autoplay = AutoPlayConfig::instant();
        cfg
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: EngineConfig =
            serde_yaml::from_str(yaml).map_err(|e| GameError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.pitch;
        check_probability("pitch.foul_rate", p.foul_rate)?;
        check_probability("pitch.called_strike_rate", p.called_strike_rate)?;
        check_range("pitch.called_ball", p.called_ball_min, p.called_ball_max)?;
        check_range("pitch.swing_miss", p.swing_miss_min, p.swing_miss_max)?;
        if p.league_walk_rate <= 0.0 {
            return Err(GameError::Config("pitch.league_walk_rate must be positive".into()));
        }

        let o = &self.outcome;
        check_range("outcome.strikeout", o.strikeout_min, o.strikeout_max)?;
        check_range("outcome.walk", o.walk_min, o.walk_max)?;
        check_range("outcome.ground_out", o.ground_out_min, o.ground_out_max)?;
        check_probability("outcome.league_fly_out_rate", o.league_fly_out_rate)?;
        check_probability("outcome.league_line_out_rate", o.league_line_out_rate)?;
        check_probability("outcome.league_hit_by_pitch_rate", o.league_hit_by_pitch_rate)?;
        if !(o.hit_dampening > 0.0) {
            return Err(GameError::Config("outcome.hit_dampening must be positive".into()));
        }

        let r = &self.running;
        for (name, value) in [
            ("running.ground_out_error_rate", r.ground_out_error_rate),
            ("running.fly_out_error_rate", r.fly_out_error_rate),
            ("running.line_out_error_rate", r.line_out_error_rate),
            ("running.double_play_rate", r.double_play_rate),
            ("running.sacrifice_fly_rate", r.sacrifice_fly_rate),
        ] {
            check_probability(name, value)?;
        }

        let b = &self.bullpen;
        if b.starter_pitch_limit == 0 || b.reliever_pitch_limit == 0 {
            return Err(GameError::Config("bullpen pitch limits must be non-zero".into()));
        }
        check_probability("bullpen.substitution_threshold", b.substitution_threshold)?;
        if b.save_lead_min > b.save_lead_max {
            return Err(GameError::Config("bullpen.save_lead_min exceeds save_lead_max".into()));
        }

        let t = &self.tactics;
        for (name, value) in [
            ("tactics.steal_second_success", t.steal_second_success),
            ("tactics.double_steal_success", t.double_steal_success),
            ("tactics.steal_third_success", t.steal_third_success),
            ("tactics.sacrifice_bunt_success", t.sacrifice_bunt_success),
            ("tactics.squeeze_success", t.squeeze_success),
            ("tactics.hit_and_run_success", t.hit_and_run_success),
        ] {
            check_probability(name, value)?;
        }

        let rules = &self.rules;
        if rules.regulation_innings == 0 {
            return Err(GameError::Config("rules.regulation_innings must be at least 1".into()));
        }
        if let Some(max) = rules.max_innings {
            if max < rules.regulation_innings {
                return Err(GameError::Config(format!(
                    "rules.max_innings ({}) is shorter than regulation ({})",
                    max, rules.regulation_innings
                )));
            }
        }
        if rules.pitch_safety_cap == 0 {
            return Err(GameError::Config("rules.pitch_safety_cap must be non-zero".into()));
        }
        if let Some(mercy) = &rules.mercy_rule {
            if mercy.run_margin == 0 {
                return Err(GameError::Config("rules.mercy_rule.run_margin must be positive".into()));
            }
        }

        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GameError::Config(format!("{} = {} is not a probability", name, value)))
    }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<()> {
    check_probability(&format!("{}_min", name), min)?;
    check_probability(&format!("{}_max", name), max)?;
    if min > max {
        return Err(GameError::Config(format!("{}_min ({}) exceeds {}_max ({})", name, min, name, max)));
    }
    Ok(())
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert!((cfg.pitch.foul_rate - 0.11).abs() < 1e-12);
        assert!((cfg.outcome.hit_dampening - 0.75).abs() < 1e-12);
        assert_eq!(cfg.bullpen.starter_pitch_limit, 95);
        assert_eq!(cfg.rules.max_innings, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        for cfg in [
            EngineConfig::classic(),
            EngineConfig::high_offense(),
            EngineConfig::pitchers_duel(),
            EngineConfig::deterministic_test(),
        ] {
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn test_high_offense_has_more_hits() {
        let classic = EngineConfig::classic();
        let offense = EngineConfig::high_offense();
        assert!(offense.outcome.hit_dampening > classic.outcome.hit_dampening);
        assert!(offense.running.double_play_rate < classic.running.double_play_rate);
    }

    #[test]
    fn test_pitchers_duel_has_more_strikeouts() {
        let classic = EngineConfig::classic();
        let duel = EngineConfig::pitchers_duel();
        assert!(duel.outcome.strikeout_max > classic.outcome.strikeout_max);
        assert!(duel.outcome.hit_dampening < classic.outcome.hit_dampening);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "rules:\n  regulation_innings: 7\nbullpen:\n  reliever_pitch_limit: 40\n";
        let cfg = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.rules.regulation_innings, 7);
        assert_eq!(cfg.bullpen.reliever_pitch_limit, 40);
        assert_eq!(cfg.bullpen.starter_pitch_limit, 95);
        assert_eq!(cfg.pitch, PitchConfig::default());
    }

    #[test]
    fn test_validate_rejects_inverted_clamp() {
        let mut cfg = EngineConfig::default();
        cfg.pitch.called_ball_min = 0.5;
        assert!(matches!(cfg.validate(), Err(GameError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_pitch_limit() {
        let mut cfg = EngineConfig::default();
        cfg.bullpen.reliever_pitch_limit = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = EngineConfig::pitchers_duel();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = EngineConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_max_innings_shorter_than_regulation_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.rules.max_innings = Some(6);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_pitch_safety_cap_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.rules.pitch_safety_cap = 0;
        assert!(matches!(cfg.validate(), Err(GameError::Config(_))));
    }
}
