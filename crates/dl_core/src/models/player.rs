use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Defensive position for a lineup slot. Display only; the engine does not
/// simulate fielding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
    #[serde(rename = "IF")]
    Infield,
    #[serde(rename = "P")]
    Pitcher,
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
            Position::Infield => "IF",
            Position::Pitcher => "P",
        }
    }

    /// Parse a position code, case-insensitive. Unknown codes become `Infield`.
    pub fn from_code(code: &str) -> Position {
        match code.trim().to_ascii_uppercase().as_str() {
            "C" => Position::Catcher,
            "1B" => Position::FirstBase,
            "2B" => Position::SecondBase,
            "3B" => Position::ThirdBase,
            "SS" => Position::Shortstop,
            "LF" => Position::LeftField,
            "CF" => Position::CenterField,
            "RF" => Position::RightField,
            "DH" => Position::DesignatedHitter,
            "P" | "SP" | "RP" | "CL" => Position::Pitcher,
            _ => Position::Infield,
        }
    }
}

/// Per-plate-appearance rates for a batter.
///
/// Rates need not sum to 1; the outcome model renormalizes at use time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatterProfile {
    pub strikeout_rate: f64,
    pub walk_rate: f64,
    pub hit_by_pitch_rate: f64,
    pub ground_out_rate: f64,
    pub fly_out_rate: f64,
    pub line_out_rate: f64,
    pub single_rate: f64,
    pub double_rate: f64,
    pub triple_rate: f64,
    pub home_run_rate: f64,
    /// Attempt frequency; converted to a 0-100 speed grade for base running.
    pub stolen_base_rate: f64,
    /// Display-only seed average shown before any at-bats exist.
    pub batting_average_seed: f64,
}

/// Per-plate-appearance rates for a pitcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitcherProfile {
    pub strikeout_rate: f64,
    pub walk_rate: f64,
    /// Added to the batter's ground-out rate (scaled by the outcome model).
    pub groundball_delta: f64,
    /// ERA shown while the pitcher has no recorded innings.
    pub seed_era: f64,
}

/// Inclusive bounds for a single rating field.
struct Bound {
    field: &'static str,
    min: f64,
    max: f64,
}

const BATTER_BOUNDS: [Bound; 12] = [
    Bound { field: "strikeout_rate", min: 0.10, max: 0.40 },
    Bound { field: "walk_rate", min: 0.04, max: 0.18 },
    Bound { field: "hit_by_pitch_rate", min: 0.0, max: 0.05 },
    Bound { field: "ground_out_rate", min: 0.12, max: 0.32 },
    Bound { field: "fly_out_rate", min: 0.10, max: 0.25 },
    Bound { field: "line_out_rate", min: 0.0, max: 0.15 },
    Bound { field: "single_rate", min: 0.08, max: 0.22 },
    Bound { field: "double_rate", min: 0.02, max: 0.09 },
    Bound { field: "triple_rate", min: 0.001, max: 0.012 },
    Bound { field: "home_run_rate", min: 0.005, max: 0.08 },
    Bound { field: "stolen_base_rate", min: 0.0, max: 0.25 },
    Bound { field: "batting_average_seed", min: 0.0, max: 0.5 },
];

const PITCHER_BOUNDS: [Bound; 4] = [
    Bound { field: "strikeout_rate", min: 0.14, max: 0.35 },
    Bound { field: "walk_rate", min: 0.04, max: 0.14 },
    Bound { field: "groundball_delta", min: -0.04, max: 0.04 },
    Bound { field: "seed_era", min: 0.0, max: 15.0 },
];

fn check_bounds(player: &str, bounds: &[Bound], values: &[f64]) -> Result<()> {
    for (bound, &value) in bounds.iter().zip(values) {
        // Small epsilon so values produced by f64 clamping round-trip through JSON.
        if !value.is_finite() || value < bound.min - 1e-9 || value > bound.max + 1e-9 {
            return Err(GameError::InvalidRating {
                player: player.to_string(),
                field: bound.field,
                value,
            });
        }
    }
    Ok(())
}

impl BatterProfile {
    pub fn validate(&self, player: &str) -> Result<()> {
        check_bounds(
            player,
            &BATTER_BOUNDS,
            &[
                self.strikeout_rate,
                self.walk_rate,
                self.hit_by_pitch_rate,
                self.ground_out_rate,
                self.fly_out_rate,
                self.line_out_rate,
                self.single_rate,
                self.double_rate,
                self.triple_rate,
                self.home_run_rate,
                self.stolen_base_rate,
                self.batting_average_seed,
            ],
        )
    }

    /// 0-100 speed grade derived from the stolen-base rate (0.15 maps to 100).
    pub fn speed(&self) -> u32 {
        ((self.stolen_base_rate / 0.15) * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

impl PitcherProfile {
    pub fn validate(&self, player: &str) -> Result<()> {
        check_bounds(
            player,
            &PITCHER_BOUNDS,
            &[self.strikeout_rate, self.walk_rate, self.groundball_delta, self.seed_era],
        )
    }
}

/// Career batting totals. Owned by the roster; the engine only reads them and
/// `career::apply_game_result` merges finished games into them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BattingCareer {
    pub games: u32,
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub runs: u32,
    pub rbi: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub hit_by_pitch: u32,
    pub sacrifice_flies: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
}

/// Career pitching totals. Innings are stored as outs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PitchingCareer {
    pub games: u32,
    pub games_started: u32,
    pub outs: u32,
    pub hits: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub home_runs: u32,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub complete_games: u32,
    pub shutouts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batter {
    pub id: u32,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub number: u8,
    #[serde(default)]
    pub archetype: String,
    pub profile: BatterProfile,
    #[serde(default)]
    pub career: BattingCareer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PitcherRole {
    Starter,
    Reliever,
    Closer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pitcher {
    pub id: u32,
    pub name: String,
    pub role: PitcherRole,
    #[serde(default)]
    pub number: u8,
    #[serde(default)]
    pub archetype: String,
    pub profile: PitcherProfile,
    #[serde(default)]
    pub career: PitchingCareer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::{average_batter_profile, average_pitcher_profile};

    #[test]
    fn test_speed_grade() {
        let mut profile = average_batter_profile();
        profile.stolen_base_rate = 0.15;
        assert_eq!(profile.speed(), 100);
        profile.stolen_base_rate = 0.30;
        assert_eq!(profile.speed(), 100);
        profile.stolen_base_rate = 0.075;
        assert_eq!(profile.speed(), 50);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut profile = average_batter_profile();
        assert!(profile.validate("Test").is_ok());
        profile.strikeout_rate = 0.55;
        let err = profile.validate("Test").unwrap_err();
        assert!(matches!(err, GameError::InvalidRating { field: "strikeout_rate", .. }));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut profile = average_pitcher_profile();
        profile.walk_rate = f64::NAN;
        assert!(profile.validate("Test").is_err());
    }

    #[test]
    fn test_position_codes() {
        assert_eq!(Position::from_code("ss"), Position::Shortstop);
        assert_eq!(Position::from_code("XX"), Position::Infield);
        assert_eq!(Position::from_code(Position::DesignatedHitter.code()), Position::DesignatedHitter);
    }
}
