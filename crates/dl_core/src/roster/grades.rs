//! 0-100 scouting grades to per-PA rates.

use serde::{Deserialize, Serialize};

use super::archetypes::league;
use crate::models::{BatterProfile, PitcherProfile};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BattingGrades {
    pub contact: u32,
    pub power: u32,
    pub patience: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PitchingGrades {
    pub strikeout: u32,
    pub groundball: u32,
    pub control: u32,
    pub stuff: u32,
}

impl Default for BattingGrades {
    fn default() -> Self {
        Self { contact: 50, power: 50, patience: 50, speed: 50 }
    }
}

impl Default for PitchingGrades {
    fn default() -> Self {
        Self { strikeout: 50, groundball: 50, control: 50, stuff: 50 }
    }
}

fn grade(value: u32) -> f64 {
    value.min(99) as f64 / 100.0
}

pub fn batter_profile_from_grades(grades: &BattingGrades) -> BatterProfile {
    let contact = grade(grades.contact);
    let power = grade(grades.power);
    let patience = grade(grades.patience);
    let speed = grade(grades.speed);

    BatterProfile {
        strikeout_rate: ((1.0 - contact) * 0.40).clamp(0.10, 0.40),
        walk_rate: (patience * 0.18).clamp(0.04, 0.18),
        hit_by_pitch_rate: league::HIT_BY_PITCH,
        ground_out_rate: (0.250 - power * 0.080).clamp(0.12, 0.30),
        fly_out_rate: (0.140 + power * 0.060).clamp(0.10, 0.25),
        line_out_rate: league::LINE_OUT,
        single_rate: league::SINGLE,
        double_rate: (0.022 + power * 0.050).clamp(0.02, 0.09),
        triple_rate: (0.001 + speed * 0.011).clamp(0.001, 0.012),
        home_run_rate: (power * 0.08).clamp(0.005, 0.08),
        stolen_base_rate: (speed * 0.15).clamp(0.02, 0.25),
        batting_average_seed: (0.195 + contact * 0.130).clamp(0.190, 0.330),
    }
}

pub fn pitcher_profile_from_grades(grades: &PitchingGrades) -> PitcherProfile {
    PitcherProfile {
        strikeout_rate: (grade(grades.strikeout) * 0.35).clamp(0.14, 0.35),
        walk_rate: ((1.0 - grade(grades.control)) * 0.14).clamp(0.04, 0.14),
        groundball_delta: grade(grades.groundball) * 0.08 - 0.04,
        seed_era: (6.0 - grade(grades.stuff) * 4.0).clamp(2.0, 6.0),
    }
}

pub fn batter_archetype_label(grades: &BattingGrades) -> &'static str {
    if grades.power >= 75 {
        "Power"
    } else if grades.contact >= 75 {
        "Contact"
    } else if grades.patience >= 75 {
        "Patient"
    } else if grades.speed >= 75 {
        "Speedster"
    } else {
        "Balanced"
    }
}

pub fn pitcher_archetype_label(grades: &PitchingGrades) -> &'static str {
    if grades.stuff >= 75 {
        "Power Arm"
    } else if grades.strikeout >= 75 {
        "Strikeout"
    } else if grades.groundball >= 75 {
        "Groundball"
    } else if grades.control >= 75 {
        "Control"
    } else {
        "Veteran"
    }
}

/// Inverse of the batter conversion, for scouting displays.
pub fn batting_grades_from_profile(profile: &BatterProfile) -> BattingGrades {
    let to_grade = |v: f64| (v * 100.0).round().clamp(0.0, 99.0) as u32;
    BattingGrades {
        contact: to_grade(1.0 - profile.strikeout_rate / 0.40),
        power: to_grade(profile.home_run_rate / 0.08),
        patience: to_grade(profile.walk_rate / 0.18),
        speed: to_grade(profile.stolen_base_rate / 0.15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_grades_produce_valid_profiles() {
        let batter = batter_profile_from_grades(&BattingGrades::default());
        assert!(batter.validate("Avg").is_ok());
        assert!((batter.strikeout_rate - 0.20).abs() < 1e-12);
        assert!((batter.home_run_rate - 0.04).abs() < 1e-12);

        let pitcher = pitcher_profile_from_grades(&PitchingGrades::default());
        assert!(pitcher.validate("Avg").is_ok());
        assert!((pitcher.seed_era - 4.0).abs() < 1e-12);
        assert!(pitcher.groundball_delta.abs() < 1e-12);
    }

    #[test]
    fn test_extreme_grades_stay_in_bounds() {
        for g in [0, 99, 150] {
            let batter = batter_profile_from_grades(&BattingGrades { contact: g, power: g, patience: g, speed: g });
            assert!(batter.validate("Edge").is_ok(), "grade {}", g);
            let pitcher = pitcher_profile_from_grades(&PitchingGrades {
                strikeout: g,
                groundball: g,
                control: g,
                stuff: g,
            });
            assert!(pitcher.validate("Edge").is_ok(), "grade {}", g);
        }
    }

    #[test]
    fn test_archetype_labels() {
        let slugger = BattingGrades { power: 80, ..Default::default() };
        assert_eq!(batter_archetype_label(&slugger), "Power");
        assert_eq!(batter_archetype_label(&BattingGrades::default()), "Balanced");
        let finesse = PitchingGrades { control: 90, ..Default::default() };
        assert_eq!(pitcher_archetype_label(&finesse), "Control");
    }

    #[test]
    fn test_grades_round_trip_through_profile() {
        let grades = BattingGrades { contact: 60, power: 40, patience: 50, speed: 70 };
        let back = batting_grades_from_profile(&batter_profile_from_grades(&grades));
        assert_eq!(back, grades);
    }
}
