//! Anchor Table - Target Statistics from a Real Season
//!
//! Contains reference per-PA rates used as calibration targets.

use serde::{Deserialize, Serialize};

/// Per-plate-appearance outcome shares.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutcomeRates {
    pub strikeout: f64,
    pub ground_out: f64,
    pub fly_out: f64,
    pub line_out: f64,
    pub walk: f64,
    pub hit_by_pitch: f64,
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    pub home_run: f64,
}

impl OutcomeRates {
    pub fn named(&self) -> [(&'static str, f64); 10] {
        [
            ("K", self.strikeout),
            ("GO", self.ground_out),
            ("FO", self.fly_out),
            ("LO", self.line_out),
            ("BB", self.walk),
            ("HBP", self.hit_by_pitch),
            ("1B", self.single),
            ("2B", self.double),
            ("3B", self.triple),
            ("HR", self.home_run),
        ]
    }

    pub fn total(&self) -> f64 {
        self.named().iter().map(|(_, v)| v).sum()
    }
}

/// One row of a comparison report.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDeviation {
    pub name: &'static str,
    pub target: f64,
    pub actual: f64,
}

impl RateDeviation {
    /// Relative deviation from the target.
    pub fn deviation_ratio(&self) -> f64 {
        if self.target == 0.0 {
            return 0.0;
        }
        (self.actual - self.target).abs() / self.target
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnchorTable {
    pub name: String,
    pub rates: OutcomeRates,
    /// Both teams combined.
    pub runs_per_game: f64,
}

impl AnchorTable {
    /// 2024 MLB per-PA averages.
    pub fn mlb_2024() -> Self {
        Self {
            name: "MLB 2024".to_string(),
            rates: OutcomeRates {
                strikeout: 0.226,
                ground_out: 0.203,
                fly_out: 0.165,
                line_out: 0.056,
                walk: 0.081,
                hit_by_pitch: 0.018,
                single: 0.149,
                double: 0.051,
                triple: 0.004,
                home_run: 0.030,
            },
            runs_per_game: 8.78,
        }
    }

    pub fn compare(&self, actual: &OutcomeRates) -> Vec<RateDeviation> {
        self.rates
            .named()
            .iter()
            .zip(actual.named())
            .map(|(&(name, target), (_, actual))| RateDeviation { name, target, actual })
            .collect()
    }

    /// Every rate within `tolerance` (relative) of its target.
    pub fn is_within(&self, actual: &OutcomeRates, tolerance: f64) -> bool {
        self.compare(actual).iter().all(|d| d.deviation_ratio() <= tolerance)
    }
}
