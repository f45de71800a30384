//! Outcome probability model.
//!
//! All functions are pure: profiles and fatigue in, distribution out. No
//! engine state is needed to test them.

use super::config::OutcomeConfig;
use super::outcome::Outcome;
use crate::models::{BatterProfile, PitcherProfile};

/// Normalized distribution over `Outcome::ALL`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDistribution {
    probs: [f64; 10],
}

impl OutcomeDistribution {
    /// Normalizes raw weights. A degenerate (zero or non-finite) total yields
    /// a distribution that always falls back to a ground out.
    pub fn from_weights(raw: [f64; 10]) -> Self {
        let total: f64 = raw.iter().map(|w| w.max(0.0)).sum();
        let mut probs = [0.0; 10];
        if total > 0.0 && total.is_finite() {
            for (p, w) in probs.iter_mut().zip(raw.iter()) {
                *p = w.max(0.0) / total;
            }
        } else {
            probs[Outcome::FALLBACK.index()] = 1.0;
        }
        Self { probs }
    }

    #[inline]
    pub fn get(&self, outcome: Outcome) -> f64 {
        self.probs[outcome.index()]
    }

    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        Outcome::ALL.iter().map(move |&o| (o, self.probs[o.index()]))
    }

    /// Cumulative draw with `roll` in [0, 1). Rounding slack at the top end
    /// falls through to a ground out.
    pub fn sample(&self, roll: f64) -> Outcome {
        let mut cumulative = 0.0;
        for (outcome, p) in self.iter() {
            cumulative += p;
            if roll < cumulative {
                return outcome;
            }
        }
        Outcome::FALLBACK
    }
}

/// Blend a batter and pitcher into a plate-appearance distribution.
///
/// `fatigue` is clamped to [0, 1]. A tired pitcher loses strikeouts and
/// groundball bias and gains walks.
pub fn compute_outcome_probabilities(
    batter: &BatterProfile,
    pitcher: &PitcherProfile,
    fatigue: f64,
    cfg: &OutcomeConfig,
) -> OutcomeDistribution {
    let fatigue = if fatigue.is_finite() { fatigue.clamp(0.0, 1.0) } else { 0.0 };

    let strikeout = (batter.strikeout_rate * cfg.batter_weight
        + pitcher.strikeout_rate * (1.0 - fatigue * cfg.strikeout_fatigue_penalty) * cfg.pitcher_weight)
        .clamp(cfg.strikeout_min, cfg.strikeout_max);

    let walk = (batter.walk_rate * cfg.batter_weight
        + pitcher.walk_rate * (1.0 + fatigue * cfg.walk_fatigue_penalty) * cfg.pitcher_weight)
        .clamp(cfg.walk_min, cfg.walk_max);

    let ground_out = (batter.ground_out_rate
        + pitcher.groundball_delta * (1.0 - fatigue * cfg.groundball_fatigue_penalty) * cfg.groundball_weight)
        .clamp(cfg.ground_out_min, cfg.ground_out_max);

    let mut raw = [0.0; 10];
    raw[Outcome::Strikeout.index()] = strikeout;
    raw[Outcome::GroundOut.index()] = ground_out;
    raw[Outcome::FlyOut.index()] = cfg.league_fly_out_rate;
    raw[Outcome::LineOut.index()] = cfg.league_line_out_rate;
    raw[Outcome::Walk.index()] = walk;
    raw[Outcome::HitByPitch.index()] = cfg.league_hit_by_pitch_rate;
    raw[Outcome::Single.index()] = batter.single_rate * cfg.hit_dampening;
    raw[Outcome::Double.index()] = batter.double_rate * cfg.hit_dampening;
    raw[Outcome::Triple.index()] = batter.triple_rate * cfg.hit_dampening;
    raw[Outcome::HomeRun.index()] = batter.home_run_rate * cfg.hit_dampening;

    OutcomeDistribution::from_weights(raw)
}
