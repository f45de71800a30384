//! Closed outcome taxonomy for plate appearances.

use serde::{Deserialize, Serialize};

/// What the outcome model can sample.
///
/// `Walk` and `Strikeout` drawn here only move the count; the plate
/// appearance ends when the count completes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Strikeout,
    GroundOut,
    FlyOut,
    LineOut,
    Walk,
    HitByPitch,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Outcome {
    /// Draw order for the cumulative sampler.
    pub const ALL: [Outcome; 10] = [
        Outcome::Strikeout,
        Outcome::GroundOut,
        Outcome::FlyOut,
        Outcome::LineOut,
        Outcome::Walk,
        Outcome::HitByPitch,
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
    ];

    /// Fallback when a draw falls past the cumulative total.
    pub const FALLBACK: Outcome = Outcome::GroundOut;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun)
    }

    /// Bases the batter takes on a hit.
    pub fn bases(self) -> usize {
        match self {
            Outcome::Single => 1,
            Outcome::Double => 2,
            Outcome::Triple => 3,
            Outcome::HomeRun => 4,
            _ => 0,
        }
    }

    /// Balls in play that can become fielding errors.
    pub fn is_fieldable_out(self) -> bool {
        matches!(self, Outcome::GroundOut | Outcome::FlyOut | Outcome::LineOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_draw_order() {
        for (i, outcome) in Outcome::ALL.iter().enumerate() {
            assert_eq!(outcome.index(), i);
        }
    }

    #[test]
    fn test_hit_bases() {
        assert_eq!(Outcome::Double.bases(), 2);
        assert_eq!(Outcome::HomeRun.bases(), 4);
        assert!(!Outcome::HitByPitch.is_hit());
        assert!(Outcome::LineOut.is_fieldable_out());
    }
}
