//! Archetype tables used by the random roster generator.
//!
//! Each entry shifts league-average rates; the generator adds noise on top
//! and clamps to the rating bounds.

/// League-average per-PA rates.
pub mod league {
    pub const STRIKEOUT: f64 = 0.226;
    pub const WALK: f64 = 0.081;
    pub const HIT_BY_PITCH: f64 = 0.018;
    pub const GROUND_OUT: f64 = 0.203;
    pub const FLY_OUT: f64 = 0.165;
    pub const LINE_OUT: f64 = 0.056;
    pub const SINGLE: f64 = 0.149;
    pub const DOUBLE: f64 = 0.051;
    pub const TRIPLE: f64 = 0.004;
    pub const HOME_RUN: f64 = 0.030;
    pub const BATTING_AVERAGE: f64 = 0.248;
    pub const ERA: f64 = 3.85;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterArchetype {
    pub label: &'static str,
    pub average: f64,
    pub strikeout: f64,
    pub walk: f64,
    pub home_run: f64,
    pub ground_out: f64,
    pub triple: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitcherArchetype {
    pub label: &'static str,
    pub era: f64,
    pub strikeout: f64,
    pub walk: f64,
    pub groundball: f64,
}

pub const BATTER_ARCHETYPES: [BatterArchetype; 5] = [
    BatterArchetype { label: "Power", average: -0.020, strikeout: 0.06, walk: 0.01, home_run: 0.015, ground_out: -0.02, triple: 0.0 },
    BatterArchetype { label: "Contact", average: 0.025, strikeout: -0.06, walk: -0.01, home_run: -0.010, ground_out: 0.02, triple: 0.0 },
    BatterArchetype { label: "Patient", average: 0.005, strikeout: -0.03, walk: 0.04, home_run: 0.005, ground_out: -0.01, triple: 0.0 },
    BatterArchetype { label: "Speedster", average: 0.010, strikeout: -0.02, walk: 0.0, home_run: -0.015, ground_out: -0.01, triple: 0.006 },
    BatterArchetype { label: "Balanced", average: 0.0, strikeout: 0.0, walk: 0.0, home_run: 0.0, ground_out: 0.0, triple: 0.0 },
];

pub const PITCHER_ARCHETYPES: [PitcherArchetype; 5] = [
    PitcherArchetype { label: "Strikeout", era: -0.30, strikeout: 0.06, walk: 0.01, groundball: 0.0 },
    PitcherArchetype { label: "Groundball", era: -0.15, strikeout: -0.02, walk: -0.01, groundball: 0.04 },
    PitcherArchetype { label: "Control", era: -0.20, strikeout: 0.01, walk: -0.03, groundball: 0.0 },
    PitcherArchetype { label: "Veteran", era: 0.0, strikeout: 0.0, walk: 0.0, groundball: 0.0 },
    PitcherArchetype { label: "Power Arm", era: 0.10, strikeout: 0.04, walk: 0.02, groundball: 0.0 },
];
