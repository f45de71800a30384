//! Test Fixtures Module
//!
//! Shared helpers for engine tests.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::engine::test_fixtures::*;
//! ```

use crate::engine::config::EngineConfig;
use crate::engine::game_engine::{GameEngine, GameOptions, GamePlan};
use crate::models::{
    Batter, BatterProfile, Pitcher, PitcherProfile, PitcherRole, Position, Team,
};

// =============================================================================
// Profile Helpers
// =============================================================================

/// League-average batter rates.
pub fn average_batter_profile() -> BatterProfile {
    BatterProfile {
        strikeout_rate: 0.226,
        walk_rate: 0.081,
        hit_by_pitch_rate: 0.018,
        ground_out_rate: 0.203,
        fly_out_rate: 0.165,
        line_out_rate: 0.056,
        single_rate: 0.149,
        double_rate: 0.051,
        triple_rate: 0.004,
        home_run_rate: 0.030,
        stolen_base_rate: 0.06,
        batting_average_seed: 0.248,
    }
}

/// League-average pitcher rates.
pub fn average_pitcher_profile() -> PitcherProfile {
    PitcherProfile {
        strikeout_rate: 0.226,
        walk_rate: 0.081,
        groundball_delta: 0.0,
        seed_era: 3.85,
    }
}

// =============================================================================
// Team Creation Helpers
// =============================================================================

const LINEUP_POSITIONS: [Position; 9] = [
    Position::CenterField,
    Position::Shortstop,
    Position::RightField,
    Position::FirstBase,
    Position::ThirdBase,
    Position::LeftField,
    Position::SecondBase,
    Position::Catcher,
    Position::DesignatedHitter,
];

/// Nine average batters and a seven-man staff (4 starters, 2 relievers,
/// 1 closer). Ids are `team_id * 100 + n` so two fixture teams never collide.
pub fn create_test_team(id: u32, name: &str) -> Team {
    create_test_team_with_profiles(id, name, average_batter_profile(), average_pitcher_profile())
}

pub fn create_test_team_with_profiles(
    id: u32,
    name: &str,
    batter: BatterProfile,
    pitcher: PitcherProfile,
) -> Team {
    let batters = LINEUP_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| Batter {
            id: id * 100 + i as u32,
            name: format!("{} Batter {}", name, i + 1),
            position,
            number: (i + 1) as u8,
            archetype: "Balanced".to_string(),
            profile: batter.clone(),
            career: Default::default(),
        })
        .collect();

    let roles = [
        PitcherRole::Starter,
        PitcherRole::Starter,
        PitcherRole::Starter,
        PitcherRole::Starter,
        PitcherRole::Reliever,
        PitcherRole::Reliever,
        PitcherRole::Closer,
    ];
    let pitchers = roles
        .iter()
        .enumerate()
        .map(|(i, &role)| Pitcher {
            id: id * 100 + 50 + i as u32,
            name: format!("{} Pitcher {}", name, i + 1),
            role,
            number: (40 + i) as u8,
            archetype: "Veteran".to_string(),
            profile: pitcher.clone(),
            career: Default::default(),
        })
        .collect();

    Team {
        id,
        name: name.to_string(),
        batters,
        pitchers,
        rotation_index: 0,
        record: Default::default(),
    }
}

/// Fast batters for base-running tests.
pub fn speedy_batter_profile() -> BatterProfile {
    BatterProfile { stolen_base_rate: 0.15, ..average_batter_profile() }
}

// =============================================================================
// Engine Helpers
// =============================================================================

pub fn create_test_plan(seed: u64) -> GamePlan {
    GamePlan {
        away: create_test_team(1, "Riverton Eagles"),
        home: create_test_team(2, "Harbor City Gulls"),
        seed,
        config: EngineConfig::default(),
        options: GameOptions::default(),
    }
}

pub fn create_test_engine(seed: u64) -> GameEngine {
    match GameEngine::new(create_test_plan(seed)) {
        Ok(engine) => engine,
        Err(e) => panic!("fixture plan must be valid: {}", e),
    }
}

/// Engine with `play_ball` already called.
pub fn create_started_engine(seed: u64) -> GameEngine {
    let mut engine = create_test_engine(seed);
    engine.play_ball();
    engine
}
