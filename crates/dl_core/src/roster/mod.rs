//! Random roster generation.
//!
//! Stands in for the external player generator: every team it produces
//! passes `Team::validate`.

pub mod archetypes;
pub mod grades;

use rand::Rng;

use crate::models::{Batter, BatterProfile, Pitcher, PitcherProfile, PitcherRole, Position, Team};
use archetypes::{league, BATTER_ARCHETYPES, PITCHER_ARCHETYPES};

pub use grades::{
    batter_archetype_label, batter_profile_from_grades, pitcher_archetype_label,
    pitcher_profile_from_grades, BattingGrades, PitchingGrades,
};

/// Batting order positions for generated lineups.
pub const LINEUP_POSITIONS: [Position; 9] = [
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

/// Staff shape: four starters, two relievers, one closer.
pub const STAFF_ROLES: [PitcherRole; 7] = [
    PitcherRole::Starter,
    PitcherRole::Starter,
    PitcherRole::Starter,
    PitcherRole::Starter,
    PitcherRole::Reliever,
    PitcherRole::Reliever,
    PitcherRole::Closer,
];

const FIRST_INITIALS: [&str; 20] = [
    "J.", "T.", "D.", "K.", "L.", "A.", "N.", "C.", "S.", "M.", "P.", "R.", "B.", "O.", "E.", "F.",
    "G.", "H.", "V.", "W.",
];

const LAST_NAMES: [&str; 40] = [
    "Mora", "Walsh", "Reyes", "Stone", "Pham", "Cruz", "Bell", "Ford", "Webb", "Grant", "Nash",
    "Cole", "Holt", "Vance", "Park", "Dunn", "Shaw", "Lowe", "Diaz", "Kim", "Okafor", "Bishop",
    "Petrov", "Chen", "Alvarez", "Haynes", "Marek", "Vega", "Lima", "Brooks", "Tran", "Burke",
    "Singh", "Novak", "Castillo", "Ferreira", "Jordan", "Quinn", "Takeda", "Osei",
];

/// Default league: two leagues of three five-team divisions.
pub const TEAM_NAMES: [&str; 30] = [
    "Oceanport Marlins", "Harbor City Gulls", "Riverton Eagles", "Bayside Cannons", "Eastwick Foxes",
    "Irondale Steelers", "Lakewood Bisons", "Northfield Wolves", "Millhaven Miners", "Prairie City Hawks",
    "Sunset Rockets", "Desert Roadrunners", "Pacific Seals", "Canyon Condors", "Valley Vipers",
    "Capital City Senators", "Harborview Kings", "Coastal Tides", "Pinecrest Pines", "Oldtown Owls",
    "Heartland Huskers", "River Bend Otters", "Midland Monarchs", "Lakeview Lobos", "Great Plains Giants",
    "Sierra Stallions", "Redwood Redwoods", "Gold Rush Miners", "Dunes Devils", "Pacific Grove Pelicans",
];

fn jitter<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    rng.gen_range(low..high)
}

pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_INITIALS[rng.gen_range(0..FIRST_INITIALS.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Archetype-shifted batter profile. Returns the archetype label too.
pub fn random_batter_profile<R: Rng>(rng: &mut R) -> (&'static str, BatterProfile) {
    let a = &BATTER_ARCHETYPES[rng.gen_range(0..BATTER_ARCHETYPES.len())];
    let profile = BatterProfile {
        strikeout_rate: (league::STRIKEOUT + a.strikeout + jitter(rng, -0.03, 0.03)).clamp(0.10, 0.40),
        walk_rate: (league::WALK + a.walk + jitter(rng, -0.02, 0.02)).clamp(0.04, 0.18),
        hit_by_pitch_rate: (league::HIT_BY_PITCH + jitter(rng, -0.008, 0.008)).clamp(0.0, 0.05),
        ground_out_rate: (league::GROUND_OUT + a.ground_out + jitter(rng, -0.02, 0.02)).clamp(0.12, 0.30),
        fly_out_rate: (league::FLY_OUT + jitter(rng, -0.02, 0.02)).clamp(0.10, 0.25),
        line_out_rate: (league::LINE_OUT + jitter(rng, -0.015, 0.015)).clamp(0.0, 0.15),
        single_rate: (league::SINGLE + jitter(rng, -0.02, 0.02)).clamp(0.08, 0.22),
        double_rate: (league::DOUBLE + jitter(rng, -0.01, 0.01)).clamp(0.02, 0.09),
        triple_rate: (league::TRIPLE + a.triple + jitter(rng, 0.0, 0.005)).clamp(0.001, 0.012),
        home_run_rate: (league::HOME_RUN + a.home_run + jitter(rng, -0.01, 0.015)).clamp(0.005, 0.08),
        stolen_base_rate: jitter(rng, 0.02, 0.15),
        batting_average_seed: (league::BATTING_AVERAGE + a.average + jitter(rng, -0.022, 0.022))
            .clamp(0.190, 0.330),
    };
    (a.label, profile)
}

pub fn random_pitcher_profile<R: Rng>(rng: &mut R) -> (&'static str, PitcherProfile) {
    let a = &PITCHER_ARCHETYPES[rng.gen_range(0..PITCHER_ARCHETYPES.len())];
    let profile = PitcherProfile {
        strikeout_rate: (league::STRIKEOUT + a.strikeout + jitter(rng, -0.02, 0.02)).clamp(0.14, 0.35),
        walk_rate: (league::WALK + a.walk + jitter(rng, -0.01, 0.02)).clamp(0.04, 0.14),
        groundball_delta: a.groundball,
        seed_era: (league::ERA + a.era + jitter(rng, -0.5, 0.5)).clamp(2.20, 6.00),
    };
    (a.label, profile)
}

/// Nine batters in `LINEUP_POSITIONS` order and a seven-man staff. Player ids
/// are `id * 100 + n` (pitchers from `+ 50`).
pub fn generate_team<R: Rng>(id: u32, name: &str, rng: &mut R) -> Team {
    let batters = LINEUP_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let (label, profile) = random_batter_profile(rng);
            Batter {
                id: id * 100 + i as u32,
                name: random_name(rng),
                position,
                number: rng.gen_range(1..=99),
                archetype: label.to_string(),
                profile,
                career: Default::default(),
            }
        })
        .collect();

    let pitchers = STAFF_ROLES
        .iter()
        .enumerate()
        .map(|(i, &role)| {
            let (label, profile) = random_pitcher_profile(rng);
            Pitcher {
                id: id * 100 + 50 + i as u32,
                name: random_name(rng),
                role,
                number: rng.gen_range(1..=99),
                archetype: label.to_string(),
                profile,
                career: Default::default(),
            }
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

/// `count` teams named from `TEAM_NAMES`; past thirty the names repeat with a
/// numeric suffix.
pub fn generate_league<R: Rng>(count: usize, rng: &mut R) -> Vec<Team> {
    (0..count)
        .map(|i| {
            let base = TEAM_NAMES[i % TEAM_NAMES.len()];
            let name = match i / TEAM_NAMES.len() {
                0 => base.to_string(),
                n => format!("{} {}", base, n + 1),
            };
            generate_team(i as u32 + 1, &name, rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_team_is_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for i in 0..20 {
            let team = generate_team(i + 1, "Generated Club", &mut rng);
            assert!(team.validate().is_ok());
            assert_eq!(team.batters.len(), 9);
            assert_eq!(team.starter_indices(), vec![0, 1, 2, 3]);
            assert_eq!(team.pitchers[6].role, PitcherRole::Closer);
        }
    }

    #[test]
    fn test_generation_is_seeded() {
        let a = generate_team(1, "Same", &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_team(1, "Same", &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_league_names_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let teams = generate_league(32, &mut rng);
        let mut names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 32);
        assert_eq!(teams[30].name, "Oceanport Marlins 2");
    }
}
