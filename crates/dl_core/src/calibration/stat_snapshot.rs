//! Per-game outcome counts for calibration.

use crate::models::{EventType, GameResult};

/// Plate-appearance outcome counts for one game, both teams combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStatSnapshot {
    pub plate_appearances: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub ground_outs: u32,
    pub fly_outs: u32,
    pub line_outs: u32,

    pub runs: u32,
    pub innings: u32,
    pub walk_off: bool,
    pub tie: bool,
}

impl GameStatSnapshot {
    pub fn from_result(result: &GameResult) -> Self {
        let mut snap = Self {
            runs: result.line_score.runs.iter().sum(),
            innings: result.innings_played,
            walk_off: result.walk_off,
            tie: result.is_tie(),
            ..Default::default()
        };

        for team in [&result.away, &result.home] {
            for batter in &team.batters {
                let line = &batter.line;
                snap.plate_appearances += line.plate_appearances;
                snap.strikeouts += line.strikeouts;
                snap.walks += line.walks;
                snap.hit_by_pitch += line.hit_by_pitch;
                snap.doubles += line.doubles;
                snap.triples += line.triples;
                snap.home_runs += line.home_runs;
                snap.singles += line.hits.saturating_sub(line.doubles + line.triples + line.home_runs);
            }
        }

        // Batted-ball outs are only distinguishable in the play log.
        for event in &result.events {
            match event.event_type {
                EventType::GroundOut | EventType::DoublePlay => snap.ground_outs += 1,
                EventType::FlyOut | EventType::SacrificeFly => snap.fly_outs += 1,
                EventType::LineOut => snap.line_outs += 1,
                _ => {}
            }
        }

        snap
    }

    pub fn accumulate(&mut self, other: &GameStatSnapshot) {
        self.plate_appearances += other.plate_appearances;
        self.strikeouts += other.strikeouts;
        self.walks += other.walks;
        self.hit_by_pitch += other.hit_by_pitch;
        self.singles += other.singles;
        self.doubles += other.doubles;
        self.triples += other.triples;
        self.home_runs += other.home_runs;
        self.ground_outs += other.ground_outs;
        self.fly_outs += other.fly_outs;
        self.line_outs += other.line_outs;
        self.runs += other.runs;
    }
}
