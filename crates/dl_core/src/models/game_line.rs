use serde::{Deserialize, Serialize};

/// Per-batter counters for one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatterGameLine {
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

/// Per-pitcher counters for one game. Created for every staff member at game
/// start; `appeared` flips when the pitcher enters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PitcherGameLine {
    pub appeared: bool,
    pub started: bool,
    pub pitches: u32,
    pub balls: u32,
    pub strikes: u32,
    pub batters_faced: u32,
    pub hits: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub strikeouts: u32,
    pub home_runs: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub outs: u32,
    /// Score at the moment of entry, from this pitcher's team perspective
    /// (own runs, opponent runs).
    pub entry_score: (u32, u32),
}

impl PitcherGameLine {
    /// Lead held when this pitcher entered (negative when trailing).
    pub fn entry_lead(&self) -> i64 {
        self.entry_score.0 as i64 - self.entry_score.1 as i64
    }

    /// Innings pitched in box-score notation ("6.2" = six and two-thirds).
    pub fn innings_display(&self) -> String {
        format!("{}.{}", self.outs / 3, self.outs % 3)
    }
}
