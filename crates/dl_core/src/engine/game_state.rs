//! The mutable aggregate for one game.

use serde::{Deserialize, Serialize};

use super::bases::Bases;
use super::tactics::DecisionPoint;
use crate::models::{BatterGameLine, Half, PitcherGameLine, Side, Team};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    PreGame,
    InProgress,
    /// Three outs recorded; the next half starts on the next pitch.
    HalfInningBreak,
    GameOver,
}

/// One run crossing the plate. Drives win/loss/save attribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringEntry {
    pub inning: u32,
    pub half: Half,
    pub away_runs_after: u32,
    pub home_runs_after: u32,
    /// Active staff index per side when the run scored.
    pub away_pitcher: usize,
    pub home_pitcher: usize,
    pub earned: bool,
}

impl ScoringEntry {
    pub fn runs_after(&self, side: Side) -> u32 {
        match side {
            Side::Away => self.away_runs_after,
            Side::Home => self.home_runs_after,
        }
    }

    pub fn pitcher(&self, side: Side) -> usize {
        match side {
            Side::Away => self.away_pitcher,
            Side::Home => self.home_pitcher,
        }
    }
}

/// Live state. Every `[T; 2]` is indexed by `Side::index()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub inning: u32,
    pub half: Half,
    pub phase: GamePhase,

    pub outs: u8,
    pub balls: u8,
    pub strikes: u8,
    pub bases: Bases,

    /// Runs per inning; `None` until that half is complete (or never played).
    pub line_score: [Vec<Option<u32>>; 2],
    pub runs: [u32; 2],
    pub hits: [u32; 2],
    pub errors: [u32; 2],
    pub runs_at_half_start: [u32; 2],

    /// Next batter per side, 0..9.
    pub lineup_index: [usize; 2],
    /// Staff index on the mound per side.
    pub active_pitcher: [usize; 2],
    pub starting_pitcher: [usize; 2],
    /// Staff indices in order of appearance.
    pub appearances: [Vec<usize>; 2],

    pub scoring_log: Vec<ScoringEntry>,
    pub batter_lines: [Vec<BatterGameLine>; 2],
    pub pitcher_lines: [Vec<PitcherGameLine>; 2],

    /// Completed plate appearances, both sides.
    pub plate_appearances: u32,
    pub half_innings_completed: u32,
    pub total_pitches: u32,

    /// Side has switched its manager to automatic for the rest of the game.
    pub auto_managed: [bool; 2],
    pub pending_decision: Option<DecisionPoint>,
    /// The current plate appearance already had its decision check.
    pub decision_checked: bool,

    pub walkoff_pending: bool,
    pub walk_off: bool,
    pub over: bool,
}

impl GameState {
    pub fn new(away: &Team, home: &Team) -> Self {
        Self {
            inning: 1,
            half: Half::Top,
            phase: GamePhase::PreGame,
            outs: 0,
            balls: 0,
            strikes: 0,
            bases: Bases::empty(),
            line_score: [Vec::new(), Vec::new()],
            runs: [0, 0],
            hits: [0, 0],
            errors: [0, 0],
            runs_at_half_start: [0, 0],
            lineup_index: [0, 0],
            active_pitcher: [0, 0],
            starting_pitcher: [0, 0],
            appearances: [Vec::new(), Vec::new()],
            scoring_log: Vec::new(),
            batter_lines: [
                vec![BatterGameLine::default(); away.batters.len()],
                vec![BatterGameLine::default(); home.batters.len()],
            ],
            pitcher_lines: [
                vec![PitcherGameLine::default(); away.pitchers.len()],
                vec![PitcherGameLine::default(); home.pitchers.len()],
            ],
            plate_appearances: 0,
            half_innings_completed: 0,
            total_pitches: 0,
            auto_managed: [false, false],
            pending_decision: None,
            decision_checked: false,
            walkoff_pending: false,
            walk_off: false,
            over: false,
        }
    }

    #[inline]
    pub fn batting_side(&self) -> Side {
        self.half.batting_side()
    }

    #[inline]
    pub fn fielding_side(&self) -> Side {
        self.half.fielding_side()
    }

    /// (away, home)
    pub fn score(&self) -> (u32, u32) {
        (self.runs[0], self.runs[1])
    }

    /// `side`'s runs minus the opponent's.
    pub fn lead(&self, side: Side) -> i64 {
        self.runs[side.index()] as i64 - self.runs[side.other().index()] as i64
    }

    pub fn active_line(&self, side: Side) -> &PitcherGameLine {
        &self.pitcher_lines[side.index()][self.active_pitcher[side.index()]]
    }

    pub fn active_line_mut(&mut self, side: Side) -> &mut PitcherGameLine {
        let idx = self.active_pitcher[side.index()];
        &mut self.pitcher_lines[side.index()][idx]
    }

    pub fn current_batter_slot(&self) -> usize {
        self.lineup_index[self.batting_side().index()]
    }

    pub fn batter_line_mut(&mut self, side: Side, slot: usize) -> &mut BatterGameLine {
        &mut self.batter_lines[side.index()][slot]
    }

    pub fn reset_count(&mut self) {
        self.balls = 0;
        self.strikes = 0;
    }

    pub fn is_live(&self) -> bool {
        !self.over && matches!(self.phase, GamePhase::InProgress | GamePhase::HalfInningBreak)
    }
}
