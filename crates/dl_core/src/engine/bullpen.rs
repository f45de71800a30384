//! Pitcher fatigue and automatic substitutions.
//!
//! Changes happen only at half-inning boundaries, never mid plate appearance.

use super::config::BullpenConfig;
use super::game_engine::GameEngine;
use crate::models::{EventType, Pitcher, PitcherRole, Side};

/// Fatigue in [0, 1]: linear in pitches until the role's limit.
pub fn fatigue_for(pitches: u32, is_game_starter: bool, cfg: &BullpenConfig) -> f64 {
    let limit = if is_game_starter { cfg.starter_pitch_limit } else { cfg.reliever_pitch_limit };
    (pitches as f64 / limit.max(1) as f64).min(1.0)
}

/// Pick a replacement from pitchers who have not appeared yet.
///
/// Fresh relievers first, then any fresh non-closer, then the closer as a
/// last resort. Within a tier the pitcher with the fewest career games wins.
pub fn choose_reliever(staff: &[Pitcher], appeared: &[bool], current: usize) -> Option<usize> {
    let fresh = |i: &usize| *i != current && !appeared.get(*i).copied().unwrap_or(true);
    let least_used = |role_ok: &dyn Fn(PitcherRole) -> bool| {
        (0..staff.len())
            .filter(|i| fresh(i))
            .filter(|&i| role_ok(staff[i].role))
            .min_by_key(|&i| (staff[i].career.games, i))
    };

    least_used(&|role| role == PitcherRole::Reliever)
        .or_else(|| least_used(&|role| role != PitcherRole::Closer))
        .or_else(|| fresh_closer(staff, appeared).filter(|&i| i != current))
}

/// A closer who has not pitched yet.
pub fn fresh_closer(staff: &[Pitcher], appeared: &[bool]) -> Option<usize> {
    (0..staff.len())
        .filter(|&i| staff[i].role == PitcherRole::Closer && !appeared.get(i).copied().unwrap_or(true))
        .min_by_key(|&i| (staff[i].career.games, i))
}

impl GameEngine {
    /// Current fatigue of `side`'s pitcher.
    pub fn fatigue(&self, side: Side) -> f64 {
        let i = side.index();
        let active = self.state.active_pitcher[i];
        let pitches = self.state.pitcher_lines[i][active].pitches;
        fatigue_for(pitches, active == self.state.starting_pitcher[i], &self.config.bullpen)
    }

    /// Replace a tired pitcher, or bring in the closer in a save situation.
    pub(crate) fn consult_bullpen(&mut self, side: Side) {
        let i = side.index();
        let current = self.state.active_pitcher[i];
        let appeared: Vec<bool> = self.state.pitcher_lines[i].iter().map(|l| l.appeared).collect();
        let staff = &self.teams[i].pitchers;

        if self.fatigue(side) > self.config.bullpen.substitution_threshold {
            if let Some(next) = choose_reliever(staff, &appeared, current) {
                self.substitute(side, next, "tiring");
            }
            return;
        }

        let cfg = &self.config.bullpen;
        let save_spot = self.state.inning >= cfg.save_situation_inning
            && cfg.is_save_lead(self.state.lead(side))
            && staff[current].role != PitcherRole::Closer;
        if save_spot {
            if let Some(closer) = fresh_closer(staff, &appeared) {
                self.substitute(side, closer, "save situation");
            }
        }
    }

    fn substitute(&mut self, side: Side, next: usize, reason: &str) {
        let i = side.index();
        let outgoing = self.state.active_pitcher[i];
        let entry_score = (self.state.runs[i], self.state.runs[side.other().index()]);

        self.state.active_pitcher[i] = next;
        self.state.appearances[i].push(next);
        {
            let line = &mut self.state.pitcher_lines[i][next];
            line.appeared = true;
            line.entry_score = entry_score;
        }

        let team = &self.teams[i];
        let text = format!(
            "Pitching change for the {}: {} replaces {} ({}).",
            team.nickname(),
            team.pitchers[next].name,
            team.pitchers[outgoing].name,
            reason
        );
        log::info!("{} {}", self.state.half.tag(self.state.inning), text);
        self.emit(EventType::Substitution, side, text);
    }
}
