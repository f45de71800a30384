//! Manager decision points: steals, bunts, squeezes and the hit-and-run.
//!
//! A decision point is a hard suspension: while one is pending no pitch can
//! be thrown until `resolve_decision` is called.

use serde::{Deserialize, Serialize};

use super::bases::{FIRST, SECOND, THIRD};
use super::game_engine::GameEngine;
use crate::error::{GameError, Result};
use crate::models::{EventType, Half, Side};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ManagerOption {
    PlayStraight,
    StealSecond,
    DoubleSteal,
    StealThird,
    SacrificeBunt,
    SuicideSqueeze,
    HitAndRun,
    /// No more stoppages for this side.
    AutoManage,
}

impl ManagerOption {
    pub fn label(&self) -> &'static str {
        match self {
            ManagerOption::PlayStraight => "Play it straight",
            ManagerOption::StealSecond => "Steal 2nd",
            ManagerOption::DoubleSteal => "Double steal",
            ManagerOption::StealThird => "Steal 3rd",
            ManagerOption::SacrificeBunt => "Sac bunt",
            ManagerOption::SuicideSqueeze => "Suicide squeeze",
            ManagerOption::HitAndRun => "Hit and run",
            ManagerOption::AutoManage => "Auto-manage rest of game",
        }
    }

    pub fn is_tactical(&self) -> bool {
        !matches!(self, ManagerOption::PlayStraight | ManagerOption::AutoManage)
    }
}

/// Snapshot handed to whoever manages the batting side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionPoint {
    pub side: Side,
    pub inning: u32,
    pub half: Half,
    pub outs: u8,
    pub bases: [bool; 3],
    pub batter_slot: usize,
    pub options: Vec<ManagerOption>,
}

impl DecisionPoint {
    pub fn allows(&self, option: ManagerOption) -> bool {
        self.options.contains(&option)
    }

    pub fn situation(&self) -> String {
        const NAMES: [&str; 3] = ["1st", "2nd", "3rd"];
        let runners: Vec<&str> = (0..3).filter(|&b| self.bases[b]).map(|b| NAMES[b]).collect();
        format!(
            "{} out{}, runners on: {}",
            self.outs,
            if self.outs == 1 { "" } else { "s" },
            if runners.is_empty() { "none".to_string() } else { runners.join(", ") }
        )
    }
}

/// Tactical options for a base/out state. Empty when nothing applies.
pub fn tactical_options(bases: [bool; 3], outs: u8, batter_home_run_rate: f64, bunt_max_hr: f64) -> Vec<ManagerOption> {
    let [r1, r2, r3] = bases;
    let mut options = Vec::new();
    if outs >= 2 {
        return options;
    }
    if r1 && !r2 {
        options.push(ManagerOption::StealSecond);
    }
    if r1 && r2 && !r3 {
        options.push(ManagerOption::DoubleSteal);
    }
    if r2 && !r3 && !r1 {
        options.push(ManagerOption::StealThird);
    }
    if (r1 || r2) && batter_home_run_rate < bunt_max_hr {
        options.push(ManagerOption::SacrificeBunt);
    }
    if r3 {
        options.push(ManagerOption::SuicideSqueeze);
    }
    if r1 {
        options.push(ManagerOption::HitAndRun);
    }
    options
}

impl GameEngine {
    /// Called once at the start of each plate appearance. Returns `true` when
    /// the step was consumed (decision pending or an automatic play made).
    pub(crate) fn check_decision_point(&mut self) -> bool {
        let bat = self.state.batting_side();
        if self.state.outs >= 3 || self.state.bases.is_empty() {
            return false;
        }

        let batter_hr = self.batter_up().profile.home_run_rate;
        let tactical = tactical_options(
            self.state.bases.occupied(),
            self.state.outs,
            batter_hr,
            self.config.tactics.bunt_max_home_run_rate,
        );
        if tactical.is_empty() {
            return false;
        }

        let mut options = Vec::with_capacity(tactical.len() + 2);
        options.push(ManagerOption::PlayStraight);
        options.extend(tactical);
        options.push(ManagerOption::AutoManage);

        let point = DecisionPoint {
            side: bat,
            inning: self.state.inning,
            half: self.state.half,
            outs: self.state.outs,
            bases: self.state.bases.occupied(),
            batter_slot: self.state.current_batter_slot(),
            options,
        };

        if self.is_human_managed(bat) {
            log::debug!("Decision pending for {}: {}", self.teams[bat.index()].name, point.situation());
            self.state.pending_decision = Some(point);
            return true;
        }

        let choice = self.auto_choice(&point);
        if choice == ManagerOption::PlayStraight {
            return false;
        }
        self.apply_option(choice);
        true
    }

    /// Automatic manager: steal with a fast lead runner, otherwise swing away.
    pub fn auto_choice(&self, point: &DecisionPoint) -> ManagerOption {
        let bat = point.side;
        let threshold = self.config.tactics.auto_steal_speed;
        let fast = |base: usize| {
            self.state
                .bases
                .runner_on(base)
                .map_or(false, |slot| self.runner_speed(bat, slot) >= threshold)
        };

        if point.allows(ManagerOption::StealSecond) && fast(FIRST) {
            ManagerOption::StealSecond
        } else if point.allows(ManagerOption::StealThird) && fast(SECOND) {
            ManagerOption::StealThird
        } else {
            ManagerOption::PlayStraight
        }
    }

    /// Resolve the pending decision with `choice`.
    pub fn resolve_decision(&mut self, choice: ManagerOption) -> Result<()> {
        let point = self.state.pending_decision.as_ref().ok_or(GameError::NoPendingDecision)?;
        if !point.allows(choice) {
            return Err(GameError::InvalidDecision(format!(
                "{} is not available ({})",
                choice.label(),
                point.situation()
            )));
        }
        self.state.pending_decision = None;
        self.apply_option(choice);
        Ok(())
    }

    fn apply_option(&mut self, choice: ManagerOption) {
        let bat = self.state.batting_side();
        match choice {
            ManagerOption::PlayStraight => {
                self.emit(EventType::ManagerDecision, bat, "Manager plays it straight.");
            }
            ManagerOption::AutoManage => {
                self.state.auto_managed[bat.index()] = true;
                self.emit(
                    EventType::ManagerDecision,
                    bat,
                    "Auto-manage enabled: no more stoppages this game.",
                );
            }
            ManagerOption::StealSecond => {
                let rate = self.config.tactics.steal_second_success;
                self.attempt_steal(FIRST, SECOND, rate);
            }
            ManagerOption::StealThird => {
                let rate = self.config.tactics.steal_third_success;
                self.attempt_steal(SECOND, THIRD, rate);
            }
            ManagerOption::DoubleSteal => self.double_steal(),
            ManagerOption::SacrificeBunt => self.sacrifice_bunt(),
            ManagerOption::SuicideSqueeze => self.suicide_squeeze(),
            ManagerOption::HitAndRun => self.hit_and_run(),
        }
        self.finish_play();
    }

    fn attempt_steal(&mut self, from: usize, to: usize, rate: f64) {
        let bat = self.state.batting_side();
        let Some(runner) = self.state.bases.runner_on(from) else {
            return;
        };
        let name = self.teams[bat.index()].batters[runner].name.clone();
        let base = if to == SECOND { "2nd" } else { "3rd" };

        if self.roll() < rate {
            self.state.bases.move_runner(from, to);
            self.state.batter_line_mut(bat, runner).stolen_bases += 1;
            self.emit(EventType::StolenBase, bat, format!("SAFE! {} steals {}!", name, base));
        } else {
            self.state.bases.erase(from);
            self.state.batter_line_mut(bat, runner).caught_stealing += 1;
            self.emit(EventType::CaughtStealing, bat, format!("{} caught stealing {}!", name, base));
            self.record_outs(1);
        }
    }

    fn double_steal(&mut self) {
        let bat = self.state.batting_side();
        let rate = self.config.tactics.double_steal_success;
        let lead_safe = self.roll() < rate;
        let trail_safe = self.roll() < rate;
        let (Some(lead), Some(trail)) = (self.state.bases.runner_on(SECOND), self.state.bases.runner_on(FIRST)) else {
            return;
        };

        if lead_safe && trail_safe {
            self.state.bases.move_runner(SECOND, THIRD);
            self.state.bases.move_runner(FIRST, SECOND);
            self.state.batter_line_mut(bat, lead).stolen_bases += 1;
            self.state.batter_line_mut(bat, trail).stolen_bases += 1;
            self.emit(EventType::StolenBase, bat, "Double steal: BOTH SAFE!");
        } else if lead_safe {
            self.state.bases.move_runner(SECOND, THIRD);
            self.state.bases.erase(FIRST);
            self.state.batter_line_mut(bat, lead).stolen_bases += 1;
            self.state.batter_line_mut(bat, trail).caught_stealing += 1;
            self.emit(EventType::CaughtStealing, bat, "Lead runner safe, trailing runner caught!");
            self.record_outs(1);
        } else {
            self.state.bases.erase(SECOND);
            self.state.bases.erase(FIRST);
            self.state.batter_line_mut(bat, lead).caught_stealing += 1;
            self.state.batter_line_mut(bat, trail).caught_stealing += 1;
            self.emit(EventType::CaughtStealing, bat, "Double steal botched: two out on the play!");
            self.record_outs(2);
        }
    }

    /// Bunts and squeezes end the plate appearance on the first pitch.
    fn bunt_pitch(&mut self) -> (Side, usize) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        let slot = self.state.current_batter_slot();
        {
            let line = self.state.active_line_mut(fld);
            line.pitches += 1;
            line.strikes += 1;
            line.batters_faced += 1;
        }
        self.state.total_pitches += 1;
        self.state.batter_line_mut(bat, slot).plate_appearances += 1;
        (bat, slot)
    }

    fn sacrifice_bunt(&mut self) {
        let (bat, slot) = self.bunt_pitch();
        let name = self.batter_up().name.clone();

        if self.roll() < self.config.tactics.sacrifice_bunt_success {
            self.emit(EventType::SacrificeBunt, bat, format!("{} lays down the sacrifice. Runners advance.", name));
            let advance = self.state.bases.sacrifice();
            let runs = self.apply_advance(advance, true);
            self.state.batter_line_mut(bat, slot).rbi += runs;
            self.end_plate_appearance();
            self.record_outs(1);
        } else {
            self.state.batter_line_mut(bat, slot).at_bats += 1;
            let outs = if self.state.bases.erase(FIRST).is_some() {
                self.emit(EventType::DoublePlay, bat, format!("{} pops up the bunt. Runner doubled off first!", name));
                2
            } else {
                self.emit(EventType::GroundOut, bat, format!("{} pops up the bunt.", name));
                1
            };
            self.end_plate_appearance();
            self.record_outs(outs);
        }
    }

    fn suicide_squeeze(&mut self) {
        let (bat, slot) = self.bunt_pitch();
        let name = self.batter_up().name.clone();

        if self.roll() < self.config.tactics.squeeze_success {
            self.emit(EventType::SqueezePlay, bat, format!("Suicide squeeze by {}: the runner SCORES!", name));
            self.state.batter_line_mut(bat, slot).rbi += 1;
            if let Some(runner) = self.state.bases.erase(THIRD) {
                self.score_run(runner, true);
            }
            self.end_plate_appearance();
            self.record_outs(1);
        } else {
            self.state.batter_line_mut(bat, slot).at_bats += 1;
            self.state.bases.erase(THIRD);
            self.emit(EventType::DoublePlay, bat, format!("Squeeze popped up by {}: double play!", name));
            self.end_plate_appearance();
            self.record_outs(2);
        }
    }

    fn hit_and_run(&mut self) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();

        if self.roll() < self.config.tactics.hit_and_run_success {
            let (_, slot) = self.bunt_pitch();
            let name = self.batter_up().name.clone();
            self.state.hits[bat.index()] += 1;
            {
                let line = self.state.batter_line_mut(bat, slot);
                line.at_bats += 1;
                line.hits += 1;
            }
            self.state.active_line_mut(fld).hits += 1;
            self.emit(EventType::HitAndRun, bat, format!("Hit and run: {} singles and the runner takes an extra base!", name));
            let advance = self.state.bases.hit_and_run(slot);
            let runs = self.apply_advance(advance, true);
            self.state.batter_line_mut(bat, slot).rbi += runs;
            self.end_plate_appearance();
        } else {
            {
                let line = self.state.active_line_mut(fld);
                line.pitches += 1;
                line.strikes += 1;
            }
            self.state.total_pitches += 1;
            self.state.strikes += 1;
            if let Some(runner) = self.state.bases.erase(FIRST) {
                self.state.batter_line_mut(bat, runner).caught_stealing += 1;
            }
            self.emit(EventType::CaughtStealing, bat, "Hit and run: swing and a miss, runner caught!");
            self.record_outs(1);
        }
    }
}
