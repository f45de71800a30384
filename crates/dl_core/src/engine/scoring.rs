//! Runs, outs and plate-appearance bookkeeping shared by every play.

use super::bases::Advance;
use super::game_engine::GameEngine;
use super::game_state::{GamePhase, ScoringEntry};
use crate::models::{EventType, Half, Side};

impl GameEngine {
    /// Install the new bases and score every runner who crossed the plate.
    /// Returns the number of runs.
    pub(crate) fn apply_advance(&mut self, advance: Advance, earned: bool) -> u32 {
        let runs = advance.runs();
        self.state.bases = advance.bases;
        for runner in advance.scored {
            self.score_run(runner, earned);
        }
        if runs > 0 {
            let bat = self.state.batting_side();
            let (away, home) = self.state.score();
            let lead = if runs == 1 { "1 run scores".to_string() } else { format!("{} runs score", runs) };
            let text = format!(
                "{}. {} {}, {} {}.",
                lead, self.teams[0].name, away, self.teams[1].name, home
            );
            self.emit(EventType::RunsScored, bat, text);
        }
        runs
    }

    /// One run for the batting side, charged to the fielding side's active
    /// pitcher. Sets the walk-off flag; the game ends in `finish_play`.
    pub(crate) fn score_run(&mut self, runner: usize, earned: bool) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();

        self.state.runs[bat.index()] += 1;
        self.state.batter_line_mut(bat, runner).runs += 1;
        {
            let line = self.state.active_line_mut(fld);
            line.runs += 1;
            if earned {
                line.earned_runs += 1;
            }
        }

        self.state.scoring_log.push(ScoringEntry {
            inning: self.state.inning,
            half: self.state.half,
            away_runs_after: self.state.runs[Side::Away.index()],
            home_runs_after: self.state.runs[Side::Home.index()],
            away_pitcher: self.state.active_pitcher[Side::Away.index()],
            home_pitcher: self.state.active_pitcher[Side::Home.index()],
            earned,
        });

        if self.state.half == Half::Bottom
            && self.state.inning >= self.config.rules.regulation_innings
            && self.state.lead(Side::Home) > 0
        {
            self.state.walkoff_pending = true;
        }
    }

    /// Record up to `n` outs for the fielding pitcher. The third out ends the
    /// half immediately; extra outs past it are dropped.
    pub(crate) fn record_outs(&mut self, n: u8) {
        for _ in 0..n {
            if self.state.over || self.state.phase != GamePhase::InProgress {
                return;
            }
            let fld = self.state.fielding_side();
            self.state.active_line_mut(fld).outs += 1;
            self.state.outs += 1;
            if self.state.outs >= 3 {
                self.end_half_inning();
                return;
            }
        }
    }

    /// Next batter up, fresh count, fresh decision check.
    pub(crate) fn end_plate_appearance(&mut self) {
        let bat = self.state.batting_side().index();
        let lineup_len = self.teams[bat].lineup().len();
        self.state.lineup_index[bat] = (self.state.lineup_index[bat] + 1) % lineup_len;
        self.state.reset_count();
        self.state.decision_checked = false;
        self.state.plate_appearances += 1;
    }

    /// Called after every play once all of its runs and outs are applied.
    pub(crate) fn finish_play(&mut self) {
        if self.state.walkoff_pending && !self.state.over {
            self.state.walk_off = true;
            let name = self.teams[Side::Home.index()].name.clone();
            self.emit(EventType::WalkOff, Side::Home, format!("WALK-OFF! {} win it!", name));
            self.end_game();
        }
    }
}
