//! Pitch-by-pitch plate-appearance resolution.

use super::game_engine::GameEngine;
use super::game_state::GamePhase;
use super::outcome::Outcome;
use super::probability::compute_outcome_probabilities;
use crate::models::{EventType, Side};

/// How a strike was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrikeKind {
    Looking,
    Swinging,
    /// Strikeout drawn from the outcome model.
    Drawn,
}

impl GameEngine {
    /// Simulate one pitch, or one manager decision when a plate appearance
    /// opens with a tactical situation.
    ///
    /// No-op before `play_ball`, after the game ends, or while a decision is
    /// pending.
    pub fn simulate_one_pitch(&mut self) {
        if self.state.over
            || self.state.pending_decision.is_some()
            || self.state.phase == GamePhase::PreGame
            || self.state.phase == GamePhase::GameOver
        {
            return;
        }
        if self.state.phase == GamePhase::HalfInningBreak {
            self.begin_half_inning();
        }

        if !self.state.decision_checked && self.state.balls == 0 && self.state.strikes == 0 {
            self.state.decision_checked = true;
            if self.check_decision_point() {
                return;
            }
        }

        self.throw_pitch();
    }

    fn throw_pitch(&mut self) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        let slot = self.state.current_batter_slot();
        let batter = self.teams[bat.index()].batters[slot].profile.clone();
        let pitcher = self.pitcher_on_mound(fld).profile.clone();
        let fatigue = self.fatigue(fld);

        self.state.active_line_mut(fld).pitches += 1;
        self.state.total_pitches += 1;

        tracing::trace!(
            inning = self.state.inning,
            half = ?self.state.half,
            balls = self.state.balls,
            strikes = self.state.strikes,
            outs = self.state.outs,
            bases = ?self.state.bases.occupied(),
            fatigue,
            "pitch"
        );

        let pitch_cfg = self.config.pitch.clone();

        if self.state.strikes < 2 && self.roll() < pitch_cfg.foul_rate {
            self.state.strikes += 1;
            self.state.active_line_mut(fld).strikes += 1;
            let text = format!("Foul ball. Count: {}-{}.", self.state.balls, self.state.strikes);
            self.emit(EventType::Foul, bat, text);
            return;
        }

        let ball_chance = pitch_cfg.called_ball_chance(batter.walk_rate, pitcher.walk_rate);
        if self.roll() < ball_chance {
            self.add_ball();
            return;
        }

        if self.roll() < pitch_cfg.called_strike_rate {
            self.add_strike(StrikeKind::Looking);
            return;
        }

        let swing_miss = pitch_cfg.swing_miss_chance(pitcher.strikeout_rate, batter.strikeout_rate);
        if self.roll() < swing_miss {
            self.add_strike(StrikeKind::Swinging);
            return;
        }

        let dist = compute_outcome_probabilities(&batter, &pitcher, fatigue, &self.config.outcome);
        let outcome = dist.sample(self.roll());
        match outcome {
            Outcome::Walk => self.add_ball(),
            Outcome::Strikeout => self.add_strike(StrikeKind::Drawn),
            _ => self.resolve_contact(outcome),
        }
    }

    fn add_ball(&mut self) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        self.state.balls += 1;
        self.state.active_line_mut(fld).balls += 1;

        if self.state.balls >= 4 {
            self.complete_walk();
        } else {
            let text = format!("Ball {}. Count: {}-{}.", self.state.balls, self.state.balls, self.state.strikes);
            self.emit(EventType::Ball, bat, text);
        }
    }

    fn complete_walk(&mut self) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        let slot = self.state.current_batter_slot();
        let name = self.batter_up().name.clone();

        {
            let line = self.state.batter_line_mut(bat, slot);
            line.plate_appearances += 1;
            line.walks += 1;
        }
        {
            let line = self.state.active_line_mut(fld);
            line.walks += 1;
            line.batters_faced += 1;
        }

        self.emit(EventType::Walk, bat, format!("{} draws a walk.", name));
        let advance = self.state.bases.force_advance(slot);
        let runs = self.apply_advance(advance, true);
        self.state.batter_line_mut(bat, slot).rbi += runs;
        self.end_plate_appearance();
        self.finish_play();
    }

    fn add_strike(&mut self, kind: StrikeKind) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        self.state.strikes += 1;
        self.state.active_line_mut(fld).strikes += 1;

        if self.state.strikes < 3 {
            let count = format!("Count: {}-{}.", self.state.balls, self.state.strikes);
            let (event_type, text) = match kind {
                StrikeKind::Looking => (EventType::CalledStrike, format!("Called strike {}. {}", self.state.strikes, count)),
                StrikeKind::Swinging => (EventType::SwingingStrike, format!("Swings and misses. Strike {}. {}", self.state.strikes, count)),
                StrikeKind::Drawn => (EventType::CalledStrike, format!("Strike {}. {}", self.state.strikes, count)),
            };
            self.emit(event_type, bat, text);
            return;
        }

        let slot = self.state.current_batter_slot();
        let name = self.batter_up().name.clone();
        {
            let line = self.state.batter_line_mut(bat, slot);
            line.plate_appearances += 1;
            line.at_bats += 1;
            line.strikeouts += 1;
        }
        {
            let line = self.state.active_line_mut(fld);
            line.strikeouts += 1;
            line.batters_faced += 1;
        }

        let text = match kind {
            StrikeKind::Looking => format!("Called strike 3. {} struck out looking!", name),
            StrikeKind::Swinging => format!("Swings through strike 3. {} struck out swinging!", name),
            StrikeKind::Drawn => format!("{} strikes out.", name),
        };
        self.emit(EventType::Strikeout, bat, text);
        self.end_plate_appearance();
        self.record_outs(1);
        self.finish_play();
    }

    /// Ball in play (or hit batsman). Ends the plate appearance.
    fn resolve_contact(&mut self, outcome: Outcome) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        let slot = self.state.current_batter_slot();
        let name = self.batter_up().name.clone();

        self.state.reset_count();
        self.state.batter_line_mut(bat, slot).plate_appearances += 1;
        {
            let line = self.state.active_line_mut(fld);
            line.batters_faced += 1;
            if outcome == Outcome::HitByPitch {
                line.balls += 1;
            } else {
                line.strikes += 1;
            }
        }

        if outcome.is_fieldable_out() && self.roll() < self.error_rate(outcome) {
            self.reached_on_error(bat, fld, slot, &name, outcome);
            return;
        }

        match outcome {
            Outcome::GroundOut => self.ground_out(bat, slot, &name),
            Outcome::FlyOut => self.fly_out(bat, slot, &name),
            Outcome::LineOut => {
                self.state.batter_line_mut(bat, slot).at_bats += 1;
                let verb = self.pick(&["lines out to short", "ropes one to second, out", "lasers one to center, caught"]);
                self.emit(EventType::LineOut, bat, format!("{} {}.", name, verb));
                self.end_plate_appearance();
                self.record_outs(1);
            }
            Outcome::HitByPitch => {
                self.state.batter_line_mut(bat, slot).hit_by_pitch += 1;
                self.state.active_line_mut(fld).hit_by_pitch += 1;
                self.emit(EventType::HitByPitch, bat, format!("{} hit by pitch.", name));
                let advance = self.state.bases.force_advance(slot);
                let runs = self.apply_advance(advance, true);
                self.state.batter_line_mut(bat, slot).rbi += runs;
                self.end_plate_appearance();
            }
            Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun => {
                self.base_hit(bat, fld, slot, &name, outcome);
            }
            Outcome::Walk | Outcome::Strikeout => {
                // Intercepted by the caller.
            }
        }
        self.finish_play();
    }

    fn error_rate(&self, outcome: Outcome) -> f64 {
        let running = &self.config.running;
        match outcome {
            Outcome::GroundOut => running.ground_out_error_rate,
            Outcome::FlyOut => running.fly_out_error_rate,
            Outcome::LineOut => running.line_out_error_rate,
            _ => 0.0,
        }
    }

    fn reached_on_error(&mut self, bat: Side, fld: Side, slot: usize, name: &str, outcome: Outcome) {
        self.state.errors[fld.index()] += 1;
        self.state.batter_line_mut(bat, slot).at_bats += 1;
        let play = match outcome {
            Outcome::GroundOut => "grounder is booted",
            Outcome::FlyOut => "fly ball is dropped",
            _ => "liner is bobbled",
        };
        let fielders = self.teams[fld.index()].nickname().to_string();
        self.emit(
            EventType::ReachedOnError,
            bat,
            format!("{} reaches on an error: the {} by the {}.", name, play, fielders),
        );
        let advance = self.state.bases.advance_all(1, slot);
        self.apply_advance(advance, false);
        self.end_plate_appearance();
        self.finish_play();
    }

    fn ground_out(&mut self, bat: Side, slot: usize, name: &str) {
        self.state.batter_line_mut(bat, slot).at_bats += 1;

        if self.state.bases.is_occupied(super::bases::FIRST)
            && self.state.outs < 2
            && self.roll() < self.config.running.double_play_rate
        {
            self.state.bases.erase(super::bases::FIRST);
            self.emit(EventType::DoublePlay, bat, format!("{} hits into a double play!", name));
            self.end_plate_appearance();
            self.record_outs(2);
            return;
        }

        let verb = self.pick(&["grounds to short", "grounds out to second", "bounces to third"]);
        self.emit(EventType::GroundOut, bat, format!("{} {}.", name, verb));
        self.end_plate_appearance();
        self.record_outs(1);
    }

    fn fly_out(&mut self, bat: Side, slot: usize, name: &str) {
        if self.state.bases.is_occupied(super::bases::THIRD)
            && self.state.outs < 2
            && self.roll() < self.config.running.sacrifice_fly_rate
        {
            {
                let line = self.state.batter_line_mut(bat, slot);
                line.sacrifice_flies += 1;
                line.rbi += 1;
            }
            self.emit(EventType::SacrificeFly, bat, format!("{} lifts a sacrifice fly!", name));
            if let Some(runner) = self.state.bases.erase(super::bases::THIRD) {
                self.score_run(runner, true);
            }
            self.end_plate_appearance();
            self.record_outs(1);
            return;
        }

        self.state.batter_line_mut(bat, slot).at_bats += 1;
        let verb = self.pick(&["flies out to center", "pops to right", "lofts one to left, caught"]);
        self.emit(EventType::FlyOut, bat, format!("{} {}.", name, verb));
        self.end_plate_appearance();
        self.record_outs(1);
    }

    fn base_hit(&mut self, bat: Side, fld: Side, slot: usize, name: &str, outcome: Outcome) {
        self.state.hits[bat.index()] += 1;
        {
            let line = self.state.batter_line_mut(bat, slot);
            line.at_bats += 1;
            line.hits += 1;
            match outcome {
                Outcome::Double => line.doubles += 1,
                Outcome::Triple => line.triples += 1,
                Outcome::HomeRun => line.home_runs += 1,
                _ => {}
            }
        }
        {
            let line = self.state.active_line_mut(fld);
            line.hits += 1;
            if outcome == Outcome::HomeRun {
                line.home_runs += 1;
            }
        }

        let bases = self.state.bases;
        let advance = match outcome {
            Outcome::Single => {
                self.emit(EventType::Single, bat, format!("{} singles!", name));
                match bases.runner_on(super::bases::SECOND) {
                    Some(runner) if self.state.outs == 2 => {
                        let chance = self.config.running.single_score_chance(self.runner_speed(bat, runner));
                        let scores = self.roll() < chance;
                        if !scores {
                            self.emit(EventType::RunnerHolds, bat, "Runner holds at third.");
                        }
                        bases.single_with_two_outs(slot, scores)
                    }
                    _ => bases.advance_all(1, slot),
                }
            }
            Outcome::Double => {
                self.emit(EventType::Double, bat, format!("{} doubles!", name));
                match bases.runner_on(super::bases::FIRST) {
                    Some(runner) => {
                        let speed = self.runner_speed(bat, runner);
                        let chance = self.config.running.double_score_chance(speed, self.state.outs);
                        let scores = self.roll() < chance;
                        if !scores {
                            self.emit(EventType::RunnerHolds, bat, "Runner holds at third.");
                        }
                        bases.double_with_runner_on_first(slot, scores)
                    }
                    None => bases.advance_all(2, slot),
                }
            }
            Outcome::Triple => {
                self.emit(EventType::Triple, bat, format!("{} TRIPLES!", name));
                bases.advance_all(3, slot)
            }
            _ => {
                let runs = bases.count() + 1;
                let text = if runs == 1 {
                    format!("{} HOMERS! 1 run scores!", name)
                } else {
                    format!("{} HOMERS! {} runs score!", name, runs)
                };
                self.emit(EventType::HomeRun, bat, text);
                bases.home_run(slot)
            }
        };

        let runs = self.apply_advance(advance, true);
        self.state.batter_line_mut(bat, slot).rbi += runs;
        self.end_plate_appearance();
    }

    /// 0-100 speed grade of the batter in `slot`.
    pub(crate) fn runner_speed(&self, side: Side, slot: usize) -> u32 {
        self.teams[side.index()].batters[slot].profile.speed()
    }
}
