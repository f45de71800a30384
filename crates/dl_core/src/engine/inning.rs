//! Half-inning transitions and game termination.

use super::bases::Bases;
use super::game_engine::GameEngine;
use super::game_state::GamePhase;
use crate::models::{EventType, Half, Side};

impl GameEngine {
    /// Open the half named by `state.inning` / `state.half`: consult the
    /// fielding bullpen and allocate the line-score slot.
    pub(crate) fn begin_half_inning(&mut self) {
        let bat = self.state.batting_side();
        let fld = self.state.fielding_side();
        let i = bat.index();

        self.state.runs_at_half_start[i] = self.state.runs[i];
        let slot = self.state.inning as usize - 1;
        while self.state.line_score[i].len() <= slot {
            self.state.line_score[i].push(None);
        }

        self.consult_bullpen(fld);
        self.state.decision_checked = false;
        self.state.phase = GamePhase::InProgress;

        log::debug!(
            "{} begins ({} batting, {} pitching)",
            self.state.half.tag(self.state.inning),
            self.teams[i].name,
            self.pitcher_on_mound(fld).name
        );
    }

    /// Three outs: record the half's runs, clear the field and either end the
    /// game or move to the next half.
    pub(crate) fn end_half_inning(&mut self) {
        let bat = self.state.batting_side();
        let inning = self.state.inning;
        self.record_half_runs(bat);

        self.state.bases = Bases::empty();
        self.state.reset_count();
        self.state.outs = 0;
        self.state.decision_checked = false;
        self.state.half_innings_completed += 1;

        let (away, home) = self.state.score();
        let text = format!(
            "End {}: {} {}, {} {}.",
            self.state.half.tag(inning),
            self.teams[0].name,
            away,
            self.teams[1].name,
            home
        );
        self.emit(EventType::HalfInningEnd, bat, text);
        log::debug!("End {} ({}-{})", self.state.half.tag(inning), away, home);

        let rules = &self.config.rules;
        let regulation = rules.regulation_innings;
        let mercy = rules.mercy_rule.clone();
        let cap = rules.max_innings;

        match self.state.half {
            Half::Top => {
                let home_lead = self.state.lead(Side::Home);
                let mercy_hit = mercy
                    .as_ref()
                    .map_or(false, |m| inning >= m.after_inning && home_lead >= m.run_margin as i64);
                if (inning >= regulation && home_lead > 0) || mercy_hit {
                    self.end_game();
                    return;
                }
                self.state.half = Half::Bottom;
            }
            Half::Bottom => {
                let diff = self.state.lead(Side::Home).abs();
                let mercy_hit = mercy
                    .as_ref()
                    .map_or(false, |m| inning >= m.after_inning && diff >= m.run_margin as i64);
                let capped = cap.map_or(false, |max| inning >= max);
                if (inning >= regulation && diff != 0) || mercy_hit || capped {
                    self.end_game();
                    return;
                }
                self.state.inning += 1;
                self.state.half = Half::Top;
            }
        }
        self.state.phase = GamePhase::HalfInningBreak;
    }

    fn record_half_runs(&mut self, side: Side) {
        let i = side.index();
        let runs = self.state.runs[i] - self.state.runs_at_half_start[i];
        let slot = self.state.inning as usize - 1;
        while self.state.line_score[i].len() <= slot {
            self.state.line_score[i].push(None);
        }
        self.state.line_score[i][slot] = Some(runs);
    }

    /// Terminal transition. Records the half in progress (a no-op when the
    /// half just ended), builds the result and notifies the observer.
    /// Idempotent.
    pub(crate) fn end_game(&mut self) {
        if self.state.over {
            return;
        }
        if self.state.phase == GamePhase::InProgress {
            let bat = self.state.batting_side();
            self.record_half_runs(bat);
        }
        self.state.over = true;
        self.state.phase = GamePhase::GameOver;
        self.state.pending_decision = None;

        // Unplayed home half shows as an empty slot.
        let away_len = self.state.line_score[0].len();
        while self.state.line_score[1].len() < away_len {
            self.state.line_score[1].push(None);
        }

        let result = self.build_game_result();
        let text = format!("Final: {}.", result.summary());
        log::info!("Game {} over: {}", self.game_id(), result.summary());
        self.emit(EventType::GameOver, Side::Home, text);

        let mut result = result;
        result.events = self.events().to_vec();
        self.result = Some(result);
        self.notify_persist();
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::config::{EngineConfig, MercyRule};
    use crate::engine::game_engine::GameEngine;
    use crate::engine::game_state::GamePhase;
    use crate::engine::test_fixtures::*;
    use crate::models::{Half, Side};
    use proptest::prelude::*;

    fn force_half_end(engine: &mut GameEngine) {
        engine.state.outs = 2;
        engine.record_outs(1);
    }

    #[test]
    fn test_home_leading_after_top_ninth_ends_game() {
        let mut engine = create_started_engine(6);
        engine.state.inning = 9;
        engine.state.runs = [2, 5];
        engine.state.runs_at_half_start = [2, 5];
        force_half_end(&mut engine);
        assert!(engine.is_over());
        let result = engine.result().unwrap();
        assert_eq!(result.winner, Some(Side::Home));
        assert_eq!(result.line_score.innings[1].last(), Some(&None));
        assert!(!result.walk_off);
    }

    #[test]
    fn test_tie_after_nine_goes_to_extras() {
        let mut engine = create_started_engine(6);
        engine.state.inning = 9;
        engine.state.half = Half::Bottom;
        engine.state.runs = [4, 4];
        engine.state.runs_at_half_start = [4, 4];
        force_half_end(&mut engine);
        assert!(!engine.is_over());
        assert_eq!(engine.state.inning, 10);
        assert_eq!(engine.state.half, Half::Top);

        engine.simulate_one_pitch();
        assert_eq!(engine.state.line_score[0].len(), 10);
    }

    #[test]
    fn test_innings_cap_allows_tie() {
        let mut plan = create_test_plan(6);
        plan.config.rules.max_innings = Some(10);
        let mut engine = GameEngine::new(plan).unwrap();
        engine.play_ball();
        engine.state.inning = 10;
        engine.state.half = Half::Bottom;
        engine.state.runs = [1, 1];
        engine.state.runs_at_half_start = [1, 1];
        force_half_end(&mut engine);
        assert!(engine.is_over());
        assert!(engine.result().unwrap().is_tie());
    }

    #[test]
    fn test_mercy_rule() {
        let mut plan = create_test_plan(6);
        plan.config.rules.mercy_rule = Some(MercyRule { run_margin: 10, after_inning: 5 });
        let mut engine = GameEngine::new(plan).unwrap();
        engine.play_ball();
        engine.state.inning = 5;
        engine.state.half = Half::Bottom;
        engine.state.runs = [11, 0];
        engine.state.runs_at_half_start = [11, 0];
        force_half_end(&mut engine);
        assert!(engine.is_over());
        assert_eq!(engine.result().unwrap().winner, Some(Side::Away));
    }

    #[test]
    fn test_half_break_until_next_pitch() {
        let mut engine = create_started_engine(6);
        force_half_end(&mut engine);
        assert_eq!(engine.state.phase, GamePhase::HalfInningBreak);
        assert_eq!(engine.state.line_score[0], vec![Some(0)]);
        engine.simulate_one_pitch();
        assert_eq!(engine.state.phase, GamePhase::InProgress);
        assert_eq!(engine.state.line_score[1].len(), 1);
    }

    fn check_invariants(seed: u64, config: EngineConfig) -> Result<(), TestCaseError> {
        let mut plan = create_test_plan(seed);
        plan.config = config;
        let mut engine = GameEngine::new(plan).unwrap();
        engine.play_ball();

        let mut halves = engine.state.half_innings_completed;
        let mut last_runs = engine.state.runs;
        let mut half_start_runs = engine.state.runs;
        let mut steps = 0;
        while !engine.is_over() && steps < 5000 {
            let (inning, half) = (engine.state.inning, engine.state.half);
            engine.simulate_one_pitch();
            steps += 1;
            let s = engine.state();
            prop_assert!(s.outs < 3);
            prop_assert!(s.runs[0] >= last_runs[0] && s.runs[1] >= last_runs[1]);
            prop_assert!(s.half_innings_completed <= halves + 1);

            if s.half_innings_completed > halves || s.over {
                let i = half.batting_side().index();
                let scored = s.runs[i] - half_start_runs[i];
                let recorded = s.line_score[i].get(inning as usize - 1).copied().flatten();
                prop_assert_eq!(recorded, Some(scored), "{}", half.tag(inning));
                half_start_runs = s.runs;
            }
            last_runs = s.runs;
            halves = s.half_innings_completed;
        }
        prop_assert!(engine.is_over());

        let s = engine.state();
        for side in Side::BOTH {
            let recorded: u32 = s.line_score[side.index()].iter().flatten().sum();
            prop_assert_eq!(recorded, s.runs[side.index()]);
        }
        prop_assert!(s.inning >= 9);
        prop_assert!(s.runs[0] != s.runs[1]);
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_full_game_invariants(seed in any::<u64>()) {
            check_invariants(seed, EngineConfig::default())?;
        }

        #[test]
        fn prop_high_offense_invariants(seed in any::<u64>()) {
            check_invariants(seed, EngineConfig::high_offense())?;
        }
    }
}
