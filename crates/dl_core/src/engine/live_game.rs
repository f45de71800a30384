//! Live game session: pitch-by-pitch stepping and cooperative auto-play.
//!
//! Auto-play never sleeps. `tick()` simulates one step and tells the caller
//! how long to wait before the next tick, or why the run stopped.

use std::time::Duration;

use super::bases::Bases;
use super::config::AutoPlayConfig;
use super::game_engine::{GameEngine, GamePlan};
use super::game_state::GamePhase;
use super::tactics::{DecisionPoint, ManagerOption};
use crate::error::Result;
use crate::models::{EventType, GameResult, Half, PlayEvent};

// ============================================
// StepResult: Per-pitch result for streaming
// ============================================

#[derive(Debug, Clone)]
pub enum StepResult {
    /// `play_ball` has not been called
    NotStarted,

    /// One pitch (or tactical play) resolved
    Pitch(PitchData),

    /// Waiting on `resolve_decision`
    AwaitingDecision(DecisionPoint),

    /// Game finished
    Final(Box<GameResult>),
}

/// Snapshot after a step.
#[derive(Debug, Clone)]
pub struct PitchData {
    pub inning: u32,
    pub half: Half,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub bases: Bases,
    /// (away, home)
    pub score: (u32, u32),
    /// Events logged during this step
    pub events: Vec<PlayEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    AwaitingDecision,
    Finished,
}

// ============================================
// Auto-play
// ============================================

/// How far an auto-play run goes before stopping on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPlayMode {
    SinglePitch,
    PlateAppearance,
    HalfInning,
    Inning,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    PitchThrown,
    PlateAppearanceEnded,
    HalfInningEnded,
    InningEnded,
    DecisionPending,
    GameOver,
    /// `cancel()` was called, or no run was active.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Call `tick()` again after `delay`.
    Continue { delay: Duration },
    Stopped(StopReason),
}

#[derive(Debug, Clone)]
struct AutoPlay {
    mode: AutoPlayMode,
    start_plate_appearances: u32,
    start_half_innings: u32,
    cancelled: bool,
}

/// Hold time after a step: the longest highlight among `events`, else the
/// plain pitch delay.
pub fn hold_delay(events: &[PlayEvent], cfg: &AutoPlayConfig) -> Duration {
    let ms = events
        .iter()
        .map(|e| match e.event_type {
            EventType::HomeRun => cfg.home_run_hold_ms,
            EventType::Strikeout => cfg.strikeout_hold_ms,
            EventType::DoublePlay | EventType::SacrificeFly | EventType::WalkOff => {
                cfg.big_play_hold_ms
            }
            t if t.ends_plate_appearance() => cfg.play_hold_ms,
            _ => cfg.pitch_delay_ms,
        })
        .max()
        .unwrap_or(cfg.pitch_delay_ms);
    Duration::from_millis(ms.max(cfg.pitch_delay_ms))
}

// ============================================
// LiveGameSession
// ============================================

/// Wraps `GameEngine` with step and auto-play control.
pub struct LiveGameSession {
    pub engine: GameEngine,
    auto: Option<AutoPlay>,
    /// Cursor for incremental per-step event streaming
    last_event_count: usize,
}

impl LiveGameSession {
    pub fn new(plan: GamePlan) -> Result<Self> {
        let engine = GameEngine::new(plan)?;
        Ok(Self::from_engine(engine))
    }

    pub fn from_engine(engine: GameEngine) -> Self {
        let last_event_count = engine.get_events_len();
        Self { engine, auto: None, last_event_count }
    }

    pub fn play_ball(&mut self) {
        self.engine.play_ball();
    }

    pub fn state(&self) -> SessionState {
        if self.engine.is_over() {
            SessionState::Finished
        } else if self.engine.pending_decision().is_some() {
            SessionState::AwaitingDecision
        } else if self.engine.state().phase == GamePhase::PreGame {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    /// Simulate one pitch.
    pub fn step(&mut self) -> StepResult {
        match self.state() {
            SessionState::NotStarted => return StepResult::NotStarted,
            SessionState::AwaitingDecision => return self.awaiting_or_final(),
            SessionState::Finished => return self.final_result(),
            SessionState::InProgress => {}
        }

        self.engine.simulate_one_pitch();

        match self.state() {
            SessionState::Finished => self.final_result(),
            SessionState::AwaitingDecision => self.awaiting_or_final(),
            _ => {
                let events = self.drain_events();
                let state = self.engine.state();
                StepResult::Pitch(PitchData {
                    inning: state.inning,
                    half: state.half,
                    balls: state.balls,
                    strikes: state.strikes,
                    outs: state.outs,
                    bases: state.bases,
                    score: state.score(),
                    events,
                })
            }
        }
    }

    pub fn pending_decision(&self) -> Option<&DecisionPoint> {
        self.engine.pending_decision()
    }

    pub fn resolve_decision(&mut self, choice: ManagerOption) -> Result<()> {
        self.engine.resolve_decision(choice)
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.engine.result()
    }

    /// New events since the last step.
    pub fn drain_events(&mut self) -> Vec<PlayEvent> {
        let events = self.engine.get_events_since(self.last_event_count);
        self.last_event_count = self.engine.get_events_len();
        events
    }

    fn awaiting_or_final(&mut self) -> StepResult {
        match self.engine.pending_decision() {
            Some(point) => StepResult::AwaitingDecision(point.clone()),
            None => self.final_result(),
        }
    }

    fn final_result(&mut self) -> StepResult {
        self.last_event_count = self.engine.get_events_len();
        let result = match self.engine.result() {
            Some(result) => result.clone(),
            None => self.engine.build_game_result(),
        };
        StepResult::Final(Box::new(result))
    }

    // =========================================================================
    // Auto-play
    // =========================================================================

    /// Begin an auto-play run. Replaces any run already in progress.
    pub fn start_auto(&mut self, mode: AutoPlayMode) {
        if self.state() == SessionState::NotStarted {
            self.play_ball();
        }
        let state = self.engine.state();
        self.auto = Some(AutoPlay {
            mode,
            start_plate_appearances: state.plate_appearances,
            start_half_innings: state.half_innings_completed,
            cancelled: false,
        });
        log::debug!("Auto-play started: {:?}", mode);
    }

    /// Stop at the next tick boundary.
    pub fn cancel(&mut self) {
        if let Some(auto) = self.auto.as_mut() {
            auto.cancelled = true;
        }
    }

    pub fn is_auto_running(&self) -> bool {
        self.auto.as_ref().map_or(false, |a| !a.cancelled)
    }

    /// Advance the auto-play run by one step. Any `Stopped` ends the run.
    pub fn tick(&mut self) -> Tick {
        let Some(auto) = self.auto.clone() else {
            return Tick::Stopped(StopReason::Cancelled);
        };
        if auto.cancelled {
            return self.stop(StopReason::Cancelled);
        }
        match self.state() {
            SessionState::Finished => return self.stop(StopReason::GameOver),
            SessionState::AwaitingDecision => return self.stop(StopReason::DecisionPending),
            _ => {}
        }

        let events = match self.step() {
            StepResult::Final(_) => return self.stop(StopReason::GameOver),
            StepResult::AwaitingDecision(_) => return self.stop(StopReason::DecisionPending),
            StepResult::NotStarted => return self.stop(StopReason::Cancelled),
            StepResult::Pitch(data) => data.events,
        };

        let state = self.engine.state();
        let pa_done = state.plate_appearances > auto.start_plate_appearances;
        let halves = state.half_innings_completed;
        let half_done = halves > auto.start_half_innings;
        let inning_done = half_done && halves % 2 == 0;

        let reason = match auto.mode {
            AutoPlayMode::SinglePitch => Some(StopReason::PitchThrown),
            AutoPlayMode::PlateAppearance if half_done => Some(StopReason::HalfInningEnded),
            AutoPlayMode::PlateAppearance if pa_done => Some(StopReason::PlateAppearanceEnded),
            AutoPlayMode::HalfInning if half_done => Some(StopReason::HalfInningEnded),
            AutoPlayMode::Inning if inning_done => Some(StopReason::InningEnded),
            _ => None,
        };

        match reason {
            Some(reason) => self.stop(reason),
            None => Tick::Continue { delay: hold_delay(&events, &self.engine.config().autoplay) },
        }
    }

    fn stop(&mut self, reason: StopReason) -> Tick {
        self.auto = None;
        log::debug!("Auto-play stopped: {:?}", reason);
        Tick::Stopped(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::game_engine::GameOptions;
    use crate::engine::test_fixtures::*;
    use crate::models::Side;

    const MAX_TICKS: usize = 10_000;

    fn session(seed: u64) -> LiveGameSession {
        LiveGameSession::new(create_test_plan(seed)).unwrap()
    }

    fn run_until_stopped(session: &mut LiveGameSession) -> StopReason {
        for _ in 0..MAX_TICKS {
            if let Tick::Stopped(reason) = session.tick() {
                return reason;
            }
        }
        panic!("auto-play never stopped");
    }

    #[test]
    fn test_step_before_play_ball() {
        let mut session = session(1);
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(matches!(session.step(), StepResult::NotStarted));
    }

    #[test]
    fn test_step_streams_new_events_only() {
        let mut session = session(1);
        session.play_ball();
        session.drain_events();
        let start = session.engine.get_events_len();
        let mut seen = 0;
        for _ in 0..30 {
            if let StepResult::Pitch(data) = session.step() {
                seen += data.events.len();
            }
        }
        assert_eq!(seen, session.engine.get_events_len() - start);
    }

    #[test]
    fn test_single_pitch_mode() {
        let mut session = session(4);
        session.start_auto(AutoPlayMode::SinglePitch);
        assert_eq!(session.tick(), Tick::Stopped(StopReason::PitchThrown));
        assert_eq!(session.engine.state().total_pitches, 1);
        assert!(!session.is_auto_running());
    }

    #[test]
    fn test_plate_appearance_mode_stops_at_boundary() {
        let mut session = session(4);
        session.start_auto(AutoPlayMode::PlateAppearance);
        let reason = run_until_stopped(&mut session);
        assert!(matches!(reason, StopReason::PlateAppearanceEnded | StopReason::HalfInningEnded));
        assert!(session.engine.state().plate_appearances <= 1);
        assert_eq!(session.engine.state().balls, 0);
        assert_eq!(session.engine.state().strikes, 0);
    }

    #[test]
    fn test_inning_mode_covers_both_halves() {
        let mut session = session(6);
        session.start_auto(AutoPlayMode::Inning);
        assert_eq!(run_until_stopped(&mut session), StopReason::InningEnded);
        assert_eq!(session.engine.state().half_innings_completed, 2);
        assert_eq!(session.engine.state().inning, 2);
    }

    #[test]
    fn test_game_mode_runs_to_final() {
        let mut session = session(12);
        session.start_auto(AutoPlayMode::Game);
        assert_eq!(run_until_stopped(&mut session), StopReason::GameOver);
        assert_eq!(session.state(), SessionState::Finished);
        assert!(matches!(session.step(), StepResult::Final(_)));
        assert!(session.result().is_some());
    }

    #[test]
    fn test_auto_play_halts_on_decision() {
        let mut plan = create_test_plan(6);
        plan.options = GameOptions::human(Side::Away);
        let mut session = LiveGameSession::new(plan).unwrap();
        session.start_auto(AutoPlayMode::Game);
        session.engine.state.bases = Bases::with_runners(Some(8), None, None);
        session.engine.state.decision_checked = false;

        assert_eq!(session.tick(), Tick::Stopped(StopReason::DecisionPending));
        assert_eq!(session.state(), SessionState::AwaitingDecision);
        assert!(matches!(session.step(), StepResult::AwaitingDecision(_)));

        session.resolve_decision(ManagerOption::PlayStraight).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn test_cancel_stops_at_next_tick() {
        let mut session = session(2);
        session.start_auto(AutoPlayMode::Game);
        assert!(matches!(session.tick(), Tick::Continue { .. }));
        session.cancel();
        let pitches = session.engine.state().total_pitches;
        assert_eq!(session.tick(), Tick::Stopped(StopReason::Cancelled));
        assert_eq!(session.engine.state().total_pitches, pitches);
        assert_eq!(session.tick(), Tick::Stopped(StopReason::Cancelled));
    }

    fn event(event_type: EventType) -> PlayEvent {
        PlayEvent {
            inning: 1,
            half: Half::Top,
            event_type,
            side: Side::Away,
            text: String::new(),
            score: (0, 0),
        }
    }

    #[test]
    fn test_hold_delay_uses_longest_highlight() {
        let cfg = AutoPlayConfig { pitch_delay_ms: 400, ..Default::default() };
        assert_eq!(hold_delay(&[], &cfg), Duration::from_millis(400));
        assert_eq!(hold_delay(&[event(EventType::Ball)], &cfg), Duration::from_millis(400));
        assert_eq!(hold_delay(&[event(EventType::Single)], &cfg), Duration::from_millis(1200));
        assert_eq!(
            hold_delay(&[event(EventType::Strikeout), event(EventType::HomeRun)], &cfg),
            Duration::from_millis(2600)
        );
        assert_eq!(hold_delay(&[event(EventType::HomeRun)], &AutoPlayConfig::instant()), Duration::ZERO);
    }
}
