//! Game engine: owns both rosters, the RNG and the live `GameState`.
//!
//! Pitch resolution, scoring, inning flow, bullpen and tactics are split into
//! sibling modules as further `impl GameEngine` blocks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::EngineConfig;
use super::game_state::{GamePhase, GameState};
use super::tactics::DecisionPoint;
use crate::error::{GameError, Result};
use crate::models::{Batter, EventType, GameResult, Pitcher, PlayEvent, Side, Team};

/// Which sides stop for manager decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameOptions {
    /// Indexed by `Side::index()`. Unmanaged sides use the automatic heuristic.
    #[serde(default)]
    pub human_managed: [bool; 2],
}

impl GameOptions {
    pub fn human(side: Side) -> Self {
        let mut options = Self::default();
        options.human_managed[side.index()] = true;
        options
    }
}

/// Everything needed to start a game.
#[derive(Debug, Clone)]
pub struct GamePlan {
    pub away: Team,
    pub home: Team,
    pub seed: u64,
    pub config: EngineConfig,
    pub options: GameOptions,
}

/// External collaborator hooks. Purely observational: nothing here is read
/// back by the engine.
pub trait GameObserver {
    /// Called after every notable play.
    fn on_event(&mut self, event: &PlayEvent);

    /// Called once when the game ends.
    fn persist(&mut self, _result: &GameResult) {}
}

pub struct GameEngine {
    pub(crate) rng: ChaCha8Rng,
    seed: u64,
    game_id: Uuid,
    pub(crate) teams: [Team; 2],
    pub(crate) config: EngineConfig,
    pub(crate) options: GameOptions,
    pub(crate) state: GameState,
    events: Vec<PlayEvent>,
    observer: Option<Box<dyn GameObserver>>,
    pub(crate) result: Option<GameResult>,
}

impl GameEngine {
    /// Validate the plan and build an engine in `PreGame`.
    pub fn new(plan: GamePlan) -> Result<Self> {
        let GamePlan { away, home, seed, config, options } = plan;

        if away.id == home.id {
            log::warn!("Rejected game: '{}' selected for both sides", away.name);
            return Err(GameError::SameTeam(away.name));
        }
        away.validate()?;
        home.validate()?;
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let id_bytes: [u8; 16] = rng.gen();
        let game_id = uuid::Builder::from_random_bytes(id_bytes).into_uuid();

        let state = GameState::new(&away, &home);
        log::debug!("Game {} created: {} at {} (seed {})", game_id, away.name, home.name, seed);

        Ok(Self {
            rng,
            seed,
            game_id,
            teams: [away, home],
            config,
            options,
            state,
            events: Vec::new(),
            observer: None,
            result: None,
        })
    }

    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn is_over(&self) -> bool {
        self.state.over
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn pending_decision(&self) -> Option<&DecisionPoint> {
        self.state.pending_decision.as_ref()
    }

    pub fn is_human_managed(&self, side: Side) -> bool {
        self.options.human_managed[side.index()] && !self.state.auto_managed[side.index()]
    }

    /// Batter due up for the side currently batting.
    pub fn batter_up(&self) -> &Batter {
        let side = self.state.batting_side();
        &self.teams[side.index()].batters[self.state.lineup_index[side.index()]]
    }

    pub fn pitcher_on_mound(&self, side: Side) -> &Pitcher {
        &self.teams[side.index()].pitchers[self.state.active_pitcher[side.index()]]
    }

    pub fn events(&self) -> &[PlayEvent] {
        &self.events
    }

    pub fn get_events_len(&self) -> usize {
        self.events.len()
    }

    /// Events appended after `cursor` (for incremental streaming).
    pub fn get_events_since(&self, cursor: usize) -> Vec<PlayEvent> {
        self.events.get(cursor..).map(|s| s.to_vec()).unwrap_or_default()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Send out both starters and open the top of the 1st. No-op unless the
    /// game is in `PreGame`.
    pub fn play_ball(&mut self) {
        if self.state.phase != GamePhase::PreGame {
            return;
        }

        for side in Side::BOTH {
            let i = side.index();
            let starter = self.teams[i].starting_pitcher_index();
            self.state.active_pitcher[i] = starter;
            self.state.starting_pitcher[i] = starter;
            self.state.appearances[i].push(starter);
            let line = &mut self.state.pitcher_lines[i][starter];
            line.appeared = true;
            line.started = true;
        }

        let text = format!(
            "{} at {}. {} vs {}. Play ball!",
            self.teams[0].name,
            self.teams[1].name,
            self.pitcher_on_mound(Side::Away).name,
            self.pitcher_on_mound(Side::Home).name,
        );
        self.emit(EventType::GameStart, Side::Home, text);
        log::info!("Game {} started: {} at {}", self.game_id, self.teams[0].name, self.teams[1].name);

        self.begin_half_inning();
    }

    /// Simulate until the game ends, resolving any decision point with the
    /// automatic heuristic. Stops at the configured pitch safety cap.
    #[tracing::instrument(skip(self), fields(game_id = %self.game_id, seed = self.seed))]
    pub fn run_to_completion(&mut self) -> GameResult {
        if self.state.phase == GamePhase::PreGame {
            self.play_ball();
        }

        let cap = self.config.rules.pitch_safety_cap;
        let mut steps = 0u32;
        while !self.state.over {
            if let Some(point) = self.state.pending_decision.clone() {
                let choice = self.auto_choice(&point);
                if let Err(e) = self.resolve_decision(choice) {
                    log::warn!("Auto decision failed ({}); playing it straight", e);
                    self.state.pending_decision = None;
                }
                continue;
            }
            if steps >= cap {
                log::warn!("Game {} hit the pitch safety cap ({}); ending early", self.game_id, cap);
                self.end_game();
                break;
            }
            self.simulate_one_pitch();
            steps += 1;
        }

        match &self.result {
            Some(result) => result.clone(),
            None => self.build_game_result(),
        }
    }

    // =========================================================================
    // Event log
    // =========================================================================

    pub(crate) fn emit(&mut self, event_type: EventType, side: Side, text: impl Into<String>) {
        let event = PlayEvent {
            inning: self.state.inning,
            half: self.state.half,
            event_type,
            side,
            text: text.into(),
            score: self.state.score(),
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
        self.events.push(event);
    }

    pub(crate) fn notify_persist(&mut self) {
        if let (Some(observer), Some(result)) = (self.observer.as_mut(), self.result.as_ref()) {
            observer.persist(result);
        }
    }

    /// Uniform draw in [0, 1).
    #[inline]
    pub(crate) fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    pub(crate) fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.rng.gen_range(0..options.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_same_team_rejected() {
        let mut plan = create_test_plan(1);
        plan.home = plan.away.clone();
        assert!(matches!(GameEngine::new(plan), Err(GameError::SameTeam(_))));
    }

    #[test]
    fn test_short_lineup_rejected_before_start() {
        let mut plan = create_test_plan(1);
        plan.home.batters.truncate(8);
        let err = GameEngine::new(plan).err().unwrap();
        assert!(err.is_roster_error());
    }

    #[test]
    fn test_bad_config_rejected() {
        let mut plan = create_test_plan(1);
        plan.config.pitch.foul_rate = 1.5;
        assert!(matches!(GameEngine::new(plan), Err(GameError::Config(_))));
    }

    #[test]
    fn test_play_ball_sets_starters() {
        let mut plan = create_test_plan(3);
        plan.home.rotation_index = 2;
        let mut engine = GameEngine::new(plan).unwrap();
        assert_eq!(engine.state().phase, GamePhase::PreGame);

        engine.play_ball();
        assert_eq!(engine.state().phase, GamePhase::InProgress);
        assert_eq!(engine.state().active_pitcher, [0, 2]);
        assert!(engine.state().pitcher_lines[1][2].started);
        assert_eq!(engine.events()[0].event_type, EventType::GameStart);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = create_test_engine(42).run_to_completion();
        let b = create_test_engine(42).run_to_completion();
        assert_eq!(a, b);

        let c = create_test_engine(43).run_to_completion();
        assert_ne!(a.game_id, c.game_id);
    }

    #[test]
    fn test_pitch_before_play_ball_is_noop() {
        let mut engine = create_test_engine(5);
        let before = engine.state().clone();
        engine.simulate_one_pitch();
        assert_eq!(engine.state(), &before);
        assert!(engine.events().is_empty());
    }

    struct Recorder {
        events: Rc<RefCell<usize>>,
        persisted: Rc<RefCell<usize>>,
    }

    impl GameObserver for Recorder {
        fn on_event(&mut self, _event: &PlayEvent) {
            *self.events.borrow_mut() += 1;
        }

        fn persist(&mut self, _result: &GameResult) {
            *self.persisted.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_observer_sees_every_event_and_one_persist() {
        let events = Rc::new(RefCell::new(0));
        let persisted = Rc::new(RefCell::new(0));
        let mut engine = create_test_engine(11).with_observer(Box::new(Recorder {
            events: Rc::clone(&events),
            persisted: Rc::clone(&persisted),
        }));
        engine.run_to_completion();
        assert_eq!(*events.borrow(), engine.events().len());
        assert_eq!(*persisted.borrow(), 1);
    }

    #[test]
    fn test_events_since_cursor() {
        let mut engine = create_started_engine(9);
        let cursor = engine.get_events_len();
        for _ in 0..20 {
            engine.simulate_one_pitch();
        }
        let fresh = engine.get_events_since(cursor);
        assert_eq!(fresh.len(), engine.get_events_len() - cursor);
        assert!(engine.get_events_since(10_000).is_empty());
    }
}
