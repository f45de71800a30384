//! Parallel batch simulation.

use rayon::prelude::*;

use super::anchor_table::OutcomeRates;
use super::stat_snapshot::GameStatSnapshot;
use crate::engine::{EngineConfig, GameEngine, GameOptions, GamePlan};
use crate::error::Result;
use crate::models::Team;

/// Aggregate over a batch of games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub games: u32,
    pub totals: GameStatSnapshot,
    pub extra_inning_games: u32,
    pub walk_offs: u32,
    pub ties: u32,
}

impl BatchReport {
    pub fn rates(&self) -> OutcomeRates {
        let t = &self.totals;
        let pa = t.plate_appearances.max(1) as f64;
        OutcomeRates {
            strikeout: t.strikeouts as f64 / pa,
            ground_out: t.ground_outs as f64 / pa,
            fly_out: t.fly_outs as f64 / pa,
            line_out: t.line_outs as f64 / pa,
            walk: t.walks as f64 / pa,
            hit_by_pitch: t.hit_by_pitch as f64 / pa,
            single: t.singles as f64 / pa,
            double: t.doubles as f64 / pa,
            triple: t.triples as f64 / pa,
            home_run: t.home_runs as f64 / pa,
        }
    }

    pub fn runs_per_game(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.totals.runs as f64 / self.games as f64
    }

    pub fn extra_inning_share(&self) -> f64 {
        self.share(self.extra_inning_games)
    }

    pub fn walk_off_share(&self) -> f64 {
        self.share(self.walk_offs)
    }

    fn share(&self, count: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }

    fn add(&mut self, snap: &GameStatSnapshot, regulation: u32) {
        self.games += 1;
        self.totals.accumulate(snap);
        if snap.innings > regulation {
            self.extra_inning_games += 1;
        }
        if snap.walk_off {
            self.walk_offs += 1;
        }
        if snap.tie {
            self.ties += 1;
        }
    }
}

/// Simulate one game per seed in parallel. Results are folded in seed order,
/// so the report is independent of thread scheduling.
#[tracing::instrument(skip(away, home, seeds, config), fields(games = seeds.len()))]
pub fn run_batch(away: &Team, home: &Team, seeds: &[u64], config: &EngineConfig) -> Result<BatchReport> {
    let snapshots = seeds
        .par_iter()
        .map(|&seed| -> Result<GameStatSnapshot> {
            let plan = GamePlan {
                away: away.clone(),
                home: home.clone(),
                seed,
                config: config.clone(),
                options: GameOptions::default(),
            };
            let result = GameEngine::new(plan)?.run_to_completion();
            Ok(GameStatSnapshot::from_result(&result))
        })
        .collect::<Result<Vec<_>>>()?;

    let regulation = config.rules.regulation_innings;
    let mut report = BatchReport::default();
    for snap in &snapshots {
        report.add(snap, regulation);
    }

    log::info!(
        "Batch of {} games: {:.2} runs/game, {:.1}% extras, {:.1}% walk-offs",
        report.games,
        report.runs_per_game(),
        report.extra_inning_share() * 100.0,
        report.walk_off_share() * 100.0
    );
    Ok(report)
}
