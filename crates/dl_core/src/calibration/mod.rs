//! Statistical Anchor Calibration
//!
//! Runs batches of seeded games and compares per-PA outcome rates against a
//! league anchor table.
//!
//! - Anchor tables (target rates from a real season)
//! - Per-game stat snapshots built from `GameResult`
//! - Parallel batch runner

pub mod anchor_table;
pub mod batch_runner;
pub mod stat_snapshot;

pub use anchor_table::{AnchorTable, OutcomeRates, RateDeviation};
pub use batch_runner::{run_batch, BatchReport};
pub use stat_snapshot::GameStatSnapshot;
