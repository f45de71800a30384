//! Full-game simulation benchmarks for dl_core.
//!
//! Run with: `cargo bench -p dl_core`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dl_core::calibration::run_batch;
use dl_core::roster::generate_team;
use dl_core::{EngineConfig, GameEngine, GameOptions, GamePlan, Team};

fn teams() -> (Team, Team) {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    (generate_team(1, "Riverton Eagles", &mut rng), generate_team(2, "Harbor City Gulls", &mut rng))
}

pub fn full_game_benchmark(c: &mut Criterion) {
    let (away, home) = teams();
    let mut seed = 0u64;

    c.bench_function("full_game", |b| {
        b.iter(|| {
            seed += 1;
            let plan = GamePlan {
                away: away.clone(),
                home: home.clone(),
                seed,
                config: EngineConfig::default(),
                options: GameOptions::default(),
            };
            let mut engine = match GameEngine::new(plan) {
                Ok(engine) => engine,
                Err(e) => panic!("generated rosters must be valid: {}", e),
            };
            black_box(engine.run_to_completion())
        })
    });
}

pub fn batch_benchmark(c: &mut Criterion) {
    let (away, home) = teams();
    let seeds: Vec<u64> = (0..100).collect();

    c.bench_function("batch_100_games", |b| {
        b.iter(|| black_box(run_batch(&away, &home, &seeds, &EngineConfig::default())))
    });
}

criterion_group!(benches, full_game_benchmark, batch_benchmark);
criterion_main!(benches);
