//! JSON boundary: one request in, one serialized result out.

use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, GameEngine, GameOptions, GamePlan};
use crate::models::{GameResult, Team};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub away_team: Team,
    pub home_team: Team,
    /// Missing fields fall back to the classic preset.
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub result: GameResult,
}

/// Simulate a full game headlessly. Decision points use the automatic
/// manager for both sides.
pub fn simulate_game_json(request_json: &str) -> Result<String, String> {
    let request: GameRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let GameRequest { seed, away_team, home_team, config, .. } = request;

    away_team.validate().map_err(|e| format!("Away team validation failed: {}", e))?;
    home_team.validate().map_err(|e| format!("Home team validation failed: {}", e))?;

    let plan = GamePlan {
        away: away_team,
        home: home_team,
        seed,
        config: config.unwrap_or_default(),
        options: GameOptions::default(),
    };
    let mut engine = GameEngine::new(plan).map_err(|e| format!("Game setup failed: {}", e))?;
    let result = engine.run_to_completion();

    let response = GameResponse { schema_version: SCHEMA_VERSION, result };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
