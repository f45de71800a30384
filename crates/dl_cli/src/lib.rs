//! League files and headless game runs for the `dl` command.
//!
//! CSV roster -> league JSON, random league generation, and a one-game
//! simulation with a printable box score.

pub mod roster_import;

use anyhow::{bail, Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use dl_core::engine::{EngineConfig, GameEngine, GameOptions, GamePlan};
use dl_core::models::{Decision, EventType, GameResult, PitcherRef, Side, TeamBox};
use dl_core::Team;

pub use roster_import::{import_roster_csv, import_roster_str, ImportStats};

/// League file schema tag.
pub const LEAGUE_SCHEMA: &str = "v1";

/// A set of teams saved to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueFile {
    pub schema_version: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Where the teams came from ("csv:roster.csv", "generated").
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub teams: Vec<Team>,
}

impl LeagueFile {
    pub fn new(teams: Vec<Team>, source: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            schema_version: LEAGUE_SCHEMA.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            source: source.into(),
            seed,
            teams,
        }
    }

    /// Case-insensitive lookup by full name, then by nickname.
    pub fn find_team(&self, name: &str) -> Result<&Team> {
        let wanted = name.trim().to_lowercase();
        self.teams
            .iter()
            .find(|t| t.name.to_lowercase() == wanted)
            .or_else(|| self.teams.iter().find(|t| t.nickname().to_lowercase() == wanted))
            .with_context(|| {
                let names: Vec<&str> = self.teams.iter().map(|t| t.name.as_str()).collect();
                format!("No team named '{}' (teams: {})", name, names.join(", "))
            })
    }
}

impl LeagueFile {
    fn team_index(&self, id: u32) -> Result<usize> {
        self.teams
            .iter()
            .position(|t| t.id == id)
            .with_context(|| format!("Team id {} is not in this league", id))
    }

    /// Merge a finished game into both teams: W/L record, player careers and
    /// the starting rotation.
    pub fn archive_result(&mut self, result: &GameResult) -> Result<()> {
        let away = self.team_index(result.away.team_id)?;
        let home = self.team_index(result.home.team_id)?;
        if away == home {
            bail!("Game result lists {} on both sides", result.away.name);
        }

        let (away_team, home_team) = if away < home {
            let (lo, hi) = self.teams.split_at_mut(home);
            (&mut lo[away], &mut hi[0])
        } else {
            let (lo, hi) = self.teams.split_at_mut(away);
            (&mut hi[0], &mut lo[home])
        };
        dl_core::apply_game_result(away_team, home_team, result)
            .with_context(|| format!("Failed to archive game {}", result.game_id))
    }
}

pub fn save_league(path: &Path, league: &LeagueFile) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(league).context("Failed to serialize league")?;
    fs::write(path, json).with_context(|| format!("Failed to write league file: {}", path.display()))?;
    Ok(())
}

pub fn load_league(path: &Path) -> Result<LeagueFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read league file: {}", path.display()))?;
    let league: LeagueFile =
        serde_json::from_str(&json).with_context(|| format!("Invalid league file: {}", path.display()))?;
    if league.schema_version != LEAGUE_SCHEMA {
        bail!(
            "League schema mismatch: expected {}, found {}",
            LEAGUE_SCHEMA,
            league.schema_version
        );
    }
    for team in &league.teams {
        team.validate().with_context(|| format!("Invalid team in league: {}", team.name))?;
    }
    Ok(league)
}

/// Import a roster sheet and write it as a league file.
pub fn import_league(csv_path: &Path, out: &Path) -> Result<(LeagueFile, ImportStats)> {
    let (teams, stats) = import_roster_csv(csv_path)?;
    let league = LeagueFile::new(teams, format!("csv:{}", csv_path.display()), None);
    save_league(out, &league)?;
    Ok((league, stats))
}

/// `count` random teams from a seeded generator.
pub fn generate_league_file(count: usize, seed: u64) -> Result<LeagueFile> {
    if count < 2 {
        bail!("A league needs at least 2 teams (got {})", count);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let teams = dl_core::roster::generate_league(count, &mut rng);
    Ok(LeagueFile::new(teams, "generated", Some(seed)))
}

/// Engine config from YAML (`.yaml` / `.yml`) or JSON.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if is_yaml {
        EngineConfig::from_yaml_str(&text)
    } else {
        EngineConfig::from_json_str(&text)
    };
    config.with_context(|| format!("Invalid engine config: {}", path.display()))
}

/// Play one fully automatic game between two league teams.
pub fn simulate_matchup(
    league: &LeagueFile,
    away: &str,
    home: &str,
    seed: u64,
    config: EngineConfig,
) -> Result<GameResult> {
    let away = league.find_team(away)?;
    let home = league.find_team(home)?;
    if away.id == home.id {
        bail!("A team cannot play itself: {}", away.name);
    }

    let plan = GamePlan {
        away: away.clone(),
        home: home.clone(),
        seed,
        config,
        options: GameOptions::default(),
    };
    let mut engine = GameEngine::new(plan).context("Failed to set up game")?;
    Ok(engine.run_to_completion())
}

// ============================================================================
// Text rendering
// ============================================================================

fn render_team_box(team: &TeamBox, result: &GameResult, side: Side, out: &mut String) {
    out.push_str(&format!("\n{:<22} AB  R  H RBI BB  K\n", team.name));
    for b in &team.batters {
        let l = &b.line;
        out.push_str(&format!(
            "{:<18} {:>2} {:>3}{:>3}{:>3}{:>4}{:>3}{:>3}\n",
            b.name.chars().take(18).collect::<String>(),
            b.position.code(),
            l.at_bats,
            l.runs,
            l.hits,
            l.rbi,
            l.walks,
            l.strikeouts
        ));
    }

    out.push_str(&format!("{:<22}  IP  H  R ER BB  K  NP\n", ""));
    for p in &team.pitchers {
        let l = &p.line;
        let decision = result
            .decisions
            .decision_for(PitcherRef { side, index: p.staff_index })
            .map(|d| match d {
                Decision::Win => " (W)",
                Decision::Loss => " (L)",
                Decision::Save => " (S)",
            })
            .unwrap_or("");
        let name = format!("{}{}", p.name, decision);
        out.push_str(&format!(
            "{:<22}{:>4}{:>3}{:>3}{:>3}{:>3}{:>3}{:>4}\n",
            name.chars().take(22).collect::<String>(),
            l.innings_display(),
            l.hits,
            l.runs,
            l.earned_runs,
            l.walks,
            l.strikeouts,
            l.pitches
        ));
    }
}

/// Line score, W/L/S line and both teams' box lines.
pub fn render_box_score(result: &GameResult) -> String {
    let mut out = result.line_score.render([&result.away.name, &result.home.name]);

    let mut credits = Vec::new();
    for (tag, pitcher) in [
        ("W", result.decisions.winning),
        ("L", result.decisions.losing),
        ("S", result.decisions.save),
    ] {
        if let Some(name) = pitcher.and_then(|p| result.pitcher_name(p)) {
            credits.push(format!("{}: {}", tag, name));
        }
    }
    if !credits.is_empty() {
        out.push_str(&format!("\n{}\n", credits.join("  ")));
    }
    if result.walk_off {
        out.push_str("Walk-off win.\n");
    }

    render_team_box(&result.away, result, Side::Away, &mut out);
    render_team_box(&result.home, result, Side::Home, &mut out);
    out
}

/// Play-by-play without individual balls and strikes.
pub fn render_play_log(result: &GameResult) -> String {
    result
        .events
        .iter()
        .filter(|e| {
            !matches!(
                e.event_type,
                EventType::Ball | EventType::CalledStrike | EventType::SwingingStrike | EventType::Foul
            )
        })
        .map(|e| e.display_line())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("league.json");

        let league = generate_league_file(4, 11).unwrap();
        save_league(&path, &league).unwrap();
        let loaded = load_league(&path).unwrap();

        assert_eq!(loaded.teams.len(), 4);
        assert_eq!(loaded.seed, Some(11));
        assert_eq!(loaded.teams[2], league.teams[2]);
    }

    #[test]
    fn test_generation_is_seeded() {
        let a = generate_league_file(3, 5).unwrap();
        let b = generate_league_file(3, 5).unwrap();
        assert_eq!(a.teams, b.teams);
        assert!(generate_league_file(1, 5).is_err());
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("league.json");
        let mut league = generate_league_file(2, 1).unwrap();
        league.schema_version = "v0".to_string();
        save_league(&path, &league).unwrap();
        let err = load_league(&path).unwrap_err();
        assert!(err.to_string().contains("schema mismatch"));
    }

    #[test]
    fn test_find_team_by_nickname() {
        let league = generate_league_file(2, 3).unwrap();
        let full = league.teams[1].name.clone();
        let nick = league.teams[1].nickname().to_uppercase();
        assert_eq!(league.find_team(&full).unwrap().id, league.teams[1].id);
        assert_eq!(league.find_team(&nick).unwrap().id, league.teams[1].id);
        assert!(league.find_team("Nobody Special").is_err());
    }

    #[test]
    fn test_simulate_and_render() {
        let league = generate_league_file(2, 9).unwrap();
        let away = league.teams[0].name.clone();
        let home = league.teams[1].name.clone();

        let result = simulate_matchup(&league, &away, &home, 77, EngineConfig::default()).unwrap();
        let again = simulate_matchup(&league, &away, &home, 77, EngineConfig::default()).unwrap();
        assert_eq!(result.line_score, again.line_score);

        let text = render_box_score(&result);
        assert!(text.contains("R  H  E"));
        assert!(text.contains("W: "));

        let log = render_play_log(&result);
        assert!(log.contains("Final"));
        assert!(!result.events.is_empty());

        assert!(simulate_matchup(&league, &away, &away, 1, EngineConfig::default()).is_err());
    }

    #[test]
    fn test_simulate_archive_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("league.json");
        save_league(&path, &generate_league_file(3, 21).unwrap()).unwrap();

        let mut league = load_league(&path).unwrap();
        let away = league.teams[0].name.clone();
        let home = league.teams[2].name.clone();
        let result = simulate_matchup(&league, &away, &home, 5, EngineConfig::default()).unwrap();
        league.archive_result(&result).unwrap();
        save_league(&path, &league).unwrap();

        let saved = load_league(&path).unwrap();
        let (a, h) = (&saved.teams[0], &saved.teams[2]);
        assert_eq!(a.record.games(), 1);
        assert_eq!(h.record.games(), 1);
        assert_eq!(a.record.wins + h.record.wins, 1);
        assert_eq!(a.record.runs_for, result.final_score().0);
        assert_eq!(h.record.runs_against, result.final_score().0);
        assert_eq!(a.rotation_index, 1);
        assert_eq!(h.rotation_index, 1);

        let plate_appearances: u32 = a.batters.iter().map(|b| b.career.plate_appearances).sum();
        let boxed: u32 = result.away.batters.iter().map(|b| b.line.plate_appearances).sum();
        assert!(plate_appearances > 0);
        assert_eq!(plate_appearances, boxed);
        assert_eq!(a.pitchers[0].career.games_started, 1);
        let decisions: u32 = saved
            .teams
            .iter()
            .flat_map(|t| t.pitchers.iter())
            .map(|p| p.career.wins + p.career.losses)
            .sum();
        assert_eq!(decisions, 2);
        assert_eq!(saved.teams[1].record.games(), 0);
    }

    #[test]
    fn test_archive_rejects_unknown_team() {
        let league = generate_league_file(3, 4).unwrap();
        let result = simulate_matchup(
            &league,
            &league.teams[0].name,
            &league.teams[1].name,
            2,
            EngineConfig::default(),
        )
        .unwrap();

        let mut other = generate_league_file(2, 4).unwrap();
        other.teams.remove(1);
        assert!(other.archive_result(&result).is_err());
        assert_eq!(other.teams[0].record.games(), 0);
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.yaml");
        fs::write(&path, "rules:\n  regulation_innings: 7\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.rules.regulation_innings, 7);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert!(load_config(&bad).is_err());
    }

    #[test]
    fn test_import_league_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("roster.csv");
        let out = dir.path().join("league.json");

        let mut csv = String::from("Team,First Name,Last Name,Position,Contact,Power\n");
        for i in 0..9 {
            csv.push_str(&format!("Millbrook Owls,Hitter,No{},LF,60,40\n", i));
        }
        csv.push_str("Millbrook Owls,Ace,Arm,SP,,\n");
        fs::write(&csv_path, csv).unwrap();

        let (league, stats) = import_league(&csv_path, &out).unwrap();
        assert_eq!(stats.parsed, 10);
        assert_eq!(league.teams[0].pitchers.len(), 1);
        assert!(load_league(&out).unwrap().source.starts_with("csv:"));
    }
}
