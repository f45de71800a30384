//! `dl`: roster import, league generation and one-game simulation.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "dl")]
#[command(about = "Turn-by-turn baseball simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a league file from a CSV/TSV roster sheet
    Import {
        /// Roster file (one row per player)
        #[arg(long)]
        csv: PathBuf,

        /// Output league JSON
        #[arg(long)]
        out: PathBuf,
    },

    /// Generate a league of random teams
    Generate {
        #[arg(long, default_value = "8")]
        teams: usize,

        #[arg(long, default_value = "1")]
        seed: u64,

        /// Output league JSON
        #[arg(long)]
        out: PathBuf,
    },

    /// Simulate one game between two league teams
    Simulate {
        /// League JSON file
        #[arg(long)]
        league: PathBuf,

        /// Away team (full name or nickname)
        #[arg(long)]
        away: String,

        /// Home team (full name or nickname)
        #[arg(long)]
        home: String,

        #[arg(long, default_value = "1")]
        seed: u64,

        /// Engine config (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the full game result as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Skip the play-by-play
        #[arg(long, default_value = "false")]
        quiet: bool,

        /// Do not write records and careers back to the league file
        #[arg(long, default_value = "false")]
        no_save: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import { csv, out } => {
            println!("📋 Importing roster...");
            println!("   Input:  {}", csv.display());
            println!("   Output: {}", out.display());

            let (league, stats) = dl_cli::import_league(&csv, &out)?;

            println!("\n✅ League written");
            println!("   Rows:     {} ({} parsed, {} skipped)", stats.total_rows, stats.parsed, stats.skipped);
            println!("   Teams:    {}", league.teams.len());
            for (team, reason) in &stats.rejected_teams {
                println!("   ⚠️  Rejected {}: {}", team, reason);
            }
        }

        Commands::Generate { teams, seed, out } => {
            println!("🎲 Generating {} teams (seed {})...", teams, seed);

            let league = dl_cli::generate_league_file(teams, seed)?;
            dl_cli::save_league(&out, &league)?;

            for team in &league.teams {
                println!("   {:>3}  {}", team.id, team.name);
            }
            println!("\n✅ League written to {}", out.display());
        }

        Commands::Simulate { league: league_path, away, home, seed, config, json, quiet, no_save } => {
            let mut league = dl_cli::load_league(&league_path)?;
            let config = match config {
                Some(path) => dl_cli::load_config(&path)?,
                None => dl_core::engine::EngineConfig::default(),
            };

            let result = dl_cli::simulate_matchup(&league, &away, &home, seed, config)?;

            if !quiet {
                println!("{}\n", dl_cli::render_play_log(&result));
            }
            println!("{}", dl_cli::render_box_score(&result));
            println!("Final: {}", result.summary());

            if let Some(path) = json {
                let text = serde_json::to_string_pretty(&result)?;
                std::fs::write(&path, text)?;
                println!("\n📄 Result saved to: {}", path.display());
            }

            if !no_save {
                league.archive_result(&result)?;
                dl_cli::save_league(&league_path, &league)?;
                println!("\n💾 Records and careers saved to: {}", league_path.display());
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("dl CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
