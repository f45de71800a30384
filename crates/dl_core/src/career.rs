//! Archival: merge a finished game into the persistent team and player
//! records, plus the derived rate stats shown next to them.

use crate::error::{GameError, Result};
use crate::models::{
    Batter, BattingCareer, Decision, GameResult, Pitcher, PitcherRef, PitchingCareer, Side, Team,
    TeamBox,
};

/// Apply `result` to both teams. Both ids are checked before anything is
/// written, so a mismatch leaves the records untouched.
pub fn apply_game_result(away: &mut Team, home: &mut Team, result: &GameResult) -> Result<()> {
    for (team, side) in [(&*away, Side::Away), (&*home, Side::Home)] {
        let found = result.team(side).team_id;
        if team.id != found {
            return Err(GameError::ResultMismatch { expected: team.id, found });
        }
    }

    apply_side(away, Side::Away, result);
    apply_side(home, Side::Home, result);
    log::debug!("Archived game {} ({})", result.game_id, result.summary());
    Ok(())
}

fn apply_side(team: &mut Team, side: Side, result: &GameResult) {
    let own = result.line_score.runs_for(side);
    let opp = result.line_score.runs_for(side.other());

    let record = &mut team.record;
    match result.winner {
        Some(w) if w == side => record.wins += 1,
        Some(_) => record.losses += 1,
        None => record.ties += 1,
    }
    record.runs_for += own;
    record.runs_against += opp;

    let team_box: &TeamBox = result.team(side);
    for line in &team_box.batters {
        if let Some(batter) = find_batter(&mut team.batters, line.batter_id, line.slot) {
            add_batting(&mut batter.career, &line.line);
        }
    }

    for line in &team_box.pitchers {
        let Some(pitcher) = find_pitcher(&mut team.pitchers, line.pitcher_id, line.staff_index) else {
            continue;
        };
        let career = &mut pitcher.career;
        let game = &line.line;
        career.games += 1;
        if game.started {
            career.games_started += 1;
        }
        career.outs += game.outs;
        career.hits += game.hits;
        career.runs += game.runs;
        career.earned_runs += game.earned_runs;
        career.walks += game.walks;
        career.strikeouts += game.strikeouts;
        career.home_runs += game.home_runs;

        match line.decision {
            Some(Decision::Win) => career.wins += 1,
            Some(Decision::Loss) => career.losses += 1,
            Some(Decision::Save) => career.saves += 1,
            None => {}
        }
        let me = PitcherRef { side, index: line.staff_index };
        if result.decisions.complete_games.contains(&me) {
            career.complete_games += 1;
        }
        if result.decisions.shutouts.contains(&me) {
            career.shutouts += 1;
        }
    }

    team.rotation_index = team_box.next_rotation_index;
}

/// Slot first, id as the tiebreaker when the roster was reordered.
fn find_batter(batters: &mut [Batter], id: u32, slot: usize) -> Option<&mut Batter> {
    if batters.get(slot).map_or(false, |b| b.id == id) {
        return batters.get_mut(slot);
    }
    batters.iter_mut().find(|b| b.id == id)
}

fn find_pitcher(pitchers: &mut [Pitcher], id: u32, index: usize) -> Option<&mut Pitcher> {
    if pitchers.get(index).map_or(false, |p| p.id == id) {
        return pitchers.get_mut(index);
    }
    pitchers.iter_mut().find(|p| p.id == id)
}

fn add_batting(career: &mut BattingCareer, game: &crate::models::BatterGameLine) {
    career.games += 1;
    career.plate_appearances += game.plate_appearances;
    career.at_bats += game.at_bats;
    career.hits += game.hits;
    career.doubles += game.doubles;
    career.triples += game.triples;
    career.home_runs += game.home_runs;
    career.runs += game.runs;
    career.rbi += game.rbi;
    career.walks += game.walks;
    career.strikeouts += game.strikeouts;
    career.hit_by_pitch += game.hit_by_pitch;
    career.sacrifice_flies += game.sacrifice_flies;
    career.stolen_bases += game.stolen_bases;
    career.caught_stealing += game.caught_stealing;
}

// ============================================
// Rate stats
// ============================================

/// Batting average; the profile's seed average before the first at-bat.
pub fn batting_average(batter: &Batter) -> f64 {
    let c = &batter.career;
    if c.at_bats == 0 {
        batter.profile.batting_average_seed
    } else {
        c.hits as f64 / c.at_bats as f64
    }
}

pub fn on_base_percentage(c: &BattingCareer) -> f64 {
    let denom = c.at_bats + c.walks + c.hit_by_pitch + c.sacrifice_flies;
    if denom == 0 {
        return 0.0;
    }
    (c.hits + c.walks + c.hit_by_pitch) as f64 / denom as f64
}

pub fn slugging(c: &BattingCareer) -> f64 {
    if c.at_bats == 0 {
        return 0.0;
    }
    let singles = c.hits.saturating_sub(c.doubles + c.triples + c.home_runs);
    let total_bases = singles + 2 * c.doubles + 3 * c.triples + 4 * c.home_runs;
    total_bases as f64 / c.at_bats as f64
}

/// Earned runs per nine innings; the profile's seed ERA before any outs.
pub fn era(pitcher: &Pitcher) -> f64 {
    let c = &pitcher.career;
    if c.outs == 0 {
        pitcher.profile.seed_era
    } else {
        c.earned_runs as f64 * 27.0 / c.outs as f64
    }
}

/// Walks plus hits per inning.
pub fn whip(c: &PitchingCareer) -> f64 {
    if c.outs == 0 {
        return 0.0;
    }
    (c.walks + c.hits) as f64 * 3.0 / c.outs as f64
}

/// "6.2" style innings pitched.
pub fn innings_pitched(outs: u32) -> String {
    format!("{}.{}", outs / 3, outs % 3)
}

/// ".287" style rate display.
pub fn format_rate(rate: f64) -> String {
    let text = format!("{:.3}", rate);
    match text.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::*;

    #[test]
    fn test_apply_updates_records_and_careers() {
        let mut plan = create_test_plan(17);
        let result = crate::engine::GameEngine::new(plan.clone()).unwrap().run_to_completion();

        apply_game_result(&mut plan.away, &mut plan.home, &result).unwrap();
        let (away_runs, home_runs) = result.final_score();

        assert_eq!(plan.away.record.games(), 1);
        assert_eq!(plan.home.record.games(), 1);
        assert_eq!(plan.away.record.runs_for, away_runs);
        assert_eq!(plan.home.record.runs_against, away_runs);
        assert_eq!(plan.home.record.runs_for, home_runs);
        assert_eq!(plan.away.record.wins + plan.home.record.wins, 1);

        let hits: u32 = plan.away.batters.iter().map(|b| b.career.hits).sum();
        assert_eq!(hits, result.line_score.hits[0]);
        assert!(plan.away.batters.iter().all(|b| b.career.games == 1));

        let wins: u32 = plan.home.pitchers.iter().chain(&plan.away.pitchers).map(|p| p.career.wins).sum();
        let losses: u32 = plan.home.pitchers.iter().chain(&plan.away.pitchers).map(|p| p.career.losses).sum();
        assert_eq!((wins, losses), (1, 1));

        assert_eq!(plan.away.rotation_index, 1);
        assert_eq!(plan.home.pitchers[0].career.games_started, 1);
    }

    #[test]
    fn test_mismatched_team_rejected_untouched() {
        let mut plan = create_test_plan(17);
        let result = crate::engine::GameEngine::new(plan.clone()).unwrap().run_to_completion();
        let mut stranger = create_test_team(9, "Strangers");

        let err = apply_game_result(&mut plan.away, &mut stranger, &result).unwrap_err();
        assert!(matches!(err, GameError::ResultMismatch { expected: 9, found: 2 }));
        assert_eq!(plan.away.record.games(), 0);
    }

    #[test]
    fn test_rate_stats() {
        let mut batter = create_test_team(1, "Rates").batters.remove(0);
        assert_eq!(batting_average(&batter), batter.profile.batting_average_seed);

        batter.career = BattingCareer {
            at_bats: 10,
            hits: 3,
            doubles: 1,
            home_runs: 1,
            walks: 2,
            ..Default::default()
        };
        assert!((batting_average(&batter) - 0.3).abs() < 1e-12);
        assert!((on_base_percentage(&batter.career) - 5.0 / 12.0).abs() < 1e-12);
        assert!((slugging(&batter.career) - 0.7).abs() < 1e-12);
        assert_eq!(format_rate(0.3), ".300");
        assert_eq!(format_rate(1.25), "1.250");
    }

    #[test]
    fn test_era_and_whip() {
        let mut pitcher = create_test_team(1, "Rates").pitchers.remove(0);
        assert_eq!(era(&pitcher), pitcher.profile.seed_era);

        pitcher.career = PitchingCareer { outs: 27, earned_runs: 3, walks: 2, hits: 7, ..Default::default() };
        assert!((era(&pitcher) - 3.0).abs() < 1e-12);
        assert!((whip(&pitcher.career) - 1.0).abs() < 1e-12);
        assert_eq!(innings_pitched(20), "6.2");
    }
}
