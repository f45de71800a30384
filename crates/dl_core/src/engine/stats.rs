//! Box score assembly.

use super::decisions::attribute_decisions;
use super::game_engine::GameEngine;
use crate::models::{
    BatterBoxLine, GameResult, LineScore, PitcherBoxLine, PitcherRef, Side, TeamBox,
};

impl GameEngine {
    /// Snapshot the current state as a `GameResult`. Events are left empty;
    /// `end_game` fills them in once the final event is logged.
    pub fn build_game_result(&self) -> GameResult {
        let state = &self.state;
        let winner = match state.runs[0].cmp(&state.runs[1]) {
            std::cmp::Ordering::Greater => Some(Side::Away),
            std::cmp::Ordering::Less => Some(Side::Home),
            std::cmp::Ordering::Equal => None,
        };
        let decisions = attribute_decisions(state, winner, &self.config.bullpen);

        let team_box = |side: Side| {
            let i = side.index();
            let team = &self.teams[i];

            let batters = team
                .lineup()
                .iter()
                .enumerate()
                .map(|(slot, batter)| BatterBoxLine {
                    batter_id: batter.id,
                    name: batter.name.clone(),
                    position: batter.position,
                    slot,
                    line: state.batter_lines[i][slot].clone(),
                })
                .collect();

            let pitchers = state.appearances[i]
                .iter()
                .map(|&idx| {
                    let pitcher = &team.pitchers[idx];
                    PitcherBoxLine {
                        pitcher_id: pitcher.id,
                        name: pitcher.name.clone(),
                        staff_index: idx,
                        line: state.pitcher_lines[i][idx].clone(),
                        decision: decisions.decision_for(PitcherRef { side, index: idx }),
                    }
                })
                .collect();

            TeamBox {
                team_id: team.id,
                name: team.name.clone(),
                batters,
                pitchers,
                next_rotation_index: team.next_rotation_index(),
            }
        };

        GameResult {
            game_id: self.game_id(),
            seed: self.seed(),
            away: team_box(Side::Away),
            home: team_box(Side::Home),
            line_score: LineScore {
                innings: state.line_score.clone(),
                runs: state.runs,
                hits: state.hits,
                errors: state.errors,
            },
            winner,
            decisions,
            innings_played: state.inning,
            walk_off: state.walk_off,
            events: Vec::new(),
        }
    }
}
