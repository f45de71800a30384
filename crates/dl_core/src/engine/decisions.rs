//! Win / loss / save attribution, run once when the game ends.

use super::config::BullpenConfig;
use super::game_state::GameState;
use crate::models::{PitcherDecisions, PitcherRef, Side};

/// Index into `scoring_log` of the go-ahead run the winner never gave back.
fn decisive_run(state: &GameState, winner: Side) -> Option<usize> {
    let loser = winner.other();
    let mut leading_before = false;
    let mut decisive = None;

    for (i, entry) in state.scoring_log.iter().enumerate() {
        let leading_after = entry.runs_after(winner) > entry.runs_after(loser);
        if leading_after && !leading_before {
            decisive = Some(i);
        }
        leading_before = leading_after;
    }
    decisive
}

/// Attribute pitcher decisions for a finished game. Ties get no W/L/S, but
/// complete games and shutouts are still flagged.
pub fn attribute_decisions(
    state: &GameState,
    winner: Option<Side>,
    cfg: &BullpenConfig,
) -> PitcherDecisions {
    let mut decisions = PitcherDecisions::default();

    for side in Side::BOTH {
        let i = side.index();
        if let [only] = state.appearances[i].as_slice() {
            let pitcher = PitcherRef { side, index: *only };
            decisions.complete_games.push(pitcher);
            if state.pitcher_lines[i][*only].runs == 0 {
                decisions.shutouts.push(pitcher);
            }
        }
    }

    let Some(winner) = winner else {
        return decisions;
    };
    let loser = winner.other();
    let w = winner.index();

    let decisive = decisive_run(state, winner).map(|i| &state.scoring_log[i]);
    let losing = decisive.map_or(state.active_pitcher[loser.index()], |e| e.pitcher(loser));
    let mut winning = decisive.map_or(state.active_pitcher[w], |e| e.pitcher(winner));

    let starter = state.starting_pitcher[w];
    if winning == starter && state.pitcher_lines[w][starter].outs < cfg.starter_win_outs {
        if let Some(&reliever) = state.appearances[w]
            .iter()
            .find(|&&idx| idx != starter && state.pitcher_lines[w][idx].outs >= 1)
        {
            winning = reliever;
        }
    }

    decisions.winning = Some(PitcherRef { side: winner, index: winning });
    decisions.losing = Some(PitcherRef { side: loser, index: losing });

    let finisher = state.active_pitcher[w];
    let line = &state.pitcher_lines[w][finisher];
    if finisher != winning && cfg.is_save_lead(line.entry_lead()) && line.outs >= 1 {
        decisions.save = Some(PitcherRef { side: winner, index: finisher });
    }

    decisions
}
