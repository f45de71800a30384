use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::PlayEvent;
use super::game_line::{BatterGameLine, PitcherGameLine};
use super::player::Position;
use super::side::Side;

/// A pitcher identified by team and staff index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PitcherRef {
    pub side: Side,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "S")]
    Save,
}

/// Win / loss / save attribution plus complete-game flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PitcherDecisions {
    pub winning: Option<PitcherRef>,
    pub losing: Option<PitcherRef>,
    pub save: Option<PitcherRef>,
    pub complete_games: Vec<PitcherRef>,
    pub shutouts: Vec<PitcherRef>,
}

impl PitcherDecisions {
    pub fn decision_for(&self, pitcher: PitcherRef) -> Option<Decision> {
        if self.winning == Some(pitcher) {
            Some(Decision::Win)
        } else if self.losing == Some(pitcher) {
            Some(Decision::Loss)
        } else if self.save == Some(pitcher) {
            Some(Decision::Save)
        } else {
            None
        }
    }
}

/// Runs by inning plus R/H/E, indexed by `Side::index()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LineScore {
    /// `None` for a half that was never played (home half of a game decided
    /// after the top of the last inning).
    pub innings: [Vec<Option<u32>>; 2],
    pub runs: [u32; 2],
    pub hits: [u32; 2],
    pub errors: [u32; 2],
}

impl LineScore {
    pub fn runs_for(&self, side: Side) -> u32 {
        self.runs[side.index()]
    }

    /// Two-row text scoreboard.
    pub fn render(&self, names: [&str; 2]) -> String {
        let innings = self.innings[0].len().max(self.innings[1].len()).max(9);
        let mut out = String::new();

        out.push_str(&format!("{:<14}", ""));
        for i in 1..=innings {
            out.push_str(&format!("{:>3}", i));
        }
        out.push_str("    R  H  E\n");

        for side in Side::BOTH {
            let idx = side.index();
            let name: String = names[idx].chars().take(13).collect();
            out.push_str(&format!("{:<14}", name));
            for i in 0..innings {
                match self.innings[idx].get(i).copied().flatten() {
                    Some(runs) => out.push_str(&format!("{:>3}", runs)),
                    None if i < self.innings[idx].len() => out.push_str("  x"),
                    None => out.push_str("  -"),
                }
            }
            out.push_str(&format!(
                "  {:>3}{:>3}{:>3}\n",
                self.runs[idx], self.hits[idx], self.errors[idx]
            ));
        }
        out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatterBoxLine {
    pub batter_id: u32,
    pub name: String,
    pub position: Position,
    /// Index into the team's `batters`.
    pub slot: usize,
    pub line: BatterGameLine,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitcherBoxLine {
    pub pitcher_id: u32,
    pub name: String,
    /// Index into the team's `pitchers`.
    pub staff_index: usize,
    pub line: PitcherGameLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamBox {
    pub team_id: u32,
    pub name: String,
    pub batters: Vec<BatterBoxLine>,
    /// Pitchers who appeared, in order of appearance.
    pub pitchers: Vec<PitcherBoxLine>,
    pub next_rotation_index: usize,
}

/// Everything a finished game hands to external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub game_id: Uuid,
    pub seed: u64,
    pub away: TeamBox,
    pub home: TeamBox,
    pub line_score: LineScore,
    /// `None` for a tie (only possible with an innings cap).
    pub winner: Option<Side>,
    pub decisions: PitcherDecisions,
    pub innings_played: u32,
    pub walk_off: bool,
    pub events: Vec<PlayEvent>,
}

impl GameResult {
    pub fn team(&self, side: Side) -> &TeamBox {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }

    /// (away runs, home runs)
    pub fn final_score(&self) -> (u32, u32) {
        (self.line_score.runs[0], self.line_score.runs[1])
    }

    pub fn loser(&self) -> Option<Side> {
        self.winner.map(Side::other)
    }

    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    pub fn pitcher_name(&self, pitcher: PitcherRef) -> Option<&str> {
        self.team(pitcher.side)
            .pitchers
            .iter()
            .find(|p| p.staff_index == pitcher.index)
            .map(|p| p.name.as_str())
    }

    /// "Eagles 5, Gulls 3" style summary.
    pub fn summary(&self) -> String {
        let (away, home) = self.final_score();
        match self.winner {
            Some(Side::Away) => format!("{} {}, {} {}", self.away.name, away, self.home.name, home),
            Some(Side::Home) => format!("{} {}, {} {}", self.home.name, home, self.away.name, away),
            None => format!("{} {}, {} {} (tie)", self.away.name, away, self.home.name, home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_lookup() {
        let win = PitcherRef { side: Side::Home, index: 4 };
        let loss = PitcherRef { side: Side::Away, index: 0 };
        let decisions =
            PitcherDecisions { winning: Some(win), losing: Some(loss), ..Default::default() };
        assert_eq!(decisions.decision_for(win), Some(Decision::Win));
        assert_eq!(decisions.decision_for(loss), Some(Decision::Loss));
        assert_eq!(decisions.decision_for(PitcherRef { side: Side::Home, index: 6 }), None);
    }

    #[test]
    fn test_line_score_render_marks_unplayed_half() {
        let mut innings_home: Vec<Option<u32>> = vec![Some(0); 8];
        innings_home.push(None);
        let line = LineScore {
            innings: [vec![Some(0); 9], innings_home],
            runs: [0, 2],
            hits: [3, 6],
            errors: [1, 0],
        };
        let text = line.render(["Away Club", "Home Club"]);
        let home_row = text.lines().nth(2).unwrap();
        assert!(home_row.starts_with("Home Club"));
        assert!(home_row.contains("  x"));
        assert!(home_row.trim_end().ends_with("2  6  0"));
    }
}
