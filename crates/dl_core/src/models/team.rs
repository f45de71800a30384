use super::player::{Batter, Pitcher, PitcherRole};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Batting order length. Batters past this index sit on the bench.
pub const LINEUP_SIZE: usize = 9;

/// Season record. Updated only by `career::apply_game_result`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub runs_for: u32,
    pub runs_against: u32,
}

impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn run_differential(&self) -> i64 {
        self.runs_for as i64 - self.runs_against as i64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Batting order; the first nine bat.
    pub batters: Vec<Batter>,
    /// Pitching staff, role-tagged.
    pub pitchers: Vec<Pitcher>,
    /// Index into the starters (in staff order) for the next game.
    #[serde(default)]
    pub rotation_index: usize,
    #[serde(default)]
    pub record: TeamRecord,
}

impl Team {
    pub fn validate(&self) -> Result<()> {
        if self.batters.len() < LINEUP_SIZE {
            return Err(GameError::TooFewBatters {
                team: self.name.clone(),
                found: self.batters.len(),
            });
        }
        if self.pitchers.is_empty() {
            return Err(GameError::NoPitchers { team: self.name.clone() });
        }

        let starters = self.rotation_len();
        if self.rotation_index >= starters {
            return Err(GameError::InvalidRotation {
                team: self.name.clone(),
                index: self.rotation_index,
                starters,
            });
        }

        for batter in &self.batters {
            batter.profile.validate(&batter.name)?;
        }
        for pitcher in &self.pitchers {
            pitcher.profile.validate(&pitcher.name)?;
        }

        Ok(())
    }

    /// Staff indices of pitchers tagged as starters, in staff order.
    pub fn starter_indices(&self) -> Vec<usize> {
        self.pitchers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role == PitcherRole::Starter)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of rotation slots. A staff without tagged starters rotates
    /// through every pitcher.
    pub fn rotation_len(&self) -> usize {
        let starters = self.starter_indices().len();
        if starters == 0 {
            self.pitchers.len()
        } else {
            starters
        }
    }

    /// Staff index of today's starting pitcher.
    pub fn starting_pitcher_index(&self) -> usize {
        let starters = self.starter_indices();
        if starters.is_empty() {
            self.rotation_index % self.pitchers.len().max(1)
        } else {
            starters[self.rotation_index % starters.len()]
        }
    }

    /// Rotation index after today's starter has pitched.
    pub fn next_rotation_index(&self) -> usize {
        (self.rotation_index + 1) % self.rotation_len().max(1)
    }

    pub fn lineup(&self) -> &[Batter] {
        &self.batters[..LINEUP_SIZE.min(self.batters.len())]
    }

    /// Final word of the team name ("Harbor City Gulls" -> "Gulls").
    pub fn nickname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}
