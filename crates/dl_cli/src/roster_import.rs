//! CSV / TSV roster import.
//!
//! One row per player. Column names are matched case-insensitively with
//! spaces, underscores, dashes, dots and `#` ignored; ratings are 0-100
//! scouting grades converted through `dl_core::roster::grades`.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;

use dl_core::models::{Batter, Pitcher, PitcherRole, Position, Team};
use dl_core::roster::{
    batter_archetype_label, batter_profile_from_grades, pitcher_archetype_label,
    pitcher_profile_from_grades, BattingGrades, PitchingGrades,
};

/// CSV parsing statistics
#[derive(Debug, Clone, Default)]
pub struct ImportStats {
    pub total_rows: u32,
    pub parsed: u32,
    /// Rows missing a team or name.
    pub skipped: u32,
    /// Teams dropped for failing roster validation, with the reason.
    pub rejected_teams: Vec<(String, String)>,
    pub delimiter: char,
}

fn normalize(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '_' | '-' | '.' | '#'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Header name to column index, with alias lookup.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &csv::StringRecord) -> Self {
        Self(headers.iter().enumerate().map(|(i, h)| (normalize(h), i)).collect())
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, aliases: &[&str]) -> &'r str {
        aliases
            .iter()
            .filter_map(|a| self.0.get(&normalize(a)))
            .find_map(|&i| record.get(i))
            .map(str::trim)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone)]
struct PlayerRow {
    team: String,
    name: String,
    position: String,
    /// "batter" / "pitcher" when the sheet has a type column.
    kind: String,
    number: u8,
    role: String,
    batting: BattingGrades,
    pitching: PitchingGrades,
}

impl PlayerRow {
    fn is_pitcher(&self) -> bool {
        let kind = self.kind.to_ascii_lowercase();
        kind == "pitcher"
            || kind == "p"
            || matches!(
                self.position.to_ascii_lowercase().as_str(),
                "p" | "sp" | "rp" | "lhp" | "rhp" | "cl" | "pitcher"
            )
    }
}

fn grade(value: &str) -> u32 {
    value.parse::<u32>().map(|g| g.min(99)).unwrap_or(50)
}

fn parse_role(value: &str) -> Option<PitcherRole> {
    match value.to_ascii_lowercase().as_str() {
        "sp" | "starter" | "s" => Some(PitcherRole::Starter),
        "rp" | "reliever" | "r" => Some(PitcherRole::Reliever),
        "cl" | "closer" | "c" => Some(PitcherRole::Closer),
        _ => None,
    }
}

/// Role by staff order when the sheet has none: four starters, a closer at
/// the end of a staff of six or more, relievers in between.
fn default_role(index: usize, staff_size: usize) -> PitcherRole {
    if index < 4 {
        PitcherRole::Starter
    } else if staff_size >= 6 && index == staff_size - 1 {
        PitcherRole::Closer
    } else {
        PitcherRole::Reliever
    }
}

fn build_team(id: u32, name: &str, rows: &[PlayerRow]) -> Team {
    let batters = rows
        .iter()
        .filter(|r| !r.is_pitcher())
        .enumerate()
        .map(|(i, r)| Batter {
            id: id * 100 + i as u32,
            name: r.name.clone(),
            position: Position::from_code(&r.position),
            number: r.number,
            archetype: batter_archetype_label(&r.batting).to_string(),
            profile: batter_profile_from_grades(&r.batting),
            career: Default::default(),
        })
        .collect();

    let pitcher_rows: Vec<&PlayerRow> = rows.iter().filter(|r| r.is_pitcher()).collect();
    let staff_size = pitcher_rows.len();
    let pitchers = pitcher_rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let role = parse_role(&r.role)
                .or_else(|| parse_role(&r.position))
                .unwrap_or_else(|| default_role(i, staff_size));
            Pitcher {
                id: id * 100 + 50 + i as u32,
                name: r.name.clone(),
                role,
                number: r.number,
                archetype: pitcher_archetype_label(&r.pitching).to_string(),
                profile: pitcher_profile_from_grades(&r.pitching),
                career: Default::default(),
            }
        })
        .collect();

    Team {
        id,
        name: name.to_string(),
        batters,
        pitchers,
        rotation_index: 0,
        record: Default::default(),
    }
}

/// Parse roster text. Tab-delimited when the header row contains a tab.
pub fn import_roster_str(text: &str) -> Result<(Vec<Team>, ImportStats)> {
    let header_line = text.lines().next().unwrap_or("");
    let delimiter = if header_line.contains('\t') { '\t' } else { ',' };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("Failed to read CSV header row")?.clone();
    let columns = Columns::new(&headers);

    let mut stats = ImportStats { delimiter, ..Default::default() };
    let mut order: Vec<String> = Vec::new();
    let mut by_team: HashMap<String, Vec<PlayerRow>> = HashMap::new();

    for record in reader.records() {
        stats.total_rows += 1;
        let record = record.with_context(|| format!("Malformed CSV row {}", stats.total_rows))?;

        let team = columns.get(&record, &["team", "teamname"]);
        let first = columns.get(&record, &["firstname", "first"]);
        let last = columns.get(&record, &["lastname", "last"]);
        if team.is_empty() || first.is_empty() || last.is_empty() {
            stats.skipped += 1;
            continue;
        }

        let row = PlayerRow {
            team: team.to_string(),
            name: format!("{} {}", first, last),
            position: columns.get(&record, &["position", "pos"]).to_string(),
            kind: columns.get(&record, &["type", "playertype"]).to_string(),
            number: columns
                .get(&record, &["num", "number", "playernumber", "jersey"])
                .parse()
                .unwrap_or(0),
            role: columns.get(&record, &["role"]).to_string(),
            batting: BattingGrades {
                contact: grade(columns.get(&record, &["contact"])),
                power: grade(columns.get(&record, &["power"])),
                patience: grade(columns.get(&record, &["patience"])),
                speed: grade(columns.get(&record, &["speed"])),
            },
            pitching: PitchingGrades {
                strikeout: grade(columns.get(&record, &["strikeout", "k", "ks"])),
                groundball: grade(columns.get(&record, &["gbrate", "groundball", "gb"])),
                control: grade(columns.get(&record, &["control"])),
                stuff: grade(columns.get(&record, &["stuff"])),
            },
        };

        stats.parsed += 1;
        if !by_team.contains_key(&row.team) {
            order.push(row.team.clone());
        }
        by_team.entry(row.team.clone()).or_default().push(row);
    }

    if stats.parsed == 0 {
        bail!(
            "No valid player rows found (expected Team, First Name, Last Name columns; found: {})",
            headers.iter().collect::<Vec<_>>().join(", ")
        );
    }

    let mut teams = Vec::new();
    for name in order {
        let rows = by_team.remove(&name).unwrap_or_default();
        let team = build_team(teams.len() as u32 + 1, &name, &rows);
        match team.validate() {
            Ok(()) => teams.push(team),
            Err(e) => {
                log::warn!("Rejected team '{}': {}", name, e);
                stats.rejected_teams.push((name, e.to_string()));
            }
        }
    }

    if teams.is_empty() {
        bail!("No team in the roster file has 9 batters and a pitcher");
    }
    Ok((teams, stats))
}

pub fn import_roster_csv(path: &Path) -> Result<(Vec<Team>, ImportStats)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    import_roster_str(&text).with_context(|| format!("Failed to import roster: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [&str; 9] = ["CF", "SS", "RF", "1B", "3B", "LF", "2B", "C", "DH"];

    fn roster_csv(team: &str, batters: usize, pitchers: usize) -> String {
        let mut out = String::new();
        for i in 0..batters {
            out.push_str(&format!(
                "{},Bat,Number{},{},{},70,60,55,80,,,,,\n",
                team,
                i,
                POSITIONS[i % 9],
                i + 1
            ));
        }
        for i in 0..pitchers {
            out.push_str(&format!("{},Arm,Number{},P,{},,,,,60,50,70,40,\n", team, i, 30 + i));
        }
        out
    }

    const HEADER: &str =
        "Team,First Name,Last_Name,Position,#,Contact,Power,Patience,Speed,Strikeout,GB Rate,Control,Stuff,Role\n";

    #[test]
    fn test_import_groups_by_team() {
        let text = format!("{}{}{}", HEADER, roster_csv("Riverton Eagles", 9, 7), roster_csv("Harbor City Gulls", 10, 5));
        let (teams, stats) = import_roster_str(&text).unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(stats.parsed, 31);
        assert_eq!(stats.delimiter, ',');
        assert_eq!(teams[0].name, "Riverton Eagles");
        assert_eq!(teams[0].pitchers.len(), 7);
        assert_eq!(teams[0].pitchers[6].role, PitcherRole::Closer);
        assert_eq!(teams[1].batters.len(), 10);
        assert_eq!(teams[1].starter_indices(), vec![0, 1, 2, 3]);
        assert_eq!(teams[0].batters[0].position, Position::CenterField);
        assert_eq!(teams[0].batters[0].archetype, "Speedster");
    }

    #[test]
    fn test_short_team_rejected() {
        let text = format!("{}{}{}", HEADER, roster_csv("Full", 9, 3), roster_csv("Short", 8, 3));
        let (teams, stats) = import_roster_str(&text).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(stats.rejected_teams.len(), 1);
        assert_eq!(stats.rejected_teams[0].0, "Short");
    }

    #[test]
    fn test_team_without_pitchers_rejected() {
        let text = format!("{}{}", HEADER, roster_csv("Armless", 9, 0));
        assert!(import_roster_str(&text).is_err());
    }

    #[test]
    fn test_tab_delimited() {
        let text = format!("{}{}", HEADER, roster_csv("Tabs", 9, 1)).replace(',', "\t");
        let (teams, stats) = import_roster_str(&text).unwrap();
        assert_eq!(stats.delimiter, '\t');
        assert_eq!(teams[0].pitchers[0].role, PitcherRole::Starter);
    }

    #[test]
    fn test_rows_without_names_skipped() {
        let text = format!("{}{}Named,,Nobody,CF,1,50,50,50,50,,,,,\n", HEADER, roster_csv("Named", 9, 1));
        let (teams, stats) = import_roster_str(&text).unwrap();
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.total_rows, 11);
        assert_eq!(teams[0].batters.len(), 9);
    }

    #[test]
    fn test_missing_columns_reported() {
        let err = import_roster_str("foo,bar\n1,2\n").unwrap_err();
        assert!(err.to_string().contains("No valid player rows"));
    }

    #[test]
    fn test_type_column_marks_pitchers() {
        let mut text = String::from("team,type,firstName,lastName,position\n");
        for i in 0..9 {
            text.push_str(&format!("Club,batter,Bat,No{},SS\n", i));
        }
        text.push_str("Club,Pitcher,Two,Way,DH\n");
        let (teams, _) = import_roster_str(&text).unwrap();
        assert_eq!(teams[0].batters.len(), 9);
        assert_eq!(teams[0].pitchers[0].name, "Two Way");
    }

    #[test]
    fn test_explicit_roles() {
        let text = format!(
            "{}{}Club,Big,Closer,P,99,,,,,80,50,70,60,CL\n",
            HEADER,
            roster_csv("Club", 9, 1)
        );
        let (teams, _) = import_roster_str(&text).unwrap();
        assert_eq!(teams[0].pitchers[1].role, PitcherRole::Closer);
    }
}
