use serde::{Deserialize, Serialize};

use super::side::{Half, Side};

/// One line of play-by-play.
///
/// Purely observational: the engine appends these and forwards them to a
/// `GameObserver`, but never reads them back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayEvent {
    pub inning: u32,
    pub half: Half,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Team the event is credited to (the batting side for offensive plays,
    /// the fielding side for pitching changes).
    pub side: Side,
    pub text: String,
    /// Score after the event (away, home).
    pub score: (u32, u32),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    GameStart,
    Ball,
    CalledStrike,
    SwingingStrike,
    Foul,
    Strikeout,
    Walk,
    HitByPitch,
    Single,
    Double,
    Triple,
    HomeRun,
    GroundOut,
    FlyOut,
    LineOut,
    DoublePlay,
    SacrificeFly,
    ReachedOnError,
    RunsScored,
    RunnerHolds,
    StolenBase,
    CaughtStealing,
    SacrificeBunt,
    SqueezePlay,
    HitAndRun,
    ManagerDecision,
    Substitution,
    HalfInningEnd,
    WalkOff,
    GameOver,
}

impl EventType {
    /// Stable short tag for log consumers ("t-hit", "t-out", ...).
    pub fn tag(&self) -> &'static str {
        match self {
            EventType::Ball
            | EventType::CalledStrike
            | EventType::Foul
            | EventType::RunnerHolds
            | EventType::GameStart
            | EventType::HalfInningEnd => "t-info",
            EventType::SwingingStrike => "t-swing",
            EventType::Strikeout => "t-k",
            EventType::Walk
            | EventType::HitByPitch
            | EventType::Single
            | EventType::Double
            | EventType::Triple
            | EventType::ReachedOnError
            | EventType::StolenBase
            | EventType::HitAndRun => "t-hit",
            EventType::HomeRun | EventType::RunsScored | EventType::WalkOff => "t-score",
            EventType::GroundOut
            | EventType::FlyOut
            | EventType::LineOut
            | EventType::DoublePlay
            | EventType::SacrificeFly
            | EventType::CaughtStealing => "t-out",
            EventType::SacrificeBunt
            | EventType::SqueezePlay
            | EventType::ManagerDecision
            | EventType::Substitution => "t-manage",
            EventType::GameOver => "t-final",
        }
    }

    /// Events that end a plate appearance.
    pub fn ends_plate_appearance(&self) -> bool {
        matches!(
            self,
            EventType::Strikeout
                | EventType::Walk
                | EventType::HitByPitch
                | EventType::Single
                | EventType::Double
                | EventType::Triple
                | EventType::HomeRun
                | EventType::GroundOut
                | EventType::FlyOut
                | EventType::LineOut
                | EventType::DoublePlay
                | EventType::SacrificeFly
                | EventType::ReachedOnError
                | EventType::SacrificeBunt
                | EventType::SqueezePlay
                | EventType::HitAndRun
        )
    }
}

impl PlayEvent {
    /// "T7 Reyes singles!" style line.
    pub fn display_line(&self) -> String {
        format!("{:<4} {}", self.half.tag(self.inning), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(EventType::Strikeout.tag(), "t-k");
        assert_eq!(EventType::HomeRun.tag(), "t-score");
        assert_eq!(EventType::Substitution.tag(), "t-manage");
    }

    #[test]
    fn test_event_serializes_type_field() {
        let event = PlayEvent {
            inning: 3,
            half: Half::Bottom,
            event_type: EventType::Double,
            side: Side::Home,
            text: "Cruz doubles!".to_string(),
            score: (1, 2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "double");
        assert_eq!(json["half"], "bottom");
        assert_eq!(event.display_line(), "B3   Cruz doubles!");
    }
}
