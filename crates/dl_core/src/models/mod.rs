pub mod events;
pub mod game_line;
pub mod game_result;
pub mod player;
pub mod side;
pub mod team;

pub use events::{EventType, PlayEvent};
pub use game_line::{BatterGameLine, PitcherGameLine};
pub use game_result::{
    BatterBoxLine, Decision, GameResult, LineScore, PitcherBoxLine, PitcherDecisions, PitcherRef,
    TeamBox,
};
pub use player::{
    Batter, BatterProfile, BattingCareer, Pitcher, PitcherProfile, PitcherRole, PitchingCareer,
    Position,
};
pub use side::{Half, Side};
pub use team::{Team, TeamRecord, LINEUP_SIZE};
