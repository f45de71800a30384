use serde::{Deserialize, Serialize};

/// Which club. Away bats in the top half, home in the bottom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Away, Side::Home];

    /// Array index used by every per-team `[T; 2]` in the engine.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Away => 0,
            Side::Home => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Away => Side::Home,
            Side::Home => Side::Away,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Away => "away",
            Side::Home => "home",
        }
    }
}

/// Half of an inning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    #[inline]
    pub fn batting_side(self) -> Side {
        match self {
            Half::Top => Side::Away,
            Half::Bottom => Side::Home,
        }
    }

    #[inline]
    pub fn fielding_side(self) -> Side {
        self.batting_side().other()
    }

    /// Short tag used in play-by-play ("T7", "B9").
    pub fn tag(self, inning: u32) -> String {
        match self {
            Half::Top => format!("T{}", inning),
            Half::Bottom => format!("B{}", inning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_sides() {
        assert_eq!(Half::Top.batting_side(), Side::Away);
        assert_eq!(Half::Top.fielding_side(), Side::Home);
        assert_eq!(Half::Bottom.batting_side(), Side::Home);
        assert_eq!(Half::Bottom.tag(10), "B10");
    }

    #[test]
    fn test_side_index_roundtrip() {
        for side in Side::BOTH {
            assert_eq!(Side::BOTH[side.index()], side);
            assert_eq!(side.other().other(), side);
        }
    }
}
