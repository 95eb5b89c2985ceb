/// Known categories of competition results can be recorded under.
///
/// Each variant is seeded as a `game_type` row whose `name` equals [`GameKind::as_str`];
/// the numeric id is owned by the store and looked up by that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    RocketLeague,
    CollegeFootball,
    SmashBros,
}

impl GameKind {
    /// Parse a client-supplied token. Tokens are matched exactly.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rocket_league" => Some(Self::RocketLeague),
            "college_football" => Some(Self::CollegeFootball),
            "smash_bros" => Some(Self::SmashBros),
            _ => None,
        }
    }

    /// Convert to the `game_type.name` stored in the database
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RocketLeague => "rocket_league",
            Self::CollegeFootball => "college_football",
            Self::SmashBros => "smash_bros",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(GameKind::from_str("rocket_league"), Some(GameKind::RocketLeague));
        assert_eq!(
            GameKind::from_str("college_football"),
            Some(GameKind::CollegeFootball)
        );
        assert_eq!(GameKind::from_str("smash_bros"), Some(GameKind::SmashBros));
        assert_eq!(GameKind::from_str("ROCKET_LEAGUE"), None);
        assert_eq!(GameKind::from_str("chess"), None);
        assert_eq!(GameKind::from_str(""), None);
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for kind in [
            GameKind::RocketLeague,
            GameKind::CollegeFootball,
            GameKind::SmashBros,
        ] {
            assert_eq!(GameKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
