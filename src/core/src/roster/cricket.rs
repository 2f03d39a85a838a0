#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CricketRole {
    WicketKeeper,
    Batter,
    AllRounder,
    Bowler,
}

impl CricketRole {
    /// Role bucket of the slot at `idx` in a fresh eleven:
    /// two keepers, four batters, two all-rounders, the rest bowlers.
    pub fn for_index(idx: usize) -> CricketRole {
        match idx {
            0..=1 => CricketRole::WicketKeeper,
            2..=5 => CricketRole::Batter,
            6..=7 => CricketRole::AllRounder,
            _ => CricketRole::Bowler,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            CricketRole::WicketKeeper => "WK",
            CricketRole::Batter => "BAT",
            CricketRole::AllRounder => "AR",
            CricketRole::Bowler => "BOWL",
        }
    }
}
