//! Finals table
//!
//! One row per tournament: year, winner, runner-up. No tournaments
//! were held in 1942 or 1946.

use serde::{Deserialize, Serialize};

/// Raw finals table as recorded, before name normalization.
pub const FINALS: [(u16, &str, &str); 22] = [
    (1930, "Uruguay", "Argentina"),
    (1934, "Italy", "Czechoslovakia"),
    (1938, "Italy", "Hungary"),
    (1950, "Uruguay", "Brazil"),
    (1954, "Germany", "Hungary"),
    (1958, "Brazil", "Sweden"),
    (1962, "Brazil", "Czechoslovakia"),
    (1966, "England", "West Germany"),
    (1970, "Brazil", "Italy"),
    (1974, "Germany", "Netherlands"),
    (1978, "Argentina", "Netherlands"),
    (1982, "Italy", "West Germany"),
    (1986, "Argentina", "West Germany"),
    (1990, "Germany", "Argentina"),
    (1994, "Brazil", "Italy"),
    (1998, "France", "Brazil"),
    (2002, "Brazil", "Germany"),
    (2006, "Italy", "France"),
    (2010, "Spain", "Netherlands"),
    (2014, "Germany", "Argentina"),
    (2018, "France", "Croatia"),
    (2022, "Argentina", "France"),
];

/// Historical names folded into their successor state.
const NAME_ALIASES: [(&str, &str); 1] = [("West Germany", "Germany")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
}

impl MatchRecord {
    /// Build a record, normalizing both team names.
    pub fn new(year: u16, winner: &str, runner_up: &str) -> Self {
        Self {
            year,
            winner: normalize_country(winner).to_string(),
            runner_up: normalize_country(runner_up).to_string(),
        }
    }
}

/// Map a recorded team name to the name used for tallies and lookups.
pub fn normalize_country(name: &str) -> &str {
    NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Load the finals table in year order.
pub fn load_finals() -> Vec<MatchRecord> {
    FINALS
        .iter()
        .map(|&(year, winner, runner_up)| MatchRecord::new(year, winner, runner_up))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_west_germany() {
        assert_eq!(normalize_country("West Germany"), "Germany");
        assert_eq!(normalize_country("Germany"), "Germany");
        assert_eq!(normalize_country("Croatia"), "Croatia");
    }

    #[test]
    fn test_runner_up_normalized() {
        let finals = load_finals();
        let f1966 = finals.iter().find(|r| r.year == 1966).unwrap();
        assert_eq!(f1966.winner, "England");
        assert_eq!(f1966.runner_up, "Germany");
        assert!(finals.iter().all(|r| r.runner_up != "West Germany"));
    }

    #[test]
    fn test_years_unique_and_ordered() {
        let finals = load_finals();
        assert!(finals.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(finals[0], MatchRecord::new(1930, "Uruguay", "Argentina"));
        assert_eq!(finals[21], MatchRecord::new(2022, "Argentina", "France"));
    }
}
