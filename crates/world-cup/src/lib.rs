//! World Cup Finals Library
//!
//! Fixed table of FIFA World Cup finals (1930-2022) with the derived
//! win tallies, the country → ISO-3 code table used for map rendering,
//! and the two selection lookups served by the dashboard.

use serde::Serialize;
use thiserror::Error;

pub mod choropleth;
pub mod finals;
pub mod iso;
pub mod lookup;
pub mod tally;

pub use choropleth::ChoroplethFigure;
pub use finals::{normalize_country, MatchRecord};
pub use iso::iso3_code;
pub use lookup::{describe_country_wins, describe_final, display_text, parse_year, NO_DATA_MESSAGE};
pub use tally::WinCountEntry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No World Cup wins recorded for country: {0}")]
    UnknownCountry(String),
    #[error("No World Cup final held in {0}")]
    UnknownYear(u16),
    #[error("Not a tournament year: {0:?}")]
    InvalidYear(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Immutable finals table plus its derived aggregate.
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    finals: Vec<MatchRecord>,
    win_counts: Vec<WinCountEntry>,
}

impl Dataset {
    /// Build the dataset from the literal finals table.
    pub fn load() -> Self {
        Self::from_finals(finals::load_finals())
    }

    pub fn from_finals(finals: Vec<MatchRecord>) -> Self {
        let win_counts = tally::tally_wins(&finals);
        Self { finals, win_counts }
    }

    pub fn finals(&self) -> &[MatchRecord] {
        &self.finals
    }

    pub fn win_counts(&self) -> &[WinCountEntry] {
        &self.win_counts
    }

    pub fn final_for(&self, year: u16) -> Result<&MatchRecord> {
        self.finals
            .iter()
            .find(|record| record.year == year)
            .ok_or(LookupError::UnknownYear(year))
    }

    pub fn wins_for(&self, country: &str) -> Result<&WinCountEntry> {
        self.win_counts
            .iter()
            .find(|entry| entry.country == country)
            .ok_or_else(|| LookupError::UnknownCountry(country.to_string()))
    }

    /// Distinct winning countries, sorted by name.
    pub fn country_options(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self
            .win_counts
            .iter()
            .map(|entry| entry.country.as_str())
            .collect();
        countries.sort_unstable();
        countries
    }

    /// Tournament years, ascending.
    pub fn year_options(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.finals.iter().map(|record| record.year).collect();
        years.sort_unstable();
        years
    }

    pub fn choropleth(&self) -> ChoroplethFigure {
        ChoroplethFigure::from_win_counts(&self.win_counts)
    }
}
