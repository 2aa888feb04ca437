//! Selection lookups
//!
//! Each lookup takes the current selector value and returns the sentence
//! shown under that selector:
//! - no selection → empty string
//! - known value → formatted sentence
//! - anything else → [`LookupError`], rendered with [`NO_DATA_MESSAGE`]

use crate::{Dataset, LookupError, Result};

/// Shown in place of a sentence when the selection is not in the table.
pub const NO_DATA_MESSAGE: &str = "No data for that selection.";

/// `None`, empty and whitespace-only values all mean "nothing selected".
fn selected(selection: Option<&str>) -> Option<&str> {
    selection.filter(|value| !value.trim().is_empty())
}

pub fn describe_country_wins(dataset: &Dataset, selection: Option<&str>) -> Result<String> {
    let Some(country) = selected(selection) else {
        return Ok(String::new());
    };

    let entry = dataset.wins_for(country)?;
    Ok(format!(
        "{} has won the World Cup {} time(s).",
        entry.country, entry.wins
    ))
}

pub fn describe_final(dataset: &Dataset, selection: Option<u16>) -> Result<String> {
    let Some(year) = selection else {
        return Ok(String::new());
    };

    let record = dataset.final_for(year)?;
    Ok(format!(
        "In {}, the winner was {} and the runner-up was {}.",
        record.year, record.winner, record.runner_up
    ))
}

/// Parse a raw year selector value.
///
/// Blank input is no selection; anything that is not a plain year number
/// is [`LookupError::InvalidYear`].
pub fn parse_year(raw: Option<&str>) -> Result<Option<u16>> {
    match selected(raw) {
        None => Ok(None),
        Some(value) => {
            let digits = value.trim();
            // u16::from_str also takes a leading '+'
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LookupError::InvalidYear(value.to_string()));
            }
            digits
                .parse::<u16>()
                .map(Some)
                .map_err(|_| LookupError::InvalidYear(value.to_string()))
        }
    }
}

/// Text for an output region: the sentence, or the no-data message.
pub fn display_text(outcome: Result<String>) -> String {
    outcome.unwrap_or_else(|_| NO_DATA_MESSAGE.to_string())
}
