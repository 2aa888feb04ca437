//! Win tallies derived from the finals table.

use serde::{Deserialize, Serialize};

use crate::MatchRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCountEntry {
    pub country: String,
    pub wins: u32,
}

/// Count wins per winning country.
///
/// Entries are ordered by wins, most first. Ties keep the order in which
/// each country first won.
pub fn tally_wins(finals: &[MatchRecord]) -> Vec<WinCountEntry> {
    let mut entries: Vec<WinCountEntry> = Vec::new();

    for record in finals {
        match entries.iter_mut().find(|e| e.country == record.winner) {
            Some(entry) => entry.wins += 1,
            None => entries.push(WinCountEntry {
                country: record.winner.clone(),
                wins: 1,
            }),
        }
    }

    // stable: ties stay in first-win order
    entries.sort_by(|a, b| b.wins.cmp(&a.wins));
    entries
}
