//! Tournament summary figures for the dashboard header and CLI.

use serde::Serialize;
use std::collections::HashSet;

use crate::aggregate::WinCount;
use crate::records::MatchResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentStats {
    pub editions: usize,
    pub distinct_winners: usize,
    pub distinct_finalists: usize,
    pub first_year: Option<u16>,
    pub last_year: Option<u16>,
    /// Top of the win table (first-seen on ties)
    pub leader: Option<WinCount>,
}

impl TournamentStats {
    pub fn from_records(records: &[MatchResult], win_counts: &[WinCount]) -> Self {
        let finalists: HashSet<&str> = records
            .iter()
            .flat_map(|r| [r.winner.as_str(), r.runner_up.as_str()])
            .collect();

        Self {
            editions: records.len(),
            distinct_winners: win_counts.len(),
            distinct_finalists: finalists.len(),
            first_year: records.iter().map(|r| r.year).min(),
            last_year: records.iter().map(|r| r.year).max(),
            leader: win_counts.first().cloned(),
        }
    }
}
