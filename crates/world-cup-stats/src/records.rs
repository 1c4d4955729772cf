//! Finals Record Store
//!
//! Immutable list of World Cup finals, one per tournament edition.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Result, WorldCupError};

/// One tournament edition: year, champion and beaten finalist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
}

impl MatchResult {
    pub fn new(year: u16, winner: impl Into<String>, runner_up: impl Into<String>) -> Self {
        Self {
            year,
            winner: winner.into(),
            runner_up: runner_up.into(),
        }
    }
}

/// Finals as played, with the country names of the day (1930–2022)
const FIFA_FINALS: [(u16, &str, &str); 22] = [
    (1930, "Uruguay", "Argentina"),
    (1934, "Italy", "Czechoslovakia"),
    (1938, "Italy", "Hungary"),
    (1950, "Uruguay", "Brazil"),
    (1954, "West Germany", "Hungary"),
    (1958, "Brazil", "Sweden"),
    (1962, "Brazil", "Czechoslovakia"),
    (1966, "England", "West Germany"),
    (1970, "Brazil", "Italy"),
    (1974, "West Germany", "Netherlands"),
    (1978, "Argentina", "Netherlands"),
    (1982, "Italy", "West Germany"),
    (1986, "Argentina", "West Germany"),
    (1990, "West Germany", "Argentina"),
    (1994, "Brazil", "Italy"),
    (1998, "France", "Brazil"),
    (2002, "Brazil", "Germany"),
    (2006, "Italy", "France"),
    (2010, "Spain", "Netherlands"),
    (2014, "Germany", "Argentina"),
    (2018, "France", "Croatia"),
    (2022, "Argentina", "France"),
];

/// Read-only record store. Years are unique; order is source order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<MatchResult>,
}

impl RecordStore {
    /// Build a store, rejecting a list that repeats a year.
    pub fn new(records: Vec<MatchResult>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.year) {
                return Err(WorldCupError::DuplicateYear(record.year));
            }
        }

        tracing::debug!(records = records.len(), "record store loaded");
        Ok(Self { records })
    }

    /// The men's World Cup finals, 1930 to 2022.
    pub fn fifa_world_cup() -> Self {
        let records = FIFA_FINALS
            .iter()
            .map(|&(year, winner, runner_up)| MatchResult::new(year, winner, runner_up))
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[MatchResult] {
        &self.records
    }

    pub fn get(&self, year: u16) -> Option<&MatchResult> {
        self.records.iter().find(|r| r.year == year)
    }

    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.records.iter().map(|r| r.year)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::fifa_world_cup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifa_world_cup_store() {
        let store = RecordStore::fifa_world_cup();
        assert_eq!(store.len(), 22);

        let first = store.records().first().unwrap();
        assert_eq!(first, &MatchResult::new(1930, "Uruguay", "Argentina"));

        let last = store.records().last().unwrap();
        assert_eq!(last, &MatchResult::new(2022, "Argentina", "France"));
    }

    #[test]
    fn test_static_years_are_unique() {
        let store = RecordStore::fifa_world_cup();
        assert!(RecordStore::new(store.records().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let records = vec![
            MatchResult::new(1966, "England", "West Germany"),
            MatchResult::new(1966, "West Germany", "England"),
        ];

        assert_eq!(
            RecordStore::new(records).unwrap_err(),
            WorldCupError::DuplicateYear(1966)
        );
    }

    #[test]
    fn test_get_by_year() {
        let store = RecordStore::fifa_world_cup();
        assert_eq!(store.get(1966).map(|r| r.winner.as_str()), Some("England"));
        assert!(store.get(1942).is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.years().count(), 0);
    }
}
