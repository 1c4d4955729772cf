//! Query Service
//!
//! Built once from the record store: normalizes every final, aggregates the
//! win table and indexes both lookups. All methods are pure reads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aggregate::{aggregate, WinCount};
use crate::geo::GeoTable;
use crate::normalize::Normalizer;
use crate::records::{MatchResult, RecordStore};
use crate::stats::TournamentStats;
use crate::{Result, WorldCupError};

/// Both finalists of one tournament, canonical names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finalists {
    pub winner: String,
    pub runner_up: String,
}

impl From<&MatchResult> for Finalists {
    fn from(record: &MatchResult) -> Self {
        Self {
            winner: record.winner.clone(),
            runner_up: record.runner_up.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryService {
    records: Vec<MatchResult>,
    win_counts: Vec<WinCount>,
    by_country: HashMap<String, usize>,
    by_year: HashMap<u16, usize>,
}

impl QueryService {
    pub fn new(store: &RecordStore, normalizer: &Normalizer, geo: &GeoTable) -> Self {
        let records = normalizer.normalize_all(store.records());
        let win_counts = aggregate(&records, geo);

        let by_country = win_counts
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.country.clone(), idx))
            .collect();
        let by_year = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.year, idx))
            .collect();

        tracing::debug!(
            records = records.len(),
            winners = win_counts.len(),
            "query service built"
        );

        Self {
            records,
            win_counts,
            by_country,
            by_year,
        }
    }

    /// Finals list with the historical rename table and ISO alpha-3 codes.
    pub fn fifa_world_cup() -> Self {
        Self::new(
            &RecordStore::fifa_world_cup(),
            &Normalizer::historical(),
            &GeoTable::iso_alpha3(),
        )
    }

    /// Titles won by an already-canonical country name.
    pub fn wins_for(&self, country: &str) -> Result<u32> {
        self.by_country
            .get(country)
            .map(|&idx| self.win_counts[idx].wins)
            .ok_or_else(|| WorldCupError::CountryNotFound(country.to_string()))
    }

    /// Any integer is accepted; years outside the tournament range are
    /// simply not found.
    pub fn finalists_for(&self, year: i64) -> Result<Finalists> {
        u16::try_from(year)
            .ok()
            .and_then(|year| self.by_year.get(&year))
            .map(|&idx| Finalists::from(&self.records[idx]))
            .ok_or(WorldCupError::YearNotFound(year))
    }

    /// Derived table, descending wins.
    pub fn win_counts(&self) -> &[WinCount] {
        &self.win_counts
    }

    /// Country selector options, in table order.
    pub fn countries(&self) -> impl Iterator<Item = &str> + '_ {
        self.win_counts.iter().map(|entry| entry.country.as_str())
    }

    /// Year selector options, in source order.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.records.iter().map(|record| record.year)
    }

    /// Normalized finals.
    pub fn records(&self) -> &[MatchResult] {
        &self.records
    }

    pub fn stats(&self) -> TournamentStats {
        TournamentStats::from_records(&self.records, &self.win_counts)
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::fifa_world_cup()
    }
}
