//! World Cup Stats Library
//!
//! View-model for the FIFA World Cup dashboard: the finals record store,
//! historical country name normalization, win aggregation with map codes,
//! and the two point lookups (country → wins, year → finalists).
//!
//! Everything is built once from the static finals list and read-only
//! afterwards, so a single [`QueryService`] can be shared freely.

use thiserror::Error;

pub mod aggregate;
pub mod display;
pub mod geo;
pub mod normalize;
pub mod query;
pub mod records;
pub mod stats;

pub use aggregate::{aggregate, WinCount};
pub use display::{
    describe_country, describe_year, finalists_message, wins_message, YEAR_NOT_FOUND,
};
pub use geo::{GeoCode, GeoTable};
pub use normalize::Normalizer;
pub use query::{Finalists, QueryService};
pub use records::{MatchResult, RecordStore};
pub use stats::TournamentStats;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldCupError {
    #[error("Country has never won the World Cup: {0}")]
    CountryNotFound(String),
    #[error("No World Cup final recorded for year {0}")]
    YearNotFound(i64),
    #[error("Duplicate tournament year: {0}")]
    DuplicateYear(u16),
    #[error("Rename table contains a cycle through {0}")]
    RenameCycle(String),
    #[error("Rename table maps {0} more than once")]
    DuplicateRename(String),
}

impl WorldCupError {
    /// True for the lookup failures raised by [`QueryService`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CountryNotFound(_) | Self::YearNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, WorldCupError>;
