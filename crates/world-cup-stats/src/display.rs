//! Display strings for the two lookup widgets.

use crate::query::{Finalists, QueryService};
use crate::Result;

/// Shown when the year selector points at a year with no final.
pub const YEAR_NOT_FOUND: &str = "Year not found.";

pub fn wins_message(country: &str, wins: u32) -> String {
    format!("{} has won the World Cup {} times.", country, wins)
}

pub fn finalists_message(year: i64, finalists: &Finalists) -> String {
    format!(
        "In {}, the winner was {} and the runner-up was {}.",
        year, finalists.winner, finalists.runner_up
    )
}

/// Country widget text. Unknown countries stay an error: the selector only
/// offers countries from the win table.
pub fn describe_country(service: &QueryService, country: &str) -> Result<String> {
    let wins = service.wins_for(country)?;
    Ok(wins_message(country, wins))
}

/// Year widget text, degrading to [`YEAR_NOT_FOUND`].
pub fn describe_year(service: &QueryService, year: i64) -> String {
    match service.finalists_for(year) {
        Ok(finalists) => finalists_message(year, &finalists),
        Err(err) => {
            tracing::debug!(year, error = %err, "year lookup failed");
            YEAR_NOT_FOUND.to_string()
        }
    }
}
