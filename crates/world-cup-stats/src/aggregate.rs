//! Win Aggregation
//!
//! Groups normalized finals by winner and counts titles. Output is ordered by
//! descending wins; countries with equal wins keep the order in which they
//! first appear as winners in the input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::geo::{GeoCode, GeoTable};
use crate::records::MatchResult;

/// Titles won by one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCount {
    pub country: String,
    pub wins: u32,
    pub geo_code: Option<GeoCode>,
}

/// Count titles per winner. Expects records that have already been through
/// the [`Normalizer`](crate::Normalizer); runner-up-only countries never
/// appear in the output.
pub fn aggregate(records: &[MatchResult], geo: &GeoTable) -> Vec<WinCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for record in records {
        match index.get(record.winner.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(record.winner.as_str(), counts.len());
                counts.push((record.winner.as_str(), 1));
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(country, wins)| WinCount {
            country: country.to_string(),
            wins,
            geo_code: geo.lookup(country),
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::normalize::Normalizer;
    use proptest::prelude::*;

    fn records_strategy() -> impl Strategy<Value = Vec<MatchResult>> {
        let names = prop::sample::select(vec![
            "Brazil",
            "Italy",
            "Germany",
            "West Germany",
            "Spain",
            "Chile",
        ]);
        prop::collection::vec((names.clone(), names), 0..40).prop_map(|finals| {
            finals
                .into_iter()
                .enumerate()
                .map(|(i, (winner, runner_up))| {
                    MatchResult::new(1930 + i as u16 * 4, winner, runner_up)
                })
                .collect()
        })
    }

    proptest! {
        // every tournament produced exactly one winner
        #[test]
        fn prop_wins_sum_to_record_count(records in records_strategy()) {
            let records = Normalizer::historical().normalize_all(&records);
            let counts = aggregate(&records, &GeoTable::iso_alpha3());
            let total: u32 = counts.iter().map(|c| c.wins).sum();
            prop_assert_eq!(total as usize, records.len());
        }

        #[test]
        fn prop_only_winners_counted(records in records_strategy()) {
            let records = Normalizer::historical().normalize_all(&records);
            let counts = aggregate(&records, &GeoTable::iso_alpha3());
            for entry in &counts {
                prop_assert!(entry.wins >= 1);
                prop_assert!(records.iter().any(|r| r.winner == entry.country));
            }
            prop_assert!(counts.windows(2).all(|w| w[0].wins >= w[1].wins));
        }
    }
}
