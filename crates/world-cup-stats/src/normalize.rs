//! Country Name Normalization
//!
//! Maps historical country names onto their canonical modern spelling so that
//! every real-world country is counted under a single name. Unmapped names
//! pass through unchanged.

use std::collections::HashMap;

use crate::records::MatchResult;
use crate::{Result, WorldCupError};

/// Historical name → successor state used for win counting
const HISTORICAL_RENAMES: [(&str, &str); 1] = [("West Germany", "Germany")];

/// Fixed rename table. Every key maps to a name that is not itself a key,
/// which makes [`Normalizer::normalize`] idempotent.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    renames: HashMap<String, String>,
}

impl Normalizer {
    /// Default table for the finals list.
    pub fn historical() -> Self {
        Self {
            renames: HISTORICAL_RENAMES
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Build from arbitrary pairs. Chains (`A → B`, `B → C`) are flattened to
    /// their final target; identity pairs are dropped. A key mapped to two
    /// different targets is an error, as is a cycle, reported at the first
    /// key in input order that reaches it.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut order = Vec::new();
        let mut raw: HashMap<String, String> = HashMap::new();
        for (from, to) in pairs {
            let (from, to) = (from.into(), to.into());
            if from == to {
                continue;
            }
            match raw.get(&from) {
                Some(existing) if *existing == to => {}
                Some(_) => return Err(WorldCupError::DuplicateRename(from)),
                None => {
                    order.push(from.clone());
                    raw.insert(from, to);
                }
            }
        }

        let mut renames = HashMap::with_capacity(raw.len());
        for from in order {
            let mut target = &raw[&from];
            let mut hops = 0;
            while let Some(next) = raw.get(target) {
                hops += 1;
                if hops > raw.len() {
                    return Err(WorldCupError::RenameCycle(from));
                }
                target = next;
            }
            let target = target.clone();
            renames.insert(from, target);
        }

        Ok(Self { renames })
    }

    pub fn normalize<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn normalize_record(&self, record: &MatchResult) -> MatchResult {
        MatchResult {
            year: record.year,
            winner: self.normalize(&record.winner).to_string(),
            runner_up: self.normalize(&record.runner_up).to_string(),
        }
    }

    pub fn normalize_all(&self, records: &[MatchResult]) -> Vec<MatchResult> {
        records.iter().map(|r| self.normalize_record(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_west_germany_merged() {
        let normalizer = Normalizer::historical();
        assert_eq!(normalizer.normalize("West Germany"), "Germany");
        assert_eq!(normalizer.normalize("Germany"), "Germany");
        assert_eq!(normalizer.normalize("Brazil"), "Brazil");
    }

    #[test]
    fn test_both_fields_normalized() {
        let normalizer = Normalizer::historical();
        let record = MatchResult::new(1966, "England", "West Germany");
        let normalized = normalizer.normalize_record(&record);

        assert_eq!(normalized.year, 1966);
        assert_eq!(normalized.winner, "England");
        assert_eq!(normalized.runner_up, "Germany");

        let record = MatchResult::new(1990, "West Germany", "Argentina");
        assert_eq!(normalizer.normalize_record(&record).winner, "Germany");
    }

    #[test]
    fn test_chain_flattened() {
        let normalizer =
            Normalizer::from_pairs([("Zaire", "Congo DR"), ("Congo DR", "DR Congo")]).unwrap();

        assert_eq!(normalizer.normalize("Zaire"), "DR Congo");
        assert_eq!(normalizer.normalize("Congo DR"), "DR Congo");
        assert_eq!(normalizer.normalize("DR Congo"), "DR Congo");
    }

    #[test]
    fn test_identity_pair_dropped() {
        let normalizer = Normalizer::from_pairs([("Italy", "Italy")]).unwrap();
        assert!(normalizer.is_empty());
        assert_eq!(normalizer.normalize("Italy"), "Italy");
    }

    #[test]
    fn test_cycle_rejected() {
        let result = Normalizer::from_pairs([("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(result.unwrap_err(), WorldCupError::RenameCycle("A".to_string()));

        let result = Normalizer::from_pairs([("C", "A"), ("A", "B"), ("B", "C")]);
        assert_eq!(result.unwrap_err(), WorldCupError::RenameCycle("C".to_string()));
    }

    #[test]
    fn test_cycle_reported_at_first_entry_key() {
        // "Zaire" leads into the cycle without being part of it
        let result =
            Normalizer::from_pairs([("Zaire", "Congo"), ("Congo", "Kongo"), ("Kongo", "Congo")]);
        assert_eq!(result.unwrap_err(), WorldCupError::RenameCycle("Zaire".to_string()));
    }

    #[test]
    fn test_conflicting_rename_rejected() {
        let result = Normalizer::from_pairs([("Zaire", "DR Congo"), ("Zaire", "Congo")]);
        assert_eq!(result.unwrap_err(), WorldCupError::DuplicateRename("Zaire".to_string()));
    }

    #[test]
    fn test_repeated_identical_rename_accepted() {
        let normalizer =
            Normalizer::from_pairs([("West Germany", "Germany"), ("West Germany", "Germany")])
                .unwrap();
        assert_eq!(normalizer.len(), 1);
        assert_eq!(normalizer.normalize("West Germany"), "Germany");
    }
}
