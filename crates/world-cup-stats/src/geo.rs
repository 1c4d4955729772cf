//! Map Codes
//!
//! ISO 3166-1 alpha-3 codes used to place countries on the choropleth map.
//! A country without a code is simply not plotted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical country name → ISO alpha-3.
///
/// Czechoslovakia is placed on the Czech Republic (CZE), a simplification
/// carried over from the source data and kept as-is.
const ISO_ALPHA3: [(&str, &str); 13] = [
    ("Uruguay", "URY"),
    ("Italy", "ITA"),
    ("Germany", "DEU"),
    ("Brazil", "BRA"),
    ("England", "GBR"),
    ("Argentina", "ARG"),
    ("France", "FRA"),
    ("Czechoslovakia", "CZE"),
    ("Hungary", "HUN"),
    ("Sweden", "SWE"),
    ("Netherlands", "NLD"),
    ("Spain", "ESP"),
    ("Croatia", "HRV"),
];

/// Three uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoCode(String);

impl GeoCode {
    pub fn new(code: &str) -> Option<Self> {
        let valid = code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase());
        valid.then(|| Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup from canonical country name to map code
#[derive(Debug, Clone, Default)]
pub struct GeoTable {
    codes: HashMap<String, GeoCode>,
}

impl GeoTable {
    pub fn iso_alpha3() -> Self {
        let codes = ISO_ALPHA3
            .iter()
            .filter_map(|&(country, code)| Some((country.to_string(), GeoCode::new(code)?)))
            .collect();

        Self { codes }
    }

    /// Build from arbitrary pairs; malformed codes are skipped with a warning.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut codes = HashMap::new();
        for (country, code) in pairs {
            match GeoCode::new(code) {
                Some(code) => {
                    codes.insert(country.to_string(), code);
                }
                None => tracing::warn!(country, code, "skipping malformed map code"),
            }
        }

        Self { codes }
    }

    pub fn lookup(&self, country: &str) -> Option<GeoCode> {
        self.codes.get(country).cloned()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
