//! Country records as served by the catalog provider.
//!
//! The serde derives follow the restcountries v3.1 wire shape directly:
//! nested `name` and `flags` objects, `cca3` as the identity code, and
//! `capital` as an array of which only the first entry is meaningful.
//! A missing or empty `capital` array means the country has no capital.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Shown in place of a capital when a country has none.
/// Purely a presentation fallback, never stored in the record.
pub const NO_CAPITAL_FALLBACK: &str = "Sin Capital";

/// Common and official names of a country.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// Flag image references (raster and vector).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryFlags {
    pub png: String,
    pub svg: String,
}

/// An immutable country record.
///
/// Identity is the 3-letter `cca3` code: two records with the same code
/// are the same country regardless of any other field, and equality and
/// hashing are defined by the code alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub cca3: String,
    pub flags: CountryFlags,
    #[serde(default)]
    pub capital: Vec<String>,
    pub region: String,
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.cca3 == other.cca3
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cca3.hash(state);
    }
}

impl Country {
    /// Build a record from its parts. Hosts and tests construct catalogs
    /// with this; production catalogs come off the wire via serde.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        common_name: impl Into<String>,
        flag_png: impl Into<String>,
        capital: Option<&str>,
        region: impl Into<String>,
    ) -> Self {
        let common = common_name.into();
        Self {
            name: CountryName {
                official: common.clone(),
                common,
            },
            cca3: code.into(),
            flags: CountryFlags {
                png: flag_png.into(),
                svg: String::new(),
            },
            capital: capital.map(|c| vec![c.to_string()]).unwrap_or_default(),
            region: region.into(),
        }
    }

    /// The 3-letter identity code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.cca3
    }

    /// The capital, if the country has one.
    ///
    /// Empty strings on the wire count as absent.
    #[must_use]
    pub fn capital_name(&self) -> Option<&str> {
        self.capital
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// The capital or the presentation fallback.
    #[must_use]
    pub fn capital_display(&self) -> &str {
        self.capital_name().unwrap_or(NO_CAPITAL_FALLBACK)
    }

    /// Whether the country has a non-empty capital.
    #[must_use]
    pub fn has_capital(&self) -> bool {
        self.capital_name().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_code_only() {
        let a = Country::new("ESP", "Spain", "es.png", Some("Madrid"), "Europe");
        let b = Country::new("ESP", "España", "other.png", None, "Europa");
        let c = Country::new("FRA", "France", "fr.png", Some("Paris"), "Europe");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Country::new("ESP", "Spain", "es.png", Some("Madrid"), "Europe"));
        set.insert(Country::new("ESP", "España", "x.png", None, "Europe"));

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_capital_absent_and_empty() {
        let none = Country::new("ATA", "Antarctica", "aq.png", None, "Antarctic");
        assert_eq!(none.capital_name(), None);
        assert!(!none.has_capital());
        assert_eq!(none.capital_display(), NO_CAPITAL_FALLBACK);

        let empty = Country::new("XXX", "Nowhere", "x.png", Some(""), "Europe");
        assert_eq!(empty.capital_name(), None);
    }

    #[test]
    fn test_capital_present() {
        let esp = Country::new("ESP", "Spain", "es.png", Some("Madrid"), "Europe");
        assert_eq!(esp.capital_name(), Some("Madrid"));
        assert_eq!(esp.capital_display(), "Madrid");
    }

    #[test]
    fn test_decodes_wire_shape() {
        let json = r#"{
            "name": { "common": "Spain", "official": "Kingdom of Spain" },
            "cca3": "ESP",
            "flags": { "png": "https://flagcdn.com/w320/es.png", "svg": "https://flagcdn.com/es.svg" },
            "capital": ["Madrid"],
            "region": "Europe"
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.code(), "ESP");
        assert_eq!(country.name.common, "Spain");
        assert_eq!(country.capital_name(), Some("Madrid"));
        assert_eq!(country.region, "Europe");
    }

    #[test]
    fn test_decodes_missing_capital_array() {
        let json = r#"{
            "name": { "common": "Antarctica", "official": "Antarctica" },
            "cca3": "ATA",
            "flags": { "png": "aq.png", "svg": "aq.svg" },
            "region": "Antarctic"
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.capital_name(), None);
    }
}
