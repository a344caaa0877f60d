//! Fixed difficulty tier membership.
//!
//! Easy and medium are explicit inclusion lists; hard is everything else.
//! These are configuration constants, not derived from catalog data.

use crate::engine::Difficulty;

/// Codes of the 17 widely recognizable countries in the easy tier.
pub const EASY_CODES: [&str; 17] = [
    "USA", "ESP", "ITA", "FRA", "DEU", "GBR", "JPN", "CHN", "BRA", "CAN", "ARG", "PRT", "RUS",
    "AUS", "MEX", "IND", "KOR",
];

/// Codes of the 30 countries in the medium tier.
pub const MEDIUM_CODES: [&str; 30] = [
    "SWE", "NOR", "DNK", "FIN", "POL", "UKR", "TUR", "EGY", "ZAF", "COL", "CHL", "PER", "SAU",
    "THA", "VNM", "IDN", "MYS", "PHL", "NZL", "IRL", "AUT", "HUN", "CZE", "GRC", "NLD", "BEL",
    "CHE", "HRV", "MAR", "URY",
];

/// The tier a country code belongs to.
#[must_use]
pub fn tier_of(code: &str) -> Difficulty {
    if EASY_CODES.contains(&code) {
        Difficulty::Easy
    } else if MEDIUM_CODES.contains(&code) {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}
