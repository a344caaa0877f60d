//! Country catalog: records, tier membership, and pool selection.
//!
//! The catalog is fetched once by the host (see `fetch` behind the
//! `fetch` feature) and handed to the engine, which caches it for the
//! rest of the process.

pub mod codes;
pub mod country;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod filter;

pub use codes::{tier_of, EASY_CODES, MEDIUM_CODES};
pub use country::{Country, CountryFlags, CountryName, NO_CAPITAL_FALLBACK};
#[cfg(feature = "fetch")]
pub use fetch::{CatalogError, RestCountriesClient, REST_COUNTRIES_URL};
pub use filter::{select_pool, MIN_POOL_SIZE};
