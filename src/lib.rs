//! # geoquiz
//!
//! The round engine for a geography quiz: players identify a country by
//! its flag or capital under a 15 second countdown, across three fixed
//! difficulty tiers, with three lives per attempt.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: presentation reads [`RoundEngine`]
//!    through accessors and drives it through a small set of operations.
//!    No callbacks flow back into presentation.
//!
//! 2. **No IO in the engine**: the catalog fetch and the persistence
//!    store are injected collaborators. The engine is deterministic
//!    given a seed and a catalog, which makes whole games replayable in
//!    tests.
//!
//! 3. **Host-driven time**: the engine counts the countdown and the
//!    reveal delay in 100 ms ticks delivered by the host, guarded by a
//!    clock generation so stale timers can never touch a later round.
//!
//! ## Modules
//!
//! - `catalog`: country records, tier code sets, pool selection, and the
//!   optional restcountries.com client (feature `fetch`)
//! - `engine`: phases, questions, RNG, and the round engine itself
//! - `store`: tier completion persistence

pub mod catalog;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use crate::catalog::{select_pool, Country, CountryFlags, CountryName, MIN_POOL_SIZE};

#[cfg(feature = "fetch")]
pub use crate::catalog::{CatalogError, RestCountriesClient};

pub use crate::engine::{
    Difficulty, GameMode, Phase, QuizQuestion, QuizRng, RoundEngine, BASE_SCORE, OPTION_COUNT,
    REVEAL_DELAY_SECONDS, STARTING_LIVES, TICK_SECONDS, TOTAL_TIME_SECONDS,
};

pub use crate::store::{CompletionStore, FileCompletionStore, MemoryCompletionStore};
