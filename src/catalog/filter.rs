//! Per-difficulty, per-mode eligible country pools.

use super::codes;
use super::country::Country;
use crate::engine::{Difficulty, GameMode};

/// Question generation needs one subject and three distractors.
pub const MIN_POOL_SIZE: usize = 4;

/// Select the countries eligible as question subjects for a game.
///
/// Partitions the catalog by tier, restricts to countries with capitals
/// in capitals mode, and falls back to the full catalog when the filtered
/// pool is too small to generate a question. The fallback trades tier
/// strictness for availability and is logged so it can be observed.
///
/// Deterministic given the same catalog; no side effects beyond the log.
#[must_use]
pub fn select_pool(all: &[Country], difficulty: Difficulty, mode: GameMode) -> Vec<Country> {
    let mut pool: Vec<Country> = all
        .iter()
        .filter(|c| codes::tier_of(c.code()) == difficulty)
        .cloned()
        .collect();

    if mode == GameMode::Capitals {
        pool.retain(Country::has_capital);
    }

    if pool.len() < MIN_POOL_SIZE {
        tracing::debug!(
            ?difficulty,
            ?mode,
            filtered = pool.len(),
            catalog = all.len(),
            "filtered pool below minimum, falling back to full catalog"
        );
        return all.to_vec();
    }

    pool
}
