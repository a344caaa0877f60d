//! Per-round quiz questions.

use smallvec::SmallVec;

use super::rng::QuizRng;
use crate::catalog::Country;

/// Options shown per question: the subject plus three distractors.
pub const OPTION_COUNT: usize = 4;

/// One round's question. Created at round start, discarded at round end.
#[derive(Clone, Debug)]
pub struct QuizQuestion {
    /// The country the player must identify.
    pub country_to_guess: Country,
    /// Answer options in display order. Contains `country_to_guess`.
    pub options: SmallVec<[Country; OPTION_COUNT]>,
}

impl QuizQuestion {
    /// Generate a question from the pool.
    ///
    /// Draws a uniform random subject, then up to three distinct
    /// distractors without replacement, and shuffles the display order.
    /// Callers should hand in a pool of at least `OPTION_COUNT` countries
    /// (the pool selection fallback guarantees this for any catalog of
    /// that size); a smaller pool yields fewer options. Returns `None`
    /// only for an empty pool.
    #[must_use]
    pub fn generate(pool: &[Country], rng: &mut QuizRng) -> Option<Self> {
        let country_to_guess = rng.choose(pool)?.clone();

        let mut distractors: Vec<Country> = pool
            .iter()
            .filter(|c| **c != country_to_guess)
            .cloned()
            .collect();
        rng.shuffle(&mut distractors);
        distractors.truncate(OPTION_COUNT - 1);

        let mut options: SmallVec<[Country; OPTION_COUNT]> = distractors.into();
        options.push(country_to_guess.clone());
        rng.shuffle(&mut options);

        Some(Self {
            country_to_guess,
            options,
        })
    }

    /// Whether the given country is the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &Country) -> bool {
        *answer == self.country_to_guess
    }
}
