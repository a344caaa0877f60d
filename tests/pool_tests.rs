//! Property tests for pool selection and question generation.

use proptest::prelude::*;

use geoquiz::{select_pool, Country, Difficulty, GameMode, QuizQuestion, QuizRng, MIN_POOL_SIZE};

fn arb_catalog(min: usize) -> impl Strategy<Value = Vec<Country>> {
    prop::collection::hash_set("[A-Z]{3}", min..40).prop_map(|codes| {
        codes
            .into_iter()
            .enumerate()
            .map(|(i, code)| {
                let capital = if i % 5 == 0 { None } else { Some("Capital") };
                Country::new(&code, format!("Country {code}"), format!("{code}.png"), capital, "Europe")
            })
            .collect()
    })
}

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn arb_mode() -> impl Strategy<Value = GameMode> {
    prop::sample::select(vec![GameMode::Flags, GameMode::Capitals])
}

proptest! {
    /// A catalog of at least 4 countries never yields a pool below 4.
    #[test]
    fn pool_never_starves(
        catalog in arb_catalog(MIN_POOL_SIZE),
        difficulty in arb_difficulty(),
        mode in arb_mode(),
    ) {
        let pool = select_pool(&catalog, difficulty, mode);
        prop_assert!(pool.len() >= MIN_POOL_SIZE);
    }

    /// Every pool member comes from the catalog.
    #[test]
    fn pool_is_a_subset_of_the_catalog(
        catalog in arb_catalog(MIN_POOL_SIZE),
        difficulty in arb_difficulty(),
        mode in arb_mode(),
    ) {
        let pool = select_pool(&catalog, difficulty, mode);
        for country in &pool {
            prop_assert!(catalog.contains(country));
        }
    }

    /// Questions carry 4 distinct options including the subject.
    #[test]
    fn question_options_are_distinct_and_contain_subject(
        catalog in arb_catalog(MIN_POOL_SIZE),
        difficulty in arb_difficulty(),
        mode in arb_mode(),
        seed in any::<u64>(),
    ) {
        let pool = select_pool(&catalog, difficulty, mode);
        let mut rng = QuizRng::new(seed);
        let question = QuizQuestion::generate(&pool, &mut rng).unwrap();

        prop_assert_eq!(question.options.len(), MIN_POOL_SIZE);
        prop_assert!(question.options.contains(&question.country_to_guess));

        let mut codes: Vec<&str> = question.options.iter().map(Country::code).collect();
        codes.sort_unstable();
        codes.dedup();
        prop_assert_eq!(codes.len(), MIN_POOL_SIZE);
    }

    /// The subject is always drawn from the pool.
    #[test]
    fn question_subject_comes_from_the_pool(
        catalog in arb_catalog(MIN_POOL_SIZE),
        seed in any::<u64>(),
    ) {
        let pool = select_pool(&catalog, Difficulty::Hard, GameMode::Flags);
        let mut rng = QuizRng::new(seed);
        let question = QuizQuestion::generate(&pool, &mut rng).unwrap();
        prop_assert!(pool.contains(&question.country_to_guess));
    }
}
