//! The round engine and its supporting types.

pub mod engine;
pub mod phase;
pub mod question;
pub mod rng;

pub use engine::{
    RoundEngine, BASE_SCORE, REVEAL_DELAY_SECONDS, STARTING_LIVES, TICK_SECONDS,
    TOTAL_TIME_SECONDS,
};
pub use phase::{Difficulty, GameMode, Phase};
pub use question::{QuizQuestion, OPTION_COUNT};
pub use rng::QuizRng;
