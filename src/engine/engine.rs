//! The round engine: session state, countdown, adjudication, progression.
//!
//! ## Ownership
//!
//! The engine exclusively owns its state; presentation reads it through
//! accessors and drives it through the public operations. All mutation
//! happens through `&mut self`, so confining the engine to one task or
//! thread serializes every state change.
//!
//! ## Time
//!
//! The engine holds no OS timers. The host calls [`RoundEngine::tick`]
//! every 100 ms with the generation it captured when the clock started;
//! the engine counts the 15 s countdown and the 2 s reveal delay in
//! whole ticks. A tick carrying a stale generation is ignored, so a host
//! timer that outlives its round can never corrupt a later one.
//!
//! ## Catalog loading
//!
//! The engine performs no IO. Operations that need the catalog return
//! `true` when the host must run a fetch and report back through
//! [`RoundEngine::catalog_loaded`] or [`RoundEngine::catalog_failed`].
//! The first successful catalog is cached for the engine's lifetime.

use tracing::{debug, warn};

use super::phase::{Difficulty, GameMode, Phase};
use super::question::QuizQuestion;
use super::rng::QuizRng;
use crate::catalog::{select_pool, Country};
use crate::store::CompletionStore;

/// Countdown length per question.
pub const TOTAL_TIME_SECONDS: f64 = 15.0;
/// One clock tick.
pub const TICK_SECONDS: f64 = 0.1;
/// How long the correct/incorrect outcome stays on screen.
pub const REVEAL_DELAY_SECONDS: f64 = 2.0;
/// Lives per game.
pub const STARTING_LIVES: u32 = 3;
/// Score for a correct answer, before the time bonus.
pub const BASE_SCORE: u32 = 10;

// 15.0 s and 2.0 s at 0.1 s per tick. Time is counted in whole ticks so
// repeated float subtraction can never drift.
const TOTAL_TICKS: u32 = 150;
const REVEAL_TICKS: u32 = 20;

/// What the host owes the engine after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingLoad {
    /// Start the game once the catalog arrives.
    Game,
    /// Open the study branch once the catalog arrives.
    Study,
}

/// The quiz session state machine.
pub struct RoundEngine {
    phase: Phase,
    mode: GameMode,
    difficulty: Difficulty,

    score: u32,
    current_round: u32,
    lives: u32,
    current_question: Option<QuizQuestion>,
    selected_answer: Option<Country>,
    result_revealed: bool,

    time_remaining_ticks: u32,
    reveal_ticks_left: u32,
    /// Bumped whenever the active clock must die: new question, reveal
    /// resolved, phase left. Ticks carrying an older value are no-ops.
    generation: u64,

    selected_continent: String,

    catalog: Option<Vec<Country>>,
    pool: Vec<Country>,
    pending: Option<PendingLoad>,

    rng: QuizRng,
    store: Box<dyn CompletionStore>,
}

impl RoundEngine {
    /// Engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new(store: Box<dyn CompletionStore>) -> Self {
        Self::with_seed(store, QuizRng::from_entropy().seed())
    }

    /// Engine with a fixed seed; identical seeds replay identical games.
    #[must_use]
    pub fn with_seed(store: Box<dyn CompletionStore>, seed: u64) -> Self {
        Self {
            phase: Phase::Menu,
            mode: GameMode::Flags,
            difficulty: Difficulty::Medium,
            score: 0,
            current_round: 1,
            lives: STARTING_LIVES,
            current_question: None,
            selected_answer: None,
            result_revealed: false,
            time_remaining_ticks: TOTAL_TICKS,
            reveal_ticks_left: 0,
            generation: 0,
            selected_continent: "Europe".to_string(),
            catalog: None,
            pool: Vec::new(),
            pending: None,
            rng: QuizRng::new(seed),
            store,
        }
    }

    // === Navigation ===

    /// Back to the main menu, cancelling any active clock.
    pub fn exit_to_menu(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.phase = Phase::Menu;
    }

    /// Pick a mode and move to level selection. Resets session counters.
    pub fn go_to_level_selection(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_session();
        self.phase = Phase::LevelSelection;
    }

    /// Open the study branch.
    ///
    /// Returns `true` when the host must fetch the catalog first.
    #[must_use]
    pub fn go_to_study(&mut self) -> bool {
        if self.catalog.is_some() {
            self.phase = Phase::StudySelection;
            false
        } else {
            self.pending = Some(PendingLoad::Study);
            self.phase = Phase::Loading;
            true
        }
    }

    /// Browse one continent's countries.
    pub fn open_continent(&mut self, region: &str) {
        self.selected_continent = region.to_string();
        self.phase = Phase::StudyList;
    }

    /// Countries in the selected continent, sorted by common name.
    #[must_use]
    pub fn countries_for_selected_continent(&self) -> Vec<&Country> {
        let mut countries: Vec<&Country> = self
            .catalog
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|c| c.region == self.selected_continent)
            .collect();
        countries.sort_by(|a, b| a.name.common.cmp(&b.name.common));
        countries
    }

    // === Game lifecycle ===

    /// Start a game at the given difficulty.
    ///
    /// Resets score, lives, and round counters, then either begins play
    /// immediately (catalog cached) or enters `Loading` and returns
    /// `true` so the host runs the fetch.
    #[must_use]
    pub fn start_game(&mut self, difficulty: Difficulty) -> bool {
        self.difficulty = difficulty;
        self.reset_session();
        self.phase = Phase::Loading;

        if self.catalog.is_some() {
            self.begin_play();
            false
        } else {
            self.pending = Some(PendingLoad::Game);
            true
        }
    }

    /// Restart the current difficulty from scratch.
    #[must_use]
    pub fn retry_level(&mut self) -> bool {
        self.start_game(self.difficulty)
    }

    /// Deliver a fetched catalog and resume whatever was waiting on it.
    ///
    /// Only the first successful catalog is kept; ignored outside
    /// `Loading`, so a fetch completing after the user backed out does
    /// nothing.
    pub fn catalog_loaded(&mut self, countries: Vec<Country>) {
        if self.phase != Phase::Loading {
            return;
        }
        if self.catalog.is_none() {
            self.catalog = Some(countries);
        }
        match self.pending.take() {
            Some(PendingLoad::Game) => self.begin_play(),
            Some(PendingLoad::Study) => self.phase = Phase::StudySelection,
            None => self.phase = Phase::Menu,
        }
    }

    /// Report a failed catalog fetch. Counters stay at their reset values.
    pub fn catalog_failed(&mut self) {
        if self.phase != Phase::Loading {
            return;
        }
        warn!("catalog fetch failed, entering error phase");
        self.pending = None;
        self.phase = Phase::Error;
    }

    // === Playing ===

    /// Adjudicate an answer for the current question.
    ///
    /// Ignored while the outcome is revealed, outside the playing phase,
    /// or with no question on screen: late taps are ordinary UI races,
    /// not errors.
    pub fn submit_answer(&mut self, selected: &Country) {
        if self.phase != Phase::Playing || self.result_revealed {
            return;
        }
        let Some(question) = &self.current_question else {
            return;
        };

        let correct = question.is_correct(selected);
        self.selected_answer = Some(selected.clone());
        self.reveal(correct);
    }

    /// Advance the clock by one tick.
    ///
    /// `generation` must be the value of [`Self::clock_generation`] read
    /// when the host timer started; stale ticks are ignored. While the
    /// question is live this counts the 15 s budget down and fires the
    /// time-up path at zero. While the outcome is revealed it counts the
    /// 2 s delay and then advances the round or ends the game.
    pub fn tick(&mut self, generation: u64) {
        if generation != self.generation || self.phase != Phase::Playing {
            return;
        }

        if self.result_revealed {
            self.reveal_ticks_left = self.reveal_ticks_left.saturating_sub(1);
            if self.reveal_ticks_left == 0 {
                self.advance_round();
            }
        } else if self.current_question.is_some() {
            if self.time_remaining_ticks > 0 {
                self.time_remaining_ticks -= 1;
            } else {
                self.handle_time_up();
            }
        }
    }

    // === Read access ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based round index.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_question.as_ref()
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&Country> {
        self.selected_answer.as_ref()
    }

    /// Whether the current question's outcome is on screen.
    #[must_use]
    pub fn result_revealed(&self) -> bool {
        self.result_revealed
    }

    /// Seconds left on the countdown, in `[0, TOTAL_TIME_SECONDS]`.
    #[must_use]
    pub fn time_remaining(&self) -> f64 {
        f64::from(self.time_remaining_ticks) * TICK_SECONDS
    }

    #[must_use]
    pub fn total_time(&self) -> f64 {
        TOTAL_TIME_SECONDS
    }

    /// The generation a host timer must capture before ticking.
    #[must_use]
    pub fn clock_generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn selected_continent(&self) -> &str {
        &self.selected_continent
    }

    /// Whether a tier has ever been completed.
    #[must_use]
    pub fn is_level_completed(&self, difficulty: Difficulty) -> bool {
        self.store.is_completed(difficulty)
    }

    // === Internals ===

    fn reset_session(&mut self) {
        self.generation += 1;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.current_round = 1;
        self.current_question = None;
        self.selected_answer = None;
        self.result_revealed = false;
        self.time_remaining_ticks = TOTAL_TICKS;
        self.reveal_ticks_left = 0;
        self.pending = None;
    }

    fn begin_play(&mut self) {
        let catalog = self.catalog.as_deref().unwrap_or_default();
        self.pool = select_pool(catalog, self.difficulty, self.mode);
        self.phase = Phase::Playing;
        self.next_question();
    }

    /// New question, fresh clock. An empty pool leaves the round without
    /// a question; every input is then ignored rather than crashing.
    fn next_question(&mut self) {
        self.generation += 1;
        self.selected_answer = None;
        self.result_revealed = false;
        self.time_remaining_ticks = TOTAL_TICKS;
        self.reveal_ticks_left = 0;
        self.current_question = QuizQuestion::generate(&self.pool, &mut self.rng);
        if self.current_question.is_none() {
            debug!(pool = self.pool.len(), "no question generated, pool empty");
        }
    }

    fn handle_time_up(&mut self) {
        // Time-up is adjudication with no selection: always a lost life.
        self.selected_answer = None;
        self.reveal(false);
    }

    fn reveal(&mut self, correct: bool) {
        self.result_revealed = true;
        self.reveal_ticks_left = REVEAL_TICKS;

        if correct {
            let bonus = self.time_remaining_ticks / 10 * 2;
            self.score += BASE_SCORE + bonus;
        } else {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.finish_game(false);
            }
        }
    }

    fn advance_round(&mut self) {
        if self.current_round < self.difficulty.total_rounds() {
            self.current_round += 1;
            self.next_question();
        } else {
            self.finish_game(true);
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.generation += 1;
        if won {
            self.store.mark_completed(self.difficulty);
        }
        self.phase = Phase::GameOver;
    }
}
