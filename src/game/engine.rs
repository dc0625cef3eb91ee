//! Game state and the submit transition

use super::rules::Rules;
use crate::core::{SubmissionOutcome, Word};
use crate::dictionary::Dictionary;
use crate::wordlists::{LoadError, RootWordPool, WordListProvider};
use rand::Rng;
use thiserror::Error;

/// Fatal startup failure
#[derive(Debug, Error)]
pub enum GameError {
    /// The root-word pool could not be obtained; no round can be played
    #[error("root word pool unavailable")]
    Configuration(#[from] LoadError),
}

/// State of one round
///
/// Created at game start, mutated only by [`GameState::submit`], replaced
/// wholesale on a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root_word: Word,
    used_words: Vec<Word>,
    score: i32,
    rules: Rules,
}

impl GameState {
    /// Start a round on a fixed root word with the classic rules
    #[must_use]
    pub fn new(root_word: Word) -> Self {
        Self::with_rules(root_word, Rules::CLASSIC)
    }

    #[must_use]
    pub const fn with_rules(root_word: Word, rules: Rules) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
            rules,
        }
    }

    /// Start a round on a random root word from `pool`
    pub fn start<R: Rng + ?Sized>(pool: &RootWordPool, rng: &mut R) -> Self {
        Self::new(pool.choose(rng))
    }

    /// Submit raw player input
    ///
    /// Returns `None` if the input is blank after normalization; nothing changes in
    /// that case. Otherwise the outcome's score delta is applied, and an accepted word
    /// goes to the front of the used words.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        raw: &str,
        dictionary: &D,
    ) -> Option<SubmissionOutcome> {
        let word = Word::normalize(raw)?;

        let outcome = self
            .rules
            .evaluate(&word, &self.root_word, &self.used_words, dictionary);

        self.score += outcome.score_delta();

        if outcome.is_accepted() {
            tracing::debug!(word = %word, score = self.score, "word accepted");
            self.used_words.insert(0, word);
        } else {
            tracing::debug!(word = %word, score = self.score, outcome = ?outcome, "word rejected");
        }

        Some(outcome)
    }

    #[must_use]
    pub const fn root_word(&self) -> &Word {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }
}

/// A playing session
///
/// Owns the loaded root-word pool, the dictionary, and the random source, so new
/// games never reload the word list.
pub struct Game<D, R> {
    pool: RootWordPool,
    state: GameState,
    dictionary: D,
    rng: R,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Load the root-word pool and start the first round
    ///
    /// # Errors
    ///
    /// Returns `GameError::Configuration` if the provider cannot supply a pool.
    pub fn start<P: WordListProvider + ?Sized>(
        provider: &P,
        dictionary: D,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let pool = provider.load()?;
        let state = GameState::start(&pool, &mut rng);

        tracing::info!(
            pool = pool.len(),
            root_word = %state.root_word(),
            "game started"
        );

        Ok(Self {
            pool,
            state,
            dictionary,
            rng,
        })
    }

    /// Start over on a fresh random root word from the loaded pool
    pub fn new_game(&mut self) {
        self.state = GameState::with_rules(self.pool.choose(&mut self.rng), self.state.rules);
        tracing::info!(root_word = %self.state.root_word(), "new game");
    }

    /// Submit raw player input to the current round
    pub fn submit(&mut self, raw: &str) -> Option<SubmissionOutcome> {
        self.state.submit(raw, &self.dictionary)
    }

    #[must_use]
    pub const fn pool(&self) -> &RootWordPool {
        &self.pool
    }

    #[must_use]
    pub const fn root_word(&self) -> &Word {
        self.state.root_word()
    }

    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        self.state.used_words()
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.state.score()
    }
}
