//! Word validation rules
//!
//! A submission passes through three checks in a fixed order: originality, letter
//! feasibility, realness. The first failing check decides the penalty, so the order
//! matters whenever a word fails more than one of them.

use crate::core::{LetterCounts, SubmissionOutcome, Word};
use crate::dictionary::{DEFAULT_LOCALE, Dictionary};

/// Scoring parameters of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Shortest word that counts as real
    pub min_length: usize,
    pub accepted_points: u32,
    pub duplicate_penalty: u32,
    pub impossible_letters_penalty: u32,
    pub not_a_word_penalty: u32,
}

impl Rules {
    /// +10 per word; -2 duplicate, -3 impossible, -5 not a word; three letters minimum
    pub const CLASSIC: Self = Self {
        min_length: 3,
        accepted_points: 10,
        duplicate_penalty: 2,
        impossible_letters_penalty: 3,
        not_a_word_penalty: 5,
    };

    /// Run the validation chain for an already normalized word
    ///
    /// Pure: nothing is recorded, the caller applies the outcome.
    pub fn evaluate<D: Dictionary + ?Sized>(
        &self,
        word: &Word,
        root_word: &Word,
        used_words: &[Word],
        dictionary: &D,
    ) -> SubmissionOutcome {
        if !is_original(word, used_words) {
            return SubmissionOutcome::RejectedDuplicate {
                penalty: self.duplicate_penalty,
            };
        }

        if !is_possible(word, root_word) {
            return SubmissionOutcome::RejectedImpossibleLetters {
                penalty: self.impossible_letters_penalty,
            };
        }

        if !self.is_real(word, root_word, dictionary) {
            return SubmissionOutcome::RejectedNotAWord {
                penalty: self.not_a_word_penalty,
            };
        }

        SubmissionOutcome::Accepted {
            points: self.accepted_points,
        }
    }

    /// Long enough, not the root word, and known to the dictionary
    pub fn is_real<D: Dictionary + ?Sized>(
        &self,
        word: &Word,
        root_word: &Word,
        dictionary: &D,
    ) -> bool {
        word.letter_count() >= self.min_length
            && word != root_word
            && dictionary.is_valid_word(word.text(), DEFAULT_LOCALE)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Not played yet this round
#[must_use]
pub fn is_original(word: &Word, used_words: &[Word]) -> bool {
    !used_words.contains(word)
}

/// Every letter available in the root word, respecting multiplicity
#[must_use]
pub fn is_possible(word: &Word, root_word: &Word) -> bool {
    LetterCounts::from_word(root_word.text()).can_spell(word.text())
}
