//! Result of a single word submission

use std::fmt;

/// What happened to a submitted word
///
/// Rejections are ordinary values: the player sees an alert and loses points, the
/// round goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Word accepted and added to the used words
    Accepted { points: u32 },
    /// Word was already played this round
    RejectedDuplicate { penalty: u32 },
    /// Word needs letters the root word does not have (or not enough of them)
    RejectedImpossibleLetters { penalty: u32 },
    /// Too short, the root word itself, or unknown to the dictionary
    RejectedNotAWord { penalty: u32 },
}

impl SubmissionOutcome {
    /// Signed change this outcome applies to the score
    #[must_use]
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Accepted { points } => points as i32,
            Self::RejectedDuplicate { penalty }
            | Self::RejectedImpossibleLetters { penalty }
            | Self::RejectedNotAWord { penalty } => -(penalty as i32),
        }
    }

    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Accepted { .. } => "Nice word",
            Self::RejectedDuplicate { .. } => "Word used already",
            Self::RejectedImpossibleLetters { .. } => "Word not possible",
            Self::RejectedNotAWord { .. } => "Word not recognized",
        }
    }

    /// Alert body shown to the player
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Accepted { points } => format!("You earn {points} score points."),
            Self::RejectedDuplicate { penalty } => {
                format!("Be more original. You lose {penalty} score points.")
            }
            Self::RejectedImpossibleLetters { penalty } => format!(
                "You can't spell that word from the root word! You lose {penalty} score points."
            ),
            Self::RejectedNotAWord { penalty } => format!(
                "That word is shorter than 3 letters, is the root word, or doesn't exist. \
                 You lose {penalty} score points."
            ),
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_delta_signs() {
        assert_eq!(SubmissionOutcome::Accepted { points: 10 }.score_delta(), 10);
        assert_eq!(
            SubmissionOutcome::RejectedDuplicate { penalty: 2 }.score_delta(),
            -2
        );
        assert_eq!(
            SubmissionOutcome::RejectedImpossibleLetters { penalty: 3 }.score_delta(),
            -3
        );
        assert_eq!(
            SubmissionOutcome::RejectedNotAWord { penalty: 5 }.score_delta(),
            -5
        );
    }

    #[test]
    fn only_accepted_is_accepted() {
        assert!(SubmissionOutcome::Accepted { points: 10 }.is_accepted());
        assert!(!SubmissionOutcome::RejectedDuplicate { penalty: 2 }.is_accepted());
        assert!(!SubmissionOutcome::RejectedImpossibleLetters { penalty: 3 }.is_accepted());
        assert!(!SubmissionOutcome::RejectedNotAWord { penalty: 5 }.is_accepted());
    }

    #[test]
    fn duplicate_alert_text() {
        let outcome = SubmissionOutcome::RejectedDuplicate { penalty: 2 };
        assert_eq!(outcome.title(), "Word used already");
        assert_eq!(
            outcome.message(),
            "Be more original. You lose 2 score points."
        );
    }

    #[test]
    fn messages_mention_penalty() {
        let impossible = SubmissionOutcome::RejectedImpossibleLetters { penalty: 3 };
        assert!(impossible.message().contains("lose 3 score points"));

        let not_a_word = SubmissionOutcome::RejectedNotAWord { penalty: 5 };
        assert!(not_a_word.message().contains("lose 5 score points"));
    }

    #[test]
    fn display_joins_title_and_message() {
        let outcome = SubmissionOutcome::RejectedDuplicate { penalty: 2 };
        assert_eq!(
            outcome.to_string(),
            "Word used already: Be more original. You lose 2 score points."
        );
    }
}
