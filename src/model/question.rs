//! Question and answer records.

use serde::{Deserialize, Serialize};

/// A single question with its ordered answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Sequential identifier ("q1", "q2", ...) in input order
    pub id: String,

    /// Selection-presentation style token, passed through unvalidated
    pub style: String,

    /// Question body text, surrounding whitespace trimmed
    pub content: String,

    /// Score token, used verbatim in the answer key
    pub score: String,

    /// Answers in input order
    pub answers: Vec<Answer>,
}

impl Question {
    /// Number of answers marked correct.
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    /// Whether this question belongs in the answer key.
    ///
    /// A question with no correct answer is graded manually and is omitted
    /// from the answer-key document while still appearing in the question
    /// document.
    pub fn has_correct_answer(&self) -> bool {
        self.answers.iter().any(|a| a.correct)
    }

    /// Iterate over the answers marked correct, in input order.
    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.correct)
    }
}

/// A single answer option within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Sequential identifier ("a1", "a2", ...) scoped to the parent question
    pub id: String,

    /// Answer body text, surrounding whitespace trimmed
    pub text: String,

    /// Whether this answer is the/a correct one
    pub correct: bool,
}
