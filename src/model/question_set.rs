//! The parsed question set.

use super::Question;
use serde::{Deserialize, Serialize};

/// An ordered set of questions parsed from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Questions in input order
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// Create an empty question set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of questions in the set.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check whether the set has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Total number of answers marked correct across all questions.
    pub fn correct_answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.correct_count()).sum()
    }

    /// Whether an answer key applies to this set.
    ///
    /// False means every question is graded manually; the answer-key
    /// document would have no question children.
    pub fn has_answer_key(&self) -> bool {
        self.questions.iter().any(|q| q.has_correct_answer())
    }

    /// Iterate over the questions that belong in the answer key.
    pub fn scored_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.has_correct_answer())
    }
}
