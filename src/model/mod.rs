//! Data model for parsed qualification tests.
//!
//! The model is the intermediate representation between the text parser and
//! the XML renderers. Records are built once per parse pass and never
//! mutated afterwards.

mod question;
mod question_set;

pub use question::{Answer, Question};
pub use question_set::QuestionSet;
