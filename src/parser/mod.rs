//! Question source parsing module.

mod options;
mod question_parser;

pub use options::{ErrorMode, ParseOptions};
pub use question_parser::QuestionParser;
