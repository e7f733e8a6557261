//! Regex-driven parser for the plain-text question format.
//!
//! The grammar is a repetition of blocks shaped like:
//!
//! ```text
//! Question <style>
//! <content, may span lines>
//! Answer <text>
//! correct <0|1>
//! Score <number>
//! ```
//!
//! with `#` line comments stripped before matching. Matching is not
//! anchored to line boundaries; content and answer text may span lines.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Answer, Question, QuestionSet};

use super::{ErrorMode, ParseOptions};

/// Parser for question source text.
pub struct QuestionParser {
    options: ParseOptions,
    comment_rx: Regex,
    question_rx: Regex,
    answer_rx: Regex,
}

impl QuestionParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            comment_rx: Regex::new(r"#.*").unwrap(),
            question_rx: Regex::new(
                r"(?s)Question (?P<style>\w*)\s*?(?P<content>.*?)(?P<answers>Answer.*?)Score (?P<score>\d+)",
            )
            .unwrap(),
            answer_rx: Regex::new(r"(?s)Answer(?P<text>.*?)\s*?correct (?P<correct>\d*)").unwrap(),
        }
    }

    /// Parse the full text of a question source file.
    ///
    /// Returns the ordered question set. Zero question blocks yield an
    /// empty set, not an error.
    pub fn parse(&self, text: &str) -> Result<QuestionSet> {
        let stripped = self.comment_rx.replace_all(text, "");

        let mut questions = Vec::new();
        let mut matched_spans = Vec::new();

        for (index, caps) in self.question_rx.captures_iter(&stripped).enumerate() {
            if let Some(whole) = caps.get(0) {
                matched_spans.push((whole.start(), whole.end()));
            }

            let answers = self.parse_answers(&caps["answers"])?;
            questions.push(Question {
                id: format!("q{}", index + 1),
                style: caps["style"].to_string(),
                content: caps["content"].trim().to_string(),
                score: caps["score"].to_string(),
                answers,
            });
        }

        if self.options.error_mode == ErrorMode::Strict {
            self.check_unmatched(&stripped, &matched_spans)?;
        }

        log::debug!("parsed {} question block(s)", questions.len());
        Ok(QuestionSet { questions })
    }

    fn parse_answers(&self, text: &str) -> Result<Vec<Answer>> {
        let mut answers = Vec::new();
        for (index, caps) in self.answer_rx.captures_iter(text).enumerate() {
            let marker = &caps["correct"];
            if self.options.validate_correct && marker != "0" && marker != "1" {
                return Err(Error::MalformedInput(format!(
                    "correct marker {:?} is not 0 or 1 (answer text: {:?})",
                    marker,
                    caps["text"].trim()
                )));
            }
            answers.push(Answer {
                id: format!("a{}", index + 1),
                text: caps["text"].trim().to_string(),
                // Hard threshold: only a literal 1 marks a correct answer.
                correct: marker == "1",
            });
        }
        Ok(answers)
    }

    /// Reject marker keywords that survived outside every matched block.
    ///
    /// Catches constructs such as a `Score` line with no preceding question
    /// or an answer block with no parent, which the block regex silently
    /// skips over.
    fn check_unmatched(&self, text: &str, spans: &[(usize, usize)]) -> Result<()> {
        let mut cursor = 0;
        for &(start, end) in spans {
            self.check_gap(&text[cursor..start])?;
            cursor = end;
        }
        self.check_gap(&text[cursor..])
    }

    fn check_gap(&self, gap: &str) -> Result<()> {
        for line in gap.lines() {
            let trimmed = line.trim();
            let keyword = trimmed.split_whitespace().next().unwrap_or("");
            if matches!(keyword, "Question" | "Answer" | "Score" | "correct") {
                return Err(Error::MalformedInput(format!(
                    "unmatched {:?} line outside any question block: {:?}",
                    keyword, trimmed
                )));
            }
        }
        Ok(())
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new()
    }
}
