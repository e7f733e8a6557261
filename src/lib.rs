//! # qualgen
//!
//! Converts a plain-text question/answer source format into the two XML
//! documents Amazon Mechanical Turk expects for qualification tests: a
//! QuestionForm and an AnswerKey.
//!
//! ## Quick Start
//!
//! ```no_run
//! use qualgen::{parse_file, render};
//!
//! fn main() -> qualgen::Result<()> {
//!     // Parse a question source file
//!     let set = parse_file("english.questions")?;
//!
//!     // Render the QuestionForm document
//!     let options = render::RenderOptions::new().with_title("An English test");
//!     let xml = render::to_question_form(&set, &options)?;
//!     println!("{}", xml);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Source format
//!
//! ```text
//! # comments run to end of line
//! Question <style>
//! <question text, may span lines>
//! Answer <answer text>
//! correct <0|1>
//! Score <number>
//! ```
//!
//! A question whose answers all carry `correct 0` is graded manually: it
//! appears in the QuestionForm but not in the AnswerKey.

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod settings;

// Re-export commonly used types
pub use convert::{convert_dir, ConvertOptions, ConvertOutcome};
pub use error::{Error, Result};
pub use model::{Answer, Question, QuestionSet};
pub use parser::{ErrorMode, ParseOptions, QuestionParser};
pub use render::{JsonFormat, RenderOptions};
pub use settings::Settings;

use std::fs;
use std::path::Path;

/// Parse question source text into a question set.
///
/// # Example
///
/// ```
/// let set = qualgen::parse_str(
///     "Question radiobutton\nPick one\nAnswer A\ncorrect 1\nScore 2\n",
/// ).unwrap();
/// assert_eq!(set.len(), 1);
/// ```
pub fn parse_str(text: &str) -> Result<QuestionSet> {
    QuestionParser::new().parse(text)
}

/// Parse question source text with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<QuestionSet> {
    QuestionParser::with_options(options).parse(text)
}

/// Parse a question source file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<QuestionSet> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a question source file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<QuestionSet> {
    let text = fs::read_to_string(path)?;
    parse_str_with_options(&text, options)
}

/// Builder for parsing and rendering qualification tests.
///
/// # Example
///
/// ```no_run
/// use qualgen::Qualgen;
///
/// let xml = Qualgen::new()
///     .with_title("An English test")
///     .lenient()
///     .parse_path("english.questions")?
///     .to_question_form()?;
/// # Ok::<(), qualgen::Error>(())
/// ```
pub struct Qualgen {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Qualgen {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Reject `correct` markers other than `0` and `1`.
    pub fn validate_correct(mut self) -> Self {
        self.parse_options = self.parse_options.validate_correct(true);
        self
    }

    /// Set the overview title of the question form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the XML indentation width.
    pub fn with_indent(mut self, size: usize) -> Self {
        self.render_options = self.render_options.with_indent(size);
        self
    }

    /// Parse source text and return a result wrapper.
    pub fn parse(self, text: &str) -> Result<QualgenResult> {
        let set = QuestionParser::with_options(self.parse_options).parse(text)?;
        Ok(QualgenResult {
            set,
            render_options: self.render_options,
        })
    }

    /// Parse a source file and return a result wrapper.
    pub fn parse_path<P: AsRef<Path>>(self, path: P) -> Result<QualgenResult> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }
}

impl Default for Qualgen {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a question source.
pub struct QualgenResult {
    set: QuestionSet,
    render_options: RenderOptions,
}

impl QualgenResult {
    /// Render the QuestionForm document.
    pub fn to_question_form(&self) -> Result<String> {
        render::to_question_form(&self.set, &self.render_options)
    }

    /// Render the AnswerKey document.
    pub fn to_answer_key(&self) -> Result<String> {
        render::to_answer_key(&self.set, &self.render_options)
    }

    /// Dump the parsed model as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.set, format)
    }

    /// Get the parsed question set.
    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }
}
