//! Whole-directory conversion driver.
//!
//! A test directory holds one `*.properties` file and one `*.questions`
//! file. Conversion parses both, renders the two XML documents, and writes
//! them next to the inputs as `<basename>-questions.xml` and
//! `<basename>-answerkey.xml`, where `<basename>` is the directory name.
//! Everything is parsed and rendered before the first byte is written:
//! either both files are produced, or none.

mod discover;

pub use discover::find_file;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parser::{ParseOptions, QuestionParser};
use crate::render::{to_answer_key, to_question_form, RenderOptions};
use crate::settings::Settings;

/// Suffix of the settings input file.
pub const PROPERTIES_SUFFIX: &str = "properties";

/// Suffix of the question source input file.
pub const QUESTIONS_SUFFIX: &str = "questions";

/// Options for directory conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options; the overview title is always replaced by the
    /// `description` property of the test
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of a directory conversion.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    /// Path of the written QuestionForm document
    pub question_form_path: PathBuf,

    /// Path of the written AnswerKey document
    pub answer_key_path: PathBuf,

    /// Number of questions converted
    pub question_count: usize,

    /// Number of questions present in the answer key
    pub scored_question_count: usize,
}

/// Convert the test directory `dir` into its two XML documents.
pub fn convert_dir<P: AsRef<Path>>(dir: P, options: &ConvertOptions) -> Result<ConvertOutcome> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::MissingFolder(dir.to_path_buf()));
    }

    let settings = Settings::load(find_file(dir, PROPERTIES_SUFFIX)?)?;
    let description = settings.description()?.to_string();

    let source = fs::read_to_string(find_file(dir, QUESTIONS_SUFFIX)?)?;
    let set = QuestionParser::with_options(options.parse.clone()).parse(&source)?;

    let render = options.render.clone().with_title(description);
    let question_form = to_question_form(&set, &render)?;
    let answer_key = to_answer_key(&set, &render)?;

    let basename = test_name(dir)?;
    let question_form_path = dir.join(format!("{}-questions.xml", basename));
    let answer_key_path = dir.join(format!("{}-answerkey.xml", basename));

    fs::write(&question_form_path, question_form)?;
    fs::write(&answer_key_path, answer_key)?;

    log::info!(
        "converted {} question(s) from {} ({} in the answer key)",
        set.len(),
        dir.display(),
        set.scored_questions().count()
    );

    Ok(ConvertOutcome {
        question_form_path,
        answer_key_path,
        question_count: set.len(),
        scored_question_count: set.scored_questions().count(),
    })
}

/// Base name for the output files: the directory's final path component.
fn test_name(dir: &Path) -> Result<String> {
    if let Some(name) = dir.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    // Relative forms like "." carry no final component; resolve first.
    let resolved = dir.canonicalize()?;
    match resolved.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => Err(Error::MissingFolder(dir.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTIONS: &str = "Question MultipleChoiceText\n\
                             What color is the sky?\n\
                             Answer Blue\n\
                             correct 1\n\
                             Answer Red\n\
                             correct 0\n\
                             Score 5\n";

    fn write_test_dir(dir: &Path, questions: &str) {
        fs::write(
            dir.join("english.properties"),
            "description=An English test\n",
        )
        .unwrap();
        fs::write(dir.join("english.questions"), questions).unwrap();
    }

    #[test]
    fn test_convert_writes_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("english");
        fs::create_dir(&dir).unwrap();
        write_test_dir(&dir, QUESTIONS);

        let outcome = convert_dir(&dir, &ConvertOptions::new()).unwrap();
        assert_eq!(outcome.question_count, 1);
        assert_eq!(outcome.scored_question_count, 1);
        assert_eq!(
            outcome.question_form_path.file_name().unwrap(),
            "english-questions.xml"
        );
        assert_eq!(
            outcome.answer_key_path.file_name().unwrap(),
            "english-answerkey.xml"
        );

        let form = fs::read_to_string(&outcome.question_form_path).unwrap();
        assert!(form.contains("<Title>An English test</Title>"));
        assert!(form.contains("<![CDATA[What color is the sky?]]>"));

        let key = fs::read_to_string(&outcome.answer_key_path).unwrap();
        assert!(key.contains("<AnswerScore>5</AnswerScore>"));
    }

    #[test]
    fn test_missing_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let err = convert_dir(tmp.path().join("absent"), &ConvertOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MissingFolder(_)));
    }

    #[test]
    fn test_missing_questions_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("t.properties"), "description=x\n").unwrap();

        let err = convert_dir(tmp.path(), &ConvertOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn test_no_output_on_parse_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("broken");
        fs::create_dir(&dir).unwrap();
        write_test_dir(&dir, "Score 5\n");

        let err = convert_dir(&dir, &ConvertOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(!dir.join("broken-questions.xml").exists());
        assert!(!dir.join("broken-answerkey.xml").exists());
    }
}
