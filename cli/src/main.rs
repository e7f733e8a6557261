//! qualgen CLI - MTurk qualification-test XML generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use qualgen::convert::{find_file, PROPERTIES_SUFFIX, QUESTIONS_SUFFIX};
use qualgen::{
    convert_dir, parse_file_with_options, render, ConvertOptions, JsonFormat, ParseOptions,
    QuestionSet, RenderOptions, Settings,
};

#[derive(Parser)]
#[command(name = "qualgen")]
#[command(version)]
#[command(about = "Generate MTurk qualification-test XML from plain-text question files", long_about = None)]
struct Cli {
    /// Test directory holding the properties and questions files
    #[arg(value_name = "TESTDIR")]
    testdir: Option<PathBuf>,

    /// Skip text that matches no question block instead of failing
    #[arg(long)]
    lenient: bool,

    /// Reject "correct" markers other than 0 and 1
    #[arg(long)]
    validate_correct: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a test directory to its two XML files
    Convert {
        /// Test directory holding the properties and questions files
        #[arg(value_name = "TESTDIR")]
        testdir: Option<PathBuf>,

        /// Skip text that matches no question block instead of failing
        #[arg(long)]
        lenient: bool,

        /// Reject "correct" markers other than 0 and 1
        #[arg(long)]
        validate_correct: bool,
    },

    /// Print the QuestionForm document
    Questions {
        /// Test directory
        #[arg(value_name = "TESTDIR")]
        testdir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the AnswerKey document
    Answerkey {
        /// Test directory
        #[arg(value_name = "TESTDIR")]
        testdir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Parse a test directory and report statistics
    Check {
        /// Test directory
        #[arg(value_name = "TESTDIR")]
        testdir: PathBuf,
    },

    /// Dump the parsed model as JSON
    Json {
        /// Test directory
        #[arg(value_name = "TESTDIR")]
        testdir: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            testdir,
            lenient,
            validate_correct,
        }) => cmd_convert(testdir, lenient, validate_correct),
        Some(Commands::Questions { testdir, output }) => {
            cmd_questions(&testdir, output.as_deref())
        }
        Some(Commands::Answerkey { testdir, output }) => {
            cmd_answerkey(&testdir, output.as_deref())
        }
        Some(Commands::Check { testdir }) => cmd_check(&testdir),
        Some(Commands::Json { testdir, compact }) => cmd_json(&testdir, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_convert(cli.testdir, cli.lenient, cli.validate_correct),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(lenient: bool, validate_correct: bool) -> ParseOptions {
    let mut options = ParseOptions::new().validate_correct(validate_correct);
    if lenient {
        options = options.lenient();
    }
    options
}

fn cmd_convert(
    testdir: Option<PathBuf>,
    lenient: bool,
    validate_correct: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match testdir {
        Some(dir) => dir,
        None => {
            println!(
                "{}",
                "Warning! You did not specify a target directory. Using \"example\".".yellow()
            );
            PathBuf::from("example")
        }
    };

    let options =
        ConvertOptions::new().with_parse_options(parse_options(lenient, validate_correct));
    let outcome = convert_dir(&dir, &options)?;

    println!(
        "{} {} question(s), {} in the answer key",
        "Converted".green().bold(),
        outcome.question_count,
        outcome.scored_question_count
    );
    println!("{}", "Output files:".green().bold());
    println!(
        "  {} {}",
        "├─".dimmed(),
        outcome.question_form_path.display()
    );
    println!("  {} {}", "└─".dimmed(), outcome.answer_key_path.display());

    Ok(())
}

/// Load the settings description and the parsed question set from a test
/// directory.
fn load_test(dir: &Path) -> Result<(String, QuestionSet), Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(qualgen::Error::MissingFolder(dir.to_path_buf()).into());
    }
    let settings = Settings::load(find_file(dir, PROPERTIES_SUFFIX)?)?;
    let description = settings.description()?.to_string();
    let set = parse_file_with_options(find_file(dir, QUESTIONS_SUFFIX)?, ParseOptions::new())?;
    Ok((description, set))
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_questions(dir: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (description, set) = load_test(dir)?;
    let options = RenderOptions::new().with_title(description);
    let xml = render::to_question_form(&set, &options)?;
    write_or_print(&xml, output)
}

fn cmd_answerkey(dir: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (_, set) = load_test(dir)?;
    let xml = render::to_answer_key(&set, &RenderOptions::new())?;
    write_or_print(&xml, output)
}

fn cmd_check(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (description, set) = load_test(dir)?;

    println!("{}", "Test Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Directory".bold(), dir.display());
    println!("{}: {}", "Description".bold(), description);
    println!("{}: {}", "Questions".bold(), set.len());
    println!(
        "{}: {}",
        "Correct answers".bold(),
        set.correct_answer_count()
    );

    let manual: Vec<&str> = set
        .questions
        .iter()
        .filter(|q| !q.has_correct_answer())
        .map(|q| q.id.as_str())
        .collect();
    if manual.is_empty() {
        println!("{}: none", "Manually graded".bold());
    } else {
        println!("{}: {}", "Manually graded".bold(), manual.join(", "));
    }
    println!(
        "{}: {}",
        "Answer key".bold(),
        if set.has_answer_key() { "Yes" } else { "No (all questions graded manually)" }
    );

    Ok(())
}

fn cmd_json(dir: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, set) = load_test(dir)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", render::to_json(&set, format)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "qualgen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("MTurk qualification-test XML generator");
    println!("License: MIT");
}
