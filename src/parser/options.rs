//! Parsing options and configuration.

/// Options for parsing question source text.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Whether a `correct` marker other than `0`/`1` is an error
    pub validate_correct: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip text that matches no question block).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Reject `correct` markers other than `0` and `1`.
    ///
    /// By default any marker other than `1` (including an absent digit) is
    /// silently treated as not-correct, matching the hard `1` threshold.
    pub fn validate_correct(mut self, validate: bool) -> Self {
        self.validate_correct = validate;
        self
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail when marker keywords appear outside any matched question block
    #[default]
    Strict,
    /// Skip unmatched text and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().lenient().validate_correct(true);
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.validate_correct);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.validate_correct);
    }
}
