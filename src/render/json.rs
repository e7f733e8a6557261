//! JSON rendering for parsed question sets.
//!
//! Used for inspecting what the parser extracted before generating XML.

use crate::error::{Error, Result};
use crate::model::QuestionSet;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a question set to JSON.
pub fn to_json(set: &QuestionSet, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(set),
        JsonFormat::Compact => serde_json::to_string(set),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
