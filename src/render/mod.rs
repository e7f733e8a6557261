//! Rendering module for converting question sets to output documents.

mod json;
mod options;
mod xml;

pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use xml::{to_answer_key, to_question_form, ANSWER_KEY_XMLNS, QUESTION_FORM_XMLNS};
