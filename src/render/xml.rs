//! XML rendering for the MTurk QuestionForm and AnswerKey schemas.
//!
//! Both documents are produced as indented, UTF-8 XML strings. User-supplied
//! text (question content, answer text) is wrapped in CDATA sections so
//! markup-significant characters survive verbatim.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::model::QuestionSet;

use super::RenderOptions;

/// Namespace of the QuestionForm schema.
pub const QUESTION_FORM_XMLNS: &str = "http://mechanicalturk.amazonaws.com/AWSMechanicalTurkDataSchemas/2005-10-01/QuestionForm.xsd";

/// Namespace of the AnswerKey schema.
pub const ANSWER_KEY_XMLNS: &str = "http://mechanicalturk.amazonaws.com/AWSMechanicalTurkDataSchemas/2005-10-01/AnswerKey.xsd";

/// Render the QuestionForm document.
///
/// Every question appears in source order, with every answer (correct or
/// not) listed as a selection. The overview title comes from
/// [`RenderOptions::title`].
pub fn to_question_form(set: &QuestionSet, options: &RenderOptions) -> Result<String> {
    let mut xml = XmlBuilder::new(options.indent_size);
    xml.declaration()?;
    xml.start_root("QuestionForm", QUESTION_FORM_XMLNS)?;

    xml.start("Overview")?;
    xml.text_element("Title", &options.title)?;
    xml.end("Overview")?;

    for question in &set.questions {
        xml.start("Question")?;
        xml.text_element("QuestionIdentifier", &question.id)?;
        xml.text_element("IsRequired", "true")?;

        xml.start("QuestionContent")?;
        xml.cdata_element("Text", &question.content)?;
        xml.end("QuestionContent")?;

        xml.start("AnswerSpecification")?;
        xml.start("SelectionAnswer")?;
        xml.text_element("StyleSuggestion", &question.style)?;
        xml.start("Selections")?;
        for answer in &question.answers {
            xml.start("Selection")?;
            xml.text_element("SelectionIdentifier", &answer.id)?;
            xml.cdata_element("Text", &answer.text)?;
            xml.end("Selection")?;
        }
        xml.end("Selections")?;
        xml.end("SelectionAnswer")?;
        xml.end("AnswerSpecification")?;

        xml.end("Question")?;
    }

    xml.end("QuestionForm")?;
    xml.finish()
}

/// Render the AnswerKey document.
///
/// Only questions with at least one correct answer appear; each carries one
/// `AnswerOption` per correct answer scored with the question's score token.
/// With no scored questions at all the result is a valid, childless
/// document; callers may use [`QuestionSet::has_answer_key`] to skip
/// writing it.
pub fn to_answer_key(set: &QuestionSet, options: &RenderOptions) -> Result<String> {
    let mut xml = XmlBuilder::new(options.indent_size);
    xml.declaration()?;
    xml.start_root("AnswerKey", ANSWER_KEY_XMLNS)?;

    for question in set.scored_questions() {
        xml.start("Question")?;
        xml.text_element("QuestionIdentifier", &question.id)?;
        for answer in question.correct_answers() {
            xml.start("AnswerOption")?;
            xml.text_element("SelectionIdentifier", &answer.id)?;
            xml.text_element("AnswerScore", &question.score)?;
            xml.end("AnswerOption")?;
        }
        xml.end("Question")?;
    }

    xml.end("AnswerKey")?;
    xml.finish()
}

/// Thin wrapper over `quick_xml::Writer` for the element shapes both
/// documents share.
struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    fn new(indent_size: usize) -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', indent_size),
        }
    }

    fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    fn start_root(&mut self, tag: &str, xmlns: &str) -> Result<()> {
        let mut root = BytesStart::new(tag);
        root.push_attribute(("xmlns", xmlns));
        self.writer.write_event(Event::Start(root))?;
        Ok(())
    }

    fn start(&mut self, tag: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(tag)))?;
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Element whose text is entity-escaped on write.
    fn text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.start(tag)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    /// Element whose text is carried verbatim in CDATA sections.
    ///
    /// A payload containing `]]>` cannot live in a single CDATA section, so
    /// it is split across adjacent sections at each occurrence.
    fn cdata_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.start(tag)?;
        let parts: Vec<&str> = text.split("]]>").collect();
        if let Some((last, init)) = parts.split_last() {
            for (i, part) in init.iter().enumerate() {
                let piece = if i == 0 {
                    format!("{}]]", part)
                } else {
                    format!(">{}]]", part)
                };
                self.writer.write_event(Event::CData(BytesCData::new(piece)))?;
            }
            let piece = if init.is_empty() {
                (*last).to_string()
            } else {
                format!(">{}", last)
            };
            self.writer.write_event(Event::CData(BytesCData::new(piece)))?;
        }
        self.end(tag)
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| Error::Render(format!("output is not valid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Question};

    fn sky_set() -> QuestionSet {
        QuestionSet {
            questions: vec![Question {
                id: "q1".to_string(),
                style: "MultipleChoiceText".to_string(),
                content: "What color is the sky?".to_string(),
                score: "5".to_string(),
                answers: vec![
                    Answer {
                        id: "a1".to_string(),
                        text: "Blue".to_string(),
                        correct: true,
                    },
                    Answer {
                        id: "a2".to_string(),
                        text: "Red".to_string(),
                        correct: false,
                    },
                ],
            }],
        }
    }

    fn manual_question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            style: "text".to_string(),
            content: "Describe your experience.".to_string(),
            score: "10".to_string(),
            answers: vec![Answer {
                id: "a1".to_string(),
                text: "free form".to_string(),
                correct: false,
            }],
        }
    }

    #[test]
    fn test_question_form_structure() {
        let options = RenderOptions::new().with_title("Color test");
        let xml = to_question_form(&sky_set(), &options).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(&format!("<QuestionForm xmlns=\"{}\">", QUESTION_FORM_XMLNS)));
        assert!(xml.contains("<Title>Color test</Title>"));
        assert!(xml.contains("<QuestionIdentifier>q1</QuestionIdentifier>"));
        assert!(xml.contains("<IsRequired>true</IsRequired>"));
        assert!(xml.contains("<![CDATA[What color is the sky?]]>"));
        assert!(xml.contains("<StyleSuggestion>MultipleChoiceText</StyleSuggestion>"));
        assert!(xml.contains("<SelectionIdentifier>a1</SelectionIdentifier>"));
        assert!(xml.contains("<![CDATA[Blue]]>"));
        // Not-correct answers still appear in the question form.
        assert!(xml.contains("<SelectionIdentifier>a2</SelectionIdentifier>"));
        assert!(xml.contains("<![CDATA[Red]]>"));
        // Indented output.
        assert!(xml.contains("\n  <Question>"));
    }

    #[test]
    fn test_question_order_preserved() {
        let mut set = sky_set();
        let mut second = sky_set().questions.remove(0);
        second.id = "q2".to_string();
        set.questions.push(second);

        let xml = to_question_form(&set, &RenderOptions::default()).unwrap();
        let q1 = xml.find("<QuestionIdentifier>q1<").unwrap();
        let q2 = xml.find("<QuestionIdentifier>q2<").unwrap();
        assert!(q1 < q2);
    }

    #[test]
    fn test_cdata_preserves_markup_characters() {
        let mut set = sky_set();
        set.questions[0].content = "Is 1 < 2 && \"so on\"?".to_string();
        let xml = to_question_form(&set, &RenderOptions::default()).unwrap();
        assert!(xml.contains("<![CDATA[Is 1 < 2 && \"so on\"?]]>"));
    }

    #[test]
    fn test_cdata_split_on_terminator() {
        let mut set = sky_set();
        set.questions[0].content = "a]]>b".to_string();
        let xml = to_question_form(&set, &RenderOptions::default()).unwrap();
        // The terminator is split across two adjacent sections.
        assert!(xml.contains("<![CDATA[a]]]]><![CDATA[>b]]>"));
        assert!(!xml.contains("<![CDATA[a]]>b]]>"));
    }

    #[test]
    fn test_title_is_entity_escaped() {
        let options = RenderOptions::new().with_title("Cats & dogs");
        let xml = to_question_form(&sky_set(), &options).unwrap();
        assert!(xml.contains("<Title>Cats &amp; dogs</Title>"));
    }

    #[test]
    fn test_answer_key_lists_only_correct_answers() {
        let xml = to_answer_key(&sky_set(), &RenderOptions::default()).unwrap();
        assert!(xml.contains(&format!("<AnswerKey xmlns=\"{}\">", ANSWER_KEY_XMLNS)));
        assert!(xml.contains("<SelectionIdentifier>a1</SelectionIdentifier>"));
        assert!(xml.contains("<AnswerScore>5</AnswerScore>"));
        assert!(!xml.contains("a2"));
    }

    #[test]
    fn test_answer_key_omits_manual_questions() {
        let mut set = sky_set();
        set.questions.push(manual_question("q2"));

        let xml = to_answer_key(&set, &RenderOptions::default()).unwrap();
        assert!(xml.contains("<QuestionIdentifier>q1</QuestionIdentifier>"));
        assert!(!xml.contains("q2"));
    }

    #[test]
    fn test_answer_key_empty_but_valid_without_scored_questions() {
        let set = QuestionSet {
            questions: vec![manual_question("q1")],
        };
        assert!(!set.has_answer_key());

        let xml = to_answer_key(&set, &RenderOptions::default()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<AnswerKey"));
        assert!(xml.contains("</AnswerKey>"));
        assert!(!xml.contains("<Question>"));
    }

    #[test]
    fn test_multiple_correct_answers_get_one_option_each() {
        let mut set = sky_set();
        set.questions[0].answers[1].correct = true;

        let xml = to_answer_key(&set, &RenderOptions::default()).unwrap();
        assert_eq!(xml.matches("<AnswerOption>").count(), 2);
        assert_eq!(xml.matches("<AnswerScore>5</AnswerScore>").count(), 2);
    }
}
