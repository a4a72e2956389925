//! Mode-specific assembly of the exported document.
//!
//! A document is a title, an ordered list of heading/body sections, and a
//! closing tagline. Assembly is pure: the PDF writer in [`crate::pdf`] is
//! the only place geometry lives.

use deepdive_core::model::{ExportMode, ExportRequest, SummaryRole, catalog};

/// Placeholder body for an answer left empty.
pub const NO_RESPONSE: &str = "(no response)";

/// Placeholder body for a missing passage reference.
pub const NOT_PROVIDED: &str = "(not provided)";

/// Closing line rendered in italics at the end of every export.
pub const TAGLINE: &str = "Transformation happens in the deep.";

/// Extra vertical space after each question/answer pair in full mode, in
/// points.
const PAIR_GAP: f32 = 6.0;

/// A heading and an independently wrapped body paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    heading: String,
    body: String,
    extra_gap: f32,
}

impl Section {
    fn new(heading: &str, body: &str, placeholder: &str) -> Self {
        let trimmed = body.trim();
        Self {
            heading: heading.to_string(),
            body: if trimmed.is_empty() { placeholder } else { trimmed }.to_string(),
            extra_gap: 0.0,
        }
    }

    fn with_extra_gap(mut self, gap: f32) -> Self {
        self.extra_gap = gap;
        self
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Additional gap after this section, on top of the standard one.
    #[must_use]
    pub fn extra_gap(&self) -> f32 {
        self.extra_gap
    }
}

/// The fully assembled export, ready for the page writer.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    title: String,
    sections: Vec<Section>,
}

impl Document {
    /// Assemble the document for the given mode from a session snapshot.
    #[must_use]
    pub fn for_mode(request: &ExportRequest, mode: ExportMode) -> Self {
        match mode {
            ExportMode::Summary => Self::summary(request),
            ExportMode::Full => Self::full(request),
        }
    }

    /// Passage plus the three distinguished answers, in fixed order.
    #[must_use]
    pub fn summary(request: &ExportRequest) -> Self {
        let sections = vec![
            Section::new("Passage", request.scripture_reference(), NOT_PROVIDED),
            Section::new(
                "Lesson (LEARN)",
                request.summary_answer(SummaryRole::Lesson),
                NO_RESPONSE,
            ),
            Section::new(
                "Call to Obedience (OBEY)",
                request.summary_answer(SummaryRole::Obedience),
                NO_RESPONSE,
            ),
            Section::new(
                "Positive Identity Statement (SPEAK IT)",
                request.summary_answer(SummaryRole::Identity),
                NO_RESPONSE,
            ),
        ];

        Self {
            title: "Deep Dive — Summary".to_string(),
            sections,
        }
    }

    /// Passage first, then every question and its answer in catalog order.
    #[must_use]
    pub fn full(request: &ExportRequest) -> Self {
        let mut sections = Vec::with_capacity(1 + catalog().len() * 2);
        sections.push(Section::new(
            "Passage",
            request.scripture_reference(),
            NOT_PROVIDED,
        ));

        for (index, question) in catalog().iter().enumerate() {
            sections.push(Section::new(question.title(), question.prompt(), NO_RESPONSE));
            sections.push(
                Section::new("My Response", request.answer(index), NO_RESPONSE)
                    .with_extra_gap(PAIR_GAP),
            );
        }

        Self {
            title: "Deep Dive — Full".to_string(),
            sections,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_request(reference: &str) -> ExportRequest {
        ExportRequest::new(reference.to_string(), vec![String::new(); catalog().len()]).unwrap()
    }

    fn lesson_index() -> usize {
        catalog()
            .iter()
            .position(|q| q.summary_role() == Some(SummaryRole::Lesson))
            .unwrap()
    }

    #[test]
    fn summary_sections_come_in_fixed_order() {
        let doc = Document::summary(&empty_request("Isaiah 6"));
        let headings: Vec<_> = doc.sections().iter().map(Section::heading).collect();
        assert_eq!(
            headings,
            [
                "Passage",
                "Lesson (LEARN)",
                "Call to Obedience (OBEY)",
                "Positive Identity Statement (SPEAK IT)",
            ]
        );
        assert_eq!(doc.title(), "Deep Dive — Summary");
    }

    #[test]
    fn summary_with_no_answers_renders_the_placeholder_once_per_section() {
        let doc = Document::summary(&empty_request("Isaiah 6"));
        let placeholders = doc
            .sections()
            .iter()
            .skip(1)
            .filter(|s| s.body() == NO_RESPONSE)
            .count();
        assert_eq!(placeholders, 3);
        for section in doc.sections().iter().skip(1) {
            assert_eq!(section.body().matches(NO_RESPONSE).count(), 1);
        }
    }

    #[test]
    fn summary_lesson_body_is_the_trimmed_learn_answer() {
        let mut answers = vec![String::new(); catalog().len()];
        answers[lesson_index()] = "  God is holy  ".to_string();
        let request = ExportRequest::new("Isaiah 6".to_string(), answers).unwrap();

        let doc = Document::summary(&request);
        assert_eq!(doc.sections()[1].body(), "God is holy");
        assert_eq!(doc.sections()[2].body(), NO_RESPONSE);
        assert_eq!(doc.sections()[3].body(), NO_RESPONSE);
    }

    #[test]
    fn blank_passage_renders_not_provided() {
        let doc = Document::summary(&empty_request("   "));
        assert_eq!(doc.sections()[0].body(), NOT_PROVIDED);
    }

    #[test]
    fn full_emits_one_pair_per_question_in_catalog_order() {
        let mut answers = vec![String::new(); catalog().len()];
        // Fill answers back to front; order in the document must not care.
        for (index, answer) in answers.iter_mut().enumerate().rev() {
            *answer = format!("answer {index}");
        }
        let request = ExportRequest::new("Joshua 1:9".to_string(), answers).unwrap();

        let doc = Document::full(&request);
        let sections = doc.sections();
        assert_eq!(sections.len(), 1 + catalog().len() * 2);

        for (index, question) in catalog().iter().enumerate() {
            let pair = &sections[1 + index * 2..1 + index * 2 + 2];
            assert_eq!(pair[0].heading(), question.title());
            assert_eq!(pair[0].body(), question.prompt());
            assert_eq!(pair[1].heading(), "My Response");
            assert_eq!(pair[1].body(), format!("answer {index}"));
            assert!(pair[1].extra_gap() > 0.0);
        }
    }

    #[test]
    fn full_substitutes_the_placeholder_for_unanswered_questions() {
        let doc = Document::full(&empty_request("Isaiah 6"));
        let responses: Vec<_> = doc
            .sections()
            .iter()
            .filter(|s| s.heading() == "My Response")
            .collect();
        assert_eq!(responses.len(), catalog().len());
        assert!(responses.iter().all(|s| s.body() == NO_RESPONSE));
    }
}
