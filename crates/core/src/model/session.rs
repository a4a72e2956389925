use crate::model::question::catalog;
use crate::model::{ExportRequest, Question};

/// Where the wizard currently is.
///
/// The flow is a bounded linear counter with three regions: intro,
/// one step per question, and a terminal complete step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Intro,
    Question(usize),
    Complete,
}

impl Step {
    /// Linear position of this step: intro is 0, question `i` is `i + 1`,
    /// complete is `catalog().len() + 1`.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Step::Intro => 0,
            Step::Question(index) => index + 1,
            Step::Complete => catalog().len() + 1,
        }
    }

    /// The question under this step, if it is in the question region.
    #[must_use]
    pub fn question(self) -> Option<&'static Question> {
        match self {
            Step::Question(index) => catalog().get(index),
            _ => None,
        }
    }
}

/// In-memory state for one pass through the wizard.
///
/// Holds the scripture reference, one answer slot per catalog question, and
/// the current step. `answers.len() == catalog().len()` at all times, and
/// the step never leaves `[0, catalog().len() + 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    scripture_reference: String,
    answers: Vec<String>,
    step: Step,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// An empty session positioned on the intro step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scripture_reference: String::new(),
            answers: vec![String::new(); catalog().len()],
            step: Step::Intro,
        }
    }

    #[must_use]
    pub fn scripture_reference(&self) -> &str {
        &self.scripture_reference
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Accept the scripture reference and move from the intro to the first
    /// question. A whitespace-only reference is a no-op, as is calling this
    /// anywhere but the intro step.
    pub fn begin(&mut self, reference: &str) {
        if self.step != Step::Intro || reference.trim().is_empty() {
            return;
        }
        self.scripture_reference = reference.to_string();
        self.step = Step::Question(0);
    }

    /// Replace the answer at `index`. Any string is permitted, including
    /// empty; out-of-range indices are ignored.
    pub fn set_answer(&mut self, index: usize, text: &str) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = text.to_string();
        }
    }

    /// Move forward one step. The last question advances to the complete
    /// step; advancing past it is a no-op. The intro is only left via
    /// [`Session::begin`].
    pub fn advance(&mut self) {
        self.step = match self.step {
            Step::Intro => Step::Intro,
            Step::Question(index) if index + 1 < catalog().len() => Step::Question(index + 1),
            Step::Question(_) => Step::Complete,
            Step::Complete => Step::Complete,
        };
    }

    /// Move back one step, clamped at the intro.
    pub fn retreat(&mut self) {
        self.step = match self.step {
            Step::Intro | Step::Question(0) => Step::Intro,
            Step::Question(index) => Step::Question(index - 1),
            Step::Complete => Step::Question(catalog().len() - 1),
        };
    }

    /// Back to the intro step with an empty reference and all answers
    /// cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read-only snapshot handed to the exporter.
    #[must_use]
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest::from_parts(self.scripture_reference.clone(), self.answers.clone())
    }
}
