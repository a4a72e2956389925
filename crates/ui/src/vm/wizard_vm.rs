use deepdive_core::model::{ExportMode, Session, Step, catalog};

/// Everything the wizard view can ask the session to do.
///
/// Views never touch the session directly; they emit one of these through
/// the dispatch callback owned by the top-level view.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardIntent {
    EditReference(String),
    Begin(String),
    EditAnswer(String),
    Advance,
    Retreat,
    Export(ExportMode),
    StartOver,
}

/// Read-only display mapping over the session for the current render.
pub struct WizardVm<'a> {
    session: &'a Session,
}

impl<'a> WizardVm<'a> {
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.session.step()
    }

    #[must_use]
    pub fn reference(&self) -> &'a str {
        self.session.scripture_reference()
    }

    /// Title of the current question; empty off the question region.
    #[must_use]
    pub fn question_title(&self) -> &'static str {
        self.step().question().map_or("", |q| q.title())
    }

    /// Prompt of the current question; empty off the question region.
    #[must_use]
    pub fn question_prompt(&self) -> &'static str {
        self.step().question().map_or("", |q| q.prompt())
    }

    /// The answer bound to the current question's text input.
    #[must_use]
    pub fn answer(&self) -> &'a str {
        match self.step() {
            Step::Question(index) => self.session.answer(index).unwrap_or(""),
            _ => "",
        }
    }

    /// `"3 / 8"`-style counter for the question screens.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.step().position(), catalog().len())
    }

    /// The forward action reads "Complete" on the last question.
    #[must_use]
    pub fn next_label(&self) -> &'static str {
        match self.step() {
            Step::Question(index) if index + 1 == catalog().len() => "Complete",
            _ => "Next",
        }
    }
}
