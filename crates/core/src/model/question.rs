use serde::Serialize;

/// Role a question's answer plays in the summary export.
///
/// Summary mode renders the three distinguished answers in this order,
/// independent of where their questions sit in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SummaryRole {
    Lesson,
    Obedience,
    Identity,
}

/// One reflection prompt. The catalog is fixed at startup and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    title: &'static str,
    prompt: &'static str,
    summary_role: Option<SummaryRole>,
}

impl Question {
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    #[must_use]
    pub fn summary_role(&self) -> Option<SummaryRole> {
        self.summary_role
    }
}

const fn question(title: &'static str, prompt: &'static str) -> Question {
    Question {
        title,
        prompt,
        summary_role: None,
    }
}

const fn distinguished(
    title: &'static str,
    prompt: &'static str,
    summary_role: SummaryRole,
) -> Question {
    Question {
        title,
        prompt,
        summary_role: Some(summary_role),
    }
}

const CATALOG: &[Question] = &[
    question(
        "SEE",
        "What did you SEE? What did you hear? What did you feel as you read the passage?",
    ),
    question(
        "BELIEVE",
        "If this passage is true, what must you CHANGE in your beliefs to align your thinking with what Scripture teaches?",
    ),
    distinguished(
        "LEARN",
        "What lesson is God teaching you through this passage?",
        SummaryRole::Lesson,
    ),
    distinguished(
        "OBEY",
        "What specific step of obedience is the Holy Spirit inviting you into today?",
        SummaryRole::Obedience,
    ),
    question(
        "LIVING IT OUT",
        "Where or when will this be hardest to live out?",
    ),
    question(
        "PREPARE",
        "What story or phrase will you tell yourself in that moment to stay aligned with obedience?",
    ),
    distinguished(
        "SPEAK IT — Identity Alignment",
        "Reword the lesson into a present-tense truth you can speak over yourself. Use “I am…” rather than “I will…”.",
        SummaryRole::Identity,
    ),
    question(
        "CONFIRM",
        "Who can you share this with for encouragement or accountability?",
    ),
];

/// The fixed, ordered question catalog.
#[must_use]
pub fn catalog() -> &'static [Question] {
    CATALOG
}
