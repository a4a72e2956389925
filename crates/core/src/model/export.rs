use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::question::catalog;
use crate::model::SummaryRole;
use crate::slug::slug;

/// Which document the exporter should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportMode {
    /// Passage plus the three distinguished answers.
    Summary,
    /// Passage plus every question and its answer.
    Full,
}

impl ExportMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExportMode::Summary => "summary",
            ExportMode::Full => "full",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExportRequestError {
    #[error("expected {expected} answers, got {got}")]
    AnswerCountMismatch { expected: usize, got: usize },
}

/// Read-only snapshot of a finished session, aligned with the question
/// catalog. The exporter consumes this and never touches session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    scripture_reference: String,
    answers: Vec<String>,
}

impl ExportRequest {
    /// Build a snapshot from loose parts.
    ///
    /// # Errors
    ///
    /// Returns `ExportRequestError::AnswerCountMismatch` if the answer list
    /// does not line up with the catalog.
    pub fn new(
        scripture_reference: String,
        answers: Vec<String>,
    ) -> Result<Self, ExportRequestError> {
        if answers.len() != catalog().len() {
            return Err(ExportRequestError::AnswerCountMismatch {
                expected: catalog().len(),
                got: answers.len(),
            });
        }
        Ok(Self::from_parts(scripture_reference, answers))
    }

    // Session upholds the alignment invariant itself.
    pub(crate) fn from_parts(scripture_reference: String, answers: Vec<String>) -> Self {
        Self {
            scripture_reference,
            answers,
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

    /// The answer at `index`, untrimmed; empty for out-of-range indices.
    #[must_use]
    pub fn answer(&self, index: usize) -> &str {
        self.answers.get(index).map_or("", String::as_str)
    }

    /// The trimmed answer to the distinguished question with this role, or
    /// an empty string if no catalog question carries it.
    #[must_use]
    pub fn summary_answer(&self, role: SummaryRole) -> &str {
        catalog()
            .iter()
            .position(|q| q.summary_role() == Some(role))
            .map_or("", |index| self.answer(index).trim())
    }
}

/// Deterministic export filename: `<slug>-<mode>-<YYYY-MM-DD>.pdf`.
#[must_use]
pub fn export_filename(reference: &str, mode: ExportMode, date: NaiveDate) -> String {
    format!("{}-{}-{}.pdf", slug(reference), mode, date.format("%Y-%m-%d"))
}
