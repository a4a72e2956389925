use std::path::{Path, PathBuf};

use deepdive_core::Clock;
use deepdive_core::model::{ExportMode, ExportRequest, export_filename};

use crate::document::Document;
use crate::error::ExportError;
use crate::pdf;

/// Where an export landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub path: PathBuf,
}

/// Renders a session snapshot into a paginated PDF and saves it under a
/// deterministic filename in the configured directory.
///
/// The service clock supplies the filename date, so tests pin it with
/// `Clock::fixed`.
pub struct ExportService {
    clock: Clock,
    out_dir: PathBuf,
}

impl ExportService {
    #[must_use]
    pub fn new(clock: Clock, out_dir: PathBuf) -> Self {
        Self { clock, out_dir }
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// The filename an export of `reference` in `mode` would save to today.
    #[must_use]
    pub fn filename(&self, reference: &str, mode: ExportMode) -> String {
        export_filename(reference, mode, self.clock.today())
    }

    /// Render the document for `mode` to PDF bytes without saving it.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Render` if the PDF backend fails.
    pub fn render(&self, request: &ExportRequest, mode: ExportMode) -> Result<Vec<u8>, ExportError> {
        pdf::render(&Document::for_mode(request, mode))
    }

    /// Render and save. The document is built fully in memory and written
    /// with a single call, so a failure leaves no partial file behind.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Render` if the PDF backend fails, or
    /// `ExportError::Io` if the file cannot be written.
    pub fn export(
        &self,
        request: &ExportRequest,
        mode: ExportMode,
    ) -> Result<ExportedFile, ExportError> {
        let bytes = self.render(request, mode)?;
        let filename = self.filename(request.scripture_reference(), mode);
        let path = self.out_dir.join(&filename);
        std::fs::write(&path, &bytes)?;
        log::info!("saved {mode} export to {}", path.display());

        Ok(ExportedFile { filename, path })
    }
}
