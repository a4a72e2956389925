//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `ExportService`.
///
/// Normal input never fails; these surface the rendering backend or the
/// filesystem write going away, and abort the export before any file is
/// touched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("pdf backend failed")]
    Render(#[from] printpdf::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
