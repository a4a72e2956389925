#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod export_service;
pub mod pdf;

pub use deepdive_core::Clock;

pub use document::{Document, Section, NO_RESPONSE, NOT_PROVIDED, TAGLINE};
pub use error::ExportError;
pub use export_service::{ExportService, ExportedFile};
