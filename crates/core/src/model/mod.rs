mod export;
mod question;
mod session;

pub use export::{ExportMode, ExportRequest, ExportRequestError, export_filename};
pub use question::{Question, SummaryRole, catalog};
pub use session::{Session, Step};
