//! wrapped-client: the HTTP read path and the one-shot session fetch.

pub mod api;
pub mod session;

pub use api::fetch_report;
pub use session::{ReportState, Session};
