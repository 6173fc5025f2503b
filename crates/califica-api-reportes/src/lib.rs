//! Report export API (Auditor only).
//!
//! Two CSV exports: every rating, and the full activity trail. Both log
//! their own generation after the body has been produced.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod services;

pub use error::ApiReportesError;
pub use router::{reportes_router, ReportesState};
pub use services::ReporteService;
