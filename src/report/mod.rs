pub mod generator;
pub mod stats;

pub use generator::{render_report, write_report, ReportContext};
pub use stats::dot_summary;
