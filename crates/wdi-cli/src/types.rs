use std::path::PathBuf;

use wdi_model::ReshapeReport;

/// Result of one full export run.
#[derive(Debug)]
pub struct RunResult {
    pub output: PathBuf,
    pub report: ReshapeReport,
}
