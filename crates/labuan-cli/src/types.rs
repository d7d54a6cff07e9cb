use std::path::PathBuf;

use labuan_model::PipelineOptions;
use labuan_transform::TransformReport;
use serde::Serialize;

/// Outcome of one `transform` run, also written as the JSON run report.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: PipelineOptions,
    #[serde(flatten)]
    pub report: TransformReport,
}
