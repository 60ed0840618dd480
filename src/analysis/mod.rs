//! Mock Analysis Pipeline
//!
//! Two states, derived from the session's `analysis_complete` flag:
//!
//! - `Idle`: a CSV may be uploaded (and replaced); analysis can be started
//!   once a dataset is present.
//! - `Complete`: the fixed [`AnalysisReport`] is shown until the user starts
//!   a new analysis.
//!
//! The uploaded dataset is preview-only. Results never depend on it.

pub mod error;
pub mod pipeline;
pub mod report;
pub mod upload;

pub use error::{AnalysisError, AnalysisResult};
pub use pipeline::{AnalysisPhase, AnalysisPipeline};
pub use report::{AnalysisReport, Prediction, ReportMetric};
pub use upload::{UploadedDataset, PREVIEW_ROWS};
