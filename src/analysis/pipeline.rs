//! Analysis state machine

use std::time::Duration;

use serde::Serialize;

use super::error::{AnalysisError, AnalysisResult};
use super::report::AnalysisReport;
use super::upload::UploadedDataset;
use crate::session::SessionState;

/// Default simulated processing time
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPhase {
    Idle,
    Complete,
}

impl AnalysisPhase {
    pub fn of(state: &SessionState) -> Self {
        if state.analysis_complete {
            AnalysisPhase::Complete
        } else {
            AnalysisPhase::Idle
        }
    }
}

/// Drives the upload → analyze → reset cycle of a session
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    delay: Duration,
    report: AnalysisReport,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl AnalysisPipeline {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            report: AnalysisReport::standard(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Parse and record an upload. The state is untouched on failure.
    pub fn upload<'s>(
        &self,
        state: &'s mut SessionState,
        file_name: &str,
        data: &[u8],
    ) -> AnalysisResult<&'s UploadedDataset> {
        if AnalysisPhase::of(state) == AnalysisPhase::Complete {
            return Err(AnalysisError::AlreadyComplete);
        }

        let dataset = UploadedDataset::from_csv(file_name, data)?;
        tracing::info!(
            file = %dataset.file_name,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "Dataset uploaded"
        );

        Ok(state.uploaded_data.insert(dataset))
    }

    /// Simulate processing and mark the analysis complete.
    ///
    /// Requires an uploaded dataset. Already-complete sessions return
    /// immediately.
    pub async fn analyze(&self, state: &mut SessionState) -> AnalysisResult<&AnalysisReport> {
        if AnalysisPhase::of(state) == AnalysisPhase::Complete {
            return Ok(&self.report);
        }

        let rows = state
            .uploaded_data
            .as_ref()
            .map(UploadedDataset::row_count)
            .ok_or(AnalysisError::NoDataset)?;

        tracing::info!(rows, delay_ms = self.delay.as_millis() as u64, "Running analysis");
        tokio::time::sleep(self.delay).await;

        state.analysis_complete = true;
        Ok(&self.report)
    }

    /// Back to `Idle` with no dataset, from any state
    pub fn reset(&self, state: &mut SessionState) {
        state.analysis_complete = false;
        state.uploaded_data = None;
        tracing::debug!("Analysis reset");
    }

    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }
}
