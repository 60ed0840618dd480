//! Analysis error types

use thiserror::Error;

/// Message shown to the user for any parse failure
pub const PARSE_ERROR_NOTICE: &str = "Error reading file. Please ensure it is a valid CSV.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Uploaded file is not parseable CSV
    #[error("CSV parse error: {0}")]
    Parse(String),

    /// Analyze requested before any dataset was uploaded
    #[error("No dataset uploaded")]
    NoDataset,

    /// Upload attempted while results are displayed
    #[error("Analysis already complete; start a new analysis first")]
    AlreadyComplete,
}

impl AnalysisError {
    /// User-facing notice text
    pub fn notice(&self) -> &'static str {
        match self {
            AnalysisError::Parse(_) => PARSE_ERROR_NOTICE,
            AnalysisError::NoDataset => "Please upload a CSV file before running the analysis.",
            AnalysisError::AlreadyComplete => {
                "Analysis already complete. Start a new analysis to upload another file."
            }
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        AnalysisError::Parse(err.to_string())
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
