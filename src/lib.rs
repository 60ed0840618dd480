//! # Predictraforge
//!
//! Predictive maintenance demo dashboard served as server-rendered HTML.
//! Every number on screen is mock data; the point is the flow, not the model.
//!
//! ## Features
//!
//! - **Per-browser sessions**: Chat history and analysis progress survive page changes
//! - **Forge assistant**: Keyword-matched canned replies
//! - **Mock analysis**: Upload a CSV, wait, see a fixed report
//! - **Eleven pages**: Monitoring charts, digital twin, scheduling, lead forms
//!
//! ## Modules
//!
//! - [`session`]: Session state and the in-memory session store
//! - [`assistant`]: Forge keyword responder
//! - [`analysis`]: CSV upload, mock pipeline, fixed report
//! - [`pages`]: Page router and HTML rendering
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use predictraforge::analysis::AnalysisPipeline;
//! use predictraforge::assistant::Responder;
//! use predictraforge::session::SessionState;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut state = SessionState::new();
//!
//!     let reply = Responder::standard().respond("How much does it cost?", &mut state);
//!     assert_eq!(reply, Some(predictraforge::assistant::PRICING_REPLY));
//!
//!     let pipeline = AnalysisPipeline::new(Duration::ZERO);
//!     pipeline.upload(&mut state, "sensors.csv", b"machine,vibration\nCNC-01,2.4\n")?;
//!     let report = pipeline.analyze(&mut state).await?;
//!
//!     println!("{} predictions", report.predictions.len());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod assistant;
pub mod config;
pub mod pages;
pub mod session;

// Re-export top-level types for convenience
pub use session::{ChatMessage, Role, SessionState, SessionStore};

pub use assistant::{Intent, Responder};

pub use analysis::{
    AnalysisError, AnalysisPhase, AnalysisPipeline, AnalysisReport, AnalysisResult,
    UploadedDataset,
};

pub use pages::{Notice, NoticeLevel, Page, PageContext};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{AnalysisConfig, Config, ConfigError, LoadedConfig, LoggingConfig, ServerConfig};
