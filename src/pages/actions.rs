//! Decorative buttons
//!
//! Buttons with no backend behaviour. Each maps to the page it re-renders
//! and the notice it shows.

use super::{Notice, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAction {
    StartTrial,
    WatchDemo,
    SimulateTwin,
    DownloadReport,
    OptimizeSchedule,
    GenerateReport,
}

impl MockAction {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "start-trial" => Some(MockAction::StartTrial),
            "watch-demo" => Some(MockAction::WatchDemo),
            "simulate-twin" => Some(MockAction::SimulateTwin),
            "download-report" => Some(MockAction::DownloadReport),
            "optimize-schedule" => Some(MockAction::OptimizeSchedule),
            "generate-report" => Some(MockAction::GenerateReport),
            _ => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            MockAction::StartTrial => Page::Home,
            MockAction::WatchDemo => Page::WatchDemo,
            MockAction::SimulateTwin | MockAction::DownloadReport => Page::InputData,
            MockAction::OptimizeSchedule => Page::Scheduling,
            MockAction::GenerateReport => Page::Reports,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            MockAction::StartTrial => {
                Some(Notice::info("Please select 'Free Trial' from the sidebar!"))
            }
            MockAction::WatchDemo => None,
            MockAction::SimulateTwin => Some(Notice::info(
                "Redirecting to Digital Twin simulation with detected parameters...",
            )),
            MockAction::DownloadReport | MockAction::GenerateReport => {
                Some(Notice::success("Report generated! (mock download)"))
            }
            MockAction::OptimizeSchedule => Some(Notice::success(
                "Schedule optimized with AI. No conflicts with planned production.",
            )),
        }
    }
}
