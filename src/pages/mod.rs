//! Pages
//!
//! Navigation router over the eleven dashboard pages. [`render`] maps a
//! [`Page`] to its render routine and wraps the result in the shared layout.

pub mod actions;
pub mod charts;
pub mod html;
pub mod leads;

mod alerts;
mod anomaly;
mod digital_twin;
mod home;
mod input_data;
mod monitoring;
mod reports;
mod scheduling;
mod watch_demo;

pub use actions::MockAction;
pub use digital_twin::{StressLevel, TwinParams};
pub use leads::{LeadError, LeadForm, LeadKind, INDUSTRIES};

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::analysis::AnalysisReport;
use crate::session::SessionState;

/// Sidebar navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Page {
    #[default]
    Home,
    InputData,
    Monitoring,
    AnomalyDetection,
    Scheduling,
    Alerts,
    DigitalTwin,
    Reports,
    WatchDemo,
    GetDemo,
    FreeTrial,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 11] = [
        Page::Home,
        Page::InputData,
        Page::Monitoring,
        Page::AnomalyDetection,
        Page::Scheduling,
        Page::Alerts,
        Page::DigitalTwin,
        Page::Reports,
        Page::WatchDemo,
        Page::GetDemo,
        Page::FreeTrial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::InputData => "Input Data",
            Page::Monitoring => "Real-Time Monitoring",
            Page::AnomalyDetection => "Anomaly Detection",
            Page::Scheduling => "Smart Scheduling",
            Page::Alerts => "Instant Alerts",
            Page::DigitalTwin => "Digital Twin",
            Page::Reports => "Custom Reports",
            Page::WatchDemo => "Watch Demo",
            Page::GetDemo => "Get Demo",
            Page::FreeTrial => "Free Trial",
        }
    }

    /// URL identifier used in `?page=`
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::InputData => "input-data",
            Page::Monitoring => "monitoring",
            Page::AnomalyDetection => "anomaly-detection",
            Page::Scheduling => "scheduling",
            Page::Alerts => "alerts",
            Page::DigitalTwin => "digital-twin",
            Page::Reports => "reports",
            Page::WatchDemo => "watch-demo",
            Page::GetDemo => "get-demo",
            Page::FreeTrial => "free-trial",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-shot status message shown above the page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything a render pass may read
pub struct PageContext<'a> {
    pub state: &'a SessionState,
    pub report: &'a AnalysisReport,
    pub today: NaiveDate,
    pub notice: Option<Notice>,
    pub twin: TwinParams,
    /// Previously submitted lead form, echoed back on validation errors
    pub lead: Option<&'a LeadForm>,
}

impl<'a> PageContext<'a> {
    pub fn new(state: &'a SessionState, report: &'a AnalysisReport, today: NaiveDate) -> Self {
        Self {
            state,
            report,
            today,
            notice: None,
            twin: TwinParams::default(),
            lead: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }

    pub fn with_twin(mut self, twin: TwinParams) -> Self {
        self.twin = twin;
        self
    }

    pub fn with_lead(mut self, lead: &'a LeadForm) -> Self {
        self.lead = Some(lead);
        self
    }
}

/// Render a full HTML document for `page`
pub fn render(page: Page, ctx: &PageContext<'_>, rng: &mut impl Rng) -> String {
    let content = match page {
        Page::Home => home::render(),
        Page::InputData => input_data::render(ctx),
        Page::Monitoring => monitoring::render(rng),
        Page::AnomalyDetection => anomaly::render(ctx.today, rng),
        Page::Scheduling => scheduling::render(ctx.today),
        Page::Alerts => alerts::render(),
        Page::DigitalTwin => digital_twin::render(&ctx.twin),
        Page::Reports => reports::render(ctx.today),
        Page::WatchDemo => watch_demo::render(),
        Page::GetDemo => leads::render(LeadKind::Demo, ctx.lead),
        Page::FreeTrial => leads::render(LeadKind::Trial, ctx.lead),
    };

    html::layout(page, ctx.state, ctx.notice.as_ref(), &content)
}
