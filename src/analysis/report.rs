//! Fixed analysis results

use serde::Serialize;

/// Headline figure of the results dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: Option<&'static str>,
}

/// One row of the critical predictions table
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub machine_id: &'static str,
    pub issue: &'static str,
    pub probability: &'static str,
    pub time_to_failure: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metrics: Vec<ReportMetric>,
    pub predictions: Vec<Prediction>,
}

impl AnalysisReport {
    pub const PREDICTION_COLUMNS: [&'static str; 5] = [
        "Machine ID",
        "Detected Issue",
        "Probability",
        "Est. Time to Failure",
        "Action Required",
    ];

    pub fn standard() -> Self {
        Self {
            metrics: vec![
                ReportMetric {
                    label: "Health Score",
                    value: "85/100",
                    delta: Some("-2.5%"),
                },
                ReportMetric {
                    label: "Anomalies Found",
                    value: "3",
                    delta: Some("High Priority"),
                },
                ReportMetric {
                    label: "Records Processed",
                    value: "14,205",
                    delta: None,
                },
            ],
            predictions: vec![
                Prediction {
                    machine_id: "CNC-01",
                    issue: "Bearing Wear",
                    probability: "92%",
                    time_to_failure: "2 weeks",
                    action: "Urgent",
                },
                Prediction {
                    machine_id: "Press-04",
                    issue: "Overheating",
                    probability: "78%",
                    time_to_failure: "5 days",
                    action: "High",
                },
                Prediction {
                    machine_id: "Pump-02",
                    issue: "Vibration",
                    probability: "65%",
                    time_to_failure: "1 month",
                    action: "Medium",
                },
                Prediction {
                    machine_id: "Conveyor-A",
                    issue: "Belt Tension",
                    probability: "45%",
                    time_to_failure: "3 months",
                    action: "Low",
                },
            ],
        }
    }
}
