//! Maintenance schedule

use chrono::{Duration, NaiveDate};

use super::html::{action_button, table};

const COLUMNS: [&str; 5] = ["Date", "Machine", "Task", "Duration", "Production Impact"];

/// (days from today, machine, task, duration, impact)
const TASKS: [(i64, &str, &str, &str, &str); 4] = [
    (2, "CNC-01", "Bearing Replacement", "4h", "Low"),
    (5, "Press-04", "Lubrication", "1h", "None"),
    (12, "Robot-02", "Calibration", "2h", "Low"),
    (14, "Pump-09", "Seal Check", "3h", "Medium"),
];

pub fn render(today: NaiveDate) -> String {
    let rows: Vec<Vec<String>> = TASKS
        .iter()
        .map(|(offset, machine, task, duration, impact)| {
            vec![
                (today + Duration::days(*offset)).format("%Y-%m-%d").to_string(),
                machine.to_string(),
                task.to_string(),
                duration.to_string(),
                impact.to_string(),
            ]
        })
        .collect();

    format!(
        "<h1>Smart Maintenance Scheduling</h1>\n{}\n{}",
        table(&COLUMNS, &rows),
        action_button("optimize-schedule", "Optimize Schedule with AI", false)
    )
}
