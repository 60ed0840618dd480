//! Report generation

use chrono::NaiveDate;

const REPORT_TYPES: [&str; 4] = [
    "ROI Analysis",
    "Equipment Health",
    "Maintenance Log",
    "Incident History",
];

pub fn render(today: NaiveDate) -> String {
    let options: String = REPORT_TYPES
        .iter()
        .map(|r| format!("<option>{}</option>", r))
        .collect();
    let date = today.format("%Y-%m-%d");

    format!(
        r#"<h1>Analytics &amp; Reports</h1>
<div class="columns">
    <form method="POST" action="/actions/generate-report">
        <label>Report Type</label>
        <select name="report_type">{options}</select>
        <label>Start Date</label>
        <input type="date" name="start_date" value="{date}">
        <label>End Date</label>
        <input type="date" name="end_date" value="{date}">
        <button type="submit">Generate Report</button>
    </form>
    <div class="neon-box"><h4>Last Generated</h4><p>ROI_Q3_2024.pdf</p><p>Health_Check_Oct.csv</p></div>
</div>"#
    )
}
