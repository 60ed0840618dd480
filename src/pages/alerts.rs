//! Alert rule configuration

use super::html::escape;

const CHANNELS: [&str; 4] = ["Email", "SMS", "Slack", "Webhook"];
const DEFAULT_CHANNELS: [&str; 2] = ["SMS", "Slack"];

const RECENT_ALERTS: [(&str, &str); 3] = [
    ("10:42 AM", "Warning: Press-04 Temp > 85°C"),
    ("09:15 AM", "Info: Weekly Report Generated"),
    ("Yesterday", "Critical: Pump-02 Vibration Exceeded Limit"),
];

pub fn render() -> String {
    let channels: String = CHANNELS
        .iter()
        .map(|c| {
            let selected = if DEFAULT_CHANNELS.contains(c) { " selected" } else { "" };
            format!(r#"<option{}>{}</option>"#, selected, escape(c))
        })
        .collect();

    let log: String = RECENT_ALERTS
        .iter()
        .map(|(when, what)| format!("<li><strong>{}</strong> - {}</li>", when, escape(what)))
        .collect();

    format!(
        r#"<h1>Configuration &amp; Alerts</h1>
<h3>Alert Rules</h3>
<details open>
    <summary>🔥 Temperature Thresholds</summary>
    <label>Critical Temp (°C)</label>
    <input type="range" name="critical_temp" min="0" max="120" value="90">
    <label>Notify Channels</label>
    <select name="channels" multiple>{channels}</select>
</details>
<details>
    <summary>〰️ Vibration Thresholds</summary>
    <label>Max Vibration (mm/s)</label>
    <input type="range" name="max_vibration" min="0" max="10" step="0.1" value="4.5">
</details>
<h3>Recent Alert Log</h3>
<ul>{log}</ul>"#
    )
}
