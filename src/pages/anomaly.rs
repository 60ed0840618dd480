//! Anomaly detection history

use chrono::{Duration, NaiveDate};
use rand::Rng;

use super::charts::{anomaly_scores, bar_chart};
use super::html::notice_box;
use super::Notice;

const DAYS: usize = 30;
const SPIKE_DAY: usize = 25;

pub fn render(today: NaiveDate, rng: &mut impl Rng) -> String {
    let start = today - Duration::days(DAYS as i64);
    let dates: Vec<NaiveDate> = (0..DAYS)
        .map(|i| start + Duration::days(i as i64))
        .collect();
    let labels: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let scores = anomaly_scores(rng, DAYS);
    let chart = bar_chart(&labels, &scores, 100.0);
    let alert = notice_box(&Notice::warning(format!(
        "⚠️ Critical anomaly detected on {}. Pattern matches 'Bearing Failure Mode A'.",
        labels[SPIKE_DAY]
    )));

    format!(
        r#"<h1>Anomaly Detection</h1>
<p>Deep learning analysis of sensor fusion data.</p>
{chart}
{alert}"#
    )
}
