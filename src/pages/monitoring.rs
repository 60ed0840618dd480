//! Real-time sensor monitoring

use rand::Rng;

use super::charts::{line_chart, vibration_feed, Series};
use super::html::metric;

const SAMPLES: usize = 50;

pub fn render(rng: &mut impl Rng) -> String {
    let [x, y, z] = vibration_feed(rng, SAMPLES);
    let chart = line_chart(&[
        Series {
            name: "Axis X",
            color: "#22d3ee",
            values: &x,
        },
        Series {
            name: "Axis Y",
            color: "#34d399",
            values: &y,
        },
        Series {
            name: "Axis Z",
            color: "#8b5cf6",
            values: &z,
        },
    ]);

    let stats = [
        metric("RPM", "3,240", Some("+12")),
        metric("Temperature", "68.5°C", Some("0.4°C")),
        metric("Power Load", "82%", Some("Stable")),
    ]
    .concat();

    format!(
        r#"<h1>Real-Time Monitoring</h1>
<div class="columns" style="grid-template-columns: 3fr 1fr;">
    <div>
        <h3>Vibration Sensor Feed (CNC-01)</h3>
        {chart}
    </div>
    <div>
        <h3>Live Stats</h3>
        {stats}
        <hr style="border-color: #1e293b;">
        <div class="mono" style="color:#34d399;">● MACHINE ONLINE</div>
    </div>
</div>"#
    )
}
