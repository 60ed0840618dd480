//! Digital twin stress simulation
//!
//! Stress = rpm × load / 10000 + ambient temp / 10. Above 25 units the
//! reading turns orange, above 30 red.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwinParams {
    /// Motor speed, 0..=5000 RPM
    pub rpm: u32,
    /// Load factor, 0..=100 %
    pub load: u32,
    /// Ambient temperature, 10..=50 °C
    pub temp: u32,
}

impl Default for TwinParams {
    fn default() -> Self {
        Self {
            rpm: 3200,
            load: 75,
            temp: 22,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Nominal,
    Elevated,
    Critical,
}

impl StressLevel {
    pub fn color(&self) -> &'static str {
        match self {
            StressLevel::Nominal => "green",
            StressLevel::Elevated => "orange",
            StressLevel::Critical => "red",
        }
    }
}

impl TwinParams {
    /// Build from optional query values, falling back to defaults and
    /// clamping to the slider ranges
    pub fn from_query(rpm: Option<u32>, load: Option<u32>, temp: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            rpm: rpm.unwrap_or(defaults.rpm).min(5000),
            load: load.unwrap_or(defaults.load).min(100),
            temp: temp.unwrap_or(defaults.temp).clamp(10, 50),
        }
    }

    pub fn stress(&self) -> f64 {
        (self.rpm as f64 * self.load as f64) / 10000.0 + self.temp as f64 / 10.0
    }

    pub fn level(&self) -> StressLevel {
        let stress = self.stress();
        if stress > 30.0 {
            StressLevel::Critical
        } else if stress > 25.0 {
            StressLevel::Elevated
        } else {
            StressLevel::Nominal
        }
    }

    /// Progress bar fill, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        (self.stress() / 40.0).min(1.0)
    }
}

pub fn render(params: &TwinParams) -> String {
    format!(
        r#"<h1>Digital Twin Simulation</h1>
<p>Simulate operating conditions on the virtual replica.</p>
<div class="columns">
    <div style="height:300px; background: radial-gradient(circle, rgba(6,182,212,0.2) 0%, rgba(2,6,23,1) 100%); border: 1px solid #334155; border-radius: 12px; display:flex; align-items:center; justify-content:center;">
        <div style="text-align:center;">
            <div style="font-size:3rem;">⚙️</div>
            <div class="mono">TWIN: CNC-01-V2</div>
        </div>
    </div>
    <div>
        <h3>Simulation Parameters</h3>
        <form method="GET" action="/">
            <input type="hidden" name="page" value="digital-twin">
            <label>Motor Speed (RPM): {rpm}</label>
            <input type="range" name="rpm" min="0" max="5000" value="{rpm}" onchange="this.form.submit()">
            <label>Load Factor (%): {load}</label>
            <input type="range" name="load" min="0" max="100" value="{load}" onchange="this.form.submit()">
            <label>Ambient Temp (°C): {temp}</label>
            <input type="range" name="temp" min="10" max="50" value="{temp}" onchange="this.form.submit()">
            <noscript><button type="submit">Run Simulation</button></noscript>
        </form>
        <h3>Predicted Outcomes</h3>
        <p>Mechanical Stress: <span style="color:{color}; font-weight:bold; font-size:1.5rem;">{stress:.2} Units</span></p>
        <div class="progress"><div style="width: {percent:.0}%;"></div></div>
    </div>
</div>"#,
        rpm = params.rpm,
        load = params.load,
        temp = params.temp,
        color = params.level().color(),
        stress = params.stress(),
        percent = params.progress() * 100.0,
    )
}
