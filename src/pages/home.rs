//! Landing page

use super::html::action_button;

pub fn render() -> String {
    let start_trial = action_button("start-trial", "START FREE TRIAL ➔", false);
    let watch_demo = action_button("watch-demo", "WATCH DEMO ▶", true);

    format!(
        r##"<div class="columns" style="grid-template-columns: 1.5fr 1fr;">
    <div>
        <div style="height: 50px;"></div>
        <div class="mono" style="color:#22d3ee; margin-bottom:10px;">AI-POWERED SYSTEM</div>
        <h1 style="font-size: 4.5rem; line-height: 1.1;">Predict Failures<br><span class="gradient-text">Before They Happen</span></h1>
        <p class="muted" style="font-size: 1.2rem; margin: 20px 0;">Transform your factory operations with AI-driven predictive maintenance. Reduce downtime by up to 70% and extend equipment lifespan.</p>
        <div class="columns">{start_trial}{watch_demo}</div>
    </div>
    <div class="neon-box" style="margin-top: 50px;">
        <div style="display:flex; justify-content:space-between; margin-bottom:10px;">
            <span class="mono" style="color:#ef4444;">● LIVE</span>
            <span class="mono" style="color:#22d3ee;">SYSTEM HEALTH: 98%</span>
        </div>
        <svg height="200" width="100%" xmlns="http://www.w3.org/2000/svg">
            <path d="M0,100 Q50,50 100,100 T200,100 T300,50 T400,120" fill="none" stroke="#22d3ee" stroke-width="3"/>
            <path d="M0,100 Q50,50 100,100 T200,100 T300,50 T400,120 V200 H0 Z" fill="rgba(34, 211, 238, 0.1)"/>
        </svg>
        <div class="columns" style="margin-top: 10px;">
            <div class="metric" style="text-align:center;"><div class="label">VIBRATION</div><div style="color:#22d3ee; font-weight:bold;">2.4 mm/s</div></div>
            <div class="metric" style="text-align:center;"><div class="label">TEMP</div><div style="color:#22d3ee; font-weight:bold;">68°C</div></div>
        </div>
    </div>
</div>
<hr style="border-color: #1e293b; margin: 40px 0;">
<h2 style="text-align: center;">Intelligent Maintenance Features</h2>
<div class="columns">
    <div class="neon-box"><h3>📊 Real-Time Monitoring</h3><p>Continuous monitoring of vibration, temperature, and acoustic patterns with sub-millisecond precision.</p></div>
    <div class="neon-box"><h3>🧠 Anomaly Detection</h3><p>Deep learning algorithms identify subtle patterns that precede equipment failures weeks in advance.</p></div>
    <div class="neon-box"><h3>📅 Smart Scheduling</h3><p>AI-optimized maintenance windows that minimize production impact and maximize uptime.</p></div>
</div>"##
    )
}
