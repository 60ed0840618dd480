//! Product video placeholder

pub fn render() -> String {
    r#"<h1 style="text-align:center;">See Predictraforge in Action</h1>
<div style="background-color: #0f172a; padding: 20px; border-radius: 12px; border: 1px solid #334155;">
    <div style="aspect-ratio: 16/9; background-color: #000; display: flex; align-items: center; justify-content: center;">
        <span style="font-size: 3rem; color: #334155;">▶ VIDEO PLAYER</span>
    </div>
</div>
<h3>Key Takeaways</h3>
<ul>
    <li>How to connect IoT sensors</li>
    <li>Setting up your first AI model</li>
    <li>Interpreting anomaly alerts</li>
</ul>"#
        .to_string()
}
