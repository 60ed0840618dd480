//! HTML building blocks
//!
//! Inline templates without a template engine. Every piece of user-supplied
//! text goes through [`escape`].

use super::{Notice, NoticeLevel, Page};
use crate::session::{ChatMessage, Role, SessionState, VISIBLE_HISTORY};

/// Dark neon theme shared by all pages
const STYLES: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        display: flex;
        min-height: 100vh;
        background-color: #020617;
        color: #ffffff;
        font-family: 'Outfit', -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    }
    h1, h2, h3 { font-weight: 800; letter-spacing: -0.5px; }
    a { color: #22d3ee; }
    .mono { font-family: 'JetBrains Mono', monospace; }
    .muted { color: #94a3b8; }
    .gradient-text {
        background: linear-gradient(135deg, #00ffff 0%, #00ff88 50%, #0088ff 100%);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        font-weight: 800;
    }
    .neon-box {
        border: 1px solid rgba(0, 255, 255, 0.3);
        box-shadow: 0 0 10px rgba(0, 255, 255, 0.1);
        background: rgba(15, 23, 42, 0.6);
        border-radius: 12px;
        padding: 20px;
    }
    .sidebar {
        width: 300px;
        flex-shrink: 0;
        padding: 24px 18px;
        background-color: #0b1121;
        border-right: 1px solid #1e293b;
    }
    .sidebar nav a {
        display: block;
        padding: 6px 10px;
        margin: 2px 0;
        border-radius: 6px;
        color: #cbd5e1;
        text-decoration: none;
    }
    .sidebar nav a.active { background: rgba(6, 182, 212, 0.2); color: #22d3ee; font-weight: 600; }
    .content { flex: 1; padding: 32px 48px; max-width: 1200px; }
    .columns { display: grid; grid-auto-flow: column; grid-auto-columns: 1fr; gap: 20px; }
    .metric { background: #0f172a; border: 1px solid #1e293b; border-radius: 8px; padding: 14px; }
    .metric .label { font-size: 0.85rem; color: #94a3b8; }
    .metric .value { font-size: 1.8rem; font-weight: 700; }
    .metric .delta { font-size: 0.85rem; color: #34d399; }
    .metric .delta.down { color: #f87171; }
    button {
        background: linear-gradient(90deg, #06b6d4 0%, #2563eb 100%);
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 8px;
        font-weight: bold;
        text-transform: uppercase;
        letter-spacing: 1px;
        cursor: pointer;
        width: 100%;
    }
    button.secondary { background: #1e293b; }
    input, textarea, select {
        width: 100%;
        padding: 8px;
        margin: 4px 0 12px;
        background-color: #0f172a;
        color: white;
        border: 1px solid #334155;
        border-radius: 8px;
    }
    input[type="range"] { padding: 0; }
    label { font-size: 0.9rem; color: #cbd5e1; }
    table { width: 100%; border-collapse: collapse; border: 1px solid #334155; margin: 12px 0; }
    th, td { text-align: left; padding: 8px 12px; border-bottom: 1px solid #1e293b; }
    th { background: #0f172a; color: #94a3b8; }
    details { margin: 12px 0; }
    summary { cursor: pointer; color: #22d3ee; }
    .notice { padding: 12px 16px; border-radius: 8px; margin-bottom: 20px; }
    .notice.info { background: rgba(37, 99, 235, 0.2); border-left: 3px solid #2563eb; }
    .notice.success { background: rgba(52, 211, 153, 0.15); border-left: 3px solid #34d399; }
    .notice.warning { background: rgba(250, 204, 21, 0.15); border-left: 3px solid #facc15; }
    .notice.error { background: rgba(239, 68, 68, 0.15); border-left: 3px solid #ef4444; }
    .user-msg {
        background: rgba(6, 182, 212, 0.2);
        padding: 10px;
        border-radius: 10px;
        margin-bottom: 10px;
        border-left: 3px solid #06b6d4;
    }
    .bot-msg {
        background: rgba(30, 41, 59, 0.5);
        padding: 10px;
        border-radius: 10px;
        margin-bottom: 10px;
        border-left: 3px solid #8b5cf6;
    }
    .spinner { display: none; color: #22d3ee; margin-top: 10px; }
    .progress { height: 10px; background: #1e293b; border-radius: 5px; overflow: hidden; }
    .progress > div { height: 100%; background: linear-gradient(90deg, #06b6d4 0%, #2563eb 100%); }
"#;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wrap page content in the document shell with sidebar and chat panel
pub fn layout(page: Page, state: &SessionState, notice: Option<&Notice>, content: &str) -> String {
    let nav: String = Page::ALL
        .iter()
        .map(|p| {
            let class = if *p == page { r#" class="active""# } else { "" };
            format!(
                r#"<a href="/?page={}"{}>{}</a>"#,
                p.slug(),
                class,
                p.label()
            )
        })
        .collect();

    let chat: String = state
        .recent(VISIBLE_HISTORY)
        .iter()
        .map(chat_bubble)
        .collect();

    let notice_html = notice.map(notice_box).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Predictraforge | AI Maintenance</title>
    <style>{STYLES}</style>
</head>
<body>
    <aside class="sidebar">
        <div class="gradient-text" style="font-size: 2rem;">⚡ PREDICTRAFORGE</div>
        <div class="mono muted" style="font-size: 0.8rem; margin-bottom: 2rem;">V {version} | SYSTEM ONLINE</div>
        <nav>{nav}</nav>
        <hr style="border-color: #1e293b;">
        <h3>🤖 Forge Assistant</h3>
        <div class="chat">{chat}</div>
        <form method="POST" action="/chat">
            <input type="hidden" name="page" value="{slug}">
            <input type="text" name="message" placeholder="Ask Forge..." required autocomplete="off">
            <button type="submit">Send</button>
        </form>
    </aside>
    <main class="content">
        {notice_html}
        {content}
    </main>
</body>
</html>"#,
        version = env!("CARGO_PKG_VERSION"),
        slug = page.slug(),
    )
}

fn chat_bubble(message: &ChatMessage) -> String {
    let (class, icon) = match message.role {
        Role::User => ("user-msg", "👤"),
        Role::Assistant => ("bot-msg", "🤖"),
    };
    format!(
        r#"<div class="{}">{} {}</div>"#,
        class,
        icon,
        escape(&message.content)
    )
}

pub fn notice_box(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "success",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!(
        r#"<div class="notice {}">{}</div>"#,
        class,
        escape(&notice.message)
    )
}

/// Headline number with optional delta
pub fn metric(label: &str, value: &str, delta: Option<&str>) -> String {
    let delta_html = delta.map_or(String::new(), |d| {
        let class = if d.starts_with('-') { "delta down" } else { "delta" };
        format!(r#"<div class="{}">{}</div>"#, class, escape(d))
    });
    format!(
        r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div>{}</div>"#,
        escape(label),
        escape(value),
        delta_html
    )
}

/// Plain table; cells are escaped
pub fn table<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h.as_ref())))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|c| format!("<td>{}</td>", escape(c)))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        head, body
    )
}

/// Single-button form posting to a mock action
pub fn action_button(action: &str, label: &str, secondary: bool) -> String {
    let class = if secondary { r#" class="secondary""# } else { "" };
    format!(
        r#"<form method="POST" action="/actions/{}"><button type="submit"{}>{}</button></form>"#,
        action, class, label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#x27;y&#x27;"
        );
    }

    #[test]
    fn test_layout_marks_active_page() {
        let state = SessionState::new();
        let html = layout(Page::Alerts, &state, None, "<p>body</p>");

        assert!(html.contains(r#"<a href="/?page=alerts" class="active">Instant Alerts</a>"#));
        assert!(html.contains(r#"<a href="/?page=home">Home</a>"#));
        assert!(html.contains(r#"name="page" value="alerts""#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_chat_is_escaped() {
        let mut state = SessionState::new();
        state.push_message(ChatMessage::user("<b>bold</b>"));
        let html = layout(Page::Home, &state, None, "");

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_metric_delta_direction() {
        assert!(metric("Health", "85", Some("-2.5%")).contains("delta down"));
        assert!(!metric("RPM", "3,240", Some("+12")).contains("delta down"));
        assert!(!metric("Records", "14,205", None).contains("delta"));
    }
}
