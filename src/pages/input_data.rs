//! Upload → analyze → results

use super::html::{action_button, escape, metric, table};
use super::PageContext;
use crate::analysis::{AnalysisReport, UploadedDataset};

pub fn render(ctx: &PageContext<'_>) -> String {
    let body = if ctx.state.analysis_complete() {
        results(ctx.report)
    } else {
        upload(ctx.state.uploaded_data())
    };

    format!(
        r#"<h1 style="text-align:center;">Upload Data <span class="gradient-text">For Analysis</span></h1>
{body}"#
    )
}

fn upload(dataset: Option<&UploadedDataset>) -> String {
    let loaded = dataset.map(loaded_dataset).unwrap_or_default();

    format!(
        r#"<div style="text-align:center; max-width: 600px; margin: 0 auto;">
    <p class="muted">Securely upload your historical equipment logs in CSV format. Our AI engine will analyze patterns and generate predictive models instantly.</p>
</div>
<form method="POST" action="/upload" enctype="multipart/form-data" class="neon-box">
    <label for="file">Drag &amp; Drop CSV Files</label>
    <input type="file" id="file" name="file" accept=".csv,text/csv" required>
    <button type="submit">Upload</button>
</form>
{loaded}"#
    )
}

fn loaded_dataset(dataset: &UploadedDataset) -> String {
    let preview = table(dataset.headers.as_slice(), dataset.preview());

    format!(
        r#"<p class="mono">Loaded: {name} ({rows} rows × {cols} columns)</p>
<details>
    <summary>Preview Data</summary>
    {preview}
</details>
<form method="POST" action="/analyze" onsubmit="this.querySelector('.spinner').style.display='block'; this.querySelector('button').disabled=true;">
    <button type="submit">ANALYZE DATA 🚀</button>
    <div class="spinner">⏳ Forge AI is processing neural networks...</div>
</form>"#,
        name = escape(&dataset.file_name),
        rows = dataset.row_count(),
        cols = dataset.column_count(),
    )
}

fn results(report: &AnalysisReport) -> String {
    let metrics: String = report
        .metrics
        .iter()
        .map(|m| metric(m.label, m.value, m.delta))
        .collect();

    let rows: Vec<Vec<String>> = report
        .predictions
        .iter()
        .map(|p| {
            vec![
                p.machine_id.to_string(),
                p.issue.to_string(),
                p.probability.to_string(),
                p.time_to_failure.to_string(),
                p.action.to_string(),
            ]
        })
        .collect();
    let predictions = table(&AnalysisReport::PREDICTION_COLUMNS, &rows);

    let simulate = action_button("simulate-twin", "Simulate in Digital Twin", false);
    let download = action_button("download-report", "Download PDF Report", false);

    format!(
        r#"<div class="neon-box" style="text-align:center; border-color:#34d399;"><h2 style="color:#34d399; margin:0;">✅ ANALYSIS COMPLETE</h2><p>Processing finished successfully.</p></div>
<div class="columns" style="margin-top: 20px;">{metrics}</div>
<h3>⚠️ Critical Predictions</h3>
{predictions}
<h3>Next Steps</h3>
<div class="columns">{simulate}{download}</div>
<form method="POST" action="/analysis/reset" style="margin-top: 20px;">
    <button type="submit" class="secondary">Start New Analysis</button>
</form>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisPipeline;
    use crate::session::SessionState;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_idle_without_dataset() {
        let state = SessionState::new();
        let report = AnalysisReport::standard();
        let html = render(&PageContext::new(&state, &report, today()));

        assert!(html.contains(r#"action="/upload""#));
        assert!(!html.contains(r#"action="/analyze""#));
        assert!(!html.contains("ANALYSIS COMPLETE"));
    }

    #[test]
    fn test_idle_with_dataset_shows_preview() {
        let pipeline = AnalysisPipeline::new(Duration::ZERO);
        let mut state = SessionState::new();
        pipeline
            .upload(&mut state, "<log>.csv", b"machine,temp\nCNC-01,68.5\n")
            .unwrap();

        let report = AnalysisReport::standard();
        let html = render(&PageContext::new(&state, &report, today()));

        assert!(html.contains("&lt;log&gt;.csv (1 rows × 2 columns)"));
        assert!(html.contains("<td>CNC-01</td>"));
        assert!(html.contains(r#"action="/analyze""#));
        assert!(html.contains("Forge AI is processing neural networks..."));
    }

    #[tokio::test]
    async fn test_complete_shows_report() {
        let pipeline = AnalysisPipeline::new(Duration::ZERO);
        let mut state = SessionState::new();
        pipeline.upload(&mut state, "a.csv", b"x\n1\n").unwrap();
        pipeline.analyze(&mut state).await.unwrap();

        let html = render(&PageContext::new(&state, pipeline.report(), today()));

        assert!(html.contains("ANALYSIS COMPLETE"));
        assert!(html.contains("85/100"));
        assert!(html.contains("14,205"));
        assert!(html.contains("<td>Conveyor-A</td>"));
        assert!(html.contains(r#"action="/analysis/reset""#));
        assert!(!html.contains(r#"action="/upload""#));
    }
}
