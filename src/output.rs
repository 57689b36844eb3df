use eyre::Result;

use crate::AnalysisReport;
use crate::youtube::TrendingVideo;

/// Render a report as human-readable text
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Video: {}\nAnalyzed {} of {} collected comments\n",
        report.video_id, report.analyzed, report.collected
    ));
    if report.exhausted {
        out.push_str("No more comments were available upstream.\n");
    }
    out.push_str(&format!(
        "\nPositive: {:.2}%\nNegative: {:.2}%\nNeutral:  {:.2}%\n",
        report.percentages.positive, report.percentages.negative, report.percentages.neutral
    ));

    if !report.preview.is_empty() {
        out.push_str(&format!("\nSample comments ({}):\n", report.preview.len()));
        for comment in &report.preview {
            out.push_str(&format!("  [{}] {}\n", comment.label(), comment.text));
        }
    }

    out
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the trending video list as text
pub fn render_trending(videos: &[TrendingVideo]) -> String {
    if videos.is_empty() {
        return "No trending videos with comments found.".to_string();
    }
    videos
        .iter()
        .map(|v| format!("{}  {}\n    {}", v.video_id, v.title, v.thumbnail))
        .collect::<Vec<_>>()
        .join("\n")
}
