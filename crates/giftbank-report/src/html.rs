//! HTML profile comparison chart.
//!
//! Produces a self-contained HTML file with all CSS inlined and the chart
//! drawn as inline SVG.

use anyhow::Result;
use std::path::Path;

use giftbank_core::model::QuestionKind;
use giftbank_core::profile::{compare, Profile};

const EXAM_COLOR: &str = "#2563eb";
const REFERENCE_COLOR: &str = "#f97316";

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page comparing an exam profile to a reference profile.
pub fn generate_comparison_html(exam_name: &str, exam: &Profile, reference: &Profile) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>giftbank profile comparison: {}</title>\n",
        html_escape(exam_name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Profile comparison</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Exam: <strong>{}</strong> | {} questions | reference: {} questions | {}</p>\n",
        html_escape(exam_name),
        exam.total(),
        reference.total(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Chart
    html.push_str("<section class=\"chart\">\n");
    html.push_str("<h2>Questions per kind</h2>\n");
    html.push_str(&generate_grouped_bar_chart(exam, reference));
    html.push_str(&format!(
        "<p class=\"legend\"><span style=\"color:{EXAM_COLOR}\">■</span> {} &nbsp; <span style=\"color:{REFERENCE_COLOR}\">■</span> reference</p>\n",
        html_escape(exam_name)
    ));
    html.push_str("</section>\n");

    // Counts table
    html.push_str("<section class=\"counts\">\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Kind</th><th>Exam</th><th>Reference</th><th>Difference</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for kind in QuestionKind::ALL {
        let (a, b) = (exam.get(kind), reference.get(kind));
        let diff = a as i64 - b as i64;
        let class = match diff.signum() {
            1 => "more",
            -1 => "fewer",
            _ => "same",
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{a}</td><td>{b}</td><td class=\"{class}\">{diff:+}</td></tr>\n",
            html_escape(kind.label())
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Textual comparison
    html.push_str("<section class=\"summary\">\n<ul>\n");
    for line in compare(exam, reference) {
        html.push_str(&format!("<li>{}</li>\n", html_escape(&line)));
    }
    html.push_str("</ul>\n</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(&serde_json::json!({
            "exam": exam,
            "reference": reference,
        }))
        .unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the comparison page to a file.
pub fn write_comparison_html(
    exam_name: &str,
    exam: &Profile,
    reference: &Profile,
    path: &Path,
) -> Result<()> {
    let html = generate_comparison_html(exam_name, exam, reference);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_grouped_bar_chart(exam: &Profile, reference: &Profile) -> String {
    let bar_height = 14;
    let group_gap = 12;
    let max_width = 400;
    let padding = 10;
    let label_width = 160;

    let max = exam.max_count().max(reference.max_count()).max(1);
    let group_height = 2 * bar_height + group_gap;
    let total_height = QuestionKind::ALL.len() * group_height + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, kind) in QuestionKind::ALL.iter().enumerate() {
        let y = i * group_height + padding;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height,
            html_escape(kind.label())
        ));

        for (row, (count, color)) in [
            (exam.get(*kind), EXAM_COLOR),
            (reference.get(*kind), REFERENCE_COLOR),
        ]
        .into_iter()
        .enumerate()
        {
            let bar_y = y + row * bar_height;
            let width = count * max_width / max;
            svg.push_str(&format!(
                "  <rect x=\"{label_width}\" y=\"{bar_y}\" width=\"{width}\" height=\"{}\" fill=\"{color}\" rx=\"3\"/>\n",
                bar_height - 2
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"currentColor\" dominant-baseline=\"middle\">{count}</text>\n",
                label_width + width + 6,
                bar_y + bar_height / 2
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --more: #dcfce7; --fewer: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --more: #064e3b; --fewer: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta, .legend { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.more { background: var(--more); }
.fewer { background: var(--fewer); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> (Profile, Profile) {
        let exam = Profile {
            multiple_choice: 5,
            true_false: 3,
            matching: 2,
            ..Profile::default()
        };
        let reference = Profile {
            multiple_choice: 3,
            true_false: 4,
            open_ended: 1,
            ..Profile::default()
        };
        (exam, reference)
    }

    #[test]
    fn html_contains_required_elements() {
        let (exam, reference) = profiles();
        let html = generate_comparison_html("midterm", &exam, &reference);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("midterm"));
        assert!(html.contains("2 more multiple choice"));
        assert!(html.contains("<td class=\"fewer\">-1</td>"));
    }

    #[test]
    fn exam_name_is_escaped() {
        let (exam, reference) = profiles();
        let html = generate_comparison_html("<b>x</b>", &exam, &reference);
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn empty_profiles_render() {
        let html = generate_comparison_html("empty", &Profile::default(), &Profile::default());
        assert!(html.contains("width=\"0\""));
    }

    #[test]
    fn write_to_file() {
        let (exam, reference) = profiles();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts").join("comparison.html");

        write_comparison_html("midterm", &exam, &reference, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Profile comparison"));
    }
}
