use std::path::Path;

use crate::presentation::ChartFigure;

const ARTIFACT_SUFFIX: &str = "_sales_summary";
const PLOTLY_SCRIPT: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Renders the single dashboard page with the figure embedded as JSON.
pub fn render_page(product: &str, source: &str, figure: &ChartFigure) -> Result<String, serde_json::Error> {
    let figure = script_safe(&figure.to_json()?);
    let heading = escape_html(&format!("{product} Sales Analysis Dashboard"));
    let source = escape_html(source);

    Ok(format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{heading}</title>
<script src="{PLOTLY_SCRIPT}"></script>
</head>
<body style="font-family: Arial, sans-serif; max-width: 1200px; margin: 0 auto; padding: 20px;">
<h1 style="text-align: center; color: #333;">{heading}</h1>
<div style="margin-bottom: 20px; border-bottom: 1px solid #ddd; padding-bottom: 10px;">
<p style="text-align: center; color: #666;">Data Source: {source}</p>
</div>
<div id="sales-line-chart" style="height: 600px;"></div>
<script>
const figure = {figure};
Plotly.newPlot("sales-line-chart", figure.data, figure.layout, {{responsive: true}});
</script>
</body>
</html>
"#))
}

/// Derives a display name from a summary file name: `pink_morsel_sales_summary.csv` is `Pink Morsel`.
pub fn product_label(path: &Path) -> String {
    let stem = path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = stem.strip_suffix(ARTIFACT_SUFFIX).unwrap_or(&stem);

    let words: Vec<String> = name.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "Sales".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut characters = word.chars();

    match characters.next() {
        Some(first) => first.to_uppercase().chain(characters).collect(),
        None => String::new()
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character)
        }
    }

    escaped
}

/// Stops embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}
