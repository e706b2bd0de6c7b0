/// Visualization module: the single-page dashboard as self-contained HTML.
///
/// Produces an HTML string with inline JS that handles:
/// - Sidebar selector with "All" plus every zone
/// - Metrics table, swapped per selection
/// - Bar, line, pie, heatmap and bubble-map charts drawn with Plotly.js
/// - Static insights list
///
/// All chart drawing is done client-side by dashboard.js. This module runs
/// the pipeline for every selector option, serializes the views to JSON, and
/// emits the HTML shell.
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use polars::datatypes::AnyValue;
use polars::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::pipeline::{Dashboard, ViewBundle};

const DASHBOARD_JS: &str = include_str!("dashboard.js");

const CHART_IDS: [&str; 5] = [
    "chart-bar",
    "chart-line",
    "chart-pie",
    "chart-heatmap",
    "chart-map",
];

// ── Intermediate data structures ────────────────────────────────────────────

struct TableView {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Serialize)]
struct PageView {
    bundle: ViewBundle,
    table_html: String,
}

#[derive(Serialize)]
struct PagePayload<'a> {
    initial: &'a str,
    views: BTreeMap<String, PageView>,
}

// ── Data extraction ─────────────────────────────────────────────────────────

fn extract_table(df: &DataFrame) -> Result<TableView> {
    let headers = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let mut cells = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            cells.push(cell_text(&column.get(i)?));
        }
        rows.push(cells);
    }
    Ok(TableView { headers, rows })
}

fn cell_text(val: &AnyValue) -> String {
    match val {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        other => format!("{}", other),
    }
}

// ── HTML generation ─────────────────────────────────────────────────────────

/// Main entry point: generates a self-contained HTML page.
///
/// Every selector option is rendered up front so the page switches views
/// without a round trip. An `initial` value outside the options is rendered
/// too, and shows the empty state.
pub fn generate_dashboard_html(dashboard: &Dashboard, initial: &str) -> Result<String> {
    let config = dashboard.config();
    let options = dashboard.selector_options();

    // ── Run the pipeline per option ─────────────────────────────────────
    let mut views = BTreeMap::new();
    for selection in options.iter().map(String::as_str).chain(std::iter::once(initial)) {
        if views.contains_key(selection) {
            continue;
        }
        let table = extract_table(&dashboard.table(selection)?)?;
        views.insert(
            selection.to_string(),
            PageView {
                bundle: dashboard.render(selection),
                table_html: table_to_html(&table),
            },
        );
    }

    let payload = PagePayload { initial, views };
    let payload_json = script_safe(&serde_json::to_string(&payload)?);

    // ── Emit HTML ───────────────────────────────────────────────────────
    let html = format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="{plotly_url}"></script>
  <style>
    body {{ margin:0; font-family:sans-serif; color:#31333f; display:flex; }}
    aside {{ width:260px; min-height:100vh; padding:24px 16px; background:#f0f2f6; box-sizing:border-box; }}
    main {{ flex:1; padding:24px 48px; max-width:1100px; }}
    label {{ display:block; font-size:14px; margin-bottom:6px; }}
    select {{ width:100%; padding:6px; font-size:14px; }}
    table {{ border-collapse:collapse; font-size:13px; margin-bottom:24px; }}
    th, td {{ border:1px solid #dee2e6; padding:4px 8px; text-align:right; }}
    th:first-child, td:first-child {{ text-align:left; }}
    th {{ background:#f8f9fa; }}
    .chart {{ width:100%; height:450px; }}
    .empty {{ display:none; color:#868e96; font-style:italic; padding:8px 0; }}
  </style>
</head>
<body>
  <aside>
    <h2>{sidebar_header}</h2>
    <label for="zone-select">{selector_label}</label>
    <select id="zone-select">
{options_html}
    </select>
  </aside>
  <main>
    <h1>{title}</h1>
    <h3>{table_heading}</h3>
    <div id="metrics-table"></div>
{charts_html}
    <h3>{insights_heading}</h3>
    <ul>
{insights_html}
    </ul>
  </main>
<script>
{dashboard_js}
Dashboard.create({payload_json});
</script>
</body>
</html>"##,
        title = escape_html(&config.title),
        plotly_url = escape_html(&config.plotly_js_url),
        sidebar_header = escape_html(&config.sidebar_header),
        selector_label = escape_html(&config.selector_label),
        options_html = options_to_html(&options, initial),
        table_heading = escape_html(&config.table_heading),
        charts_html = charts_to_html(),
        insights_heading = escape_html(&config.insights_heading),
        insights_html = insights_to_html(&dashboard.render(initial).insights),
        dashboard_js = DASHBOARD_JS,
        payload_json = payload_json,
    );

    Ok(html)
}

// ── HTML fragments ──────────────────────────────────────────────────────────

fn table_to_html(table: &TableView) -> String {
    let mut s = String::from("<table><thead><tr>");
    for h in &table.headers {
        let _ = write!(s, "<th>{}</th>", escape_html(h));
    }
    s.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        s.push_str("<tr>");
        for cell in row {
            let _ = write!(s, "<td>{}</td>", escape_html(cell));
        }
        s.push_str("</tr>");
    }
    s.push_str("</tbody></table>");
    s
}

/// Selector entries; an `initial` outside `options` is shown as a disabled
/// entry so the selector is never blank.
fn options_to_html(options: &[String], initial: &str) -> String {
    let mut lines: Vec<String> = options
        .iter()
        .map(|o| {
            let o = escape_html(o);
            format!(r#"      <option value="{o}">{o}</option>"#)
        })
        .collect();
    if !options.iter().any(|o| o == initial) {
        let o = escape_html(initial);
        lines.push(format!(r#"      <option value="{o}" disabled>{o}</option>"#));
    }
    lines.join("\n")
}

fn charts_to_html() -> String {
    CHART_IDS
        .iter()
        .map(|id| {
            format!(
                r#"    <div id="{id}" class="chart"></div>
    <div id="{id}-empty" class="empty">No data for this selection.</div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn insights_to_html(insights: &[&str]) -> String {
    insights
        .iter()
        .map(|line| format!("      <li><strong>{}</strong></li>", escape_html(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
