// Dweve Rulebench - Rule Ordering Benchmark Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Standalone HTML page for a dashboard view.

use crate::binding::{SummaryField, TableTarget, TABLE_COLUMNS};
use crate::chart::ChartTarget;
use crate::sink::DashboardView;
use rulebench_core::Improvement;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Chart.js build the page loads.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

/// Render the full page.
///
/// Summary fields, tables and chart canvases carry the element ids the
/// bindings name, so the page also works as a target for a script that
/// re-binds a fresh payload.
pub fn render_page(view: &DashboardView, title: &str, improvement: Option<&Improvement>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    html.push_str("<style>\n");
    html.push_str(include_str!("styles.css"));
    html.push_str("</style>\n");
    let _ = writeln!(html, "<script src=\"{}\"></script>", CHART_JS_URL);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));

    html.push_str("<section class=\"summary\">\n");
    for field in SummaryField::ALL {
        let _ = writeln!(
            html,
            "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\" id=\"{}\">{}</div></div>",
            field.caption(),
            field.element_id(),
            escape_html(view.text(field).unwrap_or(""))
        );
    }
    html.push_str("</section>\n");

    if let Some(improvement) = improvement {
        let _ = writeln!(
            html,
            "<p class=\"improvement\">Checks reduced by {}, time reduced by {}</p>",
            percent(improvement.checks_reduction_pct),
            percent(improvement.time_reduction_pct)
        );
    }

    html.push_str("<section class=\"tables\">\n");
    for table in TableTarget::ALL {
        render_table(&mut html, view, table);
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"charts\">\n");
    for target in ChartTarget::ALL {
        let _ = writeln!(html, "<h2>{}</h2>", target.caption());
        let _ = writeln!(html, "<canvas id=\"{}\"></canvas>", target.element_id());
    }
    html.push_str("</section>\n");

    html.push_str("<script>\n");
    for target in ChartTarget::ALL {
        if let Some(spec) = view.chart(target) {
            let config = escape_script(&spec.to_chartjs().to_string());
            let _ = writeln!(
                html,
                "new Chart(document.getElementById('{}'), {});",
                target.element_id(),
                config
            );
        }
    }
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn render_table(html: &mut String, view: &DashboardView, table: TableTarget) {
    let _ = writeln!(html, "<div>\n<h2>{}</h2>", table.caption());
    let _ = write!(html, "<table id=\"{}\">\n<thead><tr>", table.element_id());
    for column in TABLE_COLUMNS {
        let _ = write!(html, "<th>{}</th>", column);
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in view.rows(table) {
        html.push_str("<tr>");
        for cell in row.cells() {
            let _ = write!(html, "<td>{}</td>", escape_html(&cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "n/a".to_string(),
    }
}

/// Write the page to `path`.
pub fn export_html(
    view: &DashboardView,
    title: &str,
    improvement: Option<&Improvement>,
    path: &Path,
) -> io::Result<()> {
    fs::write(path, render_page(view, title, improvement))
}

/// Escape text for element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// JSON inside a <script> block must not close the block early.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
