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

//! Terminal rendering of a dashboard view.

use crate::binding::{SummaryField, TableTarget, TABLE_COLUMNS};
use crate::chart::{ChartSpec, ChartTarget};
use crate::sink::DashboardView;
use colored::Colorize;
use rulebench_core::Improvement;
use std::io::{self, Write};

const RULE: usize = 72;

/// Write the dashboard as plain text with color highlights.
pub fn write_dashboard<W: Write>(
    out: &mut W,
    view: &DashboardView,
    title: &str,
    improvement: Option<&Improvement>,
) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE))?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", "=".repeat(RULE))?;

    for field in SummaryField::ALL {
        writeln!(
            out,
            "{:<26} {}",
            format!("{}:", field.caption()),
            view.text(field).unwrap_or("-").cyan()
        )?;
    }

    if let Some(improvement) = improvement {
        writeln!(
            out,
            "{:<26} {}",
            "Checks reduction:",
            colored_percent(improvement.checks_reduction_pct)
        )?;
        writeln!(
            out,
            "{:<26} {}",
            "Time reduction:",
            colored_percent(improvement.time_reduction_pct)
        )?;
    }

    for table in TableTarget::ALL {
        writeln!(out)?;
        writeln!(out, "{}", table.caption().bright_blue().bold())?;
        writeln!(
            out,
            "{:>8}  {:<20} {:>10} {:>12}",
            TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2], TABLE_COLUMNS[3]
        )?;
        writeln!(out, "{}", "-".repeat(RULE))?;
        for row in view.rows(table) {
            let [position, rule_id, hits, time] = row.cells();
            writeln!(out, "{:>8}  {:<20} {:>10} {:>12}", position, rule_id, hits, time)?;
        }
    }

    for target in ChartTarget::ALL {
        writeln!(out)?;
        writeln!(out, "{}", target.caption().bright_blue().bold())?;
        match view.chart(target) {
            Some(spec) => write_chart(out, spec)?,
            None => writeln!(out, "  (no chart)")?,
        }
    }

    writeln!(out, "{}", "=".repeat(RULE))?;
    Ok(())
}

fn write_chart<W: Write>(out: &mut W, spec: &ChartSpec) -> io::Result<()> {
    match spec {
        ChartSpec::Bar(bar) => {
            for (i, label) in bar.labels.iter().enumerate() {
                write!(out, "  {:<20}", label)?;
                for dataset in &bar.datasets {
                    let value = match dataset.data.get(i).copied().flatten() {
                        Some(v) => v.to_string(),
                        None => "-".to_string(),
                    };
                    write!(out, " {}={:<8}", dataset.label, value)?;
                }
                writeln!(out)?;
            }
        }
        ChartSpec::Scatter(scatter) => {
            for dataset in &scatter.datasets {
                write!(out, "  {:<20}", dataset.label)?;
                let points: Vec<String> = dataset
                    .points
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                writeln!(out, " {}", points.join(" "))?;
            }
        }
    }
    Ok(())
}

fn colored_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 0.0 => format!("{:.2}%", v).green().to_string(),
        Some(v) => format!("{:.2}%", v).red().to_string(),
        None => "n/a".dimmed().to_string(),
    }
}

/// Print the dashboard to stdout.
pub fn print_dashboard(view: &DashboardView, title: &str, improvement: Option<&Improvement>) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_dashboard(&mut handle, view, title, improvement) {
        tracing::warn!(error = %e, "failed to write dashboard to stdout");
    }
}
