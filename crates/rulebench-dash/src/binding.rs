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

//! Summary and table binding.

use crate::format::{format_exponential2, format_fixed2, format_fixed4};
use rulebench_core::{order_rules, BenchmarkRun, ComparisonResult, RuleId, Strategy};
use serde::Serialize;

/// One of the four summary text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SummaryField {
    BaselineAvgChecks,
    GaAvgChecks,
    BaselineAvgTime,
    GaAvgTime,
}

impl SummaryField {
    pub const ALL: [SummaryField; 4] = [
        SummaryField::BaselineAvgChecks,
        SummaryField::GaAvgChecks,
        SummaryField::BaselineAvgTime,
        SummaryField::GaAvgTime,
    ];

    /// DOM element id of the field.
    pub fn element_id(&self) -> &'static str {
        match self {
            SummaryField::BaselineAvgChecks => "baseline-avg-checks",
            SummaryField::GaAvgChecks => "ga-avg-checks",
            SummaryField::BaselineAvgTime => "baseline-avg-time",
            SummaryField::GaAvgTime => "ga-avg-time",
        }
    }

    /// Human-readable caption.
    pub fn caption(&self) -> &'static str {
        match self {
            SummaryField::BaselineAvgChecks => "Baseline avg checks",
            SummaryField::GaAvgChecks => "GA avg checks",
            SummaryField::BaselineAvgTime => "Baseline avg time",
            SummaryField::GaAvgTime => "GA avg time",
        }
    }
}

/// Formatted summary values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub baseline_avg_checks: String,
    pub ga_avg_checks: String,
    pub baseline_avg_time: String,
    pub ga_avg_time: String,
}

impl Summary {
    /// Text for one field.
    pub fn get(&self, field: SummaryField) -> &str {
        match field {
            SummaryField::BaselineAvgChecks => &self.baseline_avg_checks,
            SummaryField::GaAvgChecks => &self.ga_avg_checks,
            SummaryField::BaselineAvgTime => &self.baseline_avg_time,
            SummaryField::GaAvgTime => &self.ga_avg_time,
        }
    }

    /// All fields paired with their text, in display order.
    pub fn fields(&self) -> impl Iterator<Item = (SummaryField, &str)> {
        SummaryField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Format the headline averages of both runs.
///
/// Checks use two fixed decimals, times use scientific notation with two
/// mantissa decimals.
pub fn bind_summary(result: &ComparisonResult) -> Summary {
    Summary {
        baseline_avg_checks: format_fixed2(result.baseline.avg_checks),
        ga_avg_checks: format_fixed2(result.ga_best.avg_checks),
        baseline_avg_time: format_exponential2(result.baseline.avg_time),
        ga_avg_time: format_exponential2(result.ga_best.avg_time),
    }
}

/// One of the two per-rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TableTarget {
    Baseline,
    GaBest,
}

impl TableTarget {
    pub const ALL: [TableTarget; 2] = [TableTarget::Baseline, TableTarget::GaBest];

    /// DOM element id of the table.
    pub fn element_id(&self) -> &'static str {
        match self {
            TableTarget::Baseline => "baseline-table",
            TableTarget::GaBest => "ga-table",
        }
    }

    /// The run this table shows.
    pub fn strategy(&self) -> Strategy {
        match self {
            TableTarget::Baseline => Strategy::Baseline,
            TableTarget::GaBest => Strategy::GaBest,
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            TableTarget::Baseline => "Baseline rule order",
            TableTarget::GaBest => "GA-optimized rule order",
        }
    }
}

/// Column headers, in cell order.
pub const TABLE_COLUMNS: [&str; 4] = ["Position", "Rule ID", "Hit Count", "Total Time"];

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub position: i64,
    pub rule_id: RuleId,
    pub hit_count: u64,
    /// Total time with four fraction digits.
    pub total_time: String,
}

impl TableRow {
    /// Cells in column order `(position, rule_id, hit_count, total_time)`.
    pub fn cells(&self) -> [String; 4] {
        [
            self.position.to_string(),
            self.rule_id.to_string(),
            self.hit_count.to_string(),
            self.total_time.clone(),
        ]
    }
}

/// Rows for a run's table, one per rule in position order.
pub fn bind_table(run: &BenchmarkRun) -> Vec<TableRow> {
    order_rules(run)
        .into_iter()
        .map(|rule| TableRow {
            position: rule.position,
            total_time: format_fixed4(rule.total_time),
            rule_id: rule.rule_id,
            hit_count: rule.hit_count,
        })
        .collect()
}
