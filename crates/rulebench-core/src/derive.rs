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

//! View-ready projections of a comparison payload.
//!
//! Nothing here alters source values: [`order_rules`] sorts a copy of a run's
//! rules and [`classify_pareto_points`] partitions a copy of the front.

use crate::model::{BenchmarkRun, ComparisonResult, ParetoPoint, RuleStat};
use serde::Serialize;
use tracing::debug;

/// A run's rules sorted ascending by `position`.
///
/// The sort is stable: rules sharing a position keep their input order.
/// Validated payloads never contain ties.
///
/// # Examples
///
/// ```
/// use rulebench_core::{order_rules, BenchmarkRun, RuleStat};
///
/// let run = BenchmarkRun::new(10.0, 0.002, vec![
///     RuleStat::new("R1", 1, 5, 0.001),
///     RuleStat::new("R2", 0, 3, 0.0005),
/// ]);
/// let ordered: Vec<String> = order_rules(&run)
///     .iter()
///     .map(|r| r.rule_id.to_string())
///     .collect();
/// assert_eq!(ordered, ["R2", "R1"]);
/// ```
pub fn order_rules(run: &BenchmarkRun) -> Vec<RuleStat> {
    let mut rules = run.per_rules.clone();
    rules.sort_by_key(|r| r.position);
    rules
}

/// Pareto front split by role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParetoPartition {
    /// The baseline ordering's point, if exactly one point carries the flag.
    pub baseline: Option<ParetoPoint>,
    /// The GA-best ordering's point, if exactly one point carries the flag.
    pub selected: Option<ParetoPoint>,
    /// Every remaining point, in input order.
    pub others: Vec<ParetoPoint>,
}

impl ParetoPartition {
    /// Total number of points across all three groups.
    pub fn len(&self) -> usize {
        self.others.len() + self.baseline.is_some() as usize + self.selected.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition Pareto points into baseline, selected and others.
///
/// `baseline` and `selected` are filled only when exactly one point carries
/// the matching flag. Zero matches is a normal outcome and yields `None`.
/// Points whose role is ambiguous (a flag shared by several points, or a
/// point carrying both flags) stay in `others`; [`crate::parse`] rejects such
/// fronts, so this only happens for values that skipped validation.
pub fn classify_pareto_points(points: &[ParetoPoint]) -> ParetoPartition {
    let baseline_at = sole_holder(points, |p| p.is_baseline, |p| p.is_selected);
    let selected_at = sole_holder(points, |p| p.is_selected, |p| p.is_baseline);

    let others: Vec<ParetoPoint> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != baseline_at && Some(*i) != selected_at)
        .map(|(_, p)| *p)
        .collect();

    debug!(
        total = points.len(),
        others = others.len(),
        has_baseline = baseline_at.is_some(),
        has_selected = selected_at.is_some(),
        "classified pareto front"
    );

    ParetoPartition {
        baseline: baseline_at.map(|i| points[i]),
        selected: selected_at.map(|i| points[i]),
        others,
    }
}

// Index of the only point with `role`, provided that point lacks `other`.
fn sole_holder(
    points: &[ParetoPoint],
    role: impl Fn(&ParetoPoint) -> bool,
    other: impl Fn(&ParetoPoint) -> bool,
) -> Option<usize> {
    let mut holders = points.iter().enumerate().filter(|&(_, p)| role(p));
    match (holders.next(), holders.next()) {
        (Some((i, p)), None) if !other(p) => Some(i),
        _ => None,
    }
}

/// Relative gain of the GA-best ordering over the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Improvement {
    /// Percentage fewer rule checks per item. `None` when the baseline is zero.
    pub checks_reduction_pct: Option<f64>,
    /// Percentage less time per item. `None` when the baseline is zero.
    pub time_reduction_pct: Option<f64>,
}

impl ComparisonResult {
    /// Percentage reduction of GA-best versus baseline on both metrics.
    ///
    /// Negative values mean the GA ordering is worse on that metric.
    pub fn improvement(&self) -> Improvement {
        Improvement {
            checks_reduction_pct: reduction_pct(self.baseline.avg_checks, self.ga_best.avg_checks),
            time_reduction_pct: reduction_pct(self.baseline.avg_time, self.ga_best.avg_time),
        }
    }
}

fn reduction_pct(baseline: f64, optimized: f64) -> Option<f64> {
    if baseline == 0.0 {
        None
    } else {
        Some((baseline - optimized) / baseline * 100.0)
    }
}
