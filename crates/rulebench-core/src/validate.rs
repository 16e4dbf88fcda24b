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

//! Cross-field invariants of a comparison payload.

use crate::error::{SchemaError, SchemaErrorKind, SchemaResult};
use crate::model::{BenchmarkRun, ComparisonResult, ParetoPoint, RuleId};
use crate::parse::ParseOptions;
use std::collections::{BTreeSet, HashSet};

impl ComparisonResult {
    /// Check every payload invariant.
    ///
    /// [`crate::parse`] calls this on every document it reads; call it
    /// directly when a `ComparisonResult` was assembled in code.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in document order: baseline run,
    /// GA run, Pareto front, then (in strict mode) rule-set agreement.
    pub fn validate(&self, options: &ParseOptions) -> SchemaResult<()> {
        validate_run(&self.baseline, options).map_err(|e| e.within("baseline"))?;
        validate_run(&self.ga_best, options).map_err(|e| e.within("ga_best"))?;
        validate_pareto(&self.pareto, options).map_err(|e| e.within("pareto"))?;

        if options.strict_rule_sets {
            validate_rule_sets(&self.baseline, &self.ga_best)?;
        }
        Ok(())
    }
}

fn validate_run(run: &BenchmarkRun, options: &ParseOptions) -> SchemaResult<()> {
    check_quantity("avg_checks", run.avg_checks)?;
    check_quantity("avg_time", run.avg_time)?;

    if run.per_rules.len() > options.limits.max_rules_per_run {
        return Err(SchemaError::limit(
            "per_rules",
            "rule count",
            run.per_rules.len(),
            options.limits.max_rules_per_run,
        ));
    }

    let mut seen = HashSet::with_capacity(run.per_rules.len());
    for (i, rule) in run.per_rules.iter().enumerate() {
        let at = format!("per_rules[{}]", i);
        check_quantity("total_time", rule.total_time).map_err(|e| e.within(&at))?;
        if !seen.insert(&rule.rule_id) {
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateRuleId,
                format!("{}.rule_id", at),
                format!("rule_id '{}' appears more than once", rule.rule_id),
            ));
        }
    }

    check_positions(run)
}

/// Positions must be `0..n` or `1..=n` in some order.
fn check_positions(run: &BenchmarkRun) -> SchemaResult<()> {
    let mut positions: Vec<i64> = run.per_rules.iter().map(|r| r.position).collect();
    positions.sort_unstable();

    if let Some(pair) = positions.windows(2).find(|w| w[0] == w[1]) {
        return Err(SchemaError::new(
            SchemaErrorKind::PositionPermutation,
            "per_rules",
            format!("position {} appears more than once", pair[0]),
        ));
    }

    let Some(&start) = positions.first() else {
        return Ok(());
    };
    if start != 0 && start != 1 {
        return Err(SchemaError::new(
            SchemaErrorKind::PositionPermutation,
            "per_rules",
            format!("positions must start at 0 or 1, found {}", start),
        ));
    }
    if let Some((offset, &p)) = positions
        .iter()
        .enumerate()
        .find(|(offset, p)| **p != start + *offset as i64)
    {
        return Err(SchemaError::new(
            SchemaErrorKind::PositionPermutation,
            "per_rules",
            format!(
                "positions have a gap: expected {}, found {}",
                start + offset as i64,
                p
            ),
        ));
    }
    Ok(())
}

fn validate_pareto(points: &[ParetoPoint], options: &ParseOptions) -> SchemaResult<()> {
    if points.len() > options.limits.max_pareto_points {
        return Err(SchemaError::limit(
            "",
            "point count",
            points.len(),
            options.limits.max_pareto_points,
        ));
    }

    let mut baseline_at: Option<usize> = None;
    let mut selected_at: Option<usize> = None;

    for (i, point) in points.iter().enumerate() {
        let at = format!("[{}]", i);
        check_quantity("avg_checks", point.avg_checks).map_err(|e| e.within(&at))?;
        check_quantity("avg_time", point.avg_time).map_err(|e| e.within(&at))?;

        if point.is_baseline && point.is_selected {
            return Err(SchemaError::new(
                SchemaErrorKind::ConflictingFlags,
                at,
                "point is flagged both is_baseline and is_selected",
            ));
        }
        if point.is_baseline {
            if let Some(first) = baseline_at.replace(i) {
                return Err(duplicate_flag(&at, "is_baseline", first));
            }
        }
        if point.is_selected {
            if let Some(first) = selected_at.replace(i) {
                return Err(duplicate_flag(&at, "is_selected", first));
            }
        }
    }
    Ok(())
}

fn duplicate_flag(at: &str, flag: &str, first: usize) -> SchemaError {
    SchemaError::new(
        SchemaErrorKind::DuplicateFlag,
        format!("{}.{}", at, flag),
        format!("{} is already set on point {}", flag, first),
    )
}

fn validate_rule_sets(baseline: &BenchmarkRun, ga_best: &BenchmarkRun) -> SchemaResult<()> {
    let ids = |run: &BenchmarkRun| -> BTreeSet<RuleId> {
        run.per_rules.iter().map(|r| r.rule_id.clone()).collect()
    };
    let baseline_ids = ids(baseline);
    let ga_ids = ids(ga_best);

    if let Some(id) = baseline_ids.difference(&ga_ids).next() {
        return Err(SchemaError::new(
            SchemaErrorKind::RuleSetMismatch,
            "ga_best.per_rules",
            format!("rule_id '{}' is in baseline but not in ga_best", id),
        ));
    }
    if let Some(id) = ga_ids.difference(&baseline_ids).next() {
        return Err(SchemaError::new(
            SchemaErrorKind::RuleSetMismatch,
            "baseline.per_rules",
            format!("rule_id '{}' is in ga_best but not in baseline", id),
        ));
    }
    Ok(())
}

fn check_quantity(path: &str, value: f64) -> SchemaResult<()> {
    if !value.is_finite() {
        return Err(SchemaError::non_finite(path, value));
    }
    if value < 0.0 {
        return Err(SchemaError::negative(path, value));
    }
    Ok(())
}
