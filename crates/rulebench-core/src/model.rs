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

//! Benchmark comparison payload types.
//!
//! A [`ComparisonResult`] pairs two [`BenchmarkRun`]s, the baseline rule
//! ordering and the ordering picked by the genetic optimiser, with the Pareto
//! front of candidate orderings the optimiser explored.
//!
//! Values of these types are produced by [`crate::parse`], which enforces the
//! payload invariants. They are read-only from the point of view of the
//! dashboard: derivations work on copies.

use serde::Serialize;
use std::fmt;

/// Opaque, stable identifier of a rule.
///
/// The backend emits either integers or strings. Identity is by typed value,
/// so `"1"` and `1` are distinct rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum RuleId {
    /// Numeric rule id.
    Int(i64),
    /// Textual rule id.
    Text(String),
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::Int(n) => write!(f, "{}", n),
            RuleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RuleId {
    fn from(n: i64) -> Self {
        RuleId::Int(n)
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        RuleId::Text(s.to_string())
    }
}

impl From<String> for RuleId {
    fn from(s: String) -> Self {
        RuleId::Text(s)
    }
}

/// Per-rule measurements within one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleStat {
    /// Rule identifier, also the display label.
    pub rule_id: RuleId,
    /// Index of the rule in this run's evaluation order.
    pub position: i64,
    /// Number of times the rule matched across the benchmark.
    pub hit_count: u64,
    /// Cumulative time attributed to the rule.
    pub total_time: f64,
}

impl RuleStat {
    pub fn new(rule_id: impl Into<RuleId>, position: i64, hit_count: u64, total_time: f64) -> Self {
        Self {
            rule_id: rule_id.into(),
            position,
            hit_count,
            total_time,
        }
    }
}

/// Aggregate measurements for one rule ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRun {
    /// Mean number of rule checks per evaluated item.
    pub avg_checks: f64,
    /// Mean wall-clock time per evaluated item.
    pub avg_time: f64,
    /// Per-rule statistics, in arrival order.
    pub per_rules: Vec<RuleStat>,
}

impl BenchmarkRun {
    pub fn new(avg_checks: f64, avg_time: f64, per_rules: Vec<RuleStat>) -> Self {
        Self {
            avg_checks,
            avg_time,
            per_rules,
        }
    }

    /// Number of rules in this run.
    pub fn rule_count(&self) -> usize {
        self.per_rules.len()
    }
}

/// One candidate ordering explored by the optimiser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParetoPoint {
    pub avg_checks: f64,
    pub avg_time: f64,
    /// Marks the baseline ordering's own coordinates.
    pub is_baseline: bool,
    /// Marks the ordering chosen as GA-best.
    pub is_selected: bool,
}

impl ParetoPoint {
    /// An unflagged candidate.
    pub fn candidate(avg_checks: f64, avg_time: f64) -> Self {
        Self {
            avg_checks,
            avg_time,
            is_baseline: false,
            is_selected: false,
        }
    }

    pub fn baseline(avg_checks: f64, avg_time: f64) -> Self {
        Self {
            is_baseline: true,
            ..Self::candidate(avg_checks, avg_time)
        }
    }

    pub fn selected(avg_checks: f64, avg_time: f64) -> Self {
        Self {
            is_selected: true,
            ..Self::candidate(avg_checks, avg_time)
        }
    }

    /// Chart coordinates: `(avg_checks, avg_time)`.
    pub fn coords(&self) -> (f64, f64) {
        (self.avg_checks, self.avg_time)
    }
}

/// Which ordering a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Baseline,
    GaBest,
}

impl Strategy {
    /// Payload field name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Baseline => "baseline",
            Strategy::GaBest => "ga_best",
        }
    }
}

/// Top-level benchmark comparison payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub baseline: BenchmarkRun,
    pub ga_best: BenchmarkRun,
    /// Pareto front; order carries no meaning.
    pub pareto: Vec<ParetoPoint>,
}

impl ComparisonResult {
    /// The run recorded for `strategy`.
    pub fn run(&self, strategy: Strategy) -> &BenchmarkRun {
        match strategy {
            Strategy::Baseline => &self.baseline,
            Strategy::GaBest => &self.ga_best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_id_display() {
        assert_eq!(RuleId::from(7).to_string(), "7");
        assert_eq!(RuleId::from("R1").to_string(), "R1");
    }

    #[test]
    fn test_rule_id_identity_is_typed() {
        assert_ne!(RuleId::from(1), RuleId::from("1"));
    }

    #[test]
    fn test_rule_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&RuleId::from(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&RuleId::from("R3")).unwrap(), "\"R3\"");
    }

    #[test]
    fn test_pareto_point_constructors() {
        let b = ParetoPoint::baseline(10.0, 0.002);
        assert!(b.is_baseline && !b.is_selected);
        let s = ParetoPoint::selected(8.0, 0.0018);
        assert!(s.is_selected && !s.is_baseline);
        assert_eq!(ParetoPoint::candidate(9.0, 0.0019).coords(), (9.0, 0.0019));
    }

    #[test]
    fn test_run_by_strategy() {
        let result = ComparisonResult {
            baseline: BenchmarkRun::new(10.0, 0.002, vec![]),
            ga_best: BenchmarkRun::new(8.0, 0.001, vec![]),
            pareto: vec![],
        };
        assert_eq!(result.run(Strategy::Baseline).avg_checks, 10.0);
        assert_eq!(result.run(Strategy::GaBest).avg_checks, 8.0);
        assert_eq!(Strategy::GaBest.as_str(), "ga_best");
    }
}
