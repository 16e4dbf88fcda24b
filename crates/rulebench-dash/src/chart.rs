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

//! Chart series binding and chart instance lifecycle.
//!
//! Two charts make up the dashboard: a grouped bar chart of per-rule hit
//! counts and a scatter plot of the Pareto front. Their series are built by
//! [`bind_rule_hits_chart`] and [`bind_pareto_chart`] as plain data
//! ([`ChartSpec`]); [`ChartSpec::to_chartjs`] turns a spec into a Chart.js
//! configuration for the HTML renderer.
//!
//! Chart instances live in a sink. A [`ChartHandle`] owns at most one live
//! instance per target and never updates it in place: every rebind destroys
//! the previous instance before creating the next one.

use crate::config::HitAlignment;
use crate::sink::DashboardSink;
use rulebench_core::{order_rules, BenchmarkRun, ParetoPartition, ParetoPoint, RuleId};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

const BASELINE_BAR_COLOR: &str = "rgba(244, 67, 54, 0.6)";
const GA_BAR_COLOR: &str = "rgba(76, 175, 80, 0.6)";
const OTHER_POINT_COLOR: &str = "rgba(158, 158, 158, 0.6)";
const BASELINE_POINT_COLOR: &str = "rgba(244, 67, 54, 0.9)";
const SELECTED_POINT_COLOR: &str = "rgba(76, 175, 80, 0.9)";
const EMPHASIS_RADIUS: u32 = 6;

/// One of the two chart sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChartTarget {
    RuleHits,
    Pareto,
}

impl ChartTarget {
    pub const ALL: [ChartTarget; 2] = [ChartTarget::RuleHits, ChartTarget::Pareto];

    /// DOM canvas id of the chart.
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartTarget::RuleHits => "ruleHitsChart",
            ChartTarget::Pareto => "paretoChart",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            ChartTarget::RuleHits => "Rule hits per rule",
            ChartTarget::Pareto => "Pareto front",
        }
    }
}

/// A bar series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDataset {
    pub label: String,
    /// One entry per label; `None` leaves a gap.
    pub data: Vec<Option<u64>>,
    pub background_color: String,
}

/// Grouped bar chart of per-rule hit counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

/// A scatter point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl From<ParetoPoint> for ScatterPoint {
    fn from(p: ParetoPoint) -> Self {
        ScatterPoint {
            x: p.avg_checks,
            y: p.avg_time,
        }
    }
}

/// A scatter series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterDataset {
    pub label: String,
    pub points: Vec<ScatterPoint>,
    pub background_color: String,
    /// Point radius for emphasized series; renderer default otherwise.
    pub point_radius: Option<u32>,
}

/// Scatter plot of the Pareto front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartSpec {
    /// Always three series: others, baseline, selected.
    pub datasets: Vec<ScatterDataset>,
}

/// Everything a chart sink needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar(BarChartSpec),
    Scatter(ScatterChartSpec),
}

impl ChartSpec {
    /// Chart.js configuration object for this spec.
    pub fn to_chartjs(&self) -> Value {
        match self {
            ChartSpec::Bar(bar) => {
                let datasets: Vec<Value> = bar
                    .datasets
                    .iter()
                    .map(|d| {
                        json!({
                            "label": d.label,
                            "data": d.data,
                            "backgroundColor": d.background_color,
                        })
                    })
                    .collect();
                json!({
                    "type": "bar",
                    "data": { "labels": bar.labels, "datasets": datasets },
                    "options": {
                        "responsive": true,
                        "scales": {
                            "x": { "stacked": false },
                            "y": { "beginAtZero": true }
                        }
                    }
                })
            }
            ChartSpec::Scatter(scatter) => {
                let datasets: Vec<Value> = scatter
                    .datasets
                    .iter()
                    .map(|d| {
                        let mut dataset = json!({
                            "label": d.label,
                            "data": d.points,
                            "backgroundColor": d.background_color,
                        });
                        if let Some(radius) = d.point_radius {
                            dataset["pointRadius"] = json!(radius);
                        }
                        dataset
                    })
                    .collect();
                json!({
                    "type": "scatter",
                    "data": { "datasets": datasets },
                    "options": {
                        "scales": {
                            "x": { "title": { "display": true, "text": "Average Checks" } },
                            "y": { "title": { "display": true, "text": "Average Time" } }
                        }
                    }
                })
            }
        }
    }
}

/// Build the grouped hit-count bar chart.
///
/// Labels are the baseline run's rule ids in position order. With
/// [`HitAlignment::Positional`] the GA series is the GA run's hit counts in
/// its own position order, matched to labels by index: when the runs order
/// rules differently the GA bars do not describe the labelled rule. GA rules
/// beyond the baseline's length are not drawn. [`HitAlignment::ByRuleId`]
/// instead looks each label up in the GA run.
pub fn bind_rule_hits_chart(
    baseline: &BenchmarkRun,
    ga_best: &BenchmarkRun,
    alignment: HitAlignment,
) -> BarChartSpec {
    let baseline_rules = order_rules(baseline);
    let ga_rules = order_rules(ga_best);

    let labels: Vec<String> = baseline_rules.iter().map(|r| r.rule_id.to_string()).collect();
    let baseline_hits: Vec<Option<u64>> = baseline_rules.iter().map(|r| Some(r.hit_count)).collect();

    let ga_hits: Vec<Option<u64>> = match alignment {
        HitAlignment::Positional => (0..baseline_rules.len())
            .map(|i| ga_rules.get(i).map(|r| r.hit_count))
            .collect(),
        HitAlignment::ByRuleId => {
            let by_id: HashMap<&RuleId, u64> =
                ga_rules.iter().map(|r| (&r.rule_id, r.hit_count)).collect();
            baseline_rules
                .iter()
                .map(|r| by_id.get(&r.rule_id).copied())
                .collect()
        }
    };

    BarChartSpec {
        labels,
        datasets: vec![
            BarDataset {
                label: "Baseline Hits".to_string(),
                data: baseline_hits,
                background_color: BASELINE_BAR_COLOR.to_string(),
            },
            BarDataset {
                label: "GA Hits".to_string(),
                data: ga_hits,
                background_color: GA_BAR_COLOR.to_string(),
            },
        ],
    }
}

/// Build the Pareto scatter plot: others, baseline, selected.
pub fn bind_pareto_chart(partition: &ParetoPartition) -> ScatterChartSpec {
    let single = |p: Option<ParetoPoint>| -> Vec<ScatterPoint> {
        p.map(ScatterPoint::from).into_iter().collect()
    };
    ScatterChartSpec {
        datasets: vec![
            ScatterDataset {
                label: "Other Solutions".to_string(),
                points: partition.others.iter().copied().map(ScatterPoint::from).collect(),
                background_color: OTHER_POINT_COLOR.to_string(),
                point_radius: None,
            },
            ScatterDataset {
                label: "Baseline".to_string(),
                points: single(partition.baseline),
                background_color: BASELINE_POINT_COLOR.to_string(),
                point_radius: Some(EMPHASIS_RADIUS),
            },
            ScatterDataset {
                label: "Selected GA".to_string(),
                points: single(partition.selected),
                background_color: SELECTED_POINT_COLOR.to_string(),
                point_radius: Some(EMPHASIS_RADIUS),
            },
        ],
    }
}

/// Identifier of a live chart instance, allocated by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChartId(pub u64);

/// Lifecycle state of a chart target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    /// Nothing has been drawn yet.
    Absent,
    /// A chart instance is live.
    Rendered,
}

/// Owner of the single live chart instance for one target.
#[derive(Debug)]
pub struct ChartHandle {
    target: ChartTarget,
    live: Option<ChartId>,
    generation: u64,
}

impl ChartHandle {
    pub fn new(target: ChartTarget) -> Self {
        Self {
            target,
            live: None,
            generation: 0,
        }
    }

    pub fn target(&self) -> ChartTarget {
        self.target
    }

    pub fn state(&self) -> ChartState {
        if self.live.is_some() {
            ChartState::Rendered
        } else {
            ChartState::Absent
        }
    }

    /// Id of the live instance, if any.
    pub fn live(&self) -> Option<ChartId> {
        self.live
    }

    /// Number of instances this handle has created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Destroy the live instance, if any, then create one from `spec`.
    pub fn rebind<S: DashboardSink + ?Sized>(&mut self, sink: &mut S, spec: &ChartSpec) -> ChartId {
        self.teardown(sink);
        let id = sink.create_chart(self.target, spec);
        self.live = Some(id);
        self.generation += 1;
        debug!(target_chart = ?self.target, id = id.0, generation = self.generation, "chart created");
        id
    }

    /// Destroy the live instance, if any.
    pub fn teardown<S: DashboardSink + ?Sized>(&mut self, sink: &mut S) {
        if let Some(old) = self.live.take() {
            sink.destroy_chart(old);
            debug!(target_chart = ?self.target, id = old.0, "chart destroyed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::DashboardView;
    use rulebench_core::{classify_pareto_points, RuleStat};

    fn baseline() -> BenchmarkRun {
        BenchmarkRun::new(
            10.0,
            0.002,
            vec![
                RuleStat::new("R1", 1, 5, 0.001),
                RuleStat::new("R2", 0, 3, 0.0005),
                RuleStat::new("R3", 2, 9, 0.002),
            ],
        )
    }

    fn ga_reordered() -> BenchmarkRun {
        BenchmarkRun::new(
            8.0,
            0.0018,
            vec![
                RuleStat::new("R3", 0, 9, 0.002),
                RuleStat::new("R1", 1, 5, 0.001),
                RuleStat::new("R2", 2, 3, 0.0005),
            ],
        )
    }

    #[test]
    fn test_rule_hits_labels_follow_baseline_positions() {
        let spec = bind_rule_hits_chart(&baseline(), &ga_reordered(), HitAlignment::Positional);
        assert_eq!(spec.labels, vec!["R2", "R1", "R3"]);
        assert_eq!(spec.datasets[0].label, "Baseline Hits");
        assert_eq!(spec.datasets[0].data, vec![Some(3), Some(5), Some(9)]);
    }

    #[test]
    fn test_rule_hits_positional_alignment() {
        let spec = bind_rule_hits_chart(&baseline(), &ga_reordered(), HitAlignment::Positional);
        assert_eq!(spec.datasets[1].label, "GA Hits");
        assert_eq!(spec.datasets[1].data, vec![Some(9), Some(5), Some(3)]);
    }

    #[test]
    fn test_rule_hits_alignment_by_rule_id() {
        let spec = bind_rule_hits_chart(&baseline(), &ga_reordered(), HitAlignment::ByRuleId);
        assert_eq!(spec.datasets[1].data, vec![Some(3), Some(5), Some(9)]);
    }

    #[test]
    fn test_rule_hits_shorter_ga_run_leaves_gaps() {
        let ga = BenchmarkRun::new(1.0, 1.0, vec![RuleStat::new("R9", 0, 4, 0.0)]);
        let positional = bind_rule_hits_chart(&baseline(), &ga, HitAlignment::Positional);
        assert_eq!(positional.datasets[1].data, vec![Some(4), None, None]);

        let by_id = bind_rule_hits_chart(&baseline(), &ga, HitAlignment::ByRuleId);
        assert_eq!(by_id.datasets[1].data, vec![None, None, None]);
    }

    #[test]
    fn test_pareto_chart_series() {
        let points = [
            ParetoPoint::baseline(10.0, 0.002),
            ParetoPoint::selected(8.0, 0.0018),
            ParetoPoint::candidate(9.0, 0.0019),
        ];
        let spec = bind_pareto_chart(&classify_pareto_points(&points));
        let labels: Vec<&str> = spec.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Other Solutions", "Baseline", "Selected GA"]);
        assert_eq!(spec.datasets[0].points, vec![ScatterPoint { x: 9.0, y: 0.0019 }]);
        assert_eq!(spec.datasets[1].points, vec![ScatterPoint { x: 10.0, y: 0.002 }]);
        assert_eq!(spec.datasets[2].points, vec![ScatterPoint { x: 8.0, y: 0.0018 }]);
        assert_eq!(spec.datasets[0].point_radius, None);
        assert_eq!(spec.datasets[2].point_radius, Some(6));
    }

    #[test]
    fn test_pareto_chart_absent_flags_give_empty_series() {
        let spec = bind_pareto_chart(&classify_pareto_points(&[ParetoPoint::candidate(1.0, 1.0)]));
        assert_eq!(spec.datasets.len(), 3);
        assert!(spec.datasets[1].points.is_empty());
        assert!(spec.datasets[2].points.is_empty());
    }

    #[test]
    fn test_bar_chartjs_config() {
        let spec = ChartSpec::Bar(bind_rule_hits_chart(
            &baseline(),
            &ga_reordered(),
            HitAlignment::Positional,
        ));
        let config = spec.to_chartjs();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][0], "R2");
        assert_eq!(config["data"]["datasets"][1]["label"], "GA Hits");
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn test_scatter_chartjs_config() {
        let points = [ParetoPoint::baseline(10.0, 0.002)];
        let spec = ChartSpec::Scatter(bind_pareto_chart(&classify_pareto_points(&points)));
        let config = spec.to_chartjs();
        assert_eq!(config["type"], "scatter");
        assert_eq!(config["data"]["datasets"][1]["data"][0]["x"], 10.0);
        assert_eq!(config["data"]["datasets"][1]["pointRadius"], 6);
        assert!(config["data"]["datasets"][0].get("pointRadius").is_none());
        assert_eq!(
            config["options"]["scales"]["x"]["title"]["text"],
            "Average Checks"
        );
    }

    #[test]
    fn test_handle_lifecycle() {
        let mut view = DashboardView::new();
        let mut handle = ChartHandle::new(ChartTarget::Pareto);
        assert_eq!(handle.state(), ChartState::Absent);

        let spec = ChartSpec::Scatter(bind_pareto_chart(&ParetoPartition::default()));
        let first = handle.rebind(&mut view, &spec);
        assert_eq!(handle.state(), ChartState::Rendered);

        let second = handle.rebind(&mut view, &spec);
        assert_ne!(first, second);
        assert_eq!(handle.generation(), 2);
        assert_eq!(view.live_chart_count(), 1);
        assert_eq!(view.charts_destroyed(), 1);

        handle.teardown(&mut view);
        assert_eq!(handle.state(), ChartState::Absent);
        assert_eq!(view.live_chart_count(), 0);
    }
}
