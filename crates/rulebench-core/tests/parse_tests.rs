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

//! End-to-end parsing tests against realistic backend documents.

use rulebench_core::{
    classify_pareto_points, order_rules, parse, parse_with_options, ParseOptions, RuleId,
    SchemaErrorKind,
};

const SCENARIO: &str = r#"{
    "baseline": {
        "avg_checks": 10.0,
        "avg_time": 0.002,
        "per_rules": [
            {"rule_id": "R1", "position": 1, "hit_count": 5, "total_time": 0.001},
            {"rule_id": "R2", "position": 0, "hit_count": 3, "total_time": 0.0005}
        ]
    },
    "ga_best": {
        "avg_checks": 8.0,
        "avg_time": 0.0018,
        "per_rules": [
            {"rule_id": "R1", "position": 0, "hit_count": 5, "total_time": 0.0009},
            {"rule_id": "R2", "position": 1, "hit_count": 3, "total_time": 0.0006}
        ]
    },
    "pareto": [
        {"avg_checks": 10, "avg_time": 0.002, "is_baseline": true, "is_selected": false},
        {"avg_checks": 8, "avg_time": 0.0018, "is_baseline": false, "is_selected": true},
        {"avg_checks": 9, "avg_time": 0.0019, "is_baseline": false, "is_selected": false}
    ]
}"#;

#[test]
fn test_scenario_orders_and_classifies() {
    let result = parse(SCENARIO).expect("scenario payload is valid");

    let ordered: Vec<RuleId> = order_rules(&result.baseline)
        .into_iter()
        .map(|r| r.rule_id)
        .collect();
    assert_eq!(ordered, vec![RuleId::from("R2"), RuleId::from("R1")]);

    let part = classify_pareto_points(&result.pareto);
    assert_eq!(part.baseline.map(|p| p.avg_checks), Some(10.0));
    assert_eq!(part.selected.map(|p| p.avg_checks), Some(8.0));
    assert_eq!(part.others.len(), 1);
    assert_eq!(part.others[0].avg_checks, 9.0);
}

#[test]
fn test_duplicate_position_zero_fails() {
    let raw = SCENARIO.replace(
        r#"{"rule_id": "R1", "position": 1, "hit_count": 5, "total_time": 0.001}"#,
        r#"{"rule_id": "R1", "position": 0, "hit_count": 5, "total_time": 0.001}"#,
    );
    let err = parse(&raw).unwrap_err();
    assert_eq!(err.kind, SchemaErrorKind::PositionPermutation);
    assert!(err.to_string().contains("baseline.per_rules"));
}

#[test]
fn test_two_selected_points_fail() {
    let raw = SCENARIO.replace(
        r#""avg_checks": 9, "avg_time": 0.0019, "is_baseline": false, "is_selected": false"#,
        r#""avg_checks": 9, "avg_time": 0.0019, "is_baseline": false, "is_selected": true"#,
    );
    let err = parse(&raw).unwrap_err();
    assert_eq!(err.kind, SchemaErrorKind::DuplicateFlag);
}

#[test]
fn test_front_without_flags_is_accepted() {
    let raw = SCENARIO
        .replace(r#""is_baseline": true"#, r#""is_baseline": false"#)
        .replace(r#""is_selected": true"#, r#""is_selected": false"#);
    let result = parse(&raw).unwrap();
    let part = classify_pareto_points(&result.pareto);
    assert!(part.baseline.is_none());
    assert!(part.selected.is_none());
    assert_eq!(part.others.len(), 3);
}

#[test]
fn test_strict_mode_on_scenario() {
    assert!(parse_with_options(SCENARIO, &ParseOptions::strict()).is_ok());

    let raw = SCENARIO.replace(
        r#"{"rule_id": "R2", "position": 1, "hit_count": 3, "total_time": 0.0006}"#,
        r#"{"rule_id": "R7", "position": 1, "hit_count": 3, "total_time": 0.0006}"#,
    );
    assert!(parse(&raw).is_ok());
    let err = parse_with_options(&raw, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.kind, SchemaErrorKind::RuleSetMismatch);
}

#[test]
fn test_improvement_on_scenario() {
    let result = parse(SCENARIO).unwrap();
    let imp = result.improvement();
    assert!((imp.checks_reduction_pct.unwrap() - 20.0).abs() < 1e-9);
    assert!((imp.time_reduction_pct.unwrap() - 10.0).abs() < 1e-9);
}
