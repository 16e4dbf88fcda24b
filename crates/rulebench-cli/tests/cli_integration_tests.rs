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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{NamedTempFile, TempDir};

const SCENARIO: &str = r#"{
    "baseline": {"avg_checks": 10.0, "avg_time": 0.002, "per_rules": [
        {"rule_id": "R1", "position": 1, "hit_count": 5, "total_time": 0.001},
        {"rule_id": "R2", "position": 0, "hit_count": 3, "total_time": 0.0005}
    ]},
    "ga_best": {"avg_checks": 8.0, "avg_time": 0.0018, "per_rules": [
        {"rule_id": "R2", "position": 1, "hit_count": 3, "total_time": 0.0004},
        {"rule_id": "R1", "position": 0, "hit_count": 5, "total_time": 0.0009}
    ]},
    "pareto": [
        {"avg_checks": 10, "avg_time": 0.002, "is_baseline": true, "is_selected": false},
        {"avg_checks": 8, "avg_time": 0.0018, "is_baseline": false, "is_selected": true},
        {"avg_checks": 9, "avg_time": 0.0015, "is_baseline": false, "is_selected": false}
    ]
}"#;

fn rulebench_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rulebench").expect("Failed to find rulebench binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version =====

#[test]
fn test_help_output() {
    rulebench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("baseline vs GA rule ordering dashboard"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_version_output() {
    rulebench_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rulebench"));
}

#[test]
fn test_no_subcommand_fails() {
    rulebench_cmd().assert().failure();
}

// ===== validate =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(SCENARIO, ".json");
    rulebench_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Baseline rules: 2"))
        .stdout(predicate::str::contains("Pareto points: 3 (baseline: yes, selected: yes)"));
}

#[test]
fn test_validate_duplicate_position() {
    let broken = SCENARIO.replace(r#""position": 1, "hit_count": 5"#, r#""position": 0, "hit_count": 5"#);
    let file = create_temp_file(&broken, ".json");
    rulebench_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Error: invalid payload: PositionError"));
}

#[test]
fn test_validate_syntax_error() {
    let file = create_temp_file("{not json", ".json");
    rulebench_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("SyntaxError"));
}

#[test]
fn test_validate_missing_file() {
    rulebench_cmd()
        .args(["validate", "/nonexistent/results.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: fetch failed"));
}

#[test]
fn test_validate_strict_rule_sets() {
    let mismatched = SCENARIO.replace(r#""rule_id": "R2", "position": 1"#, r#""rule_id": "R9", "position": 1"#);
    let file = create_temp_file(&mismatched, ".json");
    rulebench_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success();
    rulebench_cmd()
        .args(["validate", "--strict"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("RuleSetMismatchError"));
}

#[test]
fn test_payload_size_limit_from_env() {
    let file = create_temp_file(SCENARIO, ".json");
    rulebench_cmd()
        .env("RULEBENCH_MAX_PAYLOAD_SIZE", "64")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 64 bytes"));
}

// ===== summary =====

#[test]
fn test_summary_text() {
    let file = create_temp_file(SCENARIO, ".json");
    rulebench_cmd()
        .arg("summary")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00"))
        .stdout(predicate::str::contains("8.00"))
        .stdout(predicate::str::contains("2.00e-3"))
        .stdout(predicate::str::contains("1.80e-3"))
        .stdout(predicate::str::contains("20.00%"));
}

#[test]
fn test_summary_json() {
    let file = create_temp_file(SCENARIO, ".json");
    let output = rulebench_cmd()
        .args(["summary", "--json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["baseline_avg_checks"], "10.00");
    assert_eq!(value["summary"]["ga_avg_time"], "1.80e-3");
    assert!(value["improvement"]["checks_reduction_pct"].is_number());
}

// ===== render =====

#[test]
fn test_render_html_file() {
    let file = create_temp_file(SCENARIO, ".json");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("dashboard.html");
    rulebench_cmd()
        .arg("render")
        .arg(file.path())
        .arg("-o")
        .arg(&out)
        .args(["--title", "Nightly <run>"])
        .assert()
        .success();

    let page = fs::read_to_string(&out).unwrap();
    assert!(page.contains("<h1>Nightly &lt;run&gt;</h1>"));
    assert!(page.contains("id=\"baseline-table\""));
    assert!(page.contains("<td>R2</td>"));
    assert!(page.contains("getElementById('ruleHitsChart')"));
    assert!(page.contains("getElementById('paretoChart')"));
}

#[test]
fn test_render_console_default() {
    let file = create_temp_file(SCENARIO, ".json");
    rulebench_cmd()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline vs GA Rule Ordering"))
        .stdout(predicate::str::contains("0.0005"))
        .stdout(predicate::str::contains("Selected GA"));
}

#[test]
fn test_render_json_alignment() {
    let file = create_temp_file(SCENARIO, ".json");
    let positional = rulebench_cmd()
        .args(["render", "--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    let aligned = rulebench_cmd()
        .args(["render", "--format", "json", "--align-by-rule-id"])
        .arg(file.path())
        .output()
        .unwrap();

    let positional: serde_json::Value = serde_json::from_slice(&positional.stdout).unwrap();
    let aligned: serde_json::Value = serde_json::from_slice(&aligned.stdout).unwrap();
    assert_eq!(positional["rule_hits"]["datasets"][1]["data"], serde_json::json!([5, 3]));
    assert_eq!(aligned["rule_hits"]["datasets"][1]["data"], serde_json::json!([3, 5]));
}

#[test]
fn test_render_failure_writes_nothing() {
    let file = create_temp_file(r#"{"baseline": {}}"#, ".json");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("dashboard.html");
    rulebench_cmd()
        .arg("render")
        .arg(file.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("MissingFieldError"));
    assert!(!out.exists());
}

// ===== watch =====

#[test]
fn test_watch_writes_page_and_quits() {
    let file = create_temp_file(SCENARIO, ".json");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("watch.html");
    rulebench_cmd()
        .arg("watch")
        .arg(file.path())
        .arg("-o")
        .arg(&out)
        .write_stdin("q\n")
        .assert()
        .success();
    let page = fs::read_to_string(&out).unwrap();
    assert!(page.contains("id=\"ga-table\""));
}

#[test]
fn test_watch_reports_failed_refresh() {
    let file = create_temp_file("[]", ".json");
    rulebench_cmd()
        .arg("watch")
        .arg(file.path())
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("refresh #1 failed"));
}

#[test]
fn test_watch_refreshes_on_enter() {
    let file = create_temp_file(SCENARIO, ".json");
    rulebench_cmd()
        .arg("watch")
        .arg(file.path())
        .write_stdin("\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline vs GA Rule Ordering"));
}

// ===== completion =====

#[test]
fn test_completion_bash() {
    rulebench_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rulebench"));
}

#[test]
fn test_completion_install() {
    rulebench_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rulebench completion zsh"));
}

#[test]
fn test_completion_unsupported_shell() {
    rulebench_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported shell"));
}
