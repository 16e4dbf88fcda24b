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

//! Payload parsing.
//!
//! [`parse`] turns the raw JSON document served by the benchmark backend into
//! a [`ComparisonResult`], rejecting anything malformed with a [`SchemaError`]
//! before it can reach derivation or rendering. Parsing is a pure function of
//! its input.
//!
//! Reading happens in two steps: the document is walked field by field so
//! that missing fields and wrong primitive kinds are reported with their
//! location, then the cross-field invariants are checked by
//! [`ComparisonResult::validate`].

use crate::error::{SchemaError, SchemaResult};
use crate::limits::Limits;
use crate::model::{BenchmarkRun, ComparisonResult, ParetoPoint, RuleId, RuleStat};
use serde_json::{Map, Value};
use tracing::debug;

/// Options controlling validation strictness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Size limits.
    pub limits: Limits,
    /// Require the baseline and GA runs to cover the identical `rule_id` set.
    pub strict_rule_sets: bool,
}

impl ParseOptions {
    /// Default options with strict rule-set checking enabled.
    pub fn strict() -> Self {
        Self {
            strict_rule_sets: true,
            ..Self::default()
        }
    }
}

/// Parse a comparison payload with default options.
///
/// # Errors
///
/// Returns a [`SchemaError`] when the document is not valid JSON, a required
/// field is missing or has the wrong kind, or an invariant is violated
/// (duplicate `rule_id`, positions not a dense permutation, conflicting or
/// duplicated Pareto flags, non-finite or negative numbers).
///
/// # Examples
///
/// ```
/// use rulebench_core::parse;
///
/// let raw = r#"{
///     "baseline": {"avg_checks": 10.0, "avg_time": 0.002, "per_rules": []},
///     "ga_best": {"avg_checks": 8.0, "avg_time": 0.0018, "per_rules": []},
///     "pareto": []
/// }"#;
/// let result = parse(raw).unwrap();
/// assert_eq!(result.ga_best.avg_checks, 8.0);
/// ```
pub fn parse(raw: &str) -> SchemaResult<ComparisonResult> {
    parse_with_options(raw, &ParseOptions::default())
}

/// Parse a comparison payload from raw bytes with default options.
pub fn parse_slice(raw: &[u8]) -> SchemaResult<ComparisonResult> {
    let options = ParseOptions::default();
    check_payload_size(raw.len(), &options.limits)?;
    let value: Value =
        serde_json::from_slice(raw).map_err(|e| SchemaError::syntax(e.to_string()))?;
    parse_value_with_options(&value, &options)
}

/// Parse a comparison payload with explicit options.
pub fn parse_with_options(raw: &str, options: &ParseOptions) -> SchemaResult<ComparisonResult> {
    check_payload_size(raw.len(), &options.limits)?;
    let value: Value = serde_json::from_str(raw).map_err(|e| SchemaError::syntax(e.to_string()))?;
    parse_value_with_options(&value, options)
}

/// Parse an already-decoded JSON value with default options.
pub fn parse_value(value: &Value) -> SchemaResult<ComparisonResult> {
    parse_value_with_options(value, &ParseOptions::default())
}

/// Parse an already-decoded JSON value with explicit options.
pub fn parse_value_with_options(
    value: &Value,
    options: &ParseOptions,
) -> SchemaResult<ComparisonResult> {
    let root = as_object(value, "object")?;

    let baseline = read_run(field(root, "baseline")?, &options.limits)
        .map_err(|e| e.within("baseline"))?;
    let ga_best =
        read_run(field(root, "ga_best")?, &options.limits).map_err(|e| e.within("ga_best"))?;
    let pareto =
        read_pareto(field(root, "pareto")?, &options.limits).map_err(|e| e.within("pareto"))?;

    let result = ComparisonResult {
        baseline,
        ga_best,
        pareto,
    };
    result.validate(options)?;

    debug!(
        baseline_rules = result.baseline.rule_count(),
        ga_rules = result.ga_best.rule_count(),
        pareto_points = result.pareto.len(),
        "parsed comparison payload"
    );
    Ok(result)
}

fn check_payload_size(len: usize, limits: &Limits) -> SchemaResult<()> {
    if len > limits.max_payload_bytes {
        return Err(SchemaError::limit(
            "",
            "payload size in bytes",
            len,
            limits.max_payload_bytes,
        ));
    }
    Ok(())
}

fn read_run(value: &Value, limits: &Limits) -> SchemaResult<BenchmarkRun> {
    let obj = as_object(value, "object")?;
    let avg_checks = real(obj, "avg_checks")?;
    let avg_time = real(obj, "avg_time")?;

    let rules = match field(obj, "per_rules")? {
        Value::Array(items) => items,
        _ => return Err(SchemaError::wrong_type("per_rules", "array")),
    };
    if rules.len() > limits.max_rules_per_run {
        return Err(SchemaError::limit(
            "per_rules",
            "rule count",
            rules.len(),
            limits.max_rules_per_run,
        ));
    }

    let per_rules = rules
        .iter()
        .enumerate()
        .map(|(i, item)| {
            read_rule(item)
                .map_err(|e| e.within(&format!("[{}]", i)).within("per_rules"))
        })
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(BenchmarkRun {
        avg_checks,
        avg_time,
        per_rules,
    })
}

fn read_rule(value: &Value) -> SchemaResult<RuleStat> {
    let obj = as_object(value, "object")?;
    Ok(RuleStat {
        rule_id: rule_id(obj, "rule_id")?,
        position: integer(obj, "position")?,
        hit_count: count(obj, "hit_count")?,
        total_time: real(obj, "total_time")?,
    })
}

fn read_pareto(value: &Value, limits: &Limits) -> SchemaResult<Vec<ParetoPoint>> {
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(SchemaError::wrong_type("", "array")),
    };
    if items.len() > limits.max_pareto_points {
        return Err(SchemaError::limit(
            "",
            "point count",
            items.len(),
            limits.max_pareto_points,
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| read_point(item).map_err(|e| e.within(&format!("[{}]", i))))
        .collect()
}

fn read_point(value: &Value) -> SchemaResult<ParetoPoint> {
    let obj = as_object(value, "object")?;
    Ok(ParetoPoint {
        avg_checks: real(obj, "avg_checks")?,
        avg_time: real(obj, "avg_time")?,
        is_baseline: flag(obj, "is_baseline")?,
        is_selected: flag(obj, "is_selected")?,
    })
}

// ==================== Field readers ====================

fn as_object<'a>(value: &'a Value, expected: &str) -> SchemaResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_type("", expected))
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> SchemaResult<&'a Value> {
    obj.get(name).ok_or_else(|| SchemaError::missing_field(name))
}

fn real(obj: &Map<String, Value>, name: &str) -> SchemaResult<f64> {
    field(obj, name)?
        .as_f64()
        .ok_or_else(|| SchemaError::wrong_type(name, "number"))
}

fn integer(obj: &Map<String, Value>, name: &str) -> SchemaResult<i64> {
    field(obj, name)?
        .as_i64()
        .ok_or_else(|| SchemaError::wrong_type(name, "integer"))
}

fn count(obj: &Map<String, Value>, name: &str) -> SchemaResult<u64> {
    let value = field(obj, name)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    match value.as_i64() {
        Some(n) => Err(SchemaError::negative(name, n as f64)),
        None => Err(SchemaError::wrong_type(name, "non-negative integer")),
    }
}

fn flag(obj: &Map<String, Value>, name: &str) -> SchemaResult<bool> {
    field(obj, name)?
        .as_bool()
        .ok_or_else(|| SchemaError::wrong_type(name, "boolean"))
}

fn rule_id(obj: &Map<String, Value>, name: &str) -> SchemaResult<RuleId> {
    match field(obj, name)? {
        Value::String(s) => Ok(RuleId::Text(s.clone())),
        Value::Number(n) => n
            .as_i64()
            .map(RuleId::Int)
            .ok_or_else(|| SchemaError::wrong_type(name, "string or integer")),
        _ => Err(SchemaError::wrong_type(name, "string or integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaErrorKind;
    use serde_json::json;

    fn valid() -> Value {
        json!({
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
                    {"rule_id": "R2", "position": 0, "hit_count": 3, "total_time": 0.0004},
                    {"rule_id": "R1", "position": 1, "hit_count": 5, "total_time": 0.0009}
                ]
            },
            "pareto": [
                {"avg_checks": 10, "avg_time": 0.002, "is_baseline": true, "is_selected": false},
                {"avg_checks": 8, "avg_time": 0.0018, "is_baseline": false, "is_selected": true}
            ]
        })
    }

    #[test]
    fn test_parse_valid_payload() {
        let result = parse(&valid().to_string()).unwrap();
        assert_eq!(result.baseline.per_rules.len(), 2);
        assert_eq!(result.baseline.per_rules[0].rule_id, RuleId::from("R1"));
        assert_eq!(result.pareto.len(), 2);
        assert!(result.pareto[0].is_baseline);
    }

    #[test]
    fn test_integer_numbers_accepted_as_reals() {
        let result = parse_value(&valid()).unwrap();
        assert_eq!(result.pareto[1].avg_checks, 8.0);
    }

    #[test]
    fn test_integer_rule_ids() {
        let mut doc = valid();
        doc["baseline"]["per_rules"][0]["rule_id"] = json!(17);
        let result = parse_value(&doc).unwrap();
        assert_eq!(result.baseline.per_rules[0].rule_id, RuleId::Int(17));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut doc = valid();
        doc["generated_at"] = json!("2025-01-01T00:00:00Z");
        doc["baseline"]["label"] = json!("original order");
        assert!(parse_value(&doc).is_ok());
    }

    #[test]
    fn test_invalid_json_is_syntax_error() {
        let err = parse("{not json").unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::Syntax);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = parse("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::WrongType);
    }

    #[test]
    fn test_missing_top_level_field() {
        let mut doc = valid();
        doc.as_object_mut().unwrap().remove("pareto");
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::MissingField);
        assert_eq!(err.path, "pareto");
    }

    #[test]
    fn test_missing_nested_field_reports_path() {
        let mut doc = valid();
        doc["ga_best"]["per_rules"][1]
            .as_object_mut()
            .unwrap()
            .remove("hit_count");
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::MissingField);
        assert_eq!(err.path, "ga_best.per_rules[1].hit_count");
    }

    #[test]
    fn test_string_where_number_expected() {
        let mut doc = valid();
        doc["baseline"]["avg_checks"] = json!("10.0");
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::WrongType);
        assert_eq!(err.path, "baseline.avg_checks");
    }

    #[test]
    fn test_fractional_position_rejected() {
        let mut doc = valid();
        doc["baseline"]["per_rules"][0]["position"] = json!(1.5);
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::WrongType);
        assert_eq!(err.path, "baseline.per_rules[0].position");
    }

    #[test]
    fn test_negative_hit_count_rejected() {
        let mut doc = valid();
        doc["baseline"]["per_rules"][1]["hit_count"] = json!(-3);
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::Negative);
    }

    #[test]
    fn test_flag_must_be_boolean() {
        let mut doc = valid();
        doc["pareto"][0]["is_selected"] = json!(0);
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::WrongType);
        assert_eq!(err.path, "pareto[0].is_selected");
    }

    #[test]
    fn test_rule_id_must_be_string_or_integer() {
        let mut doc = valid();
        doc["baseline"]["per_rules"][0]["rule_id"] = json!(true);
        let err = parse_value(&doc).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::WrongType);
    }

    #[test]
    fn test_payload_size_limit() {
        let options = ParseOptions {
            limits: Limits {
                max_payload_bytes: 16,
                ..Limits::default()
            },
            ..ParseOptions::default()
        };
        let err = parse_with_options(&valid().to_string(), &options).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::Limit);
    }

    #[test]
    fn test_rule_count_limit() {
        let options = ParseOptions {
            limits: Limits {
                max_rules_per_run: 1,
                ..Limits::default()
            },
            ..ParseOptions::default()
        };
        let err = parse_value_with_options(&valid(), &options).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::Limit);
        assert_eq!(err.path, "baseline.per_rules");
    }

    #[test]
    fn test_parse_slice() {
        let raw = valid().to_string();
        assert!(parse_slice(raw.as_bytes()).is_ok());
    }
}
