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

//! Result model and derivations for rule-ordering benchmark comparisons.
//!
//! A benchmark backend measures two orderings of the same rule set, the
//! original baseline order and the order found by a genetic optimiser, and
//! reports them together with the Pareto front of candidate orderings it
//! explored. This crate owns that payload:
//!
//! - [`parse`] validates the raw JSON document into a [`ComparisonResult`]
//! - [`order_rules`] sorts a run's per-rule statistics by evaluation position
//! - [`classify_pareto_points`] splits the front into baseline, selected and others
//! - [`ComparisonResult::improvement`] reports the relative gain of the GA ordering
//!
//! All operations are pure; a payload is never mutated after parsing.

mod derive;
mod error;
mod limits;
mod model;
mod parse;
mod validate;

pub use derive::{classify_pareto_points, order_rules, Improvement, ParetoPartition};
pub use error::{SchemaError, SchemaErrorKind, SchemaResult};
pub use limits::Limits;
pub use model::{BenchmarkRun, ComparisonResult, ParetoPoint, RuleId, RuleStat, Strategy};
pub use parse::{
    parse, parse_slice, parse_value, parse_value_with_options, parse_with_options, ParseOptions,
};
