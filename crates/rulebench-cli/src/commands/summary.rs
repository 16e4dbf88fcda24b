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

//! Summary command - headline figures only

use super::load_result;
use crate::cli::SourceArgs;
use crate::error::{CliError, Result};
use colored::Colorize;
use rulebench_dash::bind_summary;
use serde_json::json;

/// Print the four summary fields and the improvement percentages.
pub fn summary(args: &SourceArgs, as_json: bool) -> Result<()> {
    let (result, _) = load_result(args)?;
    let summary = bind_summary(&result);
    let improvement = result.improvement();

    if as_json {
        let value = json!({
            "summary": summary,
            "improvement": improvement,
        });
        let text = serde_json::to_string_pretty(&value).map_err(CliError::json)?;
        println!("{}", text);
        return Ok(());
    }

    for (field, text) in summary.fields() {
        println!("{:<26} {}", format!("{}:", field.caption()), text);
    }
    let line = |label: &str, value: Option<f64>| match value {
        Some(v) => println!("{:<26} {}", label, format!("{:.2}%", v).green()),
        None => println!("{:<26} {}", label, "n/a".dimmed()),
    };
    line("Checks reduction:", improvement.checks_reduction_pct);
    line("Time reduction:", improvement.time_reduction_pct);
    Ok(())
}
