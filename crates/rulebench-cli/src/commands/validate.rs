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

//! Validate command - schema check of a comparison document

use super::load_result;
use crate::cli::SourceArgs;
use crate::error::Result;
use colored::Colorize;
use rulebench_core::classify_pareto_points;

/// Check the document and print what it contains.
///
/// Prints `✓ <source>` and a short inventory on success, `✗ <source>` on
/// stdout plus the error on failure.
pub fn validate(args: &SourceArgs) -> Result<()> {
    match load_result(args) {
        Ok((result, _)) => {
            let partition = classify_pareto_points(&result.pareto);
            println!("{} {}", "✓".green().bold(), args.source);
            println!("  Baseline rules: {}", result.baseline.rule_count());
            println!("  GA rules: {}", result.ga_best.rule_count());
            println!(
                "  Pareto points: {} (baseline: {}, selected: {})",
                result.pareto.len(),
                if partition.baseline.is_some() { "yes" } else { "no" },
                if partition.selected.is_some() { "yes" } else { "no" }
            );
            if args.strict {
                println!("  Mode: strict (rule sets must match)");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), args.source);
            Err(e)
        }
    }
}
