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

//! CLI command definitions and argument parsing.
//!
//! - [`report`]: commands that load a comparison document (validate,
//!   summary, render, watch)
//! - [`utility`]: shell completion

mod report;
mod utility;

use crate::error::Result;
use clap::{Parser, Subcommand};

pub use report::{OutputFormat, PolicyArg, ReportCommands, SourceArgs};
pub use utility::UtilityCommands;

/// Rulebench - baseline vs GA rule ordering dashboard
///
/// ```bash
/// # Check a saved result document
/// rulebench validate results.json
///
/// # Render the dashboard from the live endpoint
/// rulebench render http://localhost:8000/api/results -o dashboard.html
///
/// # Keep a page up to date, refreshing on Enter
/// rulebench watch http://localhost:8000/api/results -o dashboard.html
/// ```
#[derive(Parser)]
#[command(name = "rulebench")]
#[command(author, version, about = "Rulebench - baseline vs GA rule ordering dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
