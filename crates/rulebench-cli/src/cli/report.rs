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

//! Commands that load and present a comparison document.

use crate::commands;
use crate::error::Result;
use clap::{Args, Subcommand, ValueEnum};
use rulebench_dash::{DashboardConfig, HitAlignment, RefreshPolicy};
use std::path::PathBuf;

/// Where to load the comparison document from, and how to read it.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Results endpoint URL (http:// or https://) or path to a saved JSON document
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Require both runs to contain the same rule ids
    #[arg(long)]
    pub strict: bool,

    /// Match GA hit counts to baseline labels by rule id instead of by position
    #[arg(long)]
    pub align_by_rule_id: bool,

    /// Dashboard title
    #[arg(long)]
    pub title: Option<String>,
}

impl SourceArgs {
    /// Environment configuration with these flags applied on top.
    pub fn config(&self) -> DashboardConfig {
        let mut config = DashboardConfig::from_env();
        config.parse.strict_rule_sets = self.strict;
        if self.align_by_rule_id {
            config.hit_alignment = HitAlignment::ByRuleId;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        config
    }
}

/// Output format for `render`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone HTML page with Chart.js charts
    Html,
    /// Colored terminal output
    Console,
    /// Derived dashboard model as JSON
    Json,
}

/// Refresh ordering for `watch`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Drop responses older than the newest applied one
    Latest,
    /// Apply responses in the order they complete
    Completed,
}

impl From<PolicyArg> for RefreshPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Latest => RefreshPolicy::LatestRequestWins,
            PolicyArg::Completed => RefreshPolicy::LastCompletedWins,
        }
    }
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Validate a comparison document
    ///
    /// Fetches the document once and checks it against the payload schema.
    /// Exits non-zero on the first violation.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the four summary figures and the improvement percentages
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the full dashboard once
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (html when writing to a file, console otherwise)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Load the dashboard, then refresh it each time Enter is pressed
    ///
    /// Type `q` and Enter (or close stdin) to quit. With `--output` the HTML
    /// page is rewritten after every applied refresh; otherwise the console
    /// view is reprinted.
    Watch {
        #[command(flatten)]
        source: SourceArgs,

        /// HTML file to rewrite after each refresh
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How to order overlapping refreshes
        #[arg(long, value_enum, default_value = "latest")]
        policy: PolicyArg,
    },
}

impl ReportCommands {
    pub fn execute(self) -> Result<()> {
        match self {
            ReportCommands::Validate { source } => commands::validate(&source),
            ReportCommands::Summary { source, json } => commands::summary(&source, json),
            ReportCommands::Render {
                source,
                output,
                format,
            } => commands::render(&source, output.as_deref(), format),
            ReportCommands::Watch {
                source,
                output,
                policy,
            } => commands::watch(&source, output.as_deref(), policy.into()),
        }
    }
}
