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

//! CLI command implementations

mod completion;
mod render;
mod summary;
mod validate;
mod watch;

pub use completion::{generate_completion_for_command, installation_instructions};
pub use render::render;
pub use summary::summary;
pub use validate::validate;
pub use watch::watch;

use crate::cli::SourceArgs;
use crate::error::Result;
use rulebench_core::{parse_with_options, ComparisonResult};
use rulebench_dash::{
    source_from_location, Dashboard, DashboardConfig, DashboardView, RefreshOutcome,
};
use tracing::debug;

/// Fetch and validate the document named by `args`.
pub fn load_result(args: &SourceArgs) -> Result<(ComparisonResult, DashboardConfig)> {
    let config = args.config();
    let source = source_from_location(&args.source, &config);
    debug!(source = %source.describe(), "loading comparison document");
    let body = source.fetch()?;
    let result = parse_with_options(&body, &config.parse)?;
    Ok((result, config))
}

/// Run one refresh into a fresh in-memory dashboard.
pub fn load_dashboard(args: &SourceArgs) -> Result<Dashboard<DashboardView>> {
    let config = args.config();
    let source = source_from_location(&args.source, &config);
    let mut dashboard = Dashboard::new(DashboardView::new(), config);
    match dashboard.refresh(source.as_ref()) {
        RefreshOutcome::Failed { error, .. } => Err(error.into()),
        RefreshOutcome::Applied(_) | RefreshOutcome::Stale { .. } => Ok(dashboard),
    }
}
