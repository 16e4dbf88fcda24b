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

//! Rulebench dashboard
//!
//! Turns a validated [`rulebench_core::ComparisonResult`] into a rendered
//! side-by-side comparison: four summary figures, two position-ordered rule
//! tables, a per-rule hit-count bar chart and a Pareto-front scatter plot.
//!
//! ## Usage
//!
//! ```no_run
//! use rulebench_dash::{Dashboard, DashboardConfig, DashboardView, FileSource};
//!
//! let config = DashboardConfig::from_env();
//! let source = FileSource::new("results.json", &config);
//! let mut dashboard = Dashboard::new(DashboardView::new(), config);
//! if dashboard.refresh(&source).is_applied() {
//!     let page = rulebench_dash::render::render_page(
//!         dashboard.sink(),
//!         &dashboard.config().title,
//!         dashboard.improvement(),
//!     );
//!     println!("{}", page);
//! }
//! ```

pub mod binding;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod render;
pub mod sink;
pub mod source;

pub use binding::{bind_summary, bind_table, Summary, SummaryField, TableRow, TableTarget};
pub use chart::{
    bind_pareto_chart, bind_rule_hits_chart, ChartHandle, ChartId, ChartSpec, ChartState,
    ChartTarget,
};
pub use config::{DashboardConfig, HitAlignment, RefreshPolicy};
pub use error::{DashboardError, DashboardResult, FetchError};
pub use pipeline::{Dashboard, DashboardModel, RefreshOutcome, RefreshTicket};
pub use sink::{DashboardSink, DashboardView};
pub use source::{source_from_location, FileSource, HttpSource, ResultSource, StaticSource};
