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

//! The refresh pipeline: fetch, validate, derive, bind.
//!
//! A refresh either replaces everything on screen or nothing. The complete
//! [`DashboardModel`] is derived before the sink is touched, so a fetch or
//! validation failure leaves the last good state (or an empty dashboard on
//! first load) in place.
//!
//! # Overlapping refreshes
//!
//! Each refresh is tagged with a monotonically increasing [`RefreshTicket`].
//! Under [`RefreshPolicy::LatestRequestWins`] a response whose ticket is older
//! than the last applied one is dropped as stale, so a slow early request can
//! never overwrite a newer result. [`RefreshPolicy::LastCompletedWins`]
//! applies every response in completion order.

use crate::binding::{bind_summary, bind_table, Summary, TableRow, TableTarget};
use crate::chart::{bind_pareto_chart, bind_rule_hits_chart, ChartHandle, ChartSpec, ChartTarget};
use crate::config::{DashboardConfig, RefreshPolicy};
use crate::error::{DashboardError, FetchError};
use crate::sink::DashboardSink;
use crate::source::ResultSource;
use rulebench_core::{classify_pareto_points, parse_with_options, ComparisonResult, Improvement};
use serde::Serialize;
use tracing::{error, info, warn};

/// Everything the sinks receive for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardModel {
    pub summary: Summary,
    pub improvement: Improvement,
    pub baseline_rows: Vec<TableRow>,
    pub ga_rows: Vec<TableRow>,
    pub rule_hits: ChartSpec,
    pub pareto: ChartSpec,
}

impl DashboardModel {
    /// Derive the full view model from a validated result.
    pub fn derive(result: &ComparisonResult, config: &DashboardConfig) -> Self {
        let partition = classify_pareto_points(&result.pareto);
        Self {
            summary: bind_summary(result),
            improvement: result.improvement(),
            baseline_rows: bind_table(&result.baseline),
            ga_rows: bind_table(&result.ga_best),
            rule_hits: ChartSpec::Bar(bind_rule_hits_chart(
                &result.baseline,
                &result.ga_best,
                config.hit_alignment,
            )),
            pareto: ChartSpec::Scatter(bind_pareto_chart(&partition)),
        }
    }

    /// Rows for one table.
    pub fn rows(&self, table: TableTarget) -> &[TableRow] {
        match table {
            TableTarget::Baseline => &self.baseline_rows,
            TableTarget::GaBest => &self.ga_rows,
        }
    }
}

/// Sequence tag of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// What happened to one refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The sinks now show this refresh's result.
    Applied(RefreshTicket),
    /// A newer refresh was already applied; nothing changed.
    Stale {
        ticket: RefreshTicket,
        newest: RefreshTicket,
    },
    /// The refresh was aborted; nothing changed.
    Failed {
        ticket: RefreshTicket,
        error: DashboardError,
    },
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RefreshOutcome::Applied(_))
    }

    pub fn ticket(&self) -> RefreshTicket {
        match self {
            RefreshOutcome::Applied(ticket) => *ticket,
            RefreshOutcome::Stale { ticket, .. } => *ticket,
            RefreshOutcome::Failed { ticket, .. } => *ticket,
        }
    }
}

/// A dashboard bound to one sink.
pub struct Dashboard<S: DashboardSink> {
    sink: S,
    config: DashboardConfig,
    rule_hits: ChartHandle,
    pareto: ChartHandle,
    issued: u64,
    applied: Option<RefreshTicket>,
    improvement: Option<Improvement>,
}

impl<S: DashboardSink> Dashboard<S> {
    pub fn new(sink: S, config: DashboardConfig) -> Self {
        Self {
            sink,
            config,
            rule_hits: ChartHandle::new(ChartTarget::RuleHits),
            pareto: ChartHandle::new(ChartTarget::Pareto),
            issued: 0,
            applied: None,
            improvement: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Chart handle for a target.
    pub fn chart_handle(&self, target: ChartTarget) -> &ChartHandle {
        match target {
            ChartTarget::RuleHits => &self.rule_hits,
            ChartTarget::Pareto => &self.pareto,
        }
    }

    /// Ticket of the refresh currently on screen.
    pub fn last_applied(&self) -> Option<RefreshTicket> {
        self.applied
    }

    /// Improvement figures of the refresh currently on screen.
    pub fn improvement(&self) -> Option<&Improvement> {
        self.improvement.as_ref()
    }

    /// Start a refresh. Call before issuing the fetch.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Finish a refresh with its fetch result.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        fetched: Result<String, FetchError>,
    ) -> RefreshOutcome {
        if let Some(newest) = self.stale_against(ticket) {
            warn!(seq = ticket.seq(), newest = newest.seq(), "dropping stale refresh response");
            return RefreshOutcome::Stale { ticket, newest };
        }

        match self.derive(fetched) {
            Ok(model) => {
                self.apply(&model);
                self.applied = Some(ticket);
                info!(
                    seq = ticket.seq(),
                    baseline_rules = model.baseline_rows.len(),
                    ga_rules = model.ga_rows.len(),
                    "dashboard refreshed"
                );
                RefreshOutcome::Applied(ticket)
            }
            Err(e) => {
                error!(seq = ticket.seq(), error = %e, "refresh failed");
                RefreshOutcome::Failed { ticket, error: e }
            }
        }
    }

    /// Run one complete refresh against `source`.
    pub fn refresh(&mut self, source: &dyn ResultSource) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let fetched = source.fetch();
        self.complete(ticket, fetched)
    }

    /// Destroy both charts and return the sink.
    pub fn into_sink(mut self) -> S {
        self.rule_hits.teardown(&mut self.sink);
        self.pareto.teardown(&mut self.sink);
        self.sink
    }

    fn stale_against(&self, ticket: RefreshTicket) -> Option<RefreshTicket> {
        match (self.config.refresh_policy, self.applied) {
            (RefreshPolicy::LatestRequestWins, Some(newest)) if ticket < newest => Some(newest),
            _ => None,
        }
    }

    fn derive(&self, fetched: Result<String, FetchError>) -> Result<DashboardModel, DashboardError> {
        let body = fetched?;
        let result = parse_with_options(&body, &self.config.parse)?;
        Ok(DashboardModel::derive(&result, &self.config))
    }

    fn apply(&mut self, model: &DashboardModel) {
        for (field, text) in model.summary.fields() {
            self.sink.set_text(field, text);
        }
        for table in TableTarget::ALL {
            self.sink.clear_table(table);
            for row in model.rows(table) {
                self.sink.append_row(table, row);
            }
        }
        self.rule_hits.rebind(&mut self.sink, &model.rule_hits);
        self.pareto.rebind(&mut self.sink, &model.pareto);
        self.improvement = Some(model.improvement);
    }
}
