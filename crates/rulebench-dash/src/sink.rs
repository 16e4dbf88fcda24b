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

//! Render sinks.
//!
//! [`DashboardSink`] is the seam between the pipeline and whatever draws the
//! dashboard. [`DashboardView`] is the in-memory implementation: it holds
//! exactly what is currently on screen, and the HTML and console renderers
//! draw from it.

use crate::binding::{SummaryField, TableRow, TableTarget};
use crate::chart::{ChartId, ChartSpec, ChartTarget};
use std::collections::BTreeMap;
use tracing::warn;

/// Destination for bound dashboard content.
///
/// The pipeline always clears a table before appending its rows and always
/// destroys a chart before creating its replacement.
pub trait DashboardSink {
    /// Replace the text of a summary field.
    fn set_text(&mut self, field: SummaryField, text: &str);

    /// Remove every row from a table.
    fn clear_table(&mut self, table: TableTarget);

    /// Append one row to a table.
    fn append_row(&mut self, table: TableTarget, row: &TableRow);

    /// Create a chart instance on `target` and return its id.
    fn create_chart(&mut self, target: ChartTarget, spec: &ChartSpec) -> ChartId;

    /// Destroy a chart instance previously returned by `create_chart`.
    fn destroy_chart(&mut self, id: ChartId);
}

#[derive(Debug, Clone)]
struct LiveChart {
    target: ChartTarget,
    spec: ChartSpec,
}

/// In-memory dashboard state.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    texts: BTreeMap<SummaryField, String>,
    tables: BTreeMap<TableTarget, Vec<TableRow>>,
    charts: BTreeMap<ChartId, LiveChart>,
    next_chart_id: u64,
    created: u64,
    destroyed: u64,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a summary field.
    pub fn text(&self, field: SummaryField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    /// Current rows of a table.
    pub fn rows(&self, table: TableTarget) -> &[TableRow] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Spec of the live chart on `target`, if any.
    pub fn chart(&self, target: ChartTarget) -> Option<&ChartSpec> {
        self.charts
            .values()
            .find(|c| c.target == target)
            .map(|c| &c.spec)
    }

    /// True before anything has been bound.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.tables.is_empty() && self.charts.is_empty()
    }

    pub fn live_chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn charts_created(&self) -> u64 {
        self.created
    }

    pub fn charts_destroyed(&self) -> u64 {
        self.destroyed
    }
}

impl DashboardSink for DashboardView {
    fn set_text(&mut self, field: SummaryField, text: &str) {
        self.texts.insert(field, text.to_string());
    }

    fn clear_table(&mut self, table: TableTarget) {
        self.tables.entry(table).or_default().clear();
    }

    fn append_row(&mut self, table: TableTarget, row: &TableRow) {
        self.tables.entry(table).or_default().push(row.clone());
    }

    fn create_chart(&mut self, target: ChartTarget, spec: &ChartSpec) -> ChartId {
        self.next_chart_id += 1;
        let id = ChartId(self.next_chart_id);
        self.charts.insert(
            id,
            LiveChart {
                target,
                spec: spec.clone(),
            },
        );
        self.created += 1;
        id
    }

    fn destroy_chart(&mut self, id: ChartId) {
        if self.charts.remove(&id).is_some() {
            self.destroyed += 1;
        } else {
            warn!(id = id.0, "destroy requested for unknown chart");
        }
    }
}
