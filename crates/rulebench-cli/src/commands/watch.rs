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

//! Watch command - interactive refresh loop
//!
//! The initial load and every refresh request go through the same pipeline.
//! Each fetch runs on its own thread so a second refresh can start while the
//! first is still outstanding; responses come back over a channel and are
//! applied on the calling thread in completion order, subject to the
//! dashboard's refresh policy.

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};
use colored::Colorize;
use rulebench_dash::render::{export_html, print_dashboard};
use rulebench_dash::{
    source_from_location, Dashboard, DashboardView, FetchError, RefreshOutcome, RefreshPolicy,
    RefreshTicket, ResultSource,
};
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use tracing::debug;

enum Event {
    Refresh,
    Quit,
    Fetched(RefreshTicket, std::result::Result<String, FetchError>),
}

/// Run the refresh loop until `q` or end of input.
pub fn watch(args: &SourceArgs, output: Option<&Path>, policy: RefreshPolicy) -> Result<()> {
    let mut config = args.config();
    config.refresh_policy = policy;
    let source: Arc<dyn ResultSource> = Arc::from(source_from_location(&args.source, &config));
    let mut dashboard = Dashboard::new(DashboardView::new(), config);

    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx.clone());
    eprintln!(
        "{} {} (Enter to refresh, q to quit)",
        "Watching".bright_blue().bold(),
        source.describe()
    );

    let mut in_flight = 0usize;
    let mut quitting = false;
    start_fetch(&mut dashboard, &source, &tx, &mut in_flight);

    while !(quitting && in_flight == 0) {
        let Ok(event) = rx.recv() else { break };
        match event {
            Event::Refresh if !quitting => start_fetch(&mut dashboard, &source, &tx, &mut in_flight),
            Event::Refresh => {}
            Event::Quit => quitting = true,
            Event::Fetched(ticket, fetched) => {
                in_flight -= 1;
                match dashboard.complete(ticket, fetched) {
                    RefreshOutcome::Applied(_) => present(&dashboard, output)?,
                    RefreshOutcome::Stale { ticket, newest } => eprintln!(
                        "{} refresh #{} superseded by #{}",
                        "-".yellow(),
                        ticket.seq(),
                        newest.seq()
                    ),
                    RefreshOutcome::Failed { ticket, error } => eprintln!(
                        "{} refresh #{} failed: {}",
                        "✗".red().bold(),
                        ticket.seq(),
                        error
                    ),
                }
            }
        }
    }
    Ok(())
}

fn start_fetch(
    dashboard: &mut Dashboard<DashboardView>,
    source: &Arc<dyn ResultSource>,
    tx: &Sender<Event>,
    in_flight: &mut usize,
) {
    let ticket = dashboard.begin_refresh();
    let source = Arc::clone(source);
    let tx = tx.clone();
    *in_flight += 1;
    debug!(seq = ticket.seq(), "refresh started");
    thread::spawn(move || {
        let fetched = source.fetch();
        let _ = tx.send(Event::Fetched(ticket, fetched));
    });
}

fn spawn_input_reader(tx: Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) if matches!(line.trim(), "q" | "quit") => Event::Quit,
                Ok(_) => Event::Refresh,
                Err(_) => Event::Quit,
            };
            let quit = matches!(event, Event::Quit);
            if tx.send(event).is_err() || quit {
                return;
            }
        }
        let _ = tx.send(Event::Quit);
    });
}

fn present(dashboard: &Dashboard<DashboardView>, output: Option<&Path>) -> Result<()> {
    let title = &dashboard.config().title;
    match output {
        Some(path) => {
            export_html(dashboard.sink(), title, dashboard.improvement(), path)
                .map_err(|e| CliError::io_error(path, e))?;
            eprintln!("{} {}", "✓".green().bold(), path.display());
        }
        None => print_dashboard(dashboard.sink(), title, dashboard.improvement()),
    }
    Ok(())
}
