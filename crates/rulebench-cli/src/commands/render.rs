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

//! Render command - one-shot dashboard output

use super::{load_dashboard, load_result};
use crate::cli::{OutputFormat, SourceArgs};
use crate::error::{CliError, Result};
use rulebench_dash::render::{html, json, write_dashboard};
use rulebench_dash::DashboardModel;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Load the document once and render it.
///
/// Without an explicit format, a file output gets HTML and stdout gets the
/// console view.
pub fn render(args: &SourceArgs, output: Option<&Path>, format: Option<OutputFormat>) -> Result<()> {
    let format = format.unwrap_or(match output {
        Some(_) => OutputFormat::Html,
        None => OutputFormat::Console,
    });

    match format {
        OutputFormat::Json => {
            let (result, config) = load_result(args)?;
            let model = DashboardModel::derive(&result, &config);
            let text = json::model_to_json(&model).map_err(CliError::json)?;
            emit(output, &text)?;
        }
        OutputFormat::Html => {
            let dashboard = load_dashboard(args)?;
            let page = html::render_page(
                dashboard.sink(),
                &dashboard.config().title,
                dashboard.improvement(),
            );
            emit(output, &page)?;
        }
        OutputFormat::Console => {
            let dashboard = load_dashboard(args)?;
            let title = &dashboard.config().title;
            match output {
                Some(path) => {
                    colored::control::set_override(false);
                    let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
                    let mut writer = BufWriter::new(file);
                    write_dashboard(&mut writer, dashboard.sink(), title, dashboard.improvement())
                        .and_then(|_| writer.flush())
                        .map_err(|e| CliError::io_error(path, e))?;
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    write_dashboard(&mut handle, dashboard.sink(), title, dashboard.improvement())
                        .map_err(CliError::output)?;
                }
            }
        }
    }

    if let Some(path) = output {
        info!(path = %path.display(), ?format, "dashboard written");
    }
    Ok(())
}

fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text).map_err(|e| CliError::io_error(path, e)),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
