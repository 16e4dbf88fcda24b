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

//! Rulebench CLI library.
//!
//! # Commands
//!
//! - **validate**: fetch a comparison document and check it against the schema
//! - **summary**: print the four headline figures and the improvement percentages
//! - **render**: produce the dashboard once as HTML, console text or JSON
//! - **watch**: keep a dashboard up to date, refreshing on request
//! - **completion**: generate shell completion scripts
//!
//! `SOURCE` is either an `http://`/`https://` endpoint or a path to a saved
//! JSON document.
//!
//! # Examples
//!
//! ```no_run
//! use rulebench_cli::cli::SourceArgs;
//! use rulebench_cli::commands::validate;
//!
//! # fn main() -> Result<(), rulebench_cli::error::CliError> {
//! let args = SourceArgs {
//!     source: "results.json".to_string(),
//!     strict: false,
//!     align_by_rule_id: false,
//!     title: None,
//! };
//! validate(&args)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
