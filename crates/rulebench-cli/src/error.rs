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

//! Structured error types for the rulebench CLI.

use rulebench_core::SchemaError;
use rulebench_dash::{DashboardError, FetchError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure a command can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// Fetching or validating the comparison document failed.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Writing an output file failed.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// Writing to the terminal failed.
    #[error("output error: {message}")]
    Output { message: String },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// An argument combination or value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn output(source: io::Error) -> Self {
        CliError::Output {
            message: source.to_string(),
        }
    }

    pub fn json(source: impl std::fmt::Display) -> Self {
        CliError::JsonFormat {
            message: source.to_string(),
        }
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Dashboard(DashboardError::Fetch(e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        CliError::Dashboard(DashboardError::Schema(e))
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
