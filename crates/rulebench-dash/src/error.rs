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

//! Error types for the dashboard pipeline.

use rulebench_core::SchemaError;
use thiserror::Error;

/// Failure to obtain the raw payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network or transport failure (DNS, connection refused, timeout).
    #[error("request to '{url}' failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Transport error message
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("'{url}' answered with HTTP status {code}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        code: u16,
    },

    /// Reading a local payload or a response body failed.
    #[error("I/O error for '{location}': {message}")]
    Io {
        /// File path or URL
        location: String,
        /// The error message
        message: String,
    },

    /// The payload is larger than the configured maximum.
    #[error("payload from '{location}' exceeds the maximum of {max} bytes")]
    TooLarge {
        /// File path or URL
        location: String,
        /// The maximum allowed size in bytes
        max: u64,
    },
}

impl FetchError {
    pub fn io(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            message: source.to_string(),
        }
    }
}

/// Why a refresh was aborted.
///
/// Both variants abort the refresh before any sink is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The payload could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The payload failed validation.
    #[error("invalid payload: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_display() {
        let err = FetchError::Status {
            url: "http://localhost:5000/api/results".to_string(),
            code: 503,
        };
        assert_eq!(
            err.to_string(),
            "'http://localhost:5000/api/results' answered with HTTP status 503"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = FetchError::io(
            "results.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("results.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_conversion_into_dashboard_error() {
        let err: DashboardError = FetchError::TooLarge {
            location: "big.json".to_string(),
            max: 10,
        }
        .into();
        assert!(matches!(err, DashboardError::Fetch(_)));
        assert!(err.to_string().starts_with("fetch failed:"));

        let err: DashboardError = SchemaError::syntax("eof").into();
        assert!(matches!(err, DashboardError::Schema(_)));
    }
}
