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

//! Dashboard configuration.

use rulebench_core::ParseOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Environment variable overriding the maximum payload size in bytes.
pub const ENV_MAX_PAYLOAD_SIZE: &str = "RULEBENCH_MAX_PAYLOAD_SIZE";

/// Environment variable overriding the HTTP timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "RULEBENCH_HTTP_TIMEOUT_SECS";

/// Default HTTP timeout.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// How overlapping refreshes are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// A response is dropped when a newer request has already been applied.
    #[default]
    LatestRequestWins,
    /// Every response is applied in completion order.
    LastCompletedWins,
}

/// How the GA hit-count series lines up with the baseline rule labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitAlignment {
    /// The i-th GA rule (by position) is drawn against the i-th baseline label.
    #[default]
    Positional,
    /// Each baseline label gets the GA hit count of the rule with the same id.
    ByRuleId,
}

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Page title used by the HTML renderer.
    pub title: String,
    /// Overlapping refresh resolution.
    pub refresh_policy: RefreshPolicy,
    /// Hit-count chart alignment.
    pub hit_alignment: HitAlignment,
    /// Payload validation options.
    pub parse: ParseOptions,
    /// Timeout for HTTP fetches.
    pub http_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Baseline vs GA Rule Ordering".to_string(),
            refresh_policy: RefreshPolicy::default(),
            hit_alignment: HitAlignment::default(),
            parse: ParseOptions::default(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl DashboardConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// Reads [`ENV_MAX_PAYLOAD_SIZE`] and [`ENV_HTTP_TIMEOUT_SECS`]. Unset
    /// variables keep their defaults; values that fail to parse or overflow the
    /// target type are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(bytes) = env_number::<usize>(ENV_MAX_PAYLOAD_SIZE) {
            config.parse.limits.max_payload_bytes = bytes;
        }
        if let Some(secs) = env_number::<u64>(ENV_HTTP_TIMEOUT_SECS) {
            config.http_timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Maximum payload size in bytes.
    pub fn max_payload_bytes(&self) -> usize {
        self.parse.limits.max_payload_bytes
    }
}

fn env_number<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    parse_override(name, &raw)
}

// Values that do not fit `T` (including sizes beyond the platform's usize)
// are rejected rather than truncated.
fn parse_override<T: FromStr>(name: &str, raw: &str) -> Option<T> {
    match raw.trim().parse::<T>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring invalid numeric environment override");
            None
        }
    }
}
