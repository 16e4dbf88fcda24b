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

//! Size limits for comparison payloads.

/// Configurable limits applied while parsing a payload.
///
/// These bound the memory a single refresh may consume and keep chart sizes
/// within what a renderer can draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum raw payload size in bytes (default: 16MB).
    pub max_payload_bytes: usize,
    /// Maximum rules in a single run (default: 100k).
    pub max_rules_per_run: usize,
    /// Maximum Pareto points (default: 100k).
    pub max_pareto_points: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_payload_bytes: 16 * 1024 * 1024, // 16MB
            max_rules_per_run: 100_000,
            max_pareto_points: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_payload_bytes: usize::MAX,
            max_rules_per_run: usize::MAX,
            max_pareto_points: usize::MAX,
        }
    }
}
