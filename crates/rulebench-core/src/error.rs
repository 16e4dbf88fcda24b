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

//! Error types for comparison payload validation.

use std::fmt;
use thiserror::Error;

/// The kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    /// The document is not well-formed JSON.
    Syntax,
    /// A required field is absent.
    MissingField,
    /// A field holds the wrong primitive kind.
    WrongType,
    /// A real-valued field is NaN or infinite.
    NonFinite,
    /// A quantity that must be non-negative is negative.
    Negative,
    /// Two rules in one run share a `rule_id`.
    DuplicateRuleId,
    /// Rule positions are not a dense permutation of `0..n` or `1..=n`.
    PositionPermutation,
    /// A Pareto point is flagged both baseline and selected.
    ConflictingFlags,
    /// More than one Pareto point carries the same flag.
    DuplicateFlag,
    /// Baseline and GA runs cover different rule sets (strict mode only).
    RuleSetMismatch,
    /// A configured size limit was exceeded.
    Limit,
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::MissingField => write!(f, "MissingFieldError"),
            Self::WrongType => write!(f, "WrongTypeError"),
            Self::NonFinite => write!(f, "NonFiniteError"),
            Self::Negative => write!(f, "NegativeValueError"),
            Self::DuplicateRuleId => write!(f, "DuplicateRuleIdError"),
            Self::PositionPermutation => write!(f, "PositionError"),
            Self::ConflictingFlags => write!(f, "ConflictingFlagsError"),
            Self::DuplicateFlag => write!(f, "DuplicateFlagError"),
            Self::RuleSetMismatch => write!(f, "RuleSetMismatchError"),
            Self::Limit => write!(f, "LimitError"),
        }
    }
}

/// A payload that failed validation.
///
/// `path` locates the offending value inside the document, for example
/// `ga_best.per_rules[3].position`. It is empty when the failure concerns the
/// document as a whole.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at '{path}': {message}")]
pub struct SchemaError {
    /// The kind of error.
    pub kind: SchemaErrorKind,
    /// Location of the offending value.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
}

/// Result type for validation.
pub type SchemaResult<T> = Result<T, SchemaError>;

impl SchemaError {
    /// Create a new error.
    pub fn new(kind: SchemaErrorKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Syntax, "", message)
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::MissingField, path, "required field is missing")
    }

    pub fn wrong_type(path: impl Into<String>, expected: &str) -> Self {
        Self::new(
            SchemaErrorKind::WrongType,
            path,
            format!("expected {}", expected),
        )
    }

    pub fn non_finite(path: impl Into<String>, value: f64) -> Self {
        Self::new(
            SchemaErrorKind::NonFinite,
            path,
            format!("value {} is not a finite number", value),
        )
    }

    pub fn negative(path: impl Into<String>, value: f64) -> Self {
        Self::new(
            SchemaErrorKind::Negative,
            path,
            format!("value {} must not be negative", value),
        )
    }

    pub fn limit(path: impl Into<String>, what: &str, actual: usize, max: usize) -> Self {
        Self::new(
            SchemaErrorKind::Limit,
            path,
            format!("{} ({}) exceeds the limit of {}", what, actual, max),
        )
    }

    /// Prefix the path with an enclosing field, e.g. `per_rules[0]` -> `baseline.per_rules[0]`.
    pub fn within(mut self, parent: &str) -> Self {
        self.path = if self.path.is_empty() {
            parent.to_string()
        } else if self.path.starts_with('[') {
            format!("{}{}", parent, self.path)
        } else {
            format!("{}.{}", parent, self.path)
        };
        self
    }
}
