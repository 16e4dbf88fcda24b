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

//! JSON export of a derived dashboard model.

use crate::pipeline::DashboardModel;
use std::fs;
use std::io;
use std::path::Path;

/// Serialize the model as pretty JSON.
pub fn model_to_json(model: &DashboardModel) -> io::Result<String> {
    serde_json::to_string_pretty(model).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the model as pretty JSON to `path`.
pub fn export_json(model: &DashboardModel, path: &Path) -> io::Result<()> {
    fs::write(path, model_to_json(model)?)
}
