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

//! Dashboard renderers.
//!
//! - `html`: standalone page with Chart.js charts
//! - `console`: colored terminal output
//! - `json`: machine-readable model export

pub mod console;
pub mod html;
pub mod json;

pub use console::{print_dashboard, write_dashboard};
pub use html::{escape_html, export_html, render_page};
pub use json::{export_json, model_to_json};
