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

//! Payload sources.
//!
//! The backend exposes one read-only endpoint returning the comparison
//! document. [`HttpSource`] fetches it; [`FileSource`] reads a saved copy
//! from disk and [`StaticSource`] serves a fixed body. Every fetch is a
//! single request: no retries, no caching.

use crate::config::DashboardConfig;
use crate::error::FetchError;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Something that can produce the raw comparison document.
pub trait ResultSource: Send + Sync {
    /// Fetch the raw document.
    fn fetch(&self) -> Result<String, FetchError>;

    /// Location shown in logs and messages.
    fn describe(&self) -> String;
}

/// HTTP(S) endpoint source.
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
    max_bytes: usize,
}

impl HttpSource {
    /// Create a source for `url` using the timeout and size limit in `config`.
    pub fn new(url: impl Into<String>, config: &DashboardConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.http_timeout)
            .build();
        Self {
            url: url.into(),
            agent,
            max_bytes: config.max_payload_bytes(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ResultSource for HttpSource {
    fn fetch(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "fetching results");
        let response = match self.agent.get(&self.url).set("Accept", "application/json").call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                return Err(FetchError::Status {
                    url: self.url.clone(),
                    code,
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Transport {
                    url: self.url.clone(),
                    message: transport.to_string(),
                })
            }
        };

        // ureq only reports 4xx/5xx as errors
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status {
                url: self.url.clone(),
                code: status,
            });
        }

        read_limited(response.into_reader(), &self.url, self.max_bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Local JSON file source.
pub struct FileSource {
    path: PathBuf,
    max_bytes: usize,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, config: &DashboardConfig) -> Self {
        Self {
            path: path.into(),
            max_bytes: config.max_payload_bytes(),
        }
    }
}

impl ResultSource for FileSource {
    fn fetch(&self) -> Result<String, FetchError> {
        let location = self.path.display().to_string();
        let metadata = fs::metadata(&self.path).map_err(|e| FetchError::io(&location, e))?;
        if metadata.len() > self.max_bytes as u64 {
            return Err(FetchError::TooLarge {
                location,
                max: self.max_bytes as u64,
            });
        }
        fs::read_to_string(&self.path).map_err(|e| FetchError::io(location, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory document.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl ResultSource for StaticSource {
    fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_string()
    }
}

/// Pick a source for a location: `http://` and `https://` URLs are fetched
/// over HTTP, anything else is read as a file path.
pub fn source_from_location(location: &str, config: &DashboardConfig) -> Box<dyn ResultSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location, config))
    } else {
        Box::new(FileSource::new(location, config))
    }
}

fn read_limited(reader: impl Read, location: &str, max_bytes: usize) -> Result<String, FetchError> {
    let mut body = String::new();
    reader
        .take((max_bytes as u64).saturating_add(1))
        .read_to_string(&mut body)
        .map_err(|e| FetchError::io(location, e))?;
    if body.len() > max_bytes {
        return Err(FetchError::TooLarge {
            location: location.to_string(),
            max: max_bytes as u64,
        });
    }
    Ok(body)
}
