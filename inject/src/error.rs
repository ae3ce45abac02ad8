// Copyright 2023 The LogConf Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Failures of the catalog holding the `BcsLogConfig` resources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has not been synced yet")]
    NotSynced,

    /// The backing store or API failed before any state could be served,
    /// e.g. the initial list was rejected by the API server.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("CatalogUnavailable: {0}")]
    CatalogUnavailable(#[source] CatalogError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
