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

//! Injection of `BcsLogConfig` settings into the containers of a workload.
//!
//! Containers of a system namespace all receive the `bcs-system` default
//! configuration, containers of any other namespace receive the configuration
//! bound to their name. The matched settings replace the container environment
//! with six well-known variables, see [`env`].

pub mod env;
pub mod error;
pub mod injector;
pub mod lister;
pub mod matcher;
pub mod namespace;
pub mod workload;

pub use error::{CatalogError, Error, Result};
pub use injector::LogConfInjector;
pub use lister::{LogConfigLister, Selector, StaticLister};
pub use namespace::NamespaceClassifier;
pub use workload::Workload;
