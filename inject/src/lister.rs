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

use std::collections::BTreeMap;
use std::sync::Arc;

use kube::ResourceExt;
use logconf_crds::BcsLogConfig;

use crate::error::CatalogError;

/// Label selector applied when listing the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    /// Matches every resource.
    #[default]
    Everything,
    /// Matches resources carrying all of the given labels.
    Labels(BTreeMap<String, String>),
}

impl Selector {
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        match self {
            Selector::Everything => true,
            Selector::Labels(expected) => expected.iter().all(|(key, value)| labels.get(key) == Some(value)),
        }
    }
}

/// Read-only access to the `BcsLogConfig` resources of the cluster.
pub trait LogConfigLister: Send + Sync {
    /// Lists the resources matching the selector, in catalog order.
    fn list(&self, selector: &Selector) -> Result<Vec<Arc<BcsLogConfig>>, CatalogError>;

    /// Whether the catalog has been populated and can be listed.
    fn synced(&self) -> bool {
        true
    }
}

/// A fixed catalog, mostly useful when the resources are known upfront.
#[derive(Clone, Debug, Default)]
pub struct StaticLister {
    configs: Vec<Arc<BcsLogConfig>>,
}

impl StaticLister {
    pub fn new(configs: Vec<BcsLogConfig>) -> Self {
        StaticLister { configs: configs.into_iter().map(Arc::new).collect() }
    }
}

impl LogConfigLister for StaticLister {
    fn list(&self, selector: &Selector) -> Result<Vec<Arc<BcsLogConfig>>, CatalogError> {
        Ok(self.configs.iter().filter(|config| selector.matches(config.labels())).cloned().collect())
    }
}
