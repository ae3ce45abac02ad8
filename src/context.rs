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

use std::sync::Arc;

use logconf_inject::{LogConfInjector, LogConfigLister, NamespaceClassifier};

use crate::config::Config;

/// The core type through which handler functions can access common API state.
pub struct Context {
    pub config: Config,
    pub injector: LogConfInjector,
    catalog: Arc<dyn LogConfigLister>,
}

impl Context {
    pub fn new(config: Config, lister: Arc<dyn LogConfigLister>) -> Context {
        let namespaces =
            NamespaceClassifier::new(config.system_namespaces.iter().map(|ns| ns.trim()).filter(|ns| !ns.is_empty()));
        Context { injector: LogConfInjector::new(lister.clone(), namespaces), catalog: lister, config }
    }

    /// Whether admissions can be served, i.e. the catalog has been synced.
    pub fn ready(&self) -> bool {
        self.catalog.synced()
    }
}
