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

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use futures::StreamExt;
use kube::runtime::reflector::{self, Store};
use kube::runtime::{watcher, WatchStreamExt};
use kube::{Api, Client, ResourceExt};
use logconf_crds::BcsLogConfig;
use logconf_inject::{CatalogError, LogConfigLister, Selector};
use tracing::{info, warn};

/// A `BcsLogConfig` catalog served from a reflector cache.
///
/// Listing fails until the cache has been populated once: with
/// `Unavailable` if the watch has already failed, `NotSynced` otherwise.
/// Afterwards the last known state is served, watch errors only delay updates.
#[derive(Clone)]
pub struct ReflectorLister {
    store: Store<BcsLogConfig>,
    synced: Arc<AtomicBool>,
    last_error: Arc<RwLock<Option<String>>>,
}

impl ReflectorLister {
    pub fn new(store: Store<BcsLogConfig>) -> Self {
        ReflectorLister { store, synced: Arc::new(AtomicBool::new(false)), last_error: Arc::default() }
    }

    /// Marks the cache as populated, returns `true` the first time only.
    pub fn mark_synced(&self) -> bool {
        if let Ok(mut last_error) = self.last_error.write() {
            *last_error = None;
        }
        !self.synced.swap(true, Ordering::AcqRel)
    }

    pub fn record_error(&self, err: impl Display) {
        if let Ok(mut last_error) = self.last_error.write() {
            *last_error = Some(err.to_string());
        }
    }

    fn last_error(&self) -> Option<String> {
        self.last_error.read().ok().and_then(|last_error| last_error.clone())
    }
}

impl LogConfigLister for ReflectorLister {
    fn list(&self, selector: &Selector) -> Result<Vec<Arc<BcsLogConfig>>, CatalogError> {
        if !self.synced() {
            return Err(self.last_error().map_or(CatalogError::NotSynced, CatalogError::Unavailable));
        }

        Ok(self.store.state().into_iter().filter(|config| selector.matches(config.labels())).collect())
    }

    fn synced(&self) -> bool {
        self.synced.load(Ordering::Acquire)
    }
}

/// Creates the catalog of all `BcsLogConfig` resources in the cluster.
///
/// The returned future drives the watch and must be polled for the catalog
/// to be populated.
pub fn new(client: Client) -> (ReflectorLister, impl Future<Output = ()>) {
    let api = Api::<BcsLogConfig>::all(client);
    let (store, writer) = reflector::store();

    let lister = ReflectorLister::new(store);
    let stream = reflector::reflector(writer, watcher(api, watcher::Config::default()).default_backoff());

    let catalog = lister.clone();
    let watch = async move {
        let mut stream = stream.boxed();
        while let Some(event) = stream.next().await {
            match event {
                Ok(_) => {
                    if catalog.mark_synced() {
                        info!("BcsLogConfig catalog synced");
                    }
                }
                Err(err) => {
                    warn!("BcsLogConfig watch error: {}", err);
                    catalog.record_error(err);
                }
            }
        }
    };

    (lister, watch)
}
