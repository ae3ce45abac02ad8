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

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::ReplicationController;
use kube::{Resource, ResourceExt};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::lister::{LogConfigLister, Selector};
use crate::namespace::NamespaceClassifier;
use crate::workload::Workload;
use crate::{env, matcher};

/// Injects the log settings of the matching `BcsLogConfig` into workloads.
///
/// The catalog is listed once per call. When listing fails the workload is
/// left exactly as it was received.
#[derive(Clone)]
pub struct LogConfInjector {
    lister: Arc<dyn LogConfigLister>,
    namespaces: NamespaceClassifier,
}

impl LogConfInjector {
    pub fn new(lister: Arc<dyn LogConfigLister>, namespaces: NamespaceClassifier) -> Self {
        LogConfInjector { lister, namespaces }
    }

    /// Inject log envs into the pod template of a ReplicationController.
    pub fn inject_replication_controller(&self, rc: &mut ReplicationController) -> Result<()> {
        self.inject(rc)
    }

    /// Inject log envs into the pod template of a Deployment.
    pub fn inject_deployment(&self, deploy: &mut Deployment) -> Result<()> {
        self.inject(deploy)
    }

    fn inject<W>(&self, workload: &mut W) -> Result<()>
    where
        W: Workload + Resource,
    {
        let configs = self.lister.list(&Selector::Everything).map_err(|err| {
            error!("list bcslogconfig error: {}", err);
            Error::CatalogUnavailable(err)
        })?;

        let name = workload.name_any();
        let namespace = workload.namespace().to_string();
        let Some(containers) = workload.containers_mut() else {
            debug!("{}/{} has no pod template, skip", namespace, name);
            return Ok(());
        };

        // system modules all share the bcs-system configuration
        if self.namespaces.is_system(&namespace) {
            match matcher::find_bcs_system_config(&configs) {
                Some(config) => {
                    env::inject_containers(&namespace, containers, &config.spec);
                    info!("Injected {} into all containers of {}/{}", config.name_any(), namespace, name);
                }
                None => debug!("No bcs-system BcsLogConfig found for {}/{}", namespace, name),
            }
            return Ok(());
        }

        for container in containers.iter_mut() {
            match matcher::find_matched_config(&container.name, &configs) {
                Some(config) => {
                    env::inject_container(&namespace, container, &config.spec);
                    info!("Injected {} into container {} of {}/{}", config.name_any(), container.name, namespace, name);
                }
                None => debug!("No BcsLogConfig matches container {} of {}/{}", container.name, namespace, name),
            }
        }

        Ok(())
    }
}
