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

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Container, ReplicationController};

/// A workload owning a pod template.
pub trait Workload {
    /// The namespace the workload is admitted to, empty when unset.
    fn namespace(&self) -> &str;

    /// The containers of the pod template, if the workload has one.
    fn containers_mut(&mut self) -> Option<&mut Vec<Container>>;
}

impl Workload for Deployment {
    fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    fn containers_mut(&mut self) -> Option<&mut Vec<Container>> {
        let pod = self.spec.as_mut()?.template.spec.as_mut()?;
        Some(&mut pod.containers)
    }
}

impl Workload for ReplicationController {
    fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    fn containers_mut(&mut self) -> Option<&mut Vec<Container>> {
        let pod = self.spec.as_mut()?.template.as_mut()?.spec.as_mut()?;
        Some(&mut pod.containers)
    }
}
