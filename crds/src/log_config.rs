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

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Log collection settings registered for containers of the cluster.
///
/// A `bcs-system` typed configuration is the uniform default for every
/// container running in a system namespace, the other ones are matched
/// to business containers through `containerName`.
#[derive(CustomResource, Default, Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq)]
#[kube(
    group = "bkbcs.tencent.com",
    version = "v2",
    kind = "BcsLogConfig",
    plural = "bcslogconfigs",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct BcsLogConfigSpec {
    /// What the configuration applies to
    #[serde(default)]
    pub config_type: ConfigType,
    /// Name of the container this configuration is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Data channel the collected logs are shipped to
    #[serde(default)]
    pub data_id: String,
    /// Business application the logs belong to
    #[serde(default)]
    pub app_id: String,
    /// Whether the standard output of the container is collected
    #[serde(default)]
    pub stdout: bool,
    /// Path of the log files inside the container
    #[serde(default)]
    pub log_path: String,
    /// Cluster the workloads are running in
    #[serde(default)]
    pub cluster_id: String,
}

impl BcsLogConfigSpec {
    /// Returns true when this is the default configuration for system namespaces.
    #[inline]
    pub fn is_bcs_system(&self) -> bool {
        self.config_type == ConfigType::BcsSystem
    }

    /// Returns true when the configuration is bound to the named container.
    #[inline]
    pub fn selects(&self, container: &str) -> bool {
        self.container_name.as_deref() == Some(container)
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigType {
    #[default]
    Default,
    BcsSystem,
    Custom,
}

impl Display for ConfigType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigType::Default => f.write_str("default"),
            ConfigType::BcsSystem => f.write_str("bcs-system"),
            ConfigType::Custom => f.write_str("custom"),
        }
    }
}
