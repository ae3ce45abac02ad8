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

//! Projection of a `BcsLogConfig` onto container environment variables.
//!
//! The projected list replaces whatever environment a matched container
//! declared, variables set by the container author are dropped. An injected
//! container always ends with exactly the six variables below, in this order,
//! no matter how many times it is injected.

use k8s_openapi::api::core::v1::{Container, EnvVar};
use logconf_crds::BcsLogConfigSpec;

pub const DATA_ID_ENV_KEY: &str = "io_tencent_bcs_app_dataid";
pub const APP_ID_ENV_KEY: &str = "io_tencent_bcs_app_appid";
pub const STDOUT_ENV_KEY: &str = "io_tencent_bcs_app_stdout";
pub const LOG_PATH_ENV_KEY: &str = "io_tencent_bcs_app_logpath";
pub const CLUSTER_ID_ENV_KEY: &str = "io_tencent_bcs_app_cluster";
pub const NAMESPACE_ENV_KEY: &str = "io_tencent_bcs_app_namespace";

/// Build the environment variables derived from the configuration.
pub fn env_vars(namespace: &str, spec: &BcsLogConfigSpec) -> Vec<EnvVar> {
    vec![
        env_var(DATA_ID_ENV_KEY, &spec.data_id),
        env_var(APP_ID_ENV_KEY, &spec.app_id),
        env_var(STDOUT_ENV_KEY, &spec.stdout.to_string()),
        env_var(LOG_PATH_ENV_KEY, &spec.log_path),
        env_var(CLUSTER_ID_ENV_KEY, &spec.cluster_id),
        env_var(NAMESPACE_ENV_KEY, namespace),
    ]
}

/// Overwrite the container environment with the configuration.
pub fn inject_container(namespace: &str, container: &mut Container, spec: &BcsLogConfigSpec) {
    container.env = Some(env_vars(namespace, spec));
}

/// Overwrite the environment of every container with the same configuration.
pub fn inject_containers(namespace: &str, containers: &mut [Container], spec: &BcsLogConfigSpec) {
    for container in containers.iter_mut() {
        inject_container(namespace, container, spec);
    }
}

#[inline]
fn env_var(name: &str, value: &str) -> EnvVar {
    EnvVar { name: name.into(), value: Some(value.into()), ..Default::default() }
}
