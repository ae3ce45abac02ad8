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

//! Selection of the configuration applying to a workload or a container.
//!
//! Duplicates are not rejected: the first match in catalog order wins.

use std::sync::Arc;

use logconf_crds::BcsLogConfig;

/// Returns the default configuration of the system namespaces, if any.
pub fn find_bcs_system_config(configs: &[Arc<BcsLogConfig>]) -> Option<&BcsLogConfig> {
    configs.iter().find(|config| config.spec.is_bcs_system()).map(|config| &**config)
}

/// Returns the configuration bound to the named container, if any.
pub fn find_matched_config<'a>(container: &str, configs: &'a [Arc<BcsLogConfig>]) -> Option<&'a BcsLogConfig> {
    configs.iter().find(|config| config.spec.selects(container)).map(|config| &**config)
}

#[cfg(test)]
mod tests {
    use kube::ResourceExt;
    use logconf_crds::{BcsLogConfigSpec, ConfigType};

    use super::*;

    fn config(name: &str, config_type: ConfigType, container: Option<&str>) -> Arc<BcsLogConfig> {
        let spec = BcsLogConfigSpec { config_type, container_name: container.map(Into::into), ..Default::default() };
        Arc::new(BcsLogConfig::new(name, spec))
    }

    #[test]
    fn test_find_bcs_system_config() {
        let configs = vec![
            config("nginx", ConfigType::Custom, Some("nginx")),
            config("system", ConfigType::BcsSystem, None),
        ];

        let found = find_bcs_system_config(&configs).map(|config| config.name_any());
        assert_eq!(found, Some("system".into()));
    }

    #[test]
    fn test_find_bcs_system_config_without_default() {
        let configs = vec![config("nginx", ConfigType::Custom, Some("nginx"))];

        assert!(find_bcs_system_config(&configs).is_none());
        assert!(find_bcs_system_config(&[]).is_none());
    }

    #[test]
    fn test_find_matched_config_by_exact_name() {
        let configs = vec![
            config("nginx", ConfigType::Custom, Some("nginx")),
            config("redis", ConfigType::Default, Some("redis")),
        ];

        assert_eq!(find_matched_config("redis", &configs).map(|c| c.name_any()), Some("redis".into()));
        assert!(find_matched_config("nginx-exporter", &configs).is_none());
        assert!(find_matched_config("NGINX", &configs).is_none());
        assert!(find_matched_config("", &configs).is_none());
    }

    #[test]
    fn test_duplicates_resolve_to_first_in_catalog_order() {
        let configs = vec![
            config("system-a", ConfigType::BcsSystem, None),
            config("nginx-a", ConfigType::Custom, Some("nginx")),
            config("system-b", ConfigType::BcsSystem, None),
            config("nginx-b", ConfigType::Custom, Some("nginx")),
        ];

        // Same catalog, same answer, every time.
        for _ in 0..10 {
            assert_eq!(find_bcs_system_config(&configs).map(|c| c.name_any()), Some("system-a".into()));
            assert_eq!(find_matched_config("nginx", &configs).map(|c| c.name_any()), Some("nginx-a".into()));
        }

        let reversed: Vec<_> = configs.iter().rev().cloned().collect();
        assert_eq!(find_bcs_system_config(&reversed).map(|c| c.name_any()), Some("system-b".into()));
        assert_eq!(find_matched_config("nginx", &reversed).map(|c| c.name_any()), Some("nginx-b".into()));
    }
}
