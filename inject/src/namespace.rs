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

use std::collections::HashSet;

/// Splits namespaces into system ones, hosting the platform's own workloads,
/// and business ones.
#[derive(Clone, Debug, Default)]
pub struct NamespaceClassifier {
    system: HashSet<String>,
}

impl NamespaceClassifier {
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NamespaceClassifier { system: namespaces.into_iter().map(Into::into).collect() }
    }

    #[inline]
    pub fn is_system(&self, namespace: &str) -> bool {
        self.system.contains(namespace)
    }
}
