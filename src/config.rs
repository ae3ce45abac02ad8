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

use std::path::PathBuf;

/// The configuration parameters for the webhook server.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// The latter is preferred as environment variables are one of the recommended ways to
/// get configuration from Kubernetes ConfigMaps and Secrets in deployment.
///
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
#[derive(clap::Parser, Clone, Debug)]
pub struct Config {
    /// The port the webhook server listens on.
    #[clap(long, env = "LOGCONF_PORT", default_value = "8443")]
    pub port: u16,

    /// Namespaces hosting the platform's own workloads, separated by comma.
    /// Their containers all receive the `bcs-system` log configuration.
    #[clap(
        long,
        env = "LOGCONF_SYSTEM_NAMESPACES",
        value_delimiter = ',',
        default_value = "kube-system,kube-public,bcs-system"
    )]
    pub system_namespaces: Vec<String>,

    /// What to answer when the BcsLogConfig catalog can not be listed.
    #[clap(long, env = "LOGCONF_FAILURE_POLICY", value_enum, default_value = "deny")]
    pub failure_policy: FailurePolicy,

    /// PEM encoded certificate, TLS is enabled when set together with the key.
    #[clap(long, env = "LOGCONF_TLS_CERT_FILE", requires = "tls_key_file")]
    pub tls_cert_file: Option<PathBuf>,

    /// PEM encoded private key of the certificate.
    #[clap(long, env = "LOGCONF_TLS_KEY_FILE", requires = "tls_cert_file")]
    pub tls_key_file: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Admit the workload without injection.
    Allow,
    /// Reject the admission request.
    #[default]
    Deny,
}
