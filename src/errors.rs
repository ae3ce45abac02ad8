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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("DecodeError: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("InjectError: {0}")]
    InjectError(#[from] logconf_inject::Error),

    #[error("PatchError: {0}")]
    PatchError(#[source] kube::core::admission::SerializePatchError),
}

pub type Result<T, E = WebhookError> = std::result::Result<T, E>;
