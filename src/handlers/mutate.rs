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

//! Handles AdmissionReview requests for Deployments and ReplicationControllers,
//! answering with the JSON patch of the injected log settings.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::ReplicationController;
use kube::api::DynamicObject;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview};
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::FailurePolicy;
use crate::context::Context;
use crate::errors::{Result, WebhookError};

/// The workload kinds log settings are injected into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkloadKind {
    Deployment,
    ReplicationController,
}

impl WorkloadKind {
    pub fn from_kind(kind: &str) -> Option<WorkloadKind> {
        match kind {
            "Deployment" => Some(WorkloadKind::Deployment),
            "ReplicationController" => Some(WorkloadKind::ReplicationController),
            _ => None,
        }
    }
}

/// Mutate any supported workload, dispatching on the kind of the request.
pub async fn any(
    ctx: State<Arc<Context>>,
    Json(review): Json<AdmissionReview<DynamicObject>>,
) -> Json<AdmissionReview<DynamicObject>> {
    Json(review_with(&ctx, review, None))
}

/// Mutate Deployments only, other kinds are admitted unchanged.
pub async fn deployments(
    ctx: State<Arc<Context>>,
    Json(review): Json<AdmissionReview<DynamicObject>>,
) -> Json<AdmissionReview<DynamicObject>> {
    Json(review_with(&ctx, review, Some(WorkloadKind::Deployment)))
}

/// Mutate ReplicationControllers only, other kinds are admitted unchanged.
pub async fn replication_controllers(
    ctx: State<Arc<Context>>,
    Json(review): Json<AdmissionReview<DynamicObject>>,
) -> Json<AdmissionReview<DynamicObject>> {
    Json(review_with(&ctx, review, Some(WorkloadKind::ReplicationController)))
}

fn review_with(
    ctx: &Context,
    review: AdmissionReview<DynamicObject>,
    expected: Option<WorkloadKind>,
) -> AdmissionReview<DynamicObject> {
    let request: AdmissionRequest<DynamicObject> = match review.try_into() {
        Ok(request) => request,
        Err(err) => {
            error!("Failed to parse admission request: {}", err);
            return AdmissionResponse::invalid(err.to_string()).into_review();
        }
    };

    mutate(ctx, &request, expected).into_review()
}

/// Process a single admission request.
pub fn mutate(
    ctx: &Context,
    request: &AdmissionRequest<DynamicObject>,
    expected: Option<WorkloadKind>,
) -> AdmissionResponse {
    let response = AdmissionResponse::from(request);
    let namespace = request.namespace.as_deref();

    let Some(object) = &request.object else {
        debug!("No object in request {}, allowing unchanged", request.uid);
        return response;
    };

    let kind = match WorkloadKind::from_kind(&request.kind.kind) {
        Some(kind) if expected.map_or(true, |expected| expected == kind) => kind,
        _ => {
            debug!("Skip {} {:?}/{}, allowing unchanged", request.kind.kind, namespace, request.name);
            return response;
        }
    };

    let result = match kind {
        WorkloadKind::Deployment => {
            diff::<Deployment, _>(object, namespace, |deploy| ctx.injector.inject_deployment(deploy))
        }
        WorkloadKind::ReplicationController => {
            diff::<ReplicationController, _>(object, namespace, |rc| ctx.injector.inject_replication_controller(rc))
        }
    };

    let patch = match result {
        Ok(Some(patch)) => patch,
        Ok(None) => return response,
        Err(WebhookError::InjectError(err)) if ctx.config.failure_policy == FailurePolicy::Allow => {
            warn!("Admit {:?} {:?}/{} without log injection: {}", kind, namespace, request.name, err);
            return response;
        }
        Err(err) => {
            error!("Failed to inject {:?} {:?}/{}: {}", kind, namespace, request.name, err);
            return response.deny(err.to_string());
        }
    };

    info!("Patching {:?} {:?}/{} with {} operations", kind, namespace, request.name, patch.0.len());
    match response.with_patch(patch) {
        Ok(response) => response,
        Err(err) => {
            let err = WebhookError::PatchError(err);
            error!("Failed to serialize patch: {}", err);
            AdmissionResponse::from(request).deny(err.to_string())
        }
    }
}

/// Runs the injection on a typed copy of the object and returns the changes
/// as a JSON patch, or `None` when nothing changed.
fn diff<W, F>(object: &DynamicObject, namespace: Option<&str>, inject: F) -> Result<Option<json_patch::Patch>>
where
    W: Resource + Serialize + DeserializeOwned,
    F: FnOnce(&mut W) -> logconf_inject::Result<()>,
{
    let value = serde_json::to_value(object).map_err(WebhookError::DecodeError)?;
    let mut workload: W = serde_json::from_value(value).map_err(WebhookError::DecodeError)?;

    // objects being created may not carry their namespace yet
    if workload.meta().namespace.as_deref().map_or(true, str::is_empty) {
        workload.meta_mut().namespace = namespace.map(Into::into);
    }

    let before = serde_json::to_value(&workload).map_err(WebhookError::DecodeError)?;
    inject(&mut workload)?;
    let after = serde_json::to_value(&workload).map_err(WebhookError::DecodeError)?;

    let patch = json_patch::diff(&before, &after);
    Ok((!patch.0.is_empty()).then_some(patch))
}
