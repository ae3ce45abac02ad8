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

use axum::routing::{get, post};
use axum::Router;

use crate::context::Context;
use crate::handlers;

pub fn build() -> Router<Arc<Context>> {
    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        //
        // admission
        .route("/v1/mutate", post(handlers::mutate::any))
        .route("/v1/mutate/deployments", post(handlers::mutate::deployments))
        .route("/v1/mutate/replicationcontrollers", post(handlers::mutate::replication_controllers))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use kube::runtime::reflector;
    use logconf_crds::{BcsLogConfig, BcsLogConfigSpec, ConfigType};
    use logconf_inject::{LogConfigLister, StaticLister};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::ReflectorLister;
    use crate::config::Config;

    fn app_with(lister: Arc<dyn LogConfigLister>) -> Router {
        let config = Config::try_parse_from(["logconf-webhook"]).unwrap();
        build().with_state(Arc::new(Context::new(config, lister)))
    }

    fn app() -> Router {
        let system = BcsLogConfig::new(
            "bcs-system",
            BcsLogConfigSpec { config_type: ConfigType::BcsSystem, data_id: "d1".into(), ..Default::default() },
        );
        app_with(Arc::new(StaticLister::new(vec![system])))
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn review() -> Value {
        json!({
            "apiVersion": "admission.k8s.io/v1",
            "kind": "AdmissionReview",
            "request": {
                "uid": "e911857d-c318-11e8-bbad-025000000001",
                "kind": {"group": "apps", "version": "v1", "kind": "Deployment"},
                "resource": {"group": "apps", "version": "v1", "resource": "deployments"},
                "name": "coredns",
                "namespace": "kube-system",
                "operation": "CREATE",
                "userInfo": {"username": "system:serviceaccount:kube-system:deployment-controller"},
                "object": {
                    "apiVersion": "apps/v1",
                    "kind": "Deployment",
                    "metadata": {"name": "coredns", "namespace": "kube-system"},
                    "spec": {
                        "selector": {"matchLabels": {"k8s-app": "kube-dns"}},
                        "template": {"spec": {"containers": [{"name": "coredns", "image": "coredns/coredns"}]}}
                    }
                },
                "dryRun": false
            }
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_livez() {
        assert_eq!(get_text(app(), "/livez").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_readyz_when_synced() {
        assert_eq!(get_text(app(), "/readyz").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_readyz_before_catalog_sync() {
        let (store, _writer) = reflector::store::<BcsLogConfig>();
        let lister = ReflectorLister::new(store);

        let (status, body) = get_text(app_with(Arc::new(lister.clone())), "/readyz").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "catalog not synced");

        // Liveness does not depend on the catalog.
        let (status, _) = get_text(app_with(Arc::new(lister.clone())), "/livez").await;
        assert_eq!(status, StatusCode::OK);

        lister.mark_synced();
        let (status, _) = get_text(app_with(Arc::new(lister)), "/readyz").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_mutate_deployment() {
        for uri in ["/v1/mutate", "/v1/mutate/deployments"] {
            let (status, body) = post_json(uri, review()).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["kind"], "AdmissionReview");
            assert_eq!(body["response"]["uid"], "e911857d-c318-11e8-bbad-025000000001");
            assert_eq!(body["response"]["allowed"], true);
            assert_eq!(body["response"]["patchType"], "JSONPatch");
        }
    }

    #[tokio::test]
    async fn test_mutate_replication_controllers_skips_deployments() {
        let (status, body) = post_json("/v1/mutate/replicationcontrollers", review()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"]["allowed"], true);
        assert!(body["response"]["patch"].is_null());
    }

    #[tokio::test]
    async fn test_invalid_review() {
        let mut review = review();
        review.as_object_mut().unwrap().remove("request");

        let (status, body) = post_json("/v1/mutate", review).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"]["allowed"], false);
    }
}
