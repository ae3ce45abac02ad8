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

use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use tracing::info;

use crate::context::Context;
use crate::routes;

pub async fn run(ctx: Arc<Context>) -> anyhow::Result<()> {
    let config = ctx.config.clone();

    // build our application with a route
    let app = routes::build().with_state(ctx);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // the API server only talks to webhooks over HTTPS, plain HTTP is
    // meant for local development or a TLS terminating proxy.
    match (&config.tls_cert_file, &config.tls_key_file) {
        (Some(cert), Some(key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key).await?;
            info!("Listening on https://{}", addr);
            axum_server::bind_rustls(addr, tls).serve(app.into_make_service()).await?;
        }
        _ => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
