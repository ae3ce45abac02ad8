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

use clap::Parser;
use kube::Client;
use logconf_webhook::config::Config;
use logconf_webhook::context::Context;
use logconf_webhook::{app, catalog};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // This returns an error if the `.env` file doesn't exist, but that's not what we want
    // since we're not going to use a `.env` file if we deploy this application.
    dotenv::dotenv().ok();

    // Parse our configuration from the environment.
    // This will exit with a help message if something is wrong.
    let config = Config::parse();

    // Watch the BcsLogConfig resources, then initialize the shared context.
    let (lister, watch) = catalog::new(Client::try_default().await?);
    let ctx = Arc::new(Context::new(config, Arc::new(lister)));

    // Serve until either the server or the catalog watch stops.
    tokio::select! {
        _ = watch => tracing::warn!("BcsLogConfig catalog exited"),
        result = app::run(ctx) => result?,
    }

    Ok(())
}
