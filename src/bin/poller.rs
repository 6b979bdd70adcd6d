// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use secretswatcher_operator::config::Config;
use secretswatcher_operator::polling::SecretPoller;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting secretswatcher poller");

    let config = Config::from_env()?;
    info!("Configuration loaded: namespace={}", config.namespace);

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    SecretPoller::new(client, config).run().await?;

    info!("Poller shut down");
    Ok(())
}
