// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use secretswatcher_operator::config::Config;
use secretswatcher_operator::kubernetes::ensure_secret_watcher_crd;
use secretswatcher_operator::reconcilers::SecretWatcherReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting secretswatcher operator");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: namespace={}", config.namespace);

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // The controller cannot be registered without the SecretWatcher CRD
    ensure_secret_watcher_crd(&client).await?;

    info!("Starting SecretWatcher reconciler...");
    SecretWatcherReconciler::new(client, config).run().await?;

    info!("Operator shut down");
    Ok(())
}
