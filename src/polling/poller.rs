// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret poller - logs Secret watch events and rotates every Secret of the
//! namespace on a fixed interval.

use crate::config::Config;
use crate::constants::polling::{ROTATION_INTERVAL_SECS, WATCH_RECONNECT_SECS, WATCH_RETRY_SECS};
use crate::error::Result;
use crate::rotation::{rotate_secret, secret_ref, Rotation};
use crate::signal::shutdown_signal;
use futures::StreamExt;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{ListParams, WatchEvent, WatchParams},
    Api, Client,
};
use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, error, info, instrument, warn};

/// Counts of one rotation pass over the namespace
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RotationSummary {
    pub rotated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// What the watch session does after an event
#[derive(Debug, PartialEq, Eq)]
enum Session {
    Continue,
    Reconnect,
}

pub struct SecretPoller {
    secrets: Api<Secret>,
    config: Config,
}

impl SecretPoller {
    pub fn new(client: Client, config: Config) -> Self {
        let secrets = Api::namespaced(client, &config.namespace);
        Self { secrets, config }
    }

    /// Run the watch loop and the rotation ticker until a shutdown signal arrives
    pub async fn run(self) -> anyhow::Result<()> {
        info!(
            "Starting secret poller in namespace {}",
            self.config.namespace
        );

        tokio::select! {
            _ = self.watch_loop() => {}
            _ = self.rotation_loop() => {}
            _ = shutdown_signal() => info!("Shutting down secret poller"),
        }

        Ok(())
    }

    /// Keep a watch on the namespace's Secrets open, re-establishing it whenever it ends
    async fn watch_loop(&self) {
        let mut reconnects: u64 = 0;
        loop {
            match self.watch_session().await {
                Ok(()) => {
                    reconnects += 1;
                    debug!("Secret watch closed, reconnecting (reconnect #{})", reconnects);
                    sleep(Duration::from_secs(WATCH_RECONNECT_SECS)).await;
                }
                Err(e) => {
                    warn!(
                        "Secret watch failed: {}, retrying in {} seconds...",
                        e, WATCH_RETRY_SECS
                    );
                    sleep(Duration::from_secs(WATCH_RETRY_SECS)).await;
                }
            }
        }
    }

    /// Open one watch and consume it until the server closes it.
    /// Returns an error when the watch cannot be opened or the stream breaks.
    #[instrument(skip(self), fields(namespace = %self.config.namespace))]
    async fn watch_session(&self) -> Result<()> {
        let stream = self.secrets.watch(&WatchParams::default(), "0").await?;
        let mut stream = Box::pin(stream);
        debug!("Secret watch established");

        while let Some(event) = stream.next().await {
            if handle_event(&event?) == Session::Reconnect {
                break;
            }
        }

        Ok(())
    }

    /// Run a rotation pass every rotation interval, starting one interval from now
    async fn rotation_loop(&self) {
        let period = Duration::from_secs(ROTATION_INTERVAL_SECS);
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match self.rotate_namespace().await {
                Ok(summary) => info!(
                    "Rotation pass complete: rotated={} skipped={} failed={}",
                    summary.rotated, summary.skipped, summary.failed
                ),
                Err(e) => error!("Failed to list secrets for rotation: {}", e),
            }
        }
    }

    /// List every Secret in the namespace and rotate each one.
    /// A failing Secret is logged and does not stop the pass.
    #[instrument(skip(self), fields(namespace = %self.config.namespace))]
    pub async fn rotate_namespace(&self) -> Result<RotationSummary> {
        let secret_list = self.secrets.list(&ListParams::default()).await?;
        let mut summary = RotationSummary::default();

        for secret in secret_list.items {
            let id = secret_ref(&secret);
            info!("Rotating secret {}", id);

            match rotate_secret(&self.secrets, secret).await {
                Ok(Rotation::Rotated { .. }) => summary.rotated += 1,
                Ok(Rotation::Empty) => summary.skipped += 1,
                Err(e) => {
                    error!("Failed to rotate secret {}: {}", id, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Log a watch event. Events never trigger a rotation.
fn handle_event(event: &WatchEvent<Secret>) -> Session {
    match event {
        WatchEvent::Added(secret) | WatchEvent::Modified(secret) => {
            info!("Detected secret: {}", secret_ref(secret));
            Session::Continue
        }
        WatchEvent::Deleted(secret) => {
            debug!("Secret deleted: {}", secret_ref(secret));
            Session::Continue
        }
        WatchEvent::Bookmark(bookmark) => {
            debug!(
                "Watch bookmark at resourceVersion {}",
                bookmark.metadata.resource_version
            );
            Session::Continue
        }
        WatchEvent::Error(err) => {
            warn!("Watch error from API server: {} ({})", err.message, err.code);
            Session::Reconnect
        }
    }
}
