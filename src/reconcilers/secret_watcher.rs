// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! SecretWatcher reconciler - rotates the Secret a SecretWatcher points at on a fixed cadence.

use crate::config::Config;
use crate::constants::{reconcile::RECONCILE_INTERVAL_SECS, OPERATOR_NAME};
use crate::error::{OperatorError, Result};
use crate::rotation::{rotate_secret, Rotation};
use crate::types::{SecretWatcher, SecretWatcherStatus};
use chrono::{DateTime, Utc};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use kube_runtime::{controller::Action, predicates, reflector, watcher, Controller, WatchStreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub struct SecretWatcherReconciler {
    client: Client,
    config: Config,
}

impl SecretWatcherReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let watchers: Api<SecretWatcher> =
            Api::namespaced(self.client.clone(), &self.config.namespace);
        let context = Arc::new(self);

        // Status writes bump resourceVersion but not generation, so our own
        // lastRotated patches never trigger a reconcile
        let (reader, writer) = reflector::store();
        let changes = reflector(writer, watcher(watchers, WatcherConfig::default()))
            .applied_objects()
            .predicate_filter(predicates::generation);

        Controller::for_stream(changes, reader)
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled secretwatcher: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        info!("SecretWatcher controller stopped");
        Ok(())
    }
}

fn requeue_interval() -> Duration {
    Duration::from_secs(RECONCILE_INTERVAL_SECS)
}

/// Time left before another rotation is due, or `None` when one is due now
fn time_until_due(last_rotated: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<Duration> {
    let elapsed = (now - last_rotated?).to_std().ok()?;
    requeue_interval()
        .checked_sub(elapsed)
        .filter(|remaining| !remaining.is_zero())
}

#[instrument(skip(secret_watcher, ctx), fields(secretwatcher = %format!("{}/{}", secret_watcher.namespace().unwrap_or_default(), secret_watcher.name_any())))]
pub async fn reconcile(
    secret_watcher: Arc<SecretWatcher>,
    ctx: Arc<SecretWatcherReconciler>,
) -> Result<Action> {
    let name = secret_watcher.name_any();
    let namespace = secret_watcher
        .namespace()
        .ok_or_else(|| OperatorError::MissingNamespace(name.clone()))?;

    // The cached object may be stale; only act on what the API server still has
    let watchers: Api<SecretWatcher> = Api::namespaced(ctx.client.clone(), &namespace);
    let Some(current) = watchers.get_opt(&name).await? else {
        debug!("SecretWatcher no longer exists, nothing to do");
        return Ok(Action::await_change());
    };

    if let Some(remaining) = time_until_due(current.last_rotated(), Utc::now()) {
        debug!(
            "Rotated less than {}s ago, next rotation in {:?}",
            RECONCILE_INTERVAL_SECS, remaining
        );
        return Ok(Action::requeue(remaining));
    }

    let secret_name = current.secret_name();
    let secrets: Api<Secret> = Api::namespaced(ctx.client.clone(), &namespace);
    let Some(secret) = secrets.get_opt(secret_name).await? else {
        info!(
            "Secret {}/{} not found, skipping rotation until the next change",
            namespace, secret_name
        );
        return Ok(Action::await_change());
    };

    match rotate_secret(&secrets, secret).await? {
        Rotation::Rotated { fields } => {
            info!(
                "Rotated {} field(s) of secret {}/{}",
                fields, namespace, secret_name
            );
            // Best effort, the Secret is already rotated
            if let Err(e) = record_rotation(&watchers, &name).await {
                warn!("Failed to update status of SecretWatcher {}: {}", name, e);
            }
        }
        Rotation::Empty => debug!("Secret {}/{} has no data", namespace, secret_name),
    }

    Ok(Action::requeue(requeue_interval()))
}

/// Record the time of a successful rotation in the SecretWatcher status
async fn record_rotation(api: &Api<SecretWatcher>, name: &str) -> Result<()> {
    let status = SecretWatcherStatus {
        last_rotated: Some(Utc::now()),
    };
    let patch = serde_json::json!({ "status": status });

    let params = PatchParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };
    api.patch_status(name, &params, &Patch::Merge(&patch)).await?;
    Ok(())
}

pub fn error_policy(
    _secret_watcher: Arc<SecretWatcher>,
    error: &OperatorError,
    _ctx: Arc<SecretWatcherReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(requeue_interval())
}
