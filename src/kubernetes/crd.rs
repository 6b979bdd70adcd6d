// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{GROUP, KIND, VERSION};
use crate::error::{OperatorError, Result};
use kube::{api::GroupVersionKind, discovery, Client};
use tracing::{info, instrument};

/// Check that the SecretWatcher CRD is served by the API server.
///
/// The controller cannot be registered without it, so a missing CRD is a
/// startup error rather than something to wait for.
#[instrument(skip(client))]
pub async fn ensure_secret_watcher_crd(client: &Client) -> Result<()> {
    let gvk = GroupVersionKind::gvk(GROUP, VERSION, KIND);

    match discovery::pinned_kind(client, &gvk).await {
        Ok((_, capabilities)) => {
            info!(
                "{} CRD ({}/{}) is available, scope={:?}",
                KIND, GROUP, VERSION, capabilities.scope
            );
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => Err(OperatorError::CrdNotInstalled(
            format!("API group {}/{} is not served", GROUP, VERSION),
        )),
        Err(kube::Error::Discovery(e)) => Err(OperatorError::CrdNotInstalled(format!(
            "{} not found in {}/{}: {}",
            KIND, GROUP, VERSION, e
        ))),
        Err(e) => Err(e.into()),
    }
}
