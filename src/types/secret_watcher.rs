// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Points the operator at a Secret whose values are rotated on a fixed cadence
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "example.com", version = "v1", kind = "SecretWatcher")]
#[kube(namespaced)]
#[kube(status = "SecretWatcherStatus")]
#[kube(shortname = "sw")]
#[kube(printcolumn = r#"{"name":"Secret","type":"string","jsonPath":".spec.secretName"}"#)]
#[kube(printcolumn = r#"{"name":"Last Rotated","type":"date","jsonPath":".status.lastRotated"}"#)]
#[serde(rename_all = "camelCase")]
pub struct SecretWatcherSpec {
    /// Name of the Secret, in the same namespace, to rotate
    pub secret_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretWatcherStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_rotated: Option<DateTime<Utc>>,
}

impl SecretWatcher {
    /// Name of the Secret governed by this resource
    pub fn secret_name(&self) -> &str {
        &self.spec.secret_name
    }

    /// Time of the last successful rotation, if one was recorded
    pub fn last_rotated(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.last_rotated)
    }
}
