// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace used when `WATCH_NAMESPACE` is unset or empty
pub const DEFAULT_NAMESPACE: &str = "default";

/// Environment variable selecting the namespace to operate in
pub const WATCH_NAMESPACE_ENV: &str = "WATCH_NAMESPACE";

/// The operator name used as field manager for status patches
pub const OPERATOR_NAME: &str = "secretswatcher-operator";

/// Number of random bytes drawn for every rotated field value
pub const SECRET_VALUE_LEN: usize = 16;

/// Polling watcher timings
pub mod polling {
    /// Interval between two rotation passes over the namespace
    pub const ROTATION_INTERVAL_SECS: u64 = 25;
    /// Fixed wait before re-establishing a failed watch
    pub const WATCH_RETRY_SECS: u64 = 5;
    /// Pause before reopening a watch the server closed cleanly
    pub const WATCH_RECONNECT_SECS: u64 = 1;
}

/// Declarative reconciler timings
pub mod reconcile {
    /// Delay before a successfully rotated SecretWatcher is reconciled again
    pub const RECONCILE_INTERVAL_SECS: u64 = 15;
}

/// SecretWatcher custom resource identity
pub mod crd {
    pub const GROUP: &str = "example.com";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "SecretWatcher";
}
