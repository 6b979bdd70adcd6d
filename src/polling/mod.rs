// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Polling watcher: a raw Secret watch for visibility plus a fixed-interval rotation pass.

pub mod poller;

pub use poller::{RotationSummary, SecretPoller};
