// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret value rotation shared by the polling watcher and the reconciler.

pub mod generator;
pub mod secrets;

pub use generator::generate_value_with;
pub use secrets::{rotate_data, rotate_secret, secret_ref, Rotation};
