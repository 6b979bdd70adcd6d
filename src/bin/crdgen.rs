// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the SecretWatcher CustomResourceDefinition as YAML.
//!
//! ```bash
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use anyhow::Result;
use kube::CustomResourceExt;
use secretswatcher_operator::types::SecretWatcher;

fn main() -> Result<()> {
    print!("{}", serde_yaml::to_string(&SecretWatcher::crd())?);
    Ok(())
}
