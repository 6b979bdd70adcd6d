// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{DEFAULT_NAMESPACE, WATCH_NAMESPACE_ENV};
use crate::error::{OperatorError, Result};
use std::env;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace whose Secrets (or SecretWatchers) are handled
    pub namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_var(env::var(WATCH_NAMESPACE_ENV))
    }

    /// Build a configuration from the result of reading `WATCH_NAMESPACE`
    fn from_var(value: std::result::Result<String, env::VarError>) -> Result<Self> {
        let namespace = match value {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(OperatorError::Config(format!(
                    "{} is not valid unicode",
                    WATCH_NAMESPACE_ENV
                )))
            }
        };

        Ok(Self::with_namespace(namespace))
    }

    /// Build a configuration from an optional namespace, falling back to the default
    pub fn with_namespace(namespace: Option<String>) -> Self {
        let namespace = namespace
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        Config { namespace }
    }
}
